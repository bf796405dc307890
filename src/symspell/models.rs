//! Public data model and engine constants.

use super::error::{Error, Result};

/// Maximum byte length of a dictionary term or query.
///
/// Longer dictionary terms are skipped at load; longer queries are clipped
/// before lookup. Distance math treats anything beyond this as over-budget.
pub const MAX_TERM_LEN: usize = 128;

/// Largest supported maximum edit distance.
pub const MAX_EDIT_DISTANCE: u32 = 3;

/// Upper bound on delete variants enumerated for a single term.
pub(crate) const DELETE_QUEUE_CAPACITY: usize = 10_000;

/// Upper bound on candidates collected during one slow-path lookup.
pub(crate) const MAX_CANDIDATES_PER_LOOKUP: usize = 10_000;

/// Exact-match table size: prime, holds ~250k words at under 50% load.
pub(crate) const EXACT_TABLE_SLOTS: usize = 524_287;

// Prime delete-index table sizes per maximum edit distance, chosen to keep
// the load factor under 50% for an ~82k-word English dictionary:
// d=1 produces ~200k deletes, d=2 ~1.8M, d=3 ~15M.
pub(crate) const TABLE_SLOTS_D1: usize = 524_287;
pub(crate) const TABLE_SLOTS_D2: usize = 4_194_301;
pub(crate) const TABLE_SLOTS_D3: usize = 33_554_393;

/// Delete-index load factor past which the loader warns.
pub(crate) const LOAD_FACTOR_WARNING_THRESHOLD: f64 = 0.75;

/// Default string arena capacity (128 MiB).
pub(crate) const STRING_ARENA_CAPACITY: usize = 128 * 1024 * 1024;

/// How suggestions are ranked and how many a lookup may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ranking {
    /// Single-pass reduction to the one best candidate.
    #[default]
    Best,
    /// Full sort by `(distance asc, frequency desc, term asc)`, emitting up
    /// to the caller's suggestion limit.
    Sorted,
}

/// Dictionary construction parameters.
///
/// `max_edit_distance` selects the delete-index table size and bounds every
/// lookup; `prefix_length` bounds delete enumeration to the leading bytes of
/// each term (7 is the usual choice).
#[derive(Debug, Clone)]
pub struct Config {
    pub max_edit_distance: u32,
    pub prefix_length: u32,
    pub ranking: Ranking,
    /// Capacity of the string arena in bytes. All terms and delete-variant
    /// keys must fit; exhaustion fails the load pass.
    pub string_arena_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_edit_distance: 2,
            prefix_length: 7,
            ranking: Ranking::Best,
            string_arena_capacity: STRING_ARENA_CAPACITY,
        }
    }
}

impl Config {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.max_edit_distance < 1 || self.max_edit_distance > MAX_EDIT_DISTANCE {
            return Err(Error::InvalidMaxDistance(self.max_edit_distance));
        }
        if self.prefix_length < 1 {
            return Err(Error::InvalidPrefixLength(self.prefix_length));
        }
        Ok(())
    }
}

/// A single spelling suggestion.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub term: String,
    /// Damerau-Levenshtein distance from the (normalized) query.
    pub distance: u32,
    pub frequency: u64,
    /// `frequency / max_frequency` over the whole dictionary.
    pub probability: f32,
    /// Inverse word frequency: `|ln probability|`, 99.0 for probability zero.
    pub iwf: f32,
}

/// Dictionary counters, frozen after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Unique words admitted to the exact-match table.
    pub word_count: usize,
    /// Distinct delete-variant entries in the delete index.
    pub entry_count: usize,
    /// Input lines skipped as malformed (short lines, over-long terms).
    pub skipped_lines: usize,
}
