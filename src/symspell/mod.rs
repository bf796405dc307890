//! Core spell-correction engine.
//!
//! Implements single-word correction with the Symmetric Delete algorithm:
//! at load time every dictionary word is indexed under its bounded set of
//! delete variants, and a lookup probes the same variant set of the query,
//! turning "find all words within edit distance d" into a handful of hash
//! probes plus exact distance checks on a small candidate pool.

mod arena;
pub mod deletes;
pub mod distance;
pub mod error;
mod exact;
pub mod hashing;
mod index;
mod loader;
pub mod models;

use std::path::Path;

use log::debug;

use self::arena::{Span, StringArena};
use self::deletes::DeleteBuffer;
use self::distance::damerau_levenshtein;
use self::exact::{iwf_from_probability, ExactMatchTable};
use self::hashing::hash64;
use self::index::DeleteIndex;
use self::models::{Config, Ranking, Stats, Suggestion, MAX_CANDIDATES_PER_LOOKUP, MAX_TERM_LEN};

pub use self::error::{Error, Result};

/// A candidate collected on the slow path, before ranking.
#[derive(Clone, Copy)]
struct Candidate {
    term: Span,
    distance: u32,
    frequency: u64,
}

/// Per-caller work buffers for the lookup slow path.
///
/// The dictionary itself is immutable after load, so lookups are naturally
/// concurrent as long as each caller brings its own scratch. Reusing one
/// scratch across calls keeps the slow path allocation-free once warm.
#[derive(Default)]
pub struct LookupScratch {
    query: String,
    deletes: DeleteBuffer,
    candidates: Vec<Candidate>,
}

impl LookupScratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An immutable-after-load spell-correction dictionary.
///
/// Build one with [`Dictionary::new`], populate it with one or more
/// [`load_dictionary`](Dictionary::load_dictionary) passes, then share it
/// freely: [`lookup`](Dictionary::lookup) takes `&self`.
pub struct Dictionary {
    config: Config,
    arena: StringArena,
    exact: ExactMatchTable,
    index: DeleteIndex,
    word_count: usize,
    skipped_lines: usize,
}

impl Dictionary {
    /// Create an empty dictionary.
    ///
    /// # Errors
    /// Returns a configuration error when `max_edit_distance` is outside
    /// `1..=3` or `prefix_length` is zero.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        debug!(
            "Creating dictionary: max_edit_distance={}, prefix_length={}, ranking={:?}",
            config.max_edit_distance, config.prefix_length, config.ranking
        );
        Ok(Self {
            arena: StringArena::with_capacity(config.string_arena_capacity),
            exact: ExactMatchTable::new(),
            index: DeleteIndex::new(config.max_edit_distance),
            word_count: 0,
            skipped_lines: 0,
            config,
        })
    }

    /// Load a frequency file: one whitespace-separated `term frequency`
    /// pair per line, columns selected by `term_column` and `count_column`
    /// (0-based). Blank and `#` comment lines are skipped; malformed lines
    /// are skipped and counted in [`Stats::skipped_lines`].
    ///
    /// # Errors
    /// I/O errors and arena/index exhaustion. Words admitted before the
    /// failure remain valid for lookup.
    pub fn load_dictionary(
        &mut self,
        path: impl AsRef<Path>,
        term_column: u32,
        count_column: u32,
    ) -> Result<()> {
        loader::load(self, path.as_ref(), term_column, count_column)
    }

    /// Find corrections for `term`, allocating a transient scratch.
    ///
    /// Convenience wrapper around [`lookup_with`](Dictionary::lookup_with);
    /// callers that look up in a loop should hold their own scratch.
    pub fn lookup(&self, term: &str, max_distance: u32, max_suggestions: usize) -> Vec<Suggestion> {
        let mut scratch = LookupScratch::new();
        let mut out = Vec::new();
        self.lookup_with(term, max_distance, max_suggestions, &mut scratch, &mut out);
        out
    }

    /// Find corrections for `term` using caller-owned buffers.
    ///
    /// The query is ASCII-lowercased and clipped to [`MAX_TERM_LEN`] bytes.
    /// An exact match short-circuits to a single distance-0 suggestion.
    /// Otherwise the requested distance is clamped to the dictionary's
    /// configured maximum, and to 1 for queries of four bytes or fewer
    /// (short words explode combinatorially and rarely need more).
    /// Suggestions are ranked by `(distance asc, frequency desc, term asc)`;
    /// [`Ranking::Best`] emits the single winner, [`Ranking::Sorted`] up to
    /// `max_suggestions` in order. An empty query yields no suggestions.
    pub fn lookup_with(
        &self,
        term: &str,
        max_distance: u32,
        max_suggestions: usize,
        scratch: &mut LookupScratch,
        out: &mut Vec<Suggestion>,
    ) {
        out.clear();
        if term.is_empty() || max_suggestions == 0 {
            return;
        }

        let LookupScratch {
            query,
            deletes,
            candidates,
        } = scratch;

        query.clear();
        let mut clip = term.len().min(MAX_TERM_LEN);
        while !term.is_char_boundary(clip) {
            clip -= 1;
        }
        query.push_str(&term[..clip]);
        query.make_ascii_lowercase();
        let query = query.as_str();

        // Fast path: one hash probe answers "is this already a word".
        if let Some(hit) = self.exact.find(hash64(query.as_bytes())) {
            out.push(Suggestion {
                term: query.to_string(),
                distance: 0,
                frequency: hit.frequency,
                probability: hit.probability,
                iwf: hit.iwf,
            });
            return;
        }

        // Slow path: probe the delete index with the query's own variants.
        let mut effective_distance = max_distance.min(self.config.max_edit_distance);
        if query.len() <= 4 {
            effective_distance = 1;
        }

        deletes.enumerate(query, effective_distance, self.config.prefix_length);
        candidates.clear();

        for variant in deletes.iter() {
            let Some(terms) = self.index.find(&self.arena, variant) else {
                continue;
            };
            for term_ref in terms {
                if candidates.len() >= MAX_CANDIDATES_PER_LOOKUP {
                    break;
                }
                let candidate = self.arena.get(term_ref.term);
                if candidates
                    .iter()
                    .any(|c| self.arena.get(c.term) == candidate)
                {
                    continue;
                }
                let dist = damerau_levenshtein(query, candidate, effective_distance);
                if dist <= effective_distance {
                    candidates.push(Candidate {
                        term: term_ref.term,
                        distance: dist,
                        frequency: term_ref.frequency,
                    });
                }
            }
        }

        let rank = |a: &Candidate, b: &Candidate| {
            a.distance
                .cmp(&b.distance)
                .then_with(|| b.frequency.cmp(&a.frequency))
                .then_with(|| self.arena.get(a.term).cmp(self.arena.get(b.term)))
        };

        match self.config.ranking {
            Ranking::Best => {
                let Some(best) = candidates.iter().min_by(|a, b| rank(a, b)) else {
                    return;
                };
                out.push(self.emit(*best));
            }
            Ranking::Sorted => {
                candidates.sort_by(rank);
                out.extend(
                    candidates
                        .iter()
                        .take(max_suggestions)
                        .map(|c| self.emit(*c)),
                );
            }
        }
    }

    /// Turn a ranked candidate into a suggestion, filling probability and
    /// IWF from the exact-match table.
    fn emit(&self, candidate: Candidate) -> Suggestion {
        let term = self.arena.get(candidate.term);
        let probability = self.exact.probability(hash64(term.as_bytes()));
        Suggestion {
            term: term.to_string(),
            distance: candidate.distance,
            frequency: candidate.frequency,
            probability,
            iwf: iwf_from_probability(probability),
        }
    }

    /// Dictionary counters.
    pub fn stats(&self) -> Stats {
        Stats {
            word_count: self.word_count,
            entry_count: self.index.entry_count(),
            skipped_lines: self.skipped_lines,
        }
    }

    /// Probability of the word with this hash, 0.0 if absent.
    ///
    /// 0.0 is also what a present word of probability zero would report;
    /// callers that need presence should use [`lookup`](Dictionary::lookup).
    pub fn probability(&self, word_hash: u64) -> f32 {
        self.exact.probability(word_hash)
    }

    /// Inverse word frequency of `word`, 0.0 if absent.
    pub fn iwf(&self, word: &str) -> f32 {
        self.exact.iwf_of(word)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
