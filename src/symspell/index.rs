//! Delete index: delete variant -> source words.
//!
//! An open-addressed table of slab indices over a flat entry store. Open
//! addressing keeps probe traffic in contiguous memory and the slab keeps
//! entry headers together; each entry's key and every source word it lists
//! are arena spans, so the whole structure is three flat allocations plus
//! the per-entry term vectors.

use super::arena::{Span, StringArena};
use super::error::{Error, Result};
use super::hashing::hash64;
use super::models::{TABLE_SLOTS_D1, TABLE_SLOTS_D2, TABLE_SLOTS_D3};

const EMPTY: u32 = u32::MAX;

/// A dictionary word that produces some delete variant.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TermRef {
    pub term: Span,
    pub frequency: u64,
}

struct DeleteEntry {
    key: Span,
    terms: Vec<TermRef>,
}

pub(crate) struct DeleteIndex {
    /// Slot -> entry slab index, or `EMPTY`.
    table: Vec<u32>,
    entries: Vec<DeleteEntry>,
}

impl DeleteIndex {
    /// Table size is fixed at creation, picked by edit distance: deeper
    /// deletion lattices need proportionally more slots to stay under 50%
    /// load on realistic dictionaries.
    pub(crate) fn new(max_edit_distance: u32) -> Self {
        let slots = match max_edit_distance {
            1 => TABLE_SLOTS_D1,
            2 => TABLE_SLOTS_D2,
            _ => TABLE_SLOTS_D3,
        };
        Self {
            table: vec![EMPTY; slots],
            entries: Vec::new(),
        }
    }

    pub(crate) fn entry_count(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn load_factor(&self) -> f64 {
        self.entries.len() as f64 / self.table.len() as f64
    }

    /// Register `term` as a source word of `variant`.
    ///
    /// A new variant allocates a fresh entry and interns the variant as its
    /// key; an existing variant coalesces. Within an entry, source words are
    /// deduplicated by content and a duplicate keeps the maximum frequency.
    pub(crate) fn insert(
        &mut self,
        arena: &mut StringArena,
        variant: &[u8],
        term: Span,
        frequency: u64,
    ) -> Result<()> {
        let hash = hash64(variant);
        let slots = self.table.len();
        let start = (hash % slots as u64) as usize;

        for probe in 0..slots {
            let pos = (start + probe) % slots;
            let idx = self.table[pos];

            if idx == EMPTY {
                let key = arena.intern(variant)?;
                let entry_idx = self.entries.len() as u32;
                self.entries.push(DeleteEntry {
                    key,
                    terms: vec![TermRef { term, frequency }],
                });
                self.table[pos] = entry_idx;
                return Ok(());
            }

            let entry = &mut self.entries[idx as usize];
            if arena.bytes(entry.key) == variant {
                for existing in entry.terms.iter_mut() {
                    if arena.bytes(existing.term) == arena.bytes(term) {
                        if frequency > existing.frequency {
                            existing.frequency = frequency;
                        }
                        return Ok(());
                    }
                }
                entry.terms.push(TermRef { term, frequency });
                return Ok(());
            }
            // Hash collision with a different variant: keep probing.
        }

        Err(Error::DeleteIndexFull { slots })
    }

    /// Source words of `variant`, or `None` if it indexes nothing.
    pub(crate) fn find<'a>(&'a self, arena: &StringArena, variant: &[u8]) -> Option<&'a [TermRef]> {
        let hash = hash64(variant);
        let slots = self.table.len();
        let start = (hash % slots as u64) as usize;

        for probe in 0..slots {
            let idx = self.table[(start + probe) % slots];
            if idx == EMPTY {
                return None;
            }
            let entry = &self.entries[idx as usize];
            if arena.bytes(entry.key) == variant {
                return Some(&entry.terms);
            }
        }
        None
    }
}
