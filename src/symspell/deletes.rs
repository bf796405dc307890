//! Delete-variant enumeration.
//!
//! The symmetric-delete algorithm indexes every dictionary word under all
//! strings reachable by deleting up to `max_distance` characters from the
//! word's prefix, and probes the same variant set for the query at lookup
//! time. This module produces that set.
//!
//! Order of operations matters: the term is truncated to its prefix
//! *before* any deletion is applied. Deleting first and truncating after
//! yields a different set and quietly breaks candidate recall.

use super::models::{DELETE_QUEUE_CAPACITY, MAX_TERM_LEN};

#[derive(Clone, Copy)]
struct QueueItem {
    offset: u32,
    len: u32,
    depth: u32,
}

/// Reusable output buffer for delete enumeration.
///
/// Variants are stored back to back in one flat byte buffer with a span
/// list on top, so a warm buffer enumerates with no heap allocation. One
/// buffer serves one caller at a time; the loader owns one for the whole
/// load pass and each lookup scratch owns its own.
#[derive(Default)]
pub struct DeleteBuffer {
    bytes: Vec<u8>,
    spans: Vec<(u32, u32)>,
    queue: Vec<QueueItem>,
}

impl DeleteBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of variants produced by the last enumeration.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Iterate the variants of the last enumeration, in emission order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.spans
            .iter()
            .map(move |&(offset, len)| &self.bytes[offset as usize..(offset + len) as usize])
    }

    /// Fill the buffer with the unique delete variants of `term`.
    ///
    /// The set consists of the prefix (the first `prefix_length` bytes of
    /// `term`) plus every string reachable from it by 1 to `max_distance`
    /// single-character deletions. When the whole prefix fits inside the
    /// distance budget the empty string is a member too. Enumeration is a
    /// breadth-first walk that never descends below length 1 and caps the
    /// output at `DELETE_QUEUE_CAPACITY` variants.
    pub fn enumerate(&mut self, term: &str, max_distance: u32, prefix_length: u32) {
        self.bytes.clear();
        self.spans.clear();
        self.queue.clear();

        if term.is_empty() {
            return;
        }

        let prefix_len = term.len().min(prefix_length as usize).min(MAX_TERM_LEN);
        let prefix = &term.as_bytes()[..prefix_len];

        // The empty string stands in for "everything deleted" and is only
        // reachable when the prefix itself fits in the budget.
        if prefix_len as u32 <= max_distance {
            self.push_unique(&[]);
        }

        if let Some((offset, len)) = self.push_unique(prefix) {
            self.queue.push(QueueItem {
                offset,
                len,
                depth: 0,
            });
        }

        let mut head = 0;
        while head < self.queue.len() {
            let item = self.queue[head];
            head += 1;

            if item.depth >= max_distance || item.len <= 1 {
                continue;
            }

            let len = item.len as usize;
            let mut current = [0u8; MAX_TERM_LEN];
            current[..len].copy_from_slice(
                &self.bytes[item.offset as usize..item.offset as usize + len],
            );

            for i in 0..len {
                let mut deleted = [0u8; MAX_TERM_LEN];
                deleted[..i].copy_from_slice(&current[..i]);
                deleted[i..len - 1].copy_from_slice(&current[i + 1..len]);

                if let Some((offset, variant_len)) = self.push_unique(&deleted[..len - 1]) {
                    self.queue.push(QueueItem {
                        offset,
                        len: variant_len,
                        depth: item.depth + 1,
                    });
                }
            }
        }
    }

    /// Append a variant unless it is a duplicate or the buffer is full.
    ///
    /// The emitted span list doubles as the dedup set: the prefix bound
    /// keeps the set tiny (29 variants for a 7-byte prefix at distance 2),
    /// so an exact linear scan beats a transient hash set.
    fn push_unique(&mut self, variant: &[u8]) -> Option<(u32, u32)> {
        let seen = self.spans.iter().any(|&(offset, len)| {
            &self.bytes[offset as usize..(offset + len) as usize] == variant
        });
        if seen || self.spans.len() >= DELETE_QUEUE_CAPACITY {
            return None;
        }
        let offset = self.bytes.len() as u32;
        self.bytes.extend_from_slice(variant);
        let span = (offset, variant.len() as u32);
        self.spans.push(span);
        Some(span)
    }
}
