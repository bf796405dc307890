//! Fixed-capacity string arena.
//!
//! Every term and delete-variant key is interned here exactly once and
//! referenced everywhere else by a [`Span`] — a `Copy` index pair that
//! replaces the borrow graph a pointer-based layout would need. All interned
//! strings are immutable and live until the dictionary is dropped, so
//! nothing is ever freed individually.

use super::error::{Error, Result};

/// Index of an interned string: `(offset, len)` into the arena's byte store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    offset: u32,
    len: u32,
}

/// Bump-allocating byte region with a hard capacity.
///
/// The capacity is reserved up front; hitting it is a load-time error, not a
/// panic, and leaves everything interned so far intact.
pub(crate) struct StringArena {
    bytes: Vec<u8>,
    capacity: usize,
}

impl StringArena {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Copy `data` into the arena and return its span.
    ///
    /// # Errors
    /// Returns [`Error::ArenaExhausted`] when `data` does not fit.
    pub(crate) fn intern(&mut self, data: &[u8]) -> Result<Span> {
        if self.bytes.len() + data.len() > self.capacity {
            return Err(Error::ArenaExhausted {
                needed: data.len(),
                used: self.bytes.len(),
                capacity: self.capacity,
            });
        }
        let offset = self.bytes.len() as u32;
        self.bytes.extend_from_slice(data);
        Ok(Span {
            offset,
            len: data.len() as u32,
        })
    }

    /// Raw bytes of an interned string.
    pub(crate) fn bytes(&self, span: Span) -> &[u8] {
        &self.bytes[span.offset as usize..(span.offset + span.len) as usize]
    }

    /// Interned string as text.
    ///
    /// # Panics
    /// Panics if the span does not cover valid UTF-8. Spans only come from
    /// [`StringArena::intern`], which is fed whole ASCII terms and their
    /// deletions, so this is a programmer error.
    pub(crate) fn get(&self, span: Span) -> &str {
        std::str::from_utf8(self.bytes(span)).expect("arena spans cover valid UTF-8")
    }

    pub(crate) fn used(&self) -> usize {
        self.bytes.len()
    }
}
