//! Dictionary file ingestion.
//!
//! Format: one `term frequency` pair per line, whitespace-separated, with
//! `term_column` and `count_column` selecting the fields (0-based). Blank
//! lines and `#` comment lines are skipped; lines with too few fields or
//! over-long terms are skipped and counted; a missing or zero frequency is
//! coerced to 1. Terms are ASCII-lowercased before use.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use super::arena::Span;
use super::deletes::DeleteBuffer;
use super::error::Result;
use super::hashing::hash64;
use super::models::{LOAD_FACTOR_WARNING_THRESHOLD, MAX_TERM_LEN};
use super::Dictionary;

/// Run one load pass over `path` into `dict`.
///
/// Loads are additive. The probability/IWF sweep runs at the end of every
/// pass, so the dictionary always exposes fully-derived state; on error the
/// words admitted before the failing line remain valid for lookup.
pub(super) fn load(
    dict: &mut Dictionary,
    path: &Path,
    term_column: u32,
    count_column: u32,
) -> Result<()> {
    info!("Loading dictionary file: {}", path.display());
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let fields_needed = term_column.max(count_column) as usize + 1;
    let mut deletes = DeleteBuffer::new();
    let mut line_num = 0usize;
    let mut load_factor_warned = false;

    for line in reader.lines() {
        let line = line?;
        line_num += 1;

        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < fields_needed {
            dict.skipped_lines += 1;
            continue;
        }
        let raw_term = fields[term_column as usize];
        let raw_count = fields[count_column as usize];

        if raw_term.len() > MAX_TERM_LEN {
            dict.skipped_lines += 1;
            continue;
        }
        let term = raw_term.to_ascii_lowercase();
        let frequency = raw_count.parse::<u64>().unwrap_or(0).max(1);

        let new_word = dict.exact.insert(hash64(term.as_bytes()), frequency);
        if new_word {
            dict.word_count += 1;
        }

        // A repeated word reuses the span interned by its first appearance,
        // recovered from the index entry of its own prefix variant.
        let term_span = if new_word {
            dict.arena.intern(term.as_bytes())?
        } else {
            match interned_span(dict, &term) {
                Some(span) => span,
                None => dict.arena.intern(term.as_bytes())?,
            }
        };
        deletes.enumerate(&term, dict.config.max_edit_distance, dict.config.prefix_length);

        let Dictionary { arena, index, .. } = &mut *dict;
        for variant in deletes.iter() {
            index.insert(arena, variant, term_span, frequency)?;
        }

        if line_num % 1000 == 0 {
            let load_factor = dict.index.load_factor();
            debug!(
                "Loaded {} lines, {} delete entries ({:.1}% full)",
                line_num,
                dict.index.entry_count(),
                load_factor * 100.0
            );
            if load_factor > LOAD_FACTOR_WARNING_THRESHOLD && !load_factor_warned {
                warn!("Delete index {:.1}% full", load_factor * 100.0);
                load_factor_warned = true;
            }
        }
    }

    debug!("Deriving probabilities and inverse word frequencies");
    dict.exact.finalize();

    info!(
        "Dictionary loaded: {} words, {} delete entries, {} lines skipped, arena {} bytes",
        dict.word_count,
        dict.index.entry_count(),
        dict.skipped_lines,
        dict.arena.used()
    );
    Ok(())
}

/// Span `term` was interned under when it was first indexed.
///
/// Every indexed word lists itself under its own prefix variant, so that
/// entry doubles as the word-to-span map. `None` for a word that was never
/// fully indexed, or when the exact table's "already known" answer came
/// from a 64-bit hash collision with a different word.
fn interned_span(dict: &Dictionary, term: &str) -> Option<Span> {
    let prefix_len = term
        .len()
        .min(dict.config.prefix_length as usize)
        .min(MAX_TERM_LEN);
    let prefix = &term.as_bytes()[..prefix_len];
    dict.index
        .find(&dict.arena, prefix)?
        .iter()
        .find(|entry| dict.arena.bytes(entry.term) == term.as_bytes())
        .map(|entry| entry.term)
}
