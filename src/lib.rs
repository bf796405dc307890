//! symdel: single-word spell correction via Symmetric Delete.
//!
//! Builds a precomputed delete index over a frequency dictionary so that a
//! lookup costs a few hash probes and a handful of bounded edit-distance
//! checks, in low microseconds.
//!
//! ```no_run
//! use symdel::{Config, Dictionary};
//!
//! # fn main() -> symdel::Result<()> {
//! let mut dict = Dictionary::new(Config::default())?;
//! dict.load_dictionary("dictionary.txt", 0, 1)?;
//! for suggestion in dict.lookup("recieve", 2, 1) {
//!     println!("{} (distance {})", suggestion.term, suggestion.distance);
//! }
//! # Ok(())
//! # }
//! ```

pub mod symspell;

pub use symspell::error::{Error, Result};
pub use symspell::hashing::hash64;
pub use symspell::models::{Config, Ranking, Stats, Suggestion, MAX_TERM_LEN};
pub use symspell::{Dictionary, LookupScratch};
