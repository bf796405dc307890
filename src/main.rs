//! Correction check harness.
//!
//! Usage: `symdel <dictionary_file> [misspelled expected ...]`
//!
//! With pairs, runs each misspelling through the engine and exits 0 only if
//! every top suggestion matches the expected word. Without pairs, reads
//! words from stdin and prints their suggestions.

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use symdel::{Config, Dictionary, LookupScratch};

const MAX_SUGGESTIONS: usize = 5;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <dictionary_file> [word expected word expected ...]", args[0]);
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  Interactive: {} dictionaries/dictionary.txt", args[0]);
        eprintln!("  Batch test:  {} dictionaries/dictionary.txt helo hello recieve receive", args[0]);
        return ExitCode::FAILURE;
    }

    let config = Config::default();
    let max_distance = config.max_edit_distance;
    let mut dict = match Dictionary::new(config) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("Failed to create dictionary: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Loading dictionary from: {}", args[1]);
    if let Err(e) = dict.load_dictionary(&args[1], 0, 1) {
        eprintln!("Failed to load dictionary: {}", e);
        return ExitCode::FAILURE;
    }

    let stats = dict.stats();
    println!("Loaded {} words, {} delete entries\n", stats.word_count, stats.entry_count);

    if args.len() > 2 {
        batch_mode(&dict, &args[2..], max_distance)
    } else {
        interactive_mode(&dict, max_distance)
    }
}

/// Check (misspelled, expected) pairs; exit 0 only on a clean sweep.
fn batch_mode(dict: &Dictionary, pairs: &[String], max_distance: u32) -> ExitCode {
    println!("=== Batch Test Mode ===");
    let mut scratch = LookupScratch::new();
    let mut suggestions = Vec::new();
    let mut tests = 0;
    let mut passed = 0;

    for pair in pairs.chunks(2) {
        let [input, expected] = pair else {
            eprintln!("Warning: Odd number of test arguments, ignoring '{}'", pair[0]);
            break;
        };

        dict.lookup_with(input, max_distance, MAX_SUGGESTIONS, &mut scratch, &mut suggestions);
        tests += 1;

        match suggestions.first() {
            Some(s) if s.term == *expected => {
                println!("\u{2713} \"{}\" -> \"{}\"", input, s.term);
                passed += 1;
            }
            Some(s) => {
                println!("\u{2717} \"{}\" -> expected \"{}\", got \"{}\"", input, expected, s.term);
            }
            None => {
                println!("\u{2717} \"{}\" -> expected \"{}\", got no suggestions", input, expected);
            }
        }
    }

    println!("\n=== Results ===");
    println!("Tests: {}/{} passed", passed, tests);

    if passed == tests {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Read words from stdin and print their suggestions.
fn interactive_mode(dict: &Dictionary, max_distance: u32) -> ExitCode {
    println!("=== Interactive Mode ===");
    println!("Enter words to correct (or 'quit' to exit):");

    let stdin = io::stdin();
    let mut scratch = LookupScratch::new();
    let mut suggestions = Vec::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let word = line.trim();
        if word == "quit" {
            break;
        }
        if word.is_empty() {
            continue;
        }

        dict.lookup_with(word, max_distance, MAX_SUGGESTIONS, &mut scratch, &mut suggestions);

        if suggestions.is_empty() {
            println!("  No suggestions");
        } else {
            println!("  Suggestions:");
            for s in &suggestions {
                println!(
                    "    {} (distance={}, iwf={}, prob={}, freq={})",
                    s.term, s.distance, s.iwf, s.probability, s.frequency
                );
            }
        }
        let _ = io::stdout().flush();
    }

    ExitCode::SUCCESS
}
