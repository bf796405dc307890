//! Benchmark driver: dictionary load time, accuracy, and lookup latency.
//!
//! Usage: `benchmark <dictionary_file> <test_file>`
//!
//! The test file holds one `wrong<TAB>correct` pair per line. Pairs whose
//! top suggestion differs from the expected word are written to
//! `errors.txt` as `expected<TAB>wrong<TAB>got`.

use std::env;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::process::ExitCode;
use std::time::Instant;

use symdel::{Config, Dictionary, LookupScratch};

const MAX_SUGGESTIONS: usize = 5;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <dictionary_file> <test_file>", args[0]);
        return ExitCode::FAILURE;
    }
    let dict_path = &args[1];
    let test_path = &args[2];

    // --- 1. Measure dictionary load time ---
    println!("Loading dictionary: {}", dict_path);
    let start_load = Instant::now();

    let config = Config::default();
    let max_distance = config.max_edit_distance;
    let mut dict = match Dictionary::new(config) {
        Ok(dict) => dict,
        Err(e) => {
            eprintln!("Failed to create dictionary: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = dict.load_dictionary(dict_path, 0, 1) {
        eprintln!("Failed to load dictionary: {}", e);
        return ExitCode::FAILURE;
    }

    let load_time = start_load.elapsed();
    let stats = dict.stats();
    println!(
        "Loaded {} words and {} deletes in {:.2} ms\n",
        stats.word_count,
        stats.entry_count,
        load_time.as_secs_f64() * 1000.0
    );

    // --- 2. Measure lookup accuracy and latency ---
    let test_file = match File::open(test_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to open test file {}: {}", test_path, e);
            return ExitCode::FAILURE;
        }
    };
    let mut errors_out = match File::create("errors.txt") {
        Ok(f) => BufWriter::new(f),
        Err(e) => {
            eprintln!("Failed to open errors.txt for writing: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Running benchmark against: {}", test_path);

    let mut scratch = LookupScratch::new();
    let mut suggestions = Vec::new();
    let mut total = 0u64;
    let mut correct = 0u64;
    let mut total_lookup_time = std::time::Duration::ZERO;

    for line in BufReader::new(test_file).lines() {
        let Ok(line) = line else { break };
        let mut fields = line.split_whitespace();
        let (Some(misspelled), Some(expected)) = (fields.next(), fields.next()) else {
            continue;
        };
        total += 1;

        let start = Instant::now();
        dict.lookup_with(misspelled, max_distance, MAX_SUGGESTIONS, &mut scratch, &mut suggestions);
        total_lookup_time += start.elapsed();

        match suggestions.first() {
            Some(s) if s.term == expected => correct += 1,
            Some(s) => {
                let _ = writeln!(errors_out, "{}\t{}\t{}", expected, misspelled, s.term);
            }
            None => {
                let _ = writeln!(errors_out, "{}\t{}\t(none)", expected, misspelled);
            }
        }

        if total % 100 == 0 {
            eprint!("\rProcessed: {}...", total);
        }
    }
    eprintln!("\rProcessed: {}... Done.\n", total);
    let _ = errors_out.flush();

    if total == 0 {
        eprintln!("No test pairs found in {}", test_path);
        return ExitCode::FAILURE;
    }

    // --- 3. Print final results ---
    let wrong = total - correct;
    let lookup_ms = total_lookup_time.as_secs_f64() * 1000.0;
    let avg_ms = lookup_ms / total as f64;

    println!("--- Accuracy Results ---");
    println!("Total test cases: {}", total);
    println!("Correctly solved: {} ({:.1}%)", correct, 100.0 * correct as f64 / total as f64);
    println!("Wrong: {} ({:.1}%)\n", wrong, 100.0 * wrong as f64 / total as f64);

    println!("--- Performance Results ---");
    println!("Dictionary load time: {:.2} ms", load_time.as_secs_f64() * 1000.0);
    println!("Total lookup time:    {:.2} ms (for {} lookups)", lookup_ms, total);
    println!("Average lookup time:  {:.3} ms ({:.1} \u{b5}s)", avg_ms, avg_ms * 1000.0);

    println!("\nError cases written to errors.txt");
    ExitCode::SUCCESS
}
