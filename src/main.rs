use std::fs::OpenOptions;
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use anahash::letter_pool::LetterPool;
use anahash::matcher::{MatchEvent, TargetSet};
use anahash::solver;
use anahash::solver::SearchStatus;
use anahash::task::Task;
use anahash::trie::WordIndex;
use anahash::word_list::WordList;

// Crate version plus the git hash baked in by build.rs.
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Anagram MD5 hash finder
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    wordlist_path: String,

    /// Path to the task file (anagram phrase on the first line, then one
    /// target digest per line)
    task_path: String,

    /// Number of spaces in generated phrases (default: as many as the task
    /// phrase has)
    #[arg(short, long)]
    spaces: Option<usize>,

    /// File where found matches are appended as they happen
    #[arg(short, long, default_value = "results.txt")]
    results: String,
}

/// Entry point of the anahash CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("ANAHASH_DEBUG").is_ok();
    anahash::log::init_logger(debug_enabled);

    log::info!("Starting anahash");

    if let Err(e) = try_main() {
        eprintln!("Error: {e}");
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the anahash CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the task file (anagram phrase + target digests).
/// 3. Load the word list, filtered against the phrase's letters.
/// 4. Run the generator/matcher pipeline, printing and persisting each
///    match as it lands.
/// 5. Print the summary and performance metrics on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed task file,
/// missing word list) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the task and derive the search parameters from its phrase
    let task = Task::load_from_path(&cli.task_path)?;
    let pool = LetterPool::from_phrase(&task.phrase);
    let separators = cli.spaces.unwrap_or_else(|| task.space_count());

    log::info!(
        "anagram: '{}' ({} letters), {} target(s), {} separator(s)",
        task.phrase,
        pool.len(),
        task.digests.len(),
        separators
    );

    // 2. Load the word list, filtered to words the phrase could contain.
    //    A pure-ASCII/pure-alphabetic phrase can never be rearranged into
    //    anything else, so those filters come from the letters themselves.
    let letters = pool.letters();
    let t_load = Instant::now();
    let mut word_list = WordList::load_from_path(
        &cli.wordlist_path,
        pool.len(),
        letters.is_ascii(),
        letters.chars().all(char::is_alphabetic),
    )?;
    word_list.retain_usable(&pool);
    let index = WordIndex::build(&word_list.words);
    let load_secs = t_load.elapsed().as_secs_f64();

    // 3. Run the pipeline; report and persist each match as it happens
    let t_search = Instant::now();
    let report = solver::run_search(
        index,
        pool,
        separators,
        TargetSet::new(task.digests.iter().cloned()),
        |event| {
            let line = found_line(event);
            println!("{line}");
            if let Err(e) = append_result(&cli.results, &line) {
                log::warn!("could not append to '{}': {}", cli.results, e);
            }
        },
    )?;
    let search_secs = t_search.elapsed().as_secs_f64();

    // 4. Summarize on stderr
    match report.status {
        SearchStatus::AllTargetsFound => {
            eprintln!("✓ Found all {} target hash(es)", report.matches.len());
        }
        SearchStatus::SpaceExhausted => {
            eprintln!(
                "⚠️  Searched {} anagrams but did not find:",
                report.candidates_checked
            );
            for digest in &report.unmatched {
                eprintln!("  {digest}");
            }
            eprintln!("Try a different number of spaces (this run used {separators}).");
        }
    }
    if !report.matches.is_empty() {
        eprintln!("Found hashes are also in '{}'.", cli.results);
    }

    // 5. Print diagnostics (word-list size, timings, candidate count) to stderr
    eprintln!(
        "Loaded {} usable words in {:.3}s; checked {} anagrams in {:.3}s.",
        word_list.len(),
        load_secs,
        report.candidates_checked,
        search_secs
    );

    Ok(())
}

/// The one-line report for a found target, shared by stdout and the
/// results file.
fn found_line(event: &MatchEvent) -> String {
    format!(
        "FOUND: Anagram number {} in {} sec: {} -> '{}'",
        event.ordinal,
        event.elapsed.as_secs(),
        event.digest,
        event.candidate
    )
}

/// Append one result line to the results file, creating it if needed.
fn append_result(path: &str, line: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
