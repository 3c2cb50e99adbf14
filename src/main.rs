use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};

use asterism::errors::QueryError;
use asterism::search::{self, Outcome, Query};
use asterism::word_list::WordList;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Asterism word-search toolkit
#[derive(Parser, Debug)]
#[command(author, version = VERSION, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Maximum number of results to return
    #[arg(short = 'n', long, default_value_t = 500)]
    max_results: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find words matching a letter/wildcard pattern (e.g. "C?T")
    Pattern {
        /// Uppercase letters and '?' wildcards
        pattern: String,

        /// Pad the pattern with trailing wildcards to this word length
        #[arg(short, long)]
        length: Option<usize>,
    },

    /// Find words formable from a pool of letters
    Anagram {
        /// The letter pool (at least 3 letters)
        letters: String,
    },

    /// Find words hiding the target as a buried exact substring
    Rebus {
        /// The letters to hide (e.g. "AT" is hidden in "CATS")
        target: String,
    },

    /// Find words containing the target's letters as a scrambled window
    Scramble {
        /// The letters to scramble (e.g. "ACT" is scrambled in "SCAT")
        target: String,
    },

    /// Rank the words most similar to the given word
    Connect {
        /// The word to find connections for
        word: String,

        /// Shortest candidate word considered
        #[arg(long, default_value_t = 3)]
        min_len: usize,

        /// Longest candidate word considered
        #[arg(long, default_value_t = 8)]
        max_len: usize,
    },
}

impl Command {
    fn into_query(self) -> Query {
        match self {
            Command::Pattern { pattern, length } => Query::Pattern { text: pattern, length },
            Command::Anagram { letters } => Query::Anagram { pool: letters },
            Command::Rebus { target } => Query::Rebus { target },
            Command::Scramble { target } => Query::Scrambled { target },
            Command::Connect { word, min_len, max_len } => {
                Query::Connections { word, min_len, max_len }
            }
        }
    }
}

/// Entry point of the Asterism CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("ASTERISM_DEBUG").is_ok();
    asterism::log::init_logger(debug_enabled);

    log::debug!("Starting Asterism");

    if let Err(e) = try_main() {
        // Print the error to stderr, with detailed formatting if it's a QueryError
        if let Some(query_err) = e.downcast_ref::<QueryError>() {
            eprintln!("Error: {}", query_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the Asterism CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Run the requested search against it.
/// 4. Print each result on stdout.
/// 5. Print the summary line and timings on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., invalid query, missing
/// word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // 1. Load the word list from disk
    let t_load = Instant::now();
    let words = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    if words.is_empty() {
        log::warn!("word list '{}' contained no usable words", cli.word_list);
    }

    // 2. Run the query against the word list
    let query = cli.command.into_query();
    let t_search = Instant::now();
    let outcome = search::run_query(&query, &words, cli.max_results)?;
    let search_secs = t_search.elapsed().as_secs_f64();

    // 3. Print each result on stdout
    match &outcome {
        Outcome::Words(results) => {
            for word in &results.matches {
                println!("{word}");
            }
        }
        Outcome::Rebus(results) => {
            for m in &results.matches {
                println!("{}", m.highlight());
            }
        }
        Outcome::Scrambled(results) => {
            for m in &results.matches {
                println!("{}", m.highlight());
            }
        }
        Outcome::Connections(found) => {
            for c in found {
                println!("{}\t{:.2}", c.word, c.strength);
            }
        }
    }

    // 4. Print the summary and diagnostics (word count, timings) to stderr
    eprintln!("{}", search::summary(&query, &outcome));
    eprintln!(
        "Loaded {} words in {load_secs:.3}s; searched in {search_secs:.3}s.",
        words.len()
    );

    Ok(())
}
