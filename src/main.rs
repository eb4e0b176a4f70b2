use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use subcipher::output;
use subcipher::solver;
use subcipher::solver::SolveStatus;
use subcipher::word_list::WordList;

/// Substitution-cipher solver
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The ciphertext to decode: letters and single spaces (e.g., "XY YX")
    ciphertext: String,

    /// Path to the word list file (one word per line)
    #[arg(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/data/words.txt")
    )]
    word_list: String,

    /// Render results as a nested tree (JSON) instead of one decoding per line
    #[arg(short, long)]
    tree: bool,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    output: Option<String>,

    /// Wall-clock budget for the search, in seconds
    #[arg(long, default_value_t = 30)]
    time_budget: u64,
}

/// Entry point of the subcipher CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("SUBCIPHER_DEBUG").is_ok();
    subcipher::log::init_logger(debug_enabled);

    log::info!("Starting subcipher solver");

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a SolverError
        if let Some(solver_err) = e.downcast_ref::<solver::SolverError>() {
            eprintln!("Error: {}", solver_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the subcipher CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the word list from disk.
/// 3. Enumerate every decoding of the ciphertext.
/// 4. Emit the decodings, flat or tree-shaped, to stdout or a file.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., malformed ciphertext,
/// missing word-list file) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load the word list from disk
    let t_load = Instant::now();
    let word_list = WordList::load_from_path(&cli.word_list)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    // 2. Solve the ciphertext against the word list
    let t_solve = Instant::now();
    let result = solver::solve(&cli.ciphertext, &word_list, Duration::from_secs(cli.time_budget))?;
    let solve_secs = t_solve.elapsed().as_secs_f64();

    // 3. Emit the decodings in the selected form
    if let Some(path) = &cli.output {
        if cli.tree {
            output::write_tree(path, &result)?;
        } else {
            output::write_flat(path, &result)?;
        }
    } else if cli.tree {
        println!("{}", serde_json::to_string(&output::solution_tree(&result))?);
    } else {
        for line in output::flat_lines(&result) {
            println!("{line}");
        }
    }

    if let SolveStatus::TimedOut { elapsed } = result.status {
        eprintln!(
            "⚠️  Timed out after {:.1}s; the search did not run to completion",
            elapsed.as_secs_f64()
        );
    }

    // 4. Print diagnostics (word-list size, timings, number of results) to stderr
    eprintln!(
        "Loaded {} words in {:.3}s; solved in {:.3}s ({} decodings).",
        word_list.word_count(),
        load_secs,
        solve_secs,
        result.solutions.len()
    );

    Ok(())
}
