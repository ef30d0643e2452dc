//! Veridoku command-line verifier.
//!
//! Reads a puzzle file (size token followed by `size * size` cell values,
//! `0` meaning empty), verifies it, and prints the complete/valid verdict
//! followed by the rendered grid:
//!
//! ```sh
//! veridoku puzzle.txt
//! RUST_LOG=debug veridoku --workers 4 puzzle.txt
//! ```

use std::{fs, io, num::NonZeroUsize, path::PathBuf, process::ExitCode};

use clap::Parser;
use veridoku_core::{Grid, ParseGridError};
use veridoku_verifier::{EngineError, ValidationEngine, ValidationReport};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the puzzle file.
    puzzle: PathBuf,

    /// Number of worker threads (defaults to rayon's global pool).
    #[arg(long, value_name = "COUNT")]
    workers: Option<NonZeroUsize>,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum AppError {
    #[display("could not read {}: {source}", path.display())]
    ReadPuzzle {
        path: PathBuf,
        source: io::Error,
    },
    #[display("malformed puzzle: {_0}")]
    Parse(#[from] ParseGridError),
    #[display("verification failed: {_0}")]
    Verify(#[from] EngineError),
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), AppError> {
    let text = fs::read_to_string(&args.puzzle).map_err(|source| AppError::ReadPuzzle {
        path: args.puzzle.clone(),
        source,
    })?;
    let grid: Grid = text.parse()?;
    log::info!(
        "loaded size-{} puzzle from {}",
        grid.size(),
        args.puzzle.display()
    );

    let engine = match args.workers {
        Some(workers) => ValidationEngine::with_workers(workers.get())?,
        None => ValidationEngine::new(),
    };
    let report = engine.verify(&grid)?;

    print!("{}", verdict_text(&report));
    print!("{grid}");
    Ok(())
}

/// Renders the verdict lines: completeness always, validity only when the
/// puzzle is complete (nothing can be said about an incomplete one).
fn verdict_text(report: &ValidationReport) -> String {
    let verdict = report.verdict();
    let mut text = format!("Complete puzzle? {}\n", verdict.complete);
    if verdict.complete {
        text.push_str(&format!("Valid puzzle? {}\n", verdict.valid));
    }
    text
}
