//! Renju-Check: batch win checker for Renju positions.
//!
//! ## Usage
//!
//! - `renju-check check cases.txt` - Print a verdict for every test case
//! - `renju-check check -` - Read the batch from stdin
//! - `renju-check generate --cases 20 --seed 7` - Write a random batch

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use renju_check::constants::DEFAULT_CASES;
use renju_check::generate::{GenConfig, Generator};
use renju_check::report::{run_batch, ReportOptions};
use renju_check::testcase::{parse_batch, write_batch};

/// Renju-Check: find exact-five wins on 19x19 Renju boards
#[derive(Parser)]
#[command(name = "renju-check")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a test-case file and print one verdict per case
    Check {
        /// Test-case file, or `-` for stdin
        file: PathBuf,

        /// Print each board after its verdict
        #[arg(long)]
        show_board: bool,
    },
    /// Write a random batch of test cases to stdout
    Generate {
        /// Number of boards
        #[arg(long, default_value_t = DEFAULT_CASES)]
        cases: usize,

        /// RNG seed; random when omitted
        #[arg(long)]
        seed: Option<u64>,

        /// Random stones scattered on each board
        #[arg(long, default_value_t = GenConfig::default().stones)]
        stones: usize,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries only verdicts or generated cases.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::Check { file, show_board } => check(&file, show_board),
        Commands::Generate {
            cases,
            seed,
            stones,
        } => {
            generate(cases, seed, stones)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn read_input(file: &Path) -> Result<String> {
    if file.as_os_str() == "-" {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("failed to read test cases from stdin")?;
        return Ok(input);
    }
    fs::read_to_string(file).with_context(|| format!("failed to read {}", file.display()))
}

fn check(file: &Path, show_board: bool) -> Result<ExitCode> {
    let input = read_input(file)?;
    let batch = parse_batch(&input).with_context(|| format!("invalid batch {}", file.display()))?;

    let options = ReportOptions { show_board };
    let summary = run_batch(&batch, options, &mut io::stdout().lock(), &mut io::stderr())
        .context("failed to write verdicts")?;

    if summary.is_clean() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn generate(cases: usize, seed: Option<u64>, stones: usize) -> Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    info!(seed, cases, stones, "generating test cases");

    let config = GenConfig {
        stones,
        ..GenConfig::default()
    };
    let boards = Generator::new(seed, config).batch(cases);
    let mut out = io::stdout().lock();
    write!(out, "{}", write_batch(&boards)).context("failed to write test cases")?;
    out.flush().context("failed to write test cases")
}
