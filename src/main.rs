//! Crossword Helper - CLI
//!
//! `crossword_helper [A|P] [dictionary] [letters]`
//!
//! Lists dictionary words that are anagrams of the letters (`A`) or that
//! match a pattern with `_` placeholders (`P`).

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use crossword_helper::{
    commands::{SearchConfig, run_search},
    invocation::Invocation,
    matcher::Scan,
    output::{print_banner, print_diagnostic, print_search_result},
};
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(
    name = "crossword_helper",
    about = "Find anagrams and fixed-letter pattern matches in a word list",
    version,
    author,
    after_help = "Examples:\n  crossword_helper A words.txt listen\n  crossword_helper P words.txt c_t"
)]
struct Cli {
    /// MODE (A = anagram, P = pattern), DICTIONARY file and LETTERS (`_` = any letter)
    #[arg(
        value_name = "MODE DICTIONARY LETTERS",
        allow_hyphen_values = true,
        trailing_var_arg = true
    )]
    args: Vec<String>,

    /// Show debug logging on stderr (overridden by CROSSWORD_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Scan the dictionary on all cores
    #[arg(short = 'j', long)]
    parallel: bool,

    /// Don't print the banner
    #[arg(short, long)]
    quiet: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env("CROSSWORD_LOG").unwrap_or_else(|_| EnvFilter::new(default));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if !cli.quiet {
        print_banner();
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("search aborted: {e:#}");
            print_diagnostic(&e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let invocation = Invocation::from_args(&cli.args)?;

    let scan = if cli.parallel {
        Scan::Parallel
    } else {
        Scan::Sequential
    };
    let config = SearchConfig::new(&invocation).with_scan(scan);

    let result = run_search(&config)?;
    print_search_result(&result);
    Ok(())
}
