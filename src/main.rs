//! SLR(1) parser-table constructor and shift-reduce parse driver.
//!
//! Builds the canonical LR(0) collection for a `.yalp` grammar, projects
//! it into SLR(1) ACTION/GOTO tables, and drives token streams through the
//! resulting shift-reduce stack machine.
//!
//! # References
//! Aho, Alfred V. et al. "Compilers: Principles, Techniques, and Tools"
//! (2nd Edition). Addison-Wesley, 2006.

use clap::Parser as ClapParser;
use slrgen::cli::{self, RunConfig};
use slrgen::table::ConflictPolicy;
use std::path::PathBuf;
use std::process;

/// Command-line arguments for the SLR(1) toolkit.
#[derive(ClapParser, Debug)]
#[command(name = "slrgen", about = "SLR(1) parser-table constructor and parse driver")]
struct Cli {
    /// Path to a `.yalp` grammar file.
    grammar: PathBuf,

    /// Path to a token file to parse (see README for the line format).
    #[arg(long = "tokens")]
    tokens: Option<PathBuf>,

    /// Fail immediately on a shift/reduce, reduce/reduce, or shift/shift
    /// conflict instead of resolving and warning.
    #[arg(long)]
    fail_on_conflict: bool,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
        .init();

    let config = RunConfig {
        grammar_path: cli.grammar,
        token_path: cli.tokens,
        conflict_policy: if cli.fail_on_conflict {
            ConflictPolicy::FailOnConflict
        } else {
            ConflictPolicy::ResolveAndWarn
        },
    };

    if let Err(e) = cli::run(config) {
        tracing::error!(error = %e, "slrgen failed");
        process::exit(1);
    }
}
