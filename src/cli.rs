//! Command-line interface definition for credlist-normalizer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Normalizer for large URL/credential dumps
///
/// Strips junk records and rewrites the survivors into canonical
/// colon-delimited form, then reports how much space the rewrite saved.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "credlist-normalizer",
    author = "m0h1nd4",
    version,
    about = "Normalize URL/credential dumps into colon-delimited records",
    long_about = r#"
Normalize large line-oriented URL/credential dumps.

Each input line is either discarded (android:// records, [NOT_SAVED] /
:UNKNOWN: markers, blacklisted domains, malformed records) or rewritten into
canonical colon-delimited form with the URL path stripped.

EXAMPLES:
    # Rewrite everything under paths.source_dir (default ./source/)
    credlist-normalizer run

    # Same, with an explicit config file
    credlist-normalizer -c /etc/normalizer.toml run

    # Recompute before/after sizes from disk, without reprocessing
    credlist-normalizer report
"#
)]
pub struct Args {
    /// Config file path
    #[arg(short, long, value_name = "FILE", default_value = "normalizer.toml")]
    pub config: PathBuf,

    /// Quiet mode - minimal output
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Verbose mode - detailed logging (per-line skip reasons)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rewrite every .txt file from the source into the destination directory
    Run,
    /// Print a before/after size table from filesystem metadata only
    Report,
}

impl Args {
    /// `run` is the default when no subcommand is given.
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Run)
    }
}
