// retouch/src/cli.rs
//! This file defines the command-line interface (CLI) for the retouch
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "retouch",
    author = "Retouch Maintainers",
    version = env!("CARGO_PKG_VERSION"),
    about = "Rewrite files in place with an ordered rule table",
    long_about = "Retouch is a command-line utility for applying an ordered table of pattern/replacement rules to text files. It loads a file, applies every rule in sequence while counting matches, prints a per-rule summary, and writes the file back atomically - only when something actually changed.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Disable informational messages
    #[arg(long, short = 'q', help = "Suppress all informational and debug messages.")]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG for 'retouch' crate to DEBUG)
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Explicitly disable debug logging, even if RUST_LOG is set to DEBUG
    #[arg(long = "disable-debug", help = "Disable debug logging, overriding RUST_LOG.")]
    pub disable_debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `retouch` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Applies the rule set to files in place, or filters stdin to stdout.
    #[command(about = "Applies the rule set to files in place, or filters stdin to stdout.")]
    Apply(ApplyCommand),

    /// Counts rule matches in an input without rewriting anything.
    #[command(about = "Counts rule matches in an input without rewriting anything.")]
    Scan(ScanCommand),

    /// Lists the active rule set.
    #[command(about = "Lists the active rule set.")]
    Rules(RulesCommand),
}

/// Arguments for the `apply` command.
#[derive(Parser, Debug)]
pub struct ApplyCommand {
    /// Files to rewrite in place. With no FILE, reads stdin and writes the
    /// rewritten content to stdout.
    #[arg(value_name = "FILE", help = "Files to rewrite in place (reads stdin and writes stdout when omitted).")]
    pub files: Vec<PathBuf>,

    /// Path to a custom rewrite rule file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "RETOUCH_RULES", help = "Path to a custom rewrite rule file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable only these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable only these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Write the file even when no rule matched.
    #[arg(long = "force-write", help = "Write the file even when no rule matched.")]
    pub force_write: bool,

    /// Report what would change without writing anything.
    #[arg(long = "dry-run", conflicts_with = "force_write", help = "Report what would change without writing anything.")]
    pub dry_run: bool,

    /// Show a unified diff to highlight the changes made.
    #[arg(long, short = 'D', help = "Show a unified diff to highlight the changes made.")]
    pub diff: bool,

    /// Suppress the rewrite summary.
    #[arg(long = "no-summary", help = "Suppress the rewrite summary.")]
    pub no_summary: bool,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Path to an input file (reads from stdin if not provided).
    #[arg(value_name = "FILE", help = "Read input from a specified file instead of stdin.")]
    pub input_file: Option<PathBuf>,

    /// Path to a custom rewrite rule file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "RETOUCH_RULES", help = "Path to a custom rewrite rule file (YAML).")]
    pub config: Option<PathBuf>,

    /// Explicitly enable only these rule names (comma-separated).
    #[arg(long, short = 'e', value_delimiter = ',', help = "Explicitly enable only these rule names (comma-separated).")]
    pub enable: Vec<String>,

    /// Explicitly disable these rule names (comma-separated).
    #[arg(long, short = 'x', value_delimiter = ',', help = "Explicitly disable these rule names (comma-separated).")]
    pub disable: Vec<String>,

    /// Exit with a non-zero code if the total number of matches exceeds this threshold.
    #[arg(long = "fail-over-threshold", value_name = "N", help = "Exit with a non-zero code if the total number of matches exceeds this threshold.")]
    pub fail_over_threshold: Option<usize>,

    /// Export scan summary to a JSON file.
    #[arg(long = "json-file", value_name = "FILE", help = "Export the match statistics to a JSON file.")]
    pub json_file: Option<PathBuf>,

    /// Print scan summary as JSON to stdout (conflicts with --json-file).
    #[arg(long = "json-stdout", conflicts_with = "json_file", help = "Export the match statistics to stdout as JSON.")]
    pub json_stdout: bool,
}

/// Arguments for the `rules` command.
#[derive(Parser, Debug)]
pub struct RulesCommand {
    /// Path to a custom rewrite rule file (YAML).
    #[arg(long = "config", value_name = "FILE", env = "RETOUCH_RULES", help = "Path to a custom rewrite rule file (YAML).")]
    pub config: Option<PathBuf>,
}
