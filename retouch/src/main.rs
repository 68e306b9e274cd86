// retouch/src/main.rs
//! Retouch entry point.
//!
//! Parses the CLI, bootstraps logging, and dispatches to the command runners.

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use retouch::cli::{Cli, Commands};
use retouch::commands;
use retouch::logger;

fn main() -> Result<()> {
    let args = Cli::parse();

    let level = if args.quiet {
        Some(LevelFilter::Off)
    } else if args.debug {
        Some(LevelFilter::Debug)
    } else if args.disable_debug {
        Some(LevelFilter::Warn)
    } else {
        None
    };
    logger::init_logger(level);

    match args.command {
        Commands::Apply(cmd) => commands::apply::run(cmd, args.quiet),
        Commands::Scan(cmd) => commands::scan::run(cmd, args.quiet),
        Commands::Rules(cmd) => commands::rules::run(cmd),
    }
}
