// retouch/src/commands/scan.rs
//! Scan command implementation: count matches without rewriting anything.

use anyhow::{bail, Context, Result};
use log::info;
use std::io::{self, Read};

use retouch_core::{load_document, RegexEngine, ReportExport, RewriteEngine};

use crate::cli::ScanCommand;
use crate::ui;

pub fn run(cmd: ScanCommand, quiet: bool) -> Result<()> {
    info!("Starting scan operation.");

    let config = super::resolve_config(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
    let engine = RegexEngine::new(config)?;

    let (content, source_id) = match &cmd.input_file {
        Some(path) => (load_document(path)?, path.display().to_string()),
        None => {
            let mut input = String::new();
            io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            (input, "stdin".to_string())
        }
    };

    let report = engine.scan(&content, &source_id)?;

    if cmd.json_stdout {
        let export = ReportExport::from_report(&report);
        println!("{}", export.to_json()?);
    } else if let Some(path) = &cmd.json_file {
        let export = ReportExport::from_report(&report);
        std::fs::write(path, export.to_json()?)
            .with_context(|| format!("Failed to write JSON report to {}", path.display()))?;
        if !quiet {
            ui::info_msg(format!("Match statistics written to {}.", path.display()));
        }
    }

    if !quiet && !cmd.json_stdout {
        if report.is_noop() {
            eprintln!("No rewrite matches found.");
        } else {
            ui::summary::print_stats_table(&report, &mut io::stderr())?;
        }
    }

    if let Some(threshold) = cmd.fail_over_threshold {
        if report.total() > threshold {
            bail!(
                "FAIL-OVER triggered: Found {} rewrite matches, which exceeds the specified threshold of {}.",
                report.total(),
                threshold
            );
        }
    }

    Ok(())
}
