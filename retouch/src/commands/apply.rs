// retouch/src/commands/apply.rs
//! Apply command implementation: the in-place rewrite loop.

use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use log::{debug, info};
use std::io::{self, Read, Write};
use std::path::Path;

use retouch_core::{load_document, write_document, RegexEngine, RewriteEngine};

use crate::cli::ApplyCommand;
use crate::ui;

/// The main operation runner for `retouch apply`.
pub fn run(cmd: ApplyCommand, quiet: bool) -> Result<()> {
    info!("Starting apply operation.");

    let config = super::resolve_config(cmd.config.as_deref(), &cmd.enable, &cmd.disable)?;
    let engine = RegexEngine::new(config)?;

    if cmd.files.is_empty() {
        run_stdin_filter(&engine, &cmd, quiet)?;
    } else {
        for file in &cmd.files {
            process_file(&engine, file, &cmd, quiet)?;
        }
    }

    info!("Apply operation completed.");
    Ok(())
}

fn process_file(engine: &RegexEngine, path: &Path, cmd: &ApplyCommand, quiet: bool) -> Result<()> {
    let original = load_document(path)?;
    let (rewritten, report) = engine.apply(&original, &path.to_string_lossy())?;

    debug!(
        "Pass complete for {}. Original length: {}, rewritten length: {}",
        path.display(),
        original.len(),
        rewritten.len()
    );

    let stderr_supports_color = io::stderr().is_terminal();

    if cmd.diff {
        ui::diff_viewer::print_diff(&original, &rewritten, &mut io::stderr(), stderr_supports_color)?;
    }

    if cmd.dry_run {
        if !quiet {
            ui::info_msg(format!(
                "Dry run: {} would have {} replacement(s); nothing written.",
                path.display(),
                report.total()
            ));
        }
    } else if !report.is_noop() || cmd.force_write {
        write_document(path, &rewritten)?;
        if !quiet {
            ui::info_msg(format!(
                "Rewrote {} ({} replacement(s)).",
                path.display(),
                report.total()
            ));
        }
    } else if !quiet {
        ui::info_msg(format!("No changes for {}; write skipped.", path.display()));
    }

    if !cmd.no_summary && !quiet {
        ui::summary::print_summary(&report, &mut io::stderr(), stderr_supports_color)?;
    }

    Ok(())
}

/// With no FILE arguments, apply acts as a filter: stdin in, rewritten
/// content on stdout, diagnostics on stderr.
fn run_stdin_filter(engine: &RegexEngine, cmd: &ApplyCommand, quiet: bool) -> Result<()> {
    if cmd.force_write && !quiet {
        ui::warn_msg("Filter mode always writes to stdout; --force-write has no effect.");
    }

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let (rewritten, report) = engine.apply(&input, "stdin")?;

    let stderr_supports_color = io::stderr().is_terminal();

    if cmd.diff {
        ui::diff_viewer::print_diff(&input, &rewritten, &mut io::stderr(), stderr_supports_color)?;
    }

    if !cmd.dry_run {
        let stdout = io::stdout();
        let mut writer = stdout.lock();
        write!(writer, "{}", rewritten)?;
        writer.flush()?;
    }

    if !cmd.no_summary && !quiet {
        ui::summary::print_summary(&report, &mut io::stderr(), stderr_supports_color)?;
    }

    Ok(())
}
