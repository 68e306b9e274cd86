// retouch/src/ui/summary.rs
//! Rendering of rewrite reports: the plain per-rule summary printed after
//! an apply, and the statistics table printed by `scan`.

use comfy_table::Table;
use owo_colors::OwoColorize;
use std::io::{self, Write};

use retouch_core::RewriteReport;

/// Prints the per-rule summary for one pass, in rule-set order.
pub fn print_summary<W: Write>(
    report: &RewriteReport,
    writer: &mut W,
    use_color: bool,
) -> io::Result<()> {
    if report.is_noop() {
        writeln!(writer, "No rewrite matches found.")?;
        return Ok(());
    }

    if use_color {
        writeln!(writer, "{}", "Rewrite Summary".bold())?;
    } else {
        writeln!(writer, "Rewrite Summary")?;
    }
    write!(writer, "{}", report.render())?;
    Ok(())
}

/// Prints the `scan` statistics table.
pub fn print_stats_table<W: Write>(report: &RewriteReport, writer: &mut W) -> io::Result<()> {
    writeln!(writer, "Rewrite Statistics Summary ({})", report.source_id)?;

    let mut table = Table::new();
    table.set_header(vec!["Rule", "Description", "Matches"]);
    for tally in &report.tallies {
        table.add_row(vec![
            tally.rule_name.clone(),
            tally.description.clone().unwrap_or_default(),
            tally.occurrences.to_string(),
        ]);
    }
    table.add_row(vec![
        "TOTAL".to_string(),
        String::new(),
        report.total().to_string(),
    ]);

    writeln!(writer, "{table}")?;
    Ok(())
}
