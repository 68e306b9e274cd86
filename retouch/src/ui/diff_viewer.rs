// retouch/src/ui/diff_viewer.rs
//! Unified diff rendering for rewrites.
//!
//! Highlights exactly what a pass removed (red) and what it added (green).

use diffy::{create_patch, Line as DiffLine};
use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes a unified diff of the rewrite to `writer`.
pub fn print_diff<W: Write>(
    original: &str,
    rewritten: &str,
    writer: &mut W,
    use_color: bool,
) -> io::Result<()> {
    let patch = create_patch(original, rewritten);

    if use_color {
        writeln!(writer, "{}", "--- Diff Analysis ---".yellow().bold())?;
    } else {
        writeln!(writer, "--- Diff Analysis ---")?;
    }

    let mut changed = false;
    for hunk in patch.hunks() {
        for line_change in hunk.lines() {
            match line_change {
                DiffLine::Delete(s) => {
                    changed = true;
                    let s = s.trim_end_matches('\n');
                    if use_color {
                        writeln!(writer, "{}", format!("- {s}").red())?;
                    } else {
                        writeln!(writer, "- {s}")?;
                    }
                }
                DiffLine::Insert(s) => {
                    changed = true;
                    let s = s.trim_end_matches('\n');
                    if use_color {
                        writeln!(writer, "{}", format!("+ {s}").green())?;
                    } else {
                        writeln!(writer, "+ {s}")?;
                    }
                }
                DiffLine::Context(s) => {
                    writeln!(writer, "  {}", s.trim_end_matches('\n'))?;
                }
            }
        }
    }

    if !changed {
        writeln!(writer, "No changes detected.")?;
    }

    Ok(())
}
