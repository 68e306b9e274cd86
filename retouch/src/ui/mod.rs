// retouch/src/ui/mod.rs
//! Terminal rendering helpers for the retouch CLI.
//!
//! All diagnostics go to stderr so the stdin->stdout filter mode stays
//! clean; color is applied only when stderr is attached to a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io;

pub mod diff_viewer;
pub mod summary;

/// Helper for printing info messages to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().cyan());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}

/// Helper for printing warning messages to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    if io::stderr().is_terminal() {
        eprintln!("{}", msg.as_ref().yellow());
    } else {
        eprintln!("{}", msg.as_ref());
    }
}
