// retouch-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use of the core
//! engine. These are the primary entry points for callers that just want
//! a full Loader -> Applier -> Writer pass without assembling the pieces.

use anyhow::Result;
use std::path::Path;

use crate::config::RewriteConfig;
use crate::document;
use crate::engine::RewriteEngine;
use crate::engines::regex_engine::RegexEngine;
use crate::report::RewriteReport;

/// Options controlling the write side of a file pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewriteOptions {
    /// Skip the write entirely when no rule matched. Avoids needless
    /// filesystem writes and touch-time churn on no-op runs.
    pub write_only_if_changed: bool,
}

impl Default for RewriteOptions {
    fn default() -> Self {
        Self { write_only_if_changed: true }
    }
}

/// Whether a file pass ended in a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The transformed content was written back to the target.
    Written,
    /// Nothing matched and `write_only_if_changed` was set; the target was
    /// left untouched.
    Skipped,
}

/// Applies `config` to `content` in one call, compiling the rules and
/// running a full pass. Pure: no file I/O.
pub fn rewrite_string(
    config: RewriteConfig,
    content: &str,
    source_id: &str,
) -> Result<(String, RewriteReport)> {
    let engine = RegexEngine::new(config)?;
    engine.apply(content, source_id)
}

/// Runs a full file pass: load `path`, apply `config`, and write the result
/// back in place according to `options`.
pub fn rewrite_file(
    config: RewriteConfig,
    path: &Path,
    options: &RewriteOptions,
) -> Result<(RewriteReport, WriteOutcome)> {
    let content = document::load_document(path)?;
    let engine = RegexEngine::new(config)?;
    let (rewritten, report) = engine.apply(&content, &path.to_string_lossy())?;

    if options.write_only_if_changed && report.is_noop() {
        return Ok((report, WriteOutcome::Skipped));
    }

    document::write_document(path, &rewritten)?;
    Ok((report, WriteOutcome::Written))
}
