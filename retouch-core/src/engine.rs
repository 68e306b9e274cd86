// retouch-core/src/engine.rs
//! Defines the core RewriteEngine trait.
//!
//! The `RewriteEngine` trait provides a pluggable interface for rewrite
//! strategies. This module defines the contract that all such engines must
//! adhere to, ensuring a consistent and interchangeable core API for
//! `retouch`.
//!
//! License: MIT OR Apache-2.0

use anyhow::Result;

use crate::config::RewriteConfig;
use crate::compiler::CompiledRules;
use crate::report::RewriteReport;

/// A trait that defines the core functionality of a rewrite engine.
///
/// This trait decouples the high-level application logic from the specific
/// implementation of a rewrite strategy, allowing for different engines to
/// be used interchangeably.
pub trait RewriteEngine: Send + Sync {
    /// Performs one full rewrite pass over the provided content.
    ///
    /// Rules are applied strictly in rule-set order; each rule scans the
    /// current content, so later rules see the effects of earlier ones.
    /// Returns the rewritten content and a report of per-rule match counts.
    /// This method performs no file I/O.
    ///
    /// # Arguments
    /// * `content` - The input string to rewrite.
    /// * `source_id` - The name or identifier of the source being processed.
    fn apply(&self, content: &str, source_id: &str) -> Result<(String, RewriteReport)>;

    /// Counts matches for the provided content without returning rewritten
    /// output.
    ///
    /// Counts use the same sequential application semantics as [`apply`],
    /// so a scan always predicts exactly what an apply would do.
    ///
    /// [`apply`]: RewriteEngine::apply
    fn scan(&self, content: &str, source_id: &str) -> Result<RewriteReport>;

    /// Returns a reference to the `CompiledRules` used by the engine.
    fn compiled_rules(&self) -> &CompiledRules;

    /// Returns a reference to the engine's rule-set configuration.
    fn config(&self) -> &RewriteConfig;
}
