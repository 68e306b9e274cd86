// retouch-core/src/lib.rs
//! # Retouch Core Library
//!
//! `retouch-core` provides the fundamental, platform-independent logic for
//! rule-driven text rewriting. It defines the core data structures for
//! rewrite rules, provides mechanisms for compiling these rules, and
//! implements a pluggable `RewriteEngine` trait for applying them.
//!
//! The engine itself is pure and stateless: it transforms an in-memory
//! document according to an ordered rule set and reports what it did.
//! The only filesystem touchpoints are the `document` module's Loader and
//! Writer, which read the target as strict UTF-8 and write it back
//! atomically.
//!
//! ## Modules
//!
//! * `config`: Defines `RewriteRule`s and `RewriteConfig` for specifying the ordered rule set.
//! * `compiler`: Compiles rules into regex-backed `CompiledRules`, rejecting malformed patterns up front.
//! * `engine`: Defines the `RewriteEngine` trait, enabling a modular design.
//! * `engines`: Contains concrete implementations of the `RewriteEngine` trait.
//! * `report`: Per-rule tallies, summary rendering, and JSON export.
//! * `document`: Loading and atomic in-place writing of target files.
//! * `headless`: Convenience wrappers for a full one-shot pass.
//! * `errors`: The structured `RewriteError` taxonomy.
//!
//! ## Usage Example
//!
//! ```rust
//! use retouch_core::{rewrite_string, RewriteConfig, RewriteRule};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = RewriteConfig {
//!         rules: vec![
//!             RewriteRule {
//!                 name: "hex_bright_red".to_string(),
//!                 pattern: "#CC0000".to_string(),
//!                 pattern_type: "literal".to_string(),
//!                 replace_with: "#8B0000".to_string(),
//!                 ..Default::default()
//!             },
//!         ],
//!     };
//!
//!     let input = "border: 1px solid #CC0000;";
//!     let (rewritten, report) = rewrite_string(config, input, "inline.css")?;
//!
//!     assert_eq!(rewritten, "border: 1px solid #8B0000;");
//!     assert_eq!(report.total(), 1);
//!     println!("{}", report.render());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return `anyhow::Error` at the API surface, with the
//! structured `RewriteError` taxonomy underneath for programmatic handling
//! (`NotFound`, `Decode`, `PermissionDenied`, `RuleCompilation`, ...).
//! Pattern problems are detected when rules are validated or compiled,
//! never mid-pass.
//!
//! ## Design Principles
//!
//! * **Ordered, single-pass application:** rules run strictly in rule-set
//!   order; each rule sees the output of the previous one. No iteration,
//!   no fixpoint.
//! * **Stateless:** nothing persists across invocations; there is no cache
//!   or shared state between runs.
//! * **Testable:** the Applier is a pure function over strings, so the
//!   whole rewrite logic unit-tests without touching disk.
//!
//! ---
//! License: MIT OR Apache-2.0

// All modules must be declared before they can be used.
pub mod compiler;
pub mod config;
pub mod document;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod report;

/// Re-exports the public configuration types and functions for managing
/// rewrite rules.
pub use config::{merge_rules, RewriteConfig, RewriteRule, MAX_PATTERN_LENGTH};

/// Re-exports the custom error type for clear error reporting.
pub use errors::RewriteError;

/// Re-exports types related to the core rewrite engine trait.
pub use engine::RewriteEngine;

/// Re-exports the concrete `RegexEngine` implementation.
pub use engines::regex_engine::RegexEngine;

/// Re-exports the reporting types consumed by callers.
pub use report::{ReportExport, RewriteReport, RuleTally};

/// Re-exports the document Loader and Writer.
pub use document::{load_document, write_document};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{rewrite_file, rewrite_string, RewriteOptions, WriteOutcome};

/// Re-exports key types from the compiler module for advanced usage.
pub use compiler::{compile_rules, CompiledRule, CompiledRules};
