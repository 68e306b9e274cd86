//! errors.rs - Custom error types for the retouch-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR Apache-2.0

use std::path::PathBuf;
use thiserror::Error;

/// This enum represents all possible error types in the `retouch-core` library.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions. This prevents them from
/// matching all variants exhaustively, thus avoiding breaking changes.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum RewriteError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Permission denied while accessing {0}: {1}")]
    PermissionDenied(PathBuf, #[source] std::io::Error),

    #[error("File {0} is not valid UTF-8 text")]
    Decode(PathBuf),

    #[error("Failed to compile rewrite rule '{0}': {1}")]
    RuleCompilation(String, regex::Error),

    #[error("Rule '{0}': pattern length ({1}) exceeds maximum allowed ({2})")]
    PatternLengthExceeded(String, usize, usize),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
