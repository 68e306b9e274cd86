// retouch/src/lib.rs
//! # Retouch CLI Application
//!
//! This crate provides the command-line interface for the Retouch rewrite
//! engine: argument parsing, command runners, logging bootstrap, and the
//! summary/diff rendering that wraps `retouch-core`.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
