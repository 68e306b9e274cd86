// retouch-core/src/engines/mod.rs
//! This module contains rewrite engine implementations.
//!
//! Each engine is a separate file within this directory and implements the
//! `RewriteEngine` trait. To add a new engine, create a new file, define its
//! logic, and declare it here using `pub mod <engine_name>;`.

pub mod regex_engine;
