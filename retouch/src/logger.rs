// retouch/src/logger.rs
//! Logging bootstrap for the retouch CLI.
//!
//! Honors `RUST_LOG` by default; an explicit level override (from `--quiet`
//! or `--debug`) wins. Safe to call more than once, which integration tests
//! rely on.

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_logger(level_override: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder =
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
        if let Some(level) = level_override {
            builder.filter_level(level);
        }
        builder.format_timestamp(None);
        let _ = builder.try_init();
    });
}
