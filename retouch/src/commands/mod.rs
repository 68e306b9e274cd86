// retouch/src/commands/mod.rs
//! Command runners plus the shared rule-set resolution logic.

use anyhow::{Context, Result};
use log::debug;
use std::path::{Path, PathBuf};

use retouch_core::RewriteConfig;

pub mod apply;
pub mod rules;
pub mod scan;

/// The per-user rules file consulted when `--config` is not given.
pub fn user_rules_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("retouch").join("rules.yaml"))
}

/// Resolves the active rule set: explicit `--config` path, then the user's
/// config directory, then the embedded defaults. Enable/disable filtering is
/// applied last.
pub fn resolve_config(
    config_path: Option<&Path>,
    enable: &[String],
    disable: &[String],
) -> Result<RewriteConfig> {
    let mut config = match config_path {
        Some(path) => RewriteConfig::load_from_file(path)
            .with_context(|| format!("Failed to load rewrite rules from {}", path.display()))?,
        None => match user_rules_path() {
            Some(path) if path.exists() => {
                debug!("Using user rules file at {}.", path.display());
                RewriteConfig::load_from_file(&path).with_context(|| {
                    format!("Failed to load rewrite rules from {}", path.display())
                })?
            }
            _ => RewriteConfig::load_default_rules()?,
        },
    };

    config.set_active_rules(enable, disable);
    Ok(config)
}
