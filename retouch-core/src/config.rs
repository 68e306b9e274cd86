//! Configuration management for `retouch-core`.
//!
//! This module defines the core data structures for rewrite rules and rule
//! sets. It handles serialization/deserialization of YAML configurations and
//! provides utilities for loading, merging, and validating these configs.
//!
//! Rule order is semantic: rules are applied sequentially, each against the
//! current (possibly already-modified) content, so every operation here
//! preserves the order in which rules were declared.
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use log::{debug, info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Maximum allowed length for a rule pattern string.
pub const MAX_PATTERN_LENGTH: usize = 500;

/// Scans replacement strings for `$N` capture-group references.
static CAPTURE_GROUP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$(\d+)").unwrap());

/// Represents a single rewrite rule: one pattern/replacement pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct RewriteRule {
    /// Unique identifier for the rule (e.g., "hex_bright_red").
    pub name: String,
    /// Human-readable description of what the rule rewrites.
    pub description: Option<String>,
    /// The pattern string. Interpreted according to `pattern_type`.
    pub pattern: String,
    /// The type of pattern: "regex" or "literal".
    pub pattern_type: String,
    /// The string to replace matches with. For regex rules, `$N` refers to
    /// capture group N; literal rules insert this text verbatim.
    pub replace_with: String,
    /// If true, the pattern matches case-insensitively.
    pub case_insensitive: bool,
    /// If true, enables multiline mode for the regex engine.
    pub multiline: bool,
    /// If true, the dot character `.` in regex will match newlines.
    pub dot_matches_new_line: bool,
    /// Explicit override for enabling/disabling the rule.
    pub enabled: Option<bool>,
}

impl Default for RewriteRule {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: None,
            pattern: String::new(),
            pattern_type: "regex".to_string(),
            replace_with: String::new(),
            case_insensitive: false,
            multiline: false,
            dot_matches_new_line: false,
            enabled: None,
        }
    }
}

impl RewriteRule {
    /// Returns true when the pattern is a literal substring rather than a regex.
    pub fn is_literal(&self) -> bool {
        self.pattern_type == "literal"
    }
}

/// Represents an ordered rule set: the top-level configuration for Retouch.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct RewriteConfig {
    /// The ordered list of rewrite rules.
    pub rules: Vec<RewriteRule>,
}

impl RewriteConfig {
    /// Loads rewrite rules from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom rules from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: RewriteConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        validate_rules(&config.rules)?;
        info!("Loaded {} rules from file {}.", config.rules.len(), path.display());

        Ok(config)
    }

    /// Loads the default rewrite rules from the embedded configuration.
    pub fn load_default_rules() -> Result<Self> {
        debug!("Loading default rules from embedded string...");
        let default_yaml = include_str!("../config/default_rules.yaml");
        let config: RewriteConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default rules")?;

        debug!("Loaded {} default rules.", config.rules.len());
        Ok(config)
    }

    /// Filters active rules based on enable/disable lists provided via CLI.
    ///
    /// A non-empty `enable_rules` list restricts the set to exactly those
    /// names; `disable_rules` always removes. Rules marked `enabled: false`
    /// in the config stay out unless explicitly enabled.
    pub fn set_active_rules(&mut self, enable_rules: &[String], disable_rules: &[String]) {
        let enable_set: HashSet<&str> = enable_rules.iter().map(String::as_str).collect();
        let disable_set: HashSet<&str> = disable_rules.iter().map(String::as_str).collect();

        debug!("Initial rules count before filtering: {}", self.rules.len());

        let all_rule_names: HashSet<&str> = self.rules.iter().map(|r| r.name.as_str()).collect();

        for rule_name in enable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `enable_rules` list does not exist.", rule_name);
        }

        for rule_name in disable_set.difference(&all_rule_names) {
            warn!("Rule '{}' in `disable_rules` list does not exist.", rule_name);
        }

        self.rules.retain(|rule| {
            let rule_name_str = rule.name.as_str();
            if disable_set.contains(rule_name_str) {
                return false;
            }
            if !enable_set.is_empty() && !enable_set.contains(rule_name_str) {
                return false;
            }
            !matches!(rule.enabled, Some(false)) || enable_set.contains(rule_name_str)
        });

        debug!("Final active rules count after filtering: {}", self.rules.len());
    }
}

/// Merges user-defined rules with defaults.
///
/// User rules override defaults with the same name in place; new user rules
/// are appended after the defaults, in the order the user declared them.
pub fn merge_rules(
    default_config: RewriteConfig,
    user_config: Option<RewriteConfig>,
) -> RewriteConfig {
    debug!("merge_rules called. Initial default rules count: {}", default_config.rules.len());

    let mut final_rules = default_config.rules;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user rules.", user_cfg.rules.len());
        let mut index_by_name: HashMap<String, usize> = final_rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (rule.name.clone(), i))
            .collect();

        for user_rule in user_cfg.rules {
            match index_by_name.get(&user_rule.name).copied() {
                Some(i) => final_rules[i] = user_rule,
                None => {
                    index_by_name.insert(user_rule.name.clone(), final_rules.len());
                    final_rules.push(user_rule);
                }
            }
        }
    }

    debug!("Final total rules after merge: {}", final_rules.len());

    RewriteConfig { rules: final_rules }
}

/// Validates rule integrity (names, pattern types, regex compilation,
/// capture-group references).
fn validate_rules(rules: &[RewriteRule]) -> Result<()> {
    let mut rule_names = HashSet::new();
    let mut errors = Vec::new();

    for rule in rules {
        if rule.name.is_empty() {
            errors.push("A rule has an empty `name` field.".to_string());
        } else if !rule_names.insert(rule.name.clone()) {
            errors.push(format!("Duplicate rule name found: '{}'.", rule.name));
        }

        if rule.pattern.is_empty() {
            errors.push(format!("Rule '{}' has an empty `pattern` field.", rule.name));
            continue;
        }

        match rule.pattern_type.as_str() {
            "literal" => {}
            "regex" => {
                if let Err(e) = Regex::new(&rule.pattern) {
                    errors.push(format!("Rule '{}' has an invalid regex pattern: {}", rule.name, e));
                    continue;
                }

                let mut group_count = 0;
                let mut is_escaped = false;
                for c in rule.pattern.chars() {
                    match c {
                        '\\' => is_escaped = !is_escaped,
                        '(' if !is_escaped => group_count += 1,
                        _ => is_escaped = false,
                    }
                }

                for cap in CAPTURE_GROUP_RE.captures_iter(&rule.replace_with) {
                    if let Some(group_num_str) = cap.get(1) {
                        if let Ok(group_num) = group_num_str.as_str().parse::<usize>() {
                            if group_num > group_count {
                                errors.push(format!(
                                    "Rule '{}': replacement references non-existent capture group '${}'.",
                                    rule.name, group_num
                                ));
                            }
                        }
                    }
                }
            }
            other => {
                errors.push(format!(
                    "Rule '{}' has an unknown `pattern_type`: '{}'. Expected 'regex' or 'literal'.",
                    rule.name, other
                ));
            }
        }
    }

    if !errors.is_empty() {
        let full_error_message = format!("Rule validation failed:\n{}", errors.join("\n"));
        Err(anyhow!(full_error_message))
    } else {
        Ok(())
    }
}
