// retouch-core/src/engines/regex_engine.rs
//! A `RewriteEngine` implementation that applies an ordered rule set with
//! the `regex` crate.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::debug;
use regex::Captures;

use crate::compiler::{compile_rules, CompiledRule, CompiledRules};
use crate::config::RewriteConfig;
use crate::engine::RewriteEngine;
use crate::report::RewriteReport;

#[derive(Debug)]
pub struct RegexEngine {
    compiled_rules: CompiledRules,
    config: RewriteConfig,
}

impl RegexEngine {
    pub fn new(config: RewriteConfig) -> Result<Self> {
        let compiled_rules = compile_rules(config.rules.clone())
            .context("Failed to compile rewrite rules for RegexEngine")?;

        Ok(Self { compiled_rules, config })
    }

    /// Applies one rule to `content`, returning the match count and the
    /// rewritten content. Returns `None` for the content when nothing
    /// matched, so the caller can keep the existing buffer.
    ///
    /// Matching is the regex engine's standard non-overlapping left-to-right
    /// scan; the count is taken before replacement.
    fn apply_rule(rule: &CompiledRule, content: &str) -> (usize, Option<String>) {
        let mut count = 0usize;
        let rewritten = rule.regex.replace_all(content, |caps: &Captures| {
            count += 1;
            if rule.literal {
                rule.replace_with.clone()
            } else {
                let mut expanded = String::new();
                caps.expand(&rule.replace_with, &mut expanded);
                expanded
            }
        });

        if count == 0 {
            (0, None)
        } else {
            (count, Some(rewritten.into_owned()))
        }
    }
}

impl RewriteEngine for RegexEngine {
    fn apply(&self, content: &str, source_id: &str) -> Result<(String, RewriteReport)> {
        let mut current = content.to_string();
        let mut report = RewriteReport::new(source_id);

        for rule in &self.compiled_rules.rules {
            let (count, rewritten) = Self::apply_rule(rule, &current);
            if let Some(new_content) = rewritten {
                current = new_content;
            }
            debug!(
                "Rule '{}' matched {} time(s) in '{}'.",
                rule.name, count, source_id
            );
            report.record(&rule.name, rule.description.clone(), count);
        }

        Ok((current, report))
    }

    fn scan(&self, content: &str, source_id: &str) -> Result<RewriteReport> {
        let (_, report) = self.apply(content, source_id)?;
        Ok(report)
    }

    fn compiled_rules(&self) -> &CompiledRules {
        &self.compiled_rules
    }

    fn config(&self) -> &RewriteConfig {
        &self.config
    }
}
