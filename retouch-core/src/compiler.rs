//! compiler.rs - Compiles rewrite rules into ready-to-apply form.
//!
//! This module converts a validated list of `RewriteRule`s into
//! `CompiledRules`, with every pattern built into a `regex::Regex` so that
//! malformed patterns are rejected here, at construction time, and never
//! surface mid-pass.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use regex::RegexBuilder;

use crate::config::{RewriteRule, MAX_PATTERN_LENGTH};
use crate::errors::RewriteError;

/// Represents a single compiled rewrite rule.
///
/// This struct holds a compiled regular expression along with its associated
/// replacement text and metadata, ready for efficient application to content.
#[derive(Debug)]
pub struct CompiledRule {
    /// The compiled regular expression used for matching.
    pub regex: regex::Regex,
    /// The string to replace matches of this rule's pattern with.
    pub replace_with: String,
    /// The unique name of the rewrite rule.
    pub name: String,
    /// Human-readable description carried through to reporting.
    pub description: Option<String>,
    /// True when the source pattern was a literal substring; literal rules
    /// insert `replace_with` verbatim, without `$N` expansion.
    pub literal: bool,
}

/// Represents the full ordered collection of compiled rules for one pass.
#[derive(Debug)]
pub struct CompiledRules {
    /// A vector of `CompiledRule` instances, in rule-set order.
    pub rules: Vec<CompiledRule>,
}

/// Compiles a list of `RewriteRule`s into `CompiledRules` for efficient matching.
///
/// All compilation failures are gathered and reported together so a broken
/// config surfaces every problem in one run.
pub fn compile_rules(rules_to_compile: Vec<RewriteRule>) -> Result<CompiledRules, RewriteError> {
    debug!("Starting compilation of {} rules.", rules_to_compile.len());

    let mut compiled_rules = Vec::new();
    let mut compilation_errors = Vec::new();

    for rule in rules_to_compile {
        debug!(
            "Attempting to compile rule: '{}' with pattern '{:?}'",
            &rule.name, &rule.pattern
        );

        if rule.pattern.len() > MAX_PATTERN_LENGTH {
            compilation_errors.push(RewriteError::PatternLengthExceeded(
                rule.name,
                rule.pattern.len(),
                MAX_PATTERN_LENGTH,
            ));
            continue;
        }

        let literal = rule.is_literal();
        let pattern_source = if literal {
            regex::escape(&rule.pattern)
        } else {
            rule.pattern.clone()
        };

        let regex_result = RegexBuilder::new(&pattern_source)
            .case_insensitive(rule.case_insensitive)
            .multi_line(rule.multiline)
            .dot_matches_new_line(rule.dot_matches_new_line)
            .size_limit(10 * (1 << 20)) // 10 MB limit for compiled regex
            .build();

        match regex_result {
            Ok(regex) => {
                debug!(
                    target: "retouch_core::compiler",
                    "Rule '{}' compiled successfully.",
                    &rule.name
                );
                compiled_rules.push(CompiledRule {
                    regex,
                    replace_with: rule.replace_with,
                    name: rule.name,
                    description: rule.description,
                    literal,
                });
            }
            Err(e) => {
                compilation_errors.push(RewriteError::RuleCompilation(rule.name, e));
            }
        }
    }

    if !compilation_errors.is_empty() {
        let error_message = compilation_errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<String>>()
            .join("\n");
        Err(RewriteError::Fatal(format!(
            "Failed to compile {} rule(s):\n{}",
            compilation_errors.len(),
            error_message
        )))
    } else {
        debug!(
            "Finished compiling rules. Total compiled: {}.",
            compiled_rules.len()
        );
        Ok(CompiledRules { rules: compiled_rules })
    }
}
