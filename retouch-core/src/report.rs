// retouch-core/src/report.rs
//! Provides the per-rule tally data structures and summary rendering for a
//! rewrite pass.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The match count for a single rule within one pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RuleTally {
    pub rule_name: String,
    pub description: Option<String>,
    pub occurrences: usize,
}

impl RuleTally {
    /// The label shown in summaries: the description when present, the rule
    /// name otherwise.
    pub fn label(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.rule_name)
    }
}

/// Per-rule match counts for one pass, in rule-set order.
///
/// Created empty, filled by the engine during the pass, rendered (or
/// exported) afterwards, then discarded. Nothing here persists across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RewriteReport {
    pub source_id: String,
    pub tallies: Vec<RuleTally>,
}

impl RewriteReport {
    pub fn new(source_id: &str) -> Self {
        Self {
            source_id: source_id.to_string(),
            tallies: Vec::new(),
        }
    }

    /// Appends one rule's tally. The engine calls this once per rule, in
    /// rule-set order.
    pub fn record(&mut self, rule_name: &str, description: Option<String>, occurrences: usize) {
        self.tallies.push(RuleTally {
            rule_name: rule_name.to_string(),
            description,
            occurrences,
        });
    }

    /// Total replacements across all rules.
    pub fn total(&self) -> usize {
        self.tallies.iter().map(|t| t.occurrences).sum()
    }

    /// True when no rule matched anything.
    pub fn is_noop(&self) -> bool {
        self.total() == 0
    }

    /// Produces the deterministic, human-readable summary: one line per rule
    /// in rule-set order, then a total. The caller decides where it goes.
    pub fn render(&self) -> String {
        let width = self
            .tallies
            .iter()
            .map(|t| t.label().len())
            .max()
            .unwrap_or(0)
            .max("TOTAL".len());

        let mut out = String::new();
        for tally in &self.tallies {
            out.push_str(&format!(
                "{:<width$} : {:>4}\n",
                tally.label(),
                tally.occurrences,
                width = width
            ));
        }
        out.push_str(&format!(
            "{:<width$} : {:>4}\n",
            "TOTAL",
            self.total(),
            width = width
        ));
        out
    }
}

/// JSON-serializable form of a report, stamped with the export time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    pub source_id: String,
    pub generated_at: String,
    pub tallies: Vec<RuleTally>,
    pub total_occurrences: usize,
}

impl ReportExport {
    pub fn from_report(report: &RewriteReport) -> Self {
        Self {
            source_id: report.source_id.clone(),
            generated_at: Utc::now().to_rfc3339(),
            tallies: report.tallies.clone(),
            total_occurrences: report.total(),
        }
    }

    /// Serializes the export as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
