//! Verification reporting.

use std::fmt::Debug;
use std::time::Duration;

use chrono::{DateTime, Utc};
use ordlaw_types::{Law, Violation};
use serde::{Deserialize, Serialize};

/// Per-law violation counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LawSummary {
    pub antisymmetry: usize,
    pub transitivity: usize,
    pub totality: usize,
    /// No violations found over the examined sample.
    pub lawful: bool,
}

/// Outcome of a verification run.
///
/// Violations appear in scan order (pairs before triples before the
/// totality pass); the order is deterministic but carries no meaning.
/// `tuples_checked` counts the pair and triple grids actually examined,
/// `n² + n³` for a full run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationReport<T> {
    pub timestamp: DateTime<Utc>,
    pub duration: Duration,
    pub violations: Vec<Violation<T>>,
    pub tuples_checked: u64,
    /// False when a deadline stopped the run early; the report then covers
    /// only the tuples counted above.
    pub complete: bool,
    pub summary: LawSummary,
}

impl<T> VerificationReport<T> {
    pub(crate) fn new(
        violations: Vec<Violation<T>>,
        tuples_checked: u64,
        complete: bool,
        duration: Duration,
    ) -> Self {
        let count = |law: Law| violations.iter().filter(|v| v.law == law).count();
        let summary = LawSummary {
            antisymmetry: count(Law::Antisymmetry),
            transitivity: count(Law::Transitivity),
            totality: count(Law::Totality),
            lawful: violations.is_empty(),
        };
        Self {
            timestamp: Utc::now(),
            duration,
            violations,
            tuples_checked,
            complete,
            summary,
        }
    }

    /// Whether the comparator survived every enabled check.
    pub fn is_lawful(&self) -> bool {
        self.summary.lawful
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    /// Violations against one specific law.
    pub fn violations_of(&self, law: Law) -> impl Iterator<Item = &Violation<T>> {
        self.violations.iter().filter(move |v| v.law == law)
    }
}

impl<T: Debug> VerificationReport<T> {
    /// Render a human-readable text report.
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("==============================================================\n");
        output.push_str("  Order-Law Verification Report\n");
        output.push_str("==============================================================\n");
        output.push_str(&format!(
            "  Timestamp: {}\n",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        output.push_str(&format!("  Duration:  {:?}\n", self.duration));
        output.push_str(&format!("  Tuples:    {}\n", self.tuples_checked));
        if !self.complete {
            output.push_str("  NOTE: run stopped at deadline, report is partial\n");
        }
        output.push_str("--------------------------------------------------------------\n");

        if self.violations.is_empty() {
            output.push_str("  No violations found.\n");
        } else {
            for law in Law::all() {
                let of_law: Vec<_> = self.violations_of(law).collect();
                if of_law.is_empty() {
                    continue;
                }
                output.push_str(&format!("  {} ({} violations):\n", law, of_law.len()));
                for violation in of_law {
                    output.push_str(&format!("    ✗ {}\n", violation.explanation));
                }
            }
        }

        output.push_str("--------------------------------------------------------------\n");
        if self.is_lawful() {
            output.push_str("  Result: ✓ LAWFUL\n");
        } else {
            output.push_str(&format!(
                "  Result: ✗ UNLAWFUL ({} violations)\n",
                self.violation_count()
            ));
        }
        output.push_str("==============================================================\n");

        output
    }
}

impl<T: Serialize> VerificationReport<T> {
    /// Render the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
