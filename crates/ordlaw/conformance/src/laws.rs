//! Law catalog and conformance verdicts.
//!
//! A [`LawCheck`] records one exercise of the verifier: which order law the
//! scenario targets (if a single one), what was run, and whether the
//! verifier reached the expected verdict.

use std::fmt;

use ordlaw_types::Law;
use serde::{Deserialize, Serialize};

/// Verdict of a single conformance check.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// The verifier behaved as documented.
    Pass,
    /// The verifier missed the defect or misfired; `details` says how.
    Fail { details: String },
}

/// Outcome of one conformance check over the verifier.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LawCheck {
    /// Check identifier (e.g. "L.TRANS")
    pub id: String,
    /// The order law the scenario targets. `None` for cross-cutting checks
    /// such as input validation, which belong to no single law.
    pub law: Option<Law>,
    /// The scenario that was exercised
    pub scenario: String,
    pub verdict: Verdict,
}

impl LawCheck {
    pub fn pass(id: &str, law: Option<Law>, scenario: &str) -> Self {
        Self {
            id: id.into(),
            law,
            scenario: scenario.into(),
            verdict: Verdict::Pass,
        }
    }

    pub fn fail(id: &str, law: Option<Law>, scenario: &str, details: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            law,
            scenario: scenario.into(),
            verdict: Verdict::Fail {
                details: details.into(),
            },
        }
    }

    pub fn passed(&self) -> bool {
        matches!(self.verdict, Verdict::Pass)
    }
}

impl fmt::Display for LawCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.passed() { "PASS" } else { "FAIL" };
        write!(f, "[{}] {}", status, self.id)?;
        if let Some(law) = self.law {
            write!(f, " ({})", law)?;
        }
        write!(f, ": {}", self.scenario)?;
        if let Verdict::Fail { ref details } = self.verdict {
            write!(f, " [{}]", details)?;
        }
        Ok(())
    }
}

/// Check identifiers covered by this suite.
pub const ALL_LAW_IDS: &[&str] = &[
    "L.ANTISYM",
    "L.TRANS",
    "L.TOTAL",
    "L.BASELINE",
    "L.INPUT",
];
