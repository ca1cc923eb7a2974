//! Total-order laws and the counterexamples that break them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::comparison::Comparison;

/// The three laws a total order must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Law {
    /// If `a <= b` and `b <= a`, the comparator must report them equal.
    Antisymmetry,
    /// If `a <= b` and `b <= c`, then `a <= c`.
    Transitivity,
    /// For every pair, at least one of `a <= b` or `b <= a` holds.
    Totality,
}

impl Law {
    pub fn name(&self) -> &'static str {
        match self {
            Law::Antisymmetry => "Antisymmetry",
            Law::Transitivity => "Transitivity",
            Law::Totality => "Totality",
        }
    }

    pub fn all() -> Vec<Law> {
        vec![Law::Antisymmetry, Law::Transitivity, Law::Totality]
    }
}

impl fmt::Display for Law {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A concrete counterexample: the values and comparator outcomes that
/// together contradict one of the laws.
///
/// Holds 2 values (antisymmetry, totality) or 3 (transitivity), cloned out
/// of the caller's sample set, plus the pairwise outcomes that produced the
/// contradiction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation<T> {
    pub law: Law,
    pub values: Vec<T>,
    pub outcomes: Vec<Comparison>,
    pub explanation: String,
}

impl<T: Clone + fmt::Debug> Violation<T> {
    /// Counterexample over a pair of values.
    pub fn pair(
        law: Law,
        a: &T,
        b: &T,
        outcomes: Vec<Comparison>,
        explanation: String,
    ) -> Self {
        Self {
            law,
            values: vec![a.clone(), b.clone()],
            outcomes,
            explanation,
        }
    }

    /// Counterexample over a triple of values.
    pub fn triple(
        law: Law,
        a: &T,
        b: &T,
        c: &T,
        outcomes: Vec<Comparison>,
        explanation: String,
    ) -> Self {
        Self {
            law,
            values: vec![a.clone(), b.clone(), c.clone()],
            outcomes,
            explanation,
        }
    }
}

impl<T: fmt::Debug> fmt::Display for Violation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:?}: {}", self.law, self.values, self.explanation)
    }
}
