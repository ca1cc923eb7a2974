//! Finite floating-point values with construction-time validation.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ConstructionError;

/// An `f64` guaranteed finite at construction.
///
/// NaN and the infinities are rejected with a typed error instead of
/// surfacing later as an unorderable comparison. Negative zero is
/// normalized to positive zero so `Ord` and `PartialEq` agree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FiniteF64(f64);

impl FiniteF64 {
    pub fn new(value: f64) -> Result<Self, ConstructionError> {
        if !value.is_finite() {
            return Err(ConstructionError(value));
        }
        // -0.0 == 0.0 under PartialEq but not under total_cmp
        Ok(Self(if value == 0.0 { 0.0 } else { value }))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Eq for FiniteF64 {}

impl PartialOrd for FiniteF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FiniteF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        // Finite and zero-normalized, so total_cmp matches numeric order.
        self.0.total_cmp(&other.0)
    }
}

impl TryFrom<f64> for FiniteF64 {
    type Error = ConstructionError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for FiniteF64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn rejects_nan() {
        assert!(FiniteF64::new(f64::NAN).is_err());
    }

    #[test]
    fn rejects_infinities() {
        assert!(FiniteF64::new(f64::INFINITY).is_err());
        assert!(FiniteF64::new(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn normalizes_negative_zero() {
        let z = FiniteF64::new(-0.0).unwrap();
        assert_eq!(z, FiniteF64::new(0.0).unwrap());
        assert_eq!(z.cmp(&FiniteF64::new(0.0).unwrap()), Ordering::Equal);
    }

    proptest! {
        #[test]
        fn ordering_matches_numeric_order(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            let fa = FiniteF64::new(a).unwrap();
            let fb = FiniteF64::new(b).unwrap();
            prop_assert_eq!(fa.cmp(&fb), a.partial_cmp(&b).unwrap());
        }
    }
}
