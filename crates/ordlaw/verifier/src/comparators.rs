//! Stock comparators.
//!
//! `std_ord` and `f64_total` are lawful baselines; `f64_exact` and
//! `f64_epsilon` reproduce the two classic defects: a NaN-unorderable
//! comparator and the epsilon-tolerant comparator whose fuzzy equality is
//! not transitive.

use ordlaw_types::{comparator_fn, Comparator, Comparison, StdOrd};

/// Comparator backed by `Ord`. Lawful for any `T: Ord`.
pub fn std_ord() -> StdOrd {
    StdOrd
}

/// Total ordering over all `f64` values via `total_cmp` (IEEE 754
/// totalOrder). Lawful even in the presence of NaN.
pub fn f64_total() -> impl Comparator<f64> {
    comparator_fn(|a: &f64, b: &f64| Comparison::from_ordering(a.total_cmp(b)))
}

/// Exact partial comparison: reports `Unordered` when either operand is
/// NaN. Flagged by the totality check on any sample containing NaN.
pub fn f64_exact() -> impl Comparator<f64> {
    comparator_fn(|a: &f64, b: &f64| match a.partial_cmp(b) {
        Some(ord) => Comparison::from_ordering(ord),
        None => Comparison::Unordered,
    })
}

/// The epsilon-tolerant comparator: values within `epsilon` of each other
/// compare equal, everything else by sign.
///
/// Deliberately buggy. Fuzzy equality is not transitive (a ≈ b and b ≈ c
/// do not imply a ≈ c), so sorting with this comparator is unstable; the
/// verifier exists to catch exactly this.
pub fn f64_epsilon(epsilon: f64) -> impl Comparator<f64> {
    comparator_fn(move |a: &f64, b: &f64| {
        if (a - b).abs() < epsilon {
            Comparison::Equal
        } else if a < b {
            Comparison::Less
        } else {
            Comparison::Greater
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f64_total_orders_nan() {
        let cmp = f64_total();
        assert!(!cmp.compare(&f64::NAN, &1.0).unwrap().is_unordered());
    }

    #[test]
    fn f64_exact_reports_unordered_on_nan() {
        let cmp = f64_exact();
        assert!(cmp.compare(&f64::NAN, &1.0).unwrap().is_unordered());
        assert_eq!(cmp.compare(&1.0, &2.0).unwrap(), Comparison::Less);
    }

    #[test]
    fn f64_epsilon_collapses_near_values() {
        let cmp = f64_epsilon(0.1);
        assert_eq!(cmp.compare(&10.00, &10.08).unwrap(), Comparison::Equal);
        assert_eq!(cmp.compare(&10.00, &10.16).unwrap(), Comparison::Less);
        assert_eq!(cmp.compare(&10.16, &10.00).unwrap(), Comparison::Greater);
    }
}
