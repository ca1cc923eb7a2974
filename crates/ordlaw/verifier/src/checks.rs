//! The three law checks.
//!
//! Each check is a brute-force scan over the sample grid: ordered pairs for
//! antisymmetry, ordered triples for transitivity, unordered pairs for
//! totality. Comparator errors abort the scan immediately with the operands
//! that triggered them.

use std::fmt::Debug;
use std::time::Instant;

use ordlaw_types::{Comparator, Comparison, Law, VerifyError, Violation};

/// Minimum sample count for any meaningful law test.
pub(crate) const MIN_SAMPLES: usize = 2;

/// Shared scan bookkeeping: tuple accounting and deadline cancellation.
///
/// The deadline is consulted at outer-loop boundaries only, so a scan that
/// expires still finishes the row it was working on.
pub(crate) struct ScanState {
    pub tuples: u64,
    deadline: Option<Instant>,
    pub expired: bool,
}

impl ScanState {
    pub fn unbounded() -> Self {
        Self {
            tuples: 0,
            deadline: None,
            expired: false,
        }
    }

    pub fn with_deadline(deadline: Option<Instant>) -> Self {
        Self {
            tuples: 0,
            deadline,
            expired: false,
        }
    }

    /// Returns true when the scan should stop.
    pub fn checkpoint(&mut self) -> bool {
        if self.expired {
            return true;
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                self.expired = true;
            }
        }
        self.expired
    }
}

fn invoke<T, C>(comparator: &C, a: &T, b: &T) -> Result<Comparison, VerifyError>
where
    T: Debug,
    C: Comparator<T>,
{
    comparator
        .compare(a, b)
        .map_err(|source| VerifyError::ComparatorFailure {
            left: format!("{a:?}"),
            right: format!("{b:?}"),
            source,
        })
}

fn ensure_samples<T>(samples: &[T]) -> Result<(), VerifyError> {
    if samples.len() < MIN_SAMPLES {
        return Err(VerifyError::InvalidInput(samples.len()));
    }
    Ok(())
}

pub(crate) fn scan_antisymmetry<T, C>(
    samples: &[T],
    comparator: &C,
    state: &mut ScanState,
    out: &mut Vec<Violation<T>>,
) -> Result<(), VerifyError>
where
    T: Clone + Debug,
    C: Comparator<T>,
{
    for a in samples {
        if state.checkpoint() {
            return Ok(());
        }
        for b in samples {
            state.tuples += 1;
            let ab = invoke(comparator, a, b)?;
            let ba = invoke(comparator, b, a)?;
            if ab.le() && ba.le() && ab != Comparison::Equal {
                out.push(Violation::pair(
                    Law::Antisymmetry,
                    a,
                    b,
                    vec![ab, ba],
                    format!(
                        "{a:?} <= {b:?} and {b:?} <= {a:?}, but the comparator \
                         does not report them equal ({ab} / {ba})"
                    ),
                ));
            }
        }
    }
    Ok(())
}

pub(crate) fn scan_transitivity<T, C>(
    samples: &[T],
    comparator: &C,
    state: &mut ScanState,
    out: &mut Vec<Violation<T>>,
) -> Result<(), VerifyError>
where
    T: Clone + Debug,
    C: Comparator<T>,
{
    for a in samples {
        if state.checkpoint() {
            return Ok(());
        }
        for b in samples {
            let ab = invoke(comparator, a, b)?;
            for c in samples {
                state.tuples += 1;
                let bc = invoke(comparator, b, c)?;
                if !(ab.le() && bc.le()) {
                    continue;
                }
                let ac = invoke(comparator, a, c)?;
                if !ac.le() {
                    out.push(Violation::triple(
                        Law::Transitivity,
                        a,
                        b,
                        c,
                        vec![ab, bc, ac],
                        format!(
                            "{a:?} <= {b:?} ({ab}) and {b:?} <= {c:?} ({bc}), \
                             but not {a:?} <= {c:?} ({ac})"
                        ),
                    ));
                }
            }
        }
    }
    Ok(())
}

pub(crate) fn scan_totality<T, C>(
    samples: &[T],
    comparator: &C,
    state: &mut ScanState,
    count_pairs: bool,
    out: &mut Vec<Violation<T>>,
) -> Result<(), VerifyError>
where
    T: Clone + Debug,
    C: Comparator<T>,
{
    for (i, a) in samples.iter().enumerate() {
        if state.checkpoint() {
            return Ok(());
        }
        for b in &samples[i..] {
            if count_pairs {
                state.tuples += 1;
            }
            let ab = invoke(comparator, a, b)?;
            let ba = invoke(comparator, b, a)?;
            if !ab.le() && !ba.le() {
                out.push(Violation::pair(
                    Law::Totality,
                    a,
                    b,
                    vec![ab, ba],
                    format!(
                        "comparator orders {a:?} and {b:?} in neither \
                         direction ({ab} / {ba})"
                    ),
                ));
            }
        }
    }
    Ok(())
}

/// Check antisymmetry over every ordered pair in `samples` × `samples`:
/// whenever `a <= b` and `b <= a`, the comparator must report `Equal`.
pub fn check_antisymmetry<T, C>(
    samples: &[T],
    comparator: &C,
) -> Result<Vec<Violation<T>>, VerifyError>
where
    T: Clone + Debug,
    C: Comparator<T>,
{
    ensure_samples(samples)?;
    let mut out = Vec::new();
    scan_antisymmetry(samples, comparator, &mut ScanState::unbounded(), &mut out)?;
    Ok(out)
}

/// Check transitivity over every ordered triple in `samples`³: whenever
/// `a <= b` and `b <= c`, require `a <= c`. Violations record all three
/// values and the three pairwise outcomes.
pub fn check_transitivity<T, C>(
    samples: &[T],
    comparator: &C,
) -> Result<Vec<Violation<T>>, VerifyError>
where
    T: Clone + Debug,
    C: Comparator<T>,
{
    ensure_samples(samples)?;
    let mut out = Vec::new();
    scan_transitivity(samples, comparator, &mut ScanState::unbounded(), &mut out)?;
    Ok(out)
}

/// Check totality over every unordered pair `{a, b}`: at least one of
/// `a <= b` or `b <= a` must hold. Flags comparators that can report an
/// unordered (NaN-like) outcome.
pub fn check_totality<T, C>(
    samples: &[T],
    comparator: &C,
) -> Result<Vec<Violation<T>>, VerifyError>
where
    T: Clone + Debug,
    C: Comparator<T>,
{
    ensure_samples(samples)?;
    let mut out = Vec::new();
    scan_totality(
        samples,
        comparator,
        &mut ScanState::unbounded(),
        false,
        &mut out,
    )?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparators;
    use ordlaw_types::{comparator_fn, ComparatorError, FallibleFn};

    #[test]
    fn lawful_comparator_has_no_violations() {
        let samples = vec![3, 1, 2];
        let cmp = comparators::std_ord();
        assert!(check_antisymmetry(&samples, &cmp).unwrap().is_empty());
        assert!(check_transitivity(&samples, &cmp).unwrap().is_empty());
        assert!(check_totality(&samples, &cmp).unwrap().is_empty());
    }

    #[test]
    fn epsilon_comparator_breaks_transitivity() {
        let samples = vec![10.00_f64, 10.08, 10.16];
        let cmp = comparators::f64_epsilon(0.1);
        let violations = check_transitivity(&samples, &cmp).unwrap();
        assert!(!violations.is_empty());
        // 10.16 ~ 10.08 and 10.08 ~ 10.00, but 10.16 > 10.00.
        assert!(violations
            .iter()
            .any(|v| v.values == vec![10.16, 10.08, 10.00]));
    }

    #[test]
    fn epsilon_comparator_keeps_antisymmetry() {
        // Epsilon equality is symmetric, so only transitivity breaks.
        let samples = vec![10.00_f64, 10.08, 10.16];
        let cmp = comparators::f64_epsilon(0.1);
        assert!(check_antisymmetry(&samples, &cmp).unwrap().is_empty());
    }

    #[test]
    fn nan_comparator_breaks_totality() {
        let samples = vec![1.0_f64, f64::NAN];
        let cmp = comparators::f64_exact();
        let violations = check_totality(&samples, &cmp).unwrap();
        assert!(!violations.is_empty());
        assert!(violations.iter().all(|v| v.law == Law::Totality));
    }

    #[test]
    fn everything_less_comparator_breaks_antisymmetry() {
        let cmp = comparator_fn(|a: &i32, b: &i32| {
            if a == b {
                Comparison::Equal
            } else {
                Comparison::Less
            }
        });
        let violations = check_antisymmetry(&[1, 2], &cmp).unwrap();
        assert!(!violations.is_empty());
        assert_eq!(violations[0].law, Law::Antisymmetry);
    }

    #[test]
    fn too_few_samples_is_invalid_input() {
        let cmp = comparators::std_ord();
        let err = check_transitivity(&[1], &cmp).unwrap_err();
        assert!(matches!(err, VerifyError::InvalidInput(1)));
    }

    #[test]
    fn comparator_error_aborts_with_operands() {
        let cmp = FallibleFn(|a: &i32, b: &i32| {
            if *a == 2 || *b == 2 {
                Err(ComparatorError::new("refuses the value 2"))
            } else {
                Ok(Comparison::from_ordering(a.cmp(b)))
            }
        });
        let err = check_antisymmetry(&[1, 2], &cmp).unwrap_err();
        match err {
            VerifyError::ComparatorFailure { left, right, .. } => {
                assert!(left == "2" || right == "2");
            }
            other => panic!("expected ComparatorFailure, got {other:?}"),
        }
    }
}
