//! Comparator outcomes and the comparator capability.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::ComparatorError;

/// Outcome of a three-way comparison.
///
/// `Unordered` is the NaN-like sentinel a defective comparator may produce
/// when it cannot order a pair at all. A lawful comparator never returns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    Less,
    Equal,
    Greater,
    Unordered,
}

impl Comparison {
    /// Build an outcome from a standard library ordering.
    pub fn from_ordering(ord: Ordering) -> Self {
        match ord {
            Ordering::Less => Comparison::Less,
            Ordering::Equal => Comparison::Equal,
            Ordering::Greater => Comparison::Greater,
        }
    }

    /// Whether this outcome places the left operand at or below the right
    /// one (`Less` or `Equal`).
    pub fn le(&self) -> bool {
        matches!(self, Comparison::Less | Comparison::Equal)
    }

    /// Whether the comparator declined to order the pair.
    pub fn is_unordered(&self) -> bool {
        matches!(self, Comparison::Unordered)
    }
}

impl From<Ordering> for Comparison {
    fn from(ord: Ordering) -> Self {
        Comparison::from_ordering(ord)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Less => write!(f, "<"),
            Comparison::Equal => write!(f, "="),
            Comparison::Greater => write!(f, ">"),
            Comparison::Unordered => write!(f, "<>"),
        }
    }
}

/// A three-way comparison capability over `T`.
///
/// Implementations must be pure: deterministic for fixed inputs, no
/// mutation of the operands, no side effects. A comparator that cannot
/// evaluate some pair reports a [`ComparatorError`]; the verifier treats
/// that as a defect of the comparator under test and aborts the run.
pub trait Comparator<T> {
    fn compare(&self, a: &T, b: &T) -> Result<Comparison, ComparatorError>;
}

/// Adapter giving any infallible closure the [`Comparator`] capability.
///
/// Constructed via [`comparator_fn`].
#[derive(Debug, Clone)]
pub struct FnComparator<F>(F);

/// Wrap an infallible comparison closure as a [`Comparator`].
pub fn comparator_fn<T, F>(f: F) -> FnComparator<F>
where
    F: Fn(&T, &T) -> Comparison,
{
    FnComparator(f)
}

impl<T, F> Comparator<T> for FnComparator<F>
where
    F: Fn(&T, &T) -> Comparison,
{
    fn compare(&self, a: &T, b: &T) -> Result<Comparison, ComparatorError> {
        Ok((self.0)(a, b))
    }
}

/// Adapter for closures that can themselves fail while comparing.
#[derive(Debug, Clone)]
pub struct FallibleFn<F>(pub F);

impl<T, F> Comparator<T> for FallibleFn<F>
where
    F: Fn(&T, &T) -> Result<Comparison, ComparatorError>,
{
    fn compare(&self, a: &T, b: &T) -> Result<Comparison, ComparatorError> {
        (self.0)(a, b)
    }
}

/// Comparator backed by the standard `Ord` implementation of `T`.
///
/// `Ord` already guarantees a total order, so this comparator is lawful by
/// construction and useful as a known-good baseline.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdOrd;

impl<T: Ord> Comparator<T> for StdOrd {
    fn compare(&self, a: &T, b: &T) -> Result<Comparison, ComparatorError> {
        Ok(Comparison::from_ordering(a.cmp(b)))
    }
}
