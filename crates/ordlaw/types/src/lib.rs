//! Core types for order-law conformance checking.
//!
//! A comparator over a type `T` is expected to induce a total order:
//! antisymmetric, transitive, and total. These types describe comparator
//! outcomes, the laws themselves, and the counterexamples (violations)
//! a verifier reports when a comparator breaks one of them.

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

mod comparison;
mod errors;
mod value;
mod violation;

pub use comparison::*;
pub use errors::*;
pub use value::*;
pub use violation::*;
