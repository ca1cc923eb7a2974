//! Order-Law Verifier
//!
//! Tests a three-way comparator against every pair and triple drawn from a
//! finite sample of values and reports each total-order law it breaks, with
//! the concrete counterexample. This is falsification, not proof: only the
//! supplied samples are examined, and the comparator is observed as a black
//! box.
//!
//! The motivating defect is the epsilon-tolerant floating-point comparator,
//! which treats near-equal values as equal and thereby loses transitivity
//! (10.00 ≈ 10.08 and 10.08 ≈ 10.16, yet 10.00 < 10.16 under a 0.1
//! tolerance), destabilizing any sort built on it.
//!
//! # Usage
//!
//! ```
//! use ordlaw_verifier::{comparators, Verifier};
//!
//! let samples = vec![10.00_f64, 10.08, 10.16];
//! let report = Verifier::with_defaults()
//!     .verify(&samples, &comparators::f64_epsilon(0.1))
//!     .unwrap();
//! assert!(!report.is_lawful());
//! ```

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod checks;
pub mod comparators;
pub mod report;
pub mod runner;

pub use checks::{check_antisymmetry, check_totality, check_transitivity};
pub use report::{LawSummary, VerificationReport};
pub use runner::{verify, Verifier, VerifierConfig};
