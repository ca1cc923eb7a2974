//! Order-Law Conformance Suite
//!
//! Verifies that the order-law verifier behaves as documented: lawful
//! comparators pass clean, and each known-broken comparator is caught by
//! the check that owns its defect. Each law is exercised as an independent,
//! self-contained assertion.
//!
//! Run with: `cargo test -p ordlaw-conformance`

#![deny(unsafe_code)]
#![warn(rust_2018_idioms)]

pub mod laws;
pub mod suite;

#[cfg(test)]
mod tests;
