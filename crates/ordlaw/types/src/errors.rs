//! Error types.

use thiserror::Error;

/// Rejected value at construction time (NaN or infinite input).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("value is not finite: {0}")]
pub struct ConstructionError(pub f64);

/// Failure raised by a comparator while evaluating a pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ComparatorError {
    message: String,
}

impl ComparatorError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors surfaced by a verification run.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// The sample set is too small to test any law.
    #[error("sample set must contain at least 2 values, got {0}")]
    InvalidInput(usize),

    /// The comparator itself failed on some pair. The run is aborted and
    /// the offending operands are reported; a comparator that cannot
    /// evaluate its inputs is a defect in its own right.
    #[error("comparator failed on ({left}, {right}): {source}")]
    ComparatorFailure {
        left: String,
        right: String,
        #[source]
        source: ComparatorError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_the_count() {
        let err = VerifyError::InvalidInput(1);
        assert!(err.to_string().contains("got 1"));
    }

    #[test]
    fn comparator_failure_names_operands() {
        let err = VerifyError::ComparatorFailure {
            left: "1.0".into(),
            right: "NaN".into(),
            source: ComparatorError::new("NaN operand"),
        };
        let msg = err.to_string();
        assert!(msg.contains("1.0"));
        assert!(msg.contains("NaN"));
    }
}
