//! Verification runner.

use std::fmt::Debug;
use std::time::{Duration, Instant};

use ordlaw_types::{Comparator, VerifyError};

use crate::checks::{
    scan_antisymmetry, scan_totality, scan_transitivity, ScanState, MIN_SAMPLES,
};
use crate::report::VerificationReport;

/// Configuration for a verification run.
#[derive(Debug, Clone)]
pub struct VerifierConfig {
    /// Run the antisymmetry check.
    pub run_antisymmetry: bool,

    /// Run the transitivity check (cubic in sample size).
    pub run_transitivity: bool,

    /// Run the totality check.
    pub run_totality: bool,

    /// Stop the run once this much time has elapsed. Checked at outer-loop
    /// boundaries only; an expired run returns a partial report rather than
    /// an error.
    pub deadline: Option<Duration>,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self {
            run_antisymmetry: true,
            run_transitivity: true,
            run_totality: true,
            deadline: None,
        }
    }
}

/// Runs the enabled law checks and assembles the report.
pub struct Verifier {
    config: VerifierConfig,
}

impl Verifier {
    pub fn new(config: VerifierConfig) -> Self {
        Self { config }
    }

    pub fn with_defaults() -> Self {
        Self::new(VerifierConfig::default())
    }

    /// Run all enabled checks against `comparator` over `samples`.
    ///
    /// Never mutates the samples or the comparator. Fails with
    /// [`VerifyError::InvalidInput`] on fewer than 2 samples and with
    /// [`VerifyError::ComparatorFailure`] the moment the comparator itself
    /// errors.
    pub fn verify<T, C>(
        &self,
        samples: &[T],
        comparator: &C,
    ) -> Result<VerificationReport<T>, VerifyError>
    where
        T: Clone + Debug,
        C: Comparator<T>,
    {
        if samples.len() < MIN_SAMPLES {
            return Err(VerifyError::InvalidInput(samples.len()));
        }

        let start = Instant::now();
        let mut state = ScanState::with_deadline(self.config.deadline.map(|d| start + d));
        let mut violations = Vec::new();

        tracing::info!(samples = samples.len(), "starting order-law verification");

        if self.config.run_antisymmetry && !state.checkpoint() {
            tracing::debug!("checking antisymmetry");
            scan_antisymmetry(samples, comparator, &mut state, &mut violations)?;
        }

        if self.config.run_transitivity && !state.checkpoint() {
            tracing::debug!("checking transitivity");
            scan_transitivity(samples, comparator, &mut state, &mut violations)?;
        }

        if self.config.run_totality && !state.checkpoint() {
            tracing::debug!("checking totality");
            // The totality pass re-reads the pair grid; only count it when
            // the antisymmetry pass did not already.
            let count_pairs = !self.config.run_antisymmetry;
            scan_totality(samples, comparator, &mut state, count_pairs, &mut violations)?;
        }

        let complete = !state.expired;
        let report =
            VerificationReport::new(violations, state.tuples, complete, start.elapsed());

        tracing::info!(
            violations = report.violation_count(),
            tuples = report.tuples_checked,
            complete,
            "verification finished"
        );

        Ok(report)
    }
}

/// Run every law check with the default configuration.
pub fn verify<T, C>(samples: &[T], comparator: &C) -> Result<VerificationReport<T>, VerifyError>
where
    T: Clone + Debug,
    C: Comparator<T>,
{
    Verifier::with_defaults().verify(samples, comparator)
}
