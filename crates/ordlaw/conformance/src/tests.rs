//! Suite tests covering the documented behavior of the verifier end to end.

use ordlaw_types::{FiniteF64, Law};
use ordlaw_verifier::{comparators, verify, Verifier, VerifierConfig};

use crate::laws::ALL_LAW_IDS;
use crate::suite::{self, EPSILON, EPSILON_SAMPLES};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn full_suite_passes() {
    init_tracing();
    let checks = suite::run();
    for check in &checks {
        assert!(check.passed(), "{check}");
    }
}

#[test]
fn every_cataloged_law_id_is_exercised() {
    let checks = suite::run();
    for id in ALL_LAW_IDS {
        assert!(
            checks.iter().any(|c| c.id == *id),
            "no check for law id {id}"
        );
    }
}

#[test]
fn every_law_has_a_targeted_check() {
    let checks = suite::run();
    for law in Law::all() {
        assert!(
            checks.iter().any(|c| c.law == Some(law)),
            "no check targets {law}"
        );
    }
}

#[test]
fn law_checks_serialize_with_their_law() {
    let checks = suite::run();
    let json = serde_json::to_string(&checks).unwrap();
    assert!(json.contains("L.TRANS"));
    assert!(json.contains("Transitivity"));
}

#[test]
fn epsilon_example_reports_the_unstable_triple() {
    let report = verify(&EPSILON_SAMPLES, &comparators::f64_epsilon(EPSILON)).unwrap();
    assert!(!report.is_lawful());
    let witness = report
        .violations_of(Law::Transitivity)
        .find(|v| v.values == vec![10.16, 10.08, 10.00])
        .expect("witnessing triple missing");
    assert_eq!(witness.values.len(), 3);
    assert_eq!(witness.outcomes.len(), 3);
}

#[test]
fn exact_comparison_is_antisymmetric_on_distinct_values() {
    // 10.00 vs 10.08 are distinct under exact comparison; no fuzzy
    // equality, so antisymmetry holds trivially.
    let violations =
        ordlaw_verifier::check_antisymmetry(&EPSILON_SAMPLES, &comparators::f64_total()).unwrap();
    assert!(violations.is_empty());
}

#[test]
fn reports_are_idempotent() {
    let cmp = comparators::f64_epsilon(EPSILON);
    let a = verify(&EPSILON_SAMPLES, &cmp).unwrap();
    let b = verify(&EPSILON_SAMPLES, &cmp).unwrap();
    assert_eq!(a.violations, b.violations);
    assert_eq!(a.summary, b.summary);
    assert_eq!(a.tuples_checked, b.tuples_checked);
}

#[test]
fn finite_values_with_std_ord_are_lawful() {
    let samples: Vec<FiniteF64> = [10.00, 10.08, 10.16]
        .into_iter()
        .map(|v| FiniteF64::new(v).unwrap())
        .collect();
    let report = verify(&samples, &comparators::std_ord()).unwrap();
    assert!(report.is_lawful());
}

#[test]
fn nan_is_rejected_at_construction() {
    assert!(FiniteF64::new(f64::NAN).is_err());
}

#[test]
fn report_renders_text_and_json() {
    let report = verify(&EPSILON_SAMPLES, &comparators::f64_epsilon(EPSILON)).unwrap();
    let text = report.to_text();
    assert!(text.contains("UNLAWFUL"));
    assert!(text.contains("Transitivity"));
    let json = report.to_json().unwrap();
    assert!(json.contains("Transitivity"));
}

#[test]
fn transitivity_can_be_skipped_for_large_samples() {
    let samples: Vec<i64> = (0..50).collect();
    let config = VerifierConfig {
        run_transitivity: false,
        ..VerifierConfig::default()
    };
    let report = Verifier::new(config)
        .verify(&samples, &comparators::std_ord())
        .unwrap();
    assert!(report.is_lawful());
    assert_eq!(report.tuples_checked, 50 * 50);
}
