//! The conformance checks themselves.
//!
//! Each check pits the verifier against a comparator whose behavior is
//! known in advance and asserts the verdict matches.

use ordlaw_types::{comparator_fn, Comparison, Law, VerifyError};
use ordlaw_verifier::{comparators, verify};

use crate::laws::LawCheck;

/// The three values from the classic epsilon-comparator bug, with
/// EPSILON = 0.1: each neighbor pair compares equal but the endpoints do
/// not, so sorting them is unstable.
pub const EPSILON_SAMPLES: [f64; 3] = [10.00, 10.08, 10.16];
pub const EPSILON: f64 = 0.1;

/// Run every conformance check.
pub fn run() -> Vec<LawCheck> {
    let checks = vec![
        check_baseline_lawful(),
        check_antisymmetry_detection(),
        check_transitivity_detection(),
        check_totality_detection(),
        check_input_validation(),
    ];
    for check in &checks {
        tracing::info!("{check}");
    }
    checks
}

/// L.BASELINE — lawful comparators pass with zero violations.
pub fn check_baseline_lawful() -> LawCheck {
    const ID: &str = "L.BASELINE";
    const SCENARIO: &str = "Ord-backed and total_cmp comparators yield empty reports";

    let ints = verify(&[1, 2, 3], &comparators::std_ord());
    let floats = verify(&[1.5_f64, -2.25, 0.0, 7.0], &comparators::f64_total());

    match (ints, floats) {
        (Ok(i), Ok(f)) if i.is_lawful() && f.is_lawful() && i.tuples_checked == 36 => {
            LawCheck::pass(ID, None, SCENARIO)
        }
        (Ok(i), Ok(f)) => LawCheck::fail(
            ID,
            None,
            SCENARIO,
            format!(
                "ints lawful={} tuples={}, floats lawful={}",
                i.is_lawful(),
                i.tuples_checked,
                f.is_lawful()
            ),
        ),
        (i, f) => LawCheck::fail(
            ID,
            None,
            SCENARIO,
            format!("{:?} / {:?}", i.err(), f.err()),
        ),
    }
}

/// L.ANTISYM — a comparator ordering every distinct pair low in both
/// directions is caught by the antisymmetry check.
pub fn check_antisymmetry_detection() -> LawCheck {
    const ID: &str = "L.ANTISYM";
    const LAW: Option<Law> = Some(Law::Antisymmetry);
    const SCENARIO: &str = "everything-is-less comparator is flagged";

    let cmp = comparator_fn(|a: &i32, b: &i32| {
        if a == b {
            Comparison::Equal
        } else {
            Comparison::Less
        }
    });
    match verify(&[1, 2], &cmp) {
        Ok(report) if report.violations_of(Law::Antisymmetry).count() > 0 => {
            LawCheck::pass(ID, LAW, SCENARIO)
        }
        Ok(report) => LawCheck::fail(
            ID,
            LAW,
            SCENARIO,
            format!(
                "no antisymmetry violation in {} findings",
                report.violation_count()
            ),
        ),
        Err(err) => LawCheck::fail(ID, LAW, SCENARIO, err.to_string()),
    }
}

/// L.TRANS — the epsilon comparator over 10.00 / 10.08 / 10.16 is caught,
/// including the (10.16, 10.08, 10.00) witnessing triple.
pub fn check_transitivity_detection() -> LawCheck {
    const ID: &str = "L.TRANS";
    const LAW: Option<Law> = Some(Law::Transitivity);
    const SCENARIO: &str = "epsilon comparator loses transitivity on the classic triple";

    match verify(&EPSILON_SAMPLES, &comparators::f64_epsilon(EPSILON)) {
        Ok(report) => {
            let witnessed = report
                .violations_of(Law::Transitivity)
                .any(|v| v.values == vec![10.16, 10.08, 10.00]);
            if witnessed {
                LawCheck::pass(ID, LAW, SCENARIO)
            } else {
                LawCheck::fail(
                    ID,
                    LAW,
                    SCENARIO,
                    "expected the (10.16, 10.08, 10.00) counterexample",
                )
            }
        }
        Err(err) => LawCheck::fail(ID, LAW, SCENARIO, err.to_string()),
    }
}

/// L.TOTAL — a NaN-unorderable comparator is caught by the totality check.
pub fn check_totality_detection() -> LawCheck {
    const ID: &str = "L.TOTAL";
    const LAW: Option<Law> = Some(Law::Totality);
    const SCENARIO: &str = "partial_cmp comparator is flagged on a NaN sample";

    match verify(&[1.0_f64, f64::NAN, 2.0], &comparators::f64_exact()) {
        Ok(report) if report.violations_of(Law::Totality).count() > 0 => {
            LawCheck::pass(ID, LAW, SCENARIO)
        }
        Ok(_) => LawCheck::fail(ID, LAW, SCENARIO, "NaN pair went unflagged"),
        Err(err) => LawCheck::fail(ID, LAW, SCENARIO, err.to_string()),
    }
}

/// L.INPUT — undersized samples and failing comparators surface as typed
/// errors, not as reports.
pub fn check_input_validation() -> LawCheck {
    const ID: &str = "L.INPUT";
    const SCENARIO: &str = "undersized sample sets are rejected before any comparison";

    match verify(&[1], &comparators::std_ord()) {
        Err(VerifyError::InvalidInput(1)) => LawCheck::pass(ID, None, SCENARIO),
        Err(err) => LawCheck::fail(ID, None, SCENARIO, format!("wrong error: {err}")),
        Ok(_) => LawCheck::fail(ID, None, SCENARIO, "single-element sample was accepted"),
    }
}
