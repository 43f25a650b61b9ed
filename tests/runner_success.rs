// tests/runner_success.rs

//! Final success computation, including the fail-on-pending flag.

mod common;
use crate::common::{init_tracing, Harness};

use specrun::{Disposition, SuiteConfig};

#[test]
fn passing_suite_returns_true() {
    init_tracing();
    let h = Harness::new();
    let runner = h.runner(
        SuiteConfig::default(),
        None,
        vec![
            h.spec("passing", Disposition::Normal, false),
            h.spec("focused", Disposition::Focused, false),
            h.spec("pending", Disposition::Pending, false),
        ],
        None,
    );

    assert!(runner.run());
    let end = h.reporter1.end_summary().expect("end summary");
    assert!(end.suite_succeeded);
    // Focused units execute exactly like normal ones.
    assert_eq!(h.things_that_ran(), vec!["passing", "focused"]);
    assert_eq!(end.passed_count, 2);
}

#[test]
fn failing_spec_returns_false() {
    init_tracing();
    let h = Harness::new();
    let runner = h.runner(
        SuiteConfig::default(),
        None,
        vec![
            h.spec("failing", Disposition::Normal, true),
            h.spec("pending", Disposition::Pending, false),
        ],
        None,
    );

    assert!(!runner.run());
    let end = h.reporter1.end_summary().expect("end summary");
    assert!(!end.suite_succeeded);
}

#[test]
fn pending_counts_as_failure_when_fail_on_pending_is_set() {
    init_tracing();
    let h = Harness::new();
    let runner = h.runner(
        SuiteConfig {
            fail_on_pending: true,
            ..SuiteConfig::default()
        },
        None,
        vec![
            h.spec("passing", Disposition::Normal, false),
            h.spec("pending", Disposition::Pending, false),
        ],
        None,
    );

    assert!(!runner.run());
    let end = h.reporter1.end_summary().expect("end summary");
    assert!(!end.suite_succeeded);
    // Execution is unchanged: the pending spec is still merely pending.
    assert_eq!(end.failed_count, 0);
    assert_eq!(end.pending_count, 1);
    assert_eq!(h.things_that_ran(), vec!["passing"]);
}

#[test]
fn run_return_value_matches_the_end_summary() {
    init_tracing();
    let h = Harness::new();
    let runner = h.runner(
        SuiteConfig::default(),
        None,
        vec![h.spec("failing", Disposition::Normal, true)],
        None,
    );

    let success = runner.run();
    let end = h.reporter1.end_summary().expect("end summary");
    assert_eq!(success, end.suite_succeeded);
}
