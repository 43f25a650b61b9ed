// tests/runner_current_spec.rs

//! Visibility of the in-flight spec: from within its own body, and from a
//! separate thread while the body blocks.

mod common;
use crate::common::{init_tracing, Harness};

use std::sync::{mpsc, Arc, Mutex, OnceLock};
use std::thread;

use specrun::{Disposition, SpecRunner, SpecState, SpecSummary, SuiteConfig};
use specrun_test_utils::spec_with_body;

#[test]
fn reports_the_spec_in_flight_from_within_its_body() {
    init_tracing();
    let h = Harness::new();

    // The body needs a handle to the runner that owns it, so the runner is
    // registered in a slot after construction.
    let slot: Arc<OnceLock<Arc<SpecRunner>>> = Arc::new(OnceLock::new());
    let seen: Arc<Mutex<Option<SpecSummary>>> = Arc::new(Mutex::new(None));

    let body_slot = Arc::clone(&slot);
    let body_seen = Arc::clone(&seen);
    let spec_b = spec_with_body("B", &h.failer, move || {
        let runner = body_slot.get().expect("runner registered");
        *body_seen.lock().unwrap() = runner.current_spec_summary();
    });

    let runner = Arc::new(h.runner(
        SuiteConfig::default(),
        None,
        vec![
            h.spec("A", Disposition::Normal, false),
            spec_b,
            h.spec("C", Disposition::Normal, false),
        ],
        None,
    ));
    assert!(slot.set(Arc::clone(&runner)).is_ok());

    assert!(runner.current_spec_summary().is_none());
    runner.run();

    let summary = seen
        .lock()
        .unwrap()
        .clone()
        .expect("summary observed while B was running");
    assert_eq!(summary.component_texts, vec!["B"]);
    assert_eq!(summary.state, SpecState::Running);

    assert!(runner.current_spec_summary().is_none());
}

#[test]
fn is_observable_from_another_thread_while_a_body_blocks() {
    init_tracing();
    let h = Harness::new();

    let (ready_tx, ready_rx) = mpsc::channel::<()>();
    let (proceed_tx, proceed_rx) = mpsc::channel::<()>();

    let mut skipped = h.spec("SKIP", Disposition::Normal, false);
    skipped.skip();

    let blocking = spec_with_body("RUN", &h.failer, move || {
        ready_tx.send(()).unwrap();
        proceed_rx.recv().unwrap();
    });

    let runner = Arc::new(h.runner(
        SuiteConfig::default(),
        Some(h.before_suite("BefSuite", false)),
        vec![
            skipped,
            h.spec("PENDING", Disposition::Pending, false),
            blocking,
        ],
        Some(h.after_suite("AftSuite", false)),
    ));

    let run_handle = {
        let runner = Arc::clone(&runner);
        thread::spawn(move || runner.run())
    };

    // Wait until the blocking body is in flight.
    ready_rx.recv().unwrap();

    let current = runner
        .current_spec_summary()
        .expect("in-flight spec visible from another thread");
    assert_eq!(current.component_texts, vec!["RUN"]);

    // Pending/skipped specs were announced (and completed) before the
    // actively-running spec, whose completion is still outstanding.
    let will_run = h.reporter1.spec_will_run_summaries();
    assert_eq!(will_run.len(), 3);
    assert_eq!(will_run[0].component_texts, vec!["SKIP"]);
    assert_eq!(will_run[1].component_texts, vec!["PENDING"]);
    assert_eq!(will_run[2].component_texts, vec!["RUN"]);
    assert_eq!(h.reporter1.spec_summaries().len(), 2);

    proceed_tx.send(()).unwrap();
    let success = run_handle.join().expect("run thread panicked");
    assert!(success);

    assert_eq!(h.reporter1.spec_summaries().len(), 3);
    assert_eq!(
        h.reporter1.spec_summaries()[2].component_texts,
        vec!["RUN"]
    );
    assert!(runner.current_spec_summary().is_none());
}
