// src/runner.rs

//! The suite runner: drives the end-to-end state machine.
//!
//! A run walks `before-suite -> specs -> after-suite -> end summary`. The
//! runner owns the output-buffer truncate/dump policy, computes the
//! aggregate counts, and exposes a thread-safe snapshot of the spec whose
//! body is currently executing.
//!
//! The run itself is strictly sequential: units execute one at a time in
//! collection order, and the driving thread blocks for as long as a body
//! takes. All interior state is guarded on the runner instance so that
//! `run()` can be driven through a shared reference (e.g. behind an `Arc`)
//! while another thread queries [`SpecRunner::current_spec_summary`].

use std::sync::{Arc, Mutex};
use std::time::Instant;

use rand::Rng;
use tracing::{debug, info};

use crate::collection::SpecCollection;
use crate::config::SuiteConfig;
use crate::reporter::{Reporter, ReporterFanout};
use crate::suite_node::SuiteNode;
use crate::types::{SpecSummary, SuiteBeginSummary, SuiteEndSummary};
use crate::writer::OutputBuffer;

pub struct SpecRunner {
    description: String,
    suite_id: String,
    config: SuiteConfig,
    before_suite: Mutex<Option<SuiteNode>>,
    specs: Mutex<SpecCollection>,
    after_suite: Mutex<Option<SuiteNode>>,
    reporters: ReporterFanout,
    writer: Arc<dyn OutputBuffer>,
    running_spec: Mutex<Option<SpecSummary>>,
}

impl SpecRunner {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        description: impl Into<String>,
        before_suite: Option<SuiteNode>,
        specs: SpecCollection,
        after_suite: Option<SuiteNode>,
        reporters: Vec<Arc<dyn Reporter>>,
        writer: Arc<dyn OutputBuffer>,
        config: SuiteConfig,
    ) -> Self {
        Self {
            description: description.into(),
            suite_id: random_suite_id(),
            config,
            before_suite: Mutex::new(before_suite),
            specs: Mutex::new(specs),
            after_suite: Mutex::new(after_suite),
            reporters: ReporterFanout::new(reporters),
            writer,
            running_spec: Mutex::new(None),
        }
    }

    /// Run the whole suite, returning overall success.
    ///
    /// Never returns an error: every outcome, including panicking unit
    /// bodies, is surfaced through the summary event stream and this
    /// boolean.
    pub fn run(&self) -> bool {
        let start = Instant::now();
        info!(
            suite = %self.description,
            suite_id = %self.suite_id,
            "suite run starting"
        );

        let begin = self.begin_summary();
        self.reporters.suite_will_begin(&self.config, &begin);

        let before_suite_passed = self.run_before_suite();
        let mut suite_passed = before_suite_passed;
        if before_suite_passed {
            suite_passed = self.run_specs() && suite_passed;
        }
        // The after-suite runs unconditionally, even after earlier failures.
        suite_passed = self.run_after_suite() && suite_passed;

        let end = self.end_summary(suite_passed, before_suite_passed, start);
        self.reporters.suite_did_end(&end);

        info!(
            suite_id = %self.suite_id,
            succeeded = suite_passed,
            passed = end.passed_count,
            failed = end.failed_count,
            pending = end.pending_count,
            skipped = end.skipped_count,
            "suite run finished"
        );
        suite_passed
    }

    /// Snapshot of the spec whose body is currently executing.
    ///
    /// Returns `None` before the run starts, after it finishes, and while
    /// no body is in flight (pending/skipped units never appear here).
    /// Safe to call from a thread other than the one driving `run()`.
    pub fn current_spec_summary(&self) -> Option<SpecSummary> {
        self.running_spec.lock().unwrap().clone()
    }

    pub fn suite_id(&self) -> &str {
        &self.suite_id
    }

    fn run_before_suite(&self) -> bool {
        let mut guard = self.before_suite.lock().unwrap();
        let Some(node) = guard.as_mut() else {
            return true;
        };

        self.writer.truncate();
        let summary = node.run();
        if !summary.passed() {
            self.writer.dump();
        }
        self.reporters.before_suite_did_run(&summary);
        summary.passed()
    }

    fn run_after_suite(&self) -> bool {
        let mut guard = self.after_suite.lock().unwrap();
        let Some(node) = guard.as_mut() else {
            return true;
        };

        self.writer.truncate();
        let summary = node.run();
        if !summary.passed() {
            self.writer.dump();
        }
        self.reporters.after_suite_did_run(&summary);
        summary.passed()
    }

    /// Iterate the collection in order. A failing unit never prevents the
    /// units after it from running.
    fn run_specs(&self) -> bool {
        let mut suite_passed = true;
        let mut specs = self.specs.lock().unwrap();

        for spec in specs.iter_mut() {
            if !spec.will_run() {
                // Announce and complete immediately; the output buffer is
                // not touched for units that never execute.
                let summary = spec.summary();
                self.reporters.spec_will_run(&summary);
                self.reporters.spec_did_complete(&summary);
                if spec.is_pending() && self.config.fail_on_pending {
                    suite_passed = false;
                }
                continue;
            }

            self.writer.truncate();
            self.reporters.spec_will_run(&spec.summary());

            *self.running_spec.lock().unwrap() = Some(spec.summary());
            spec.run();
            *self.running_spec.lock().unwrap() = None;

            if spec.failed() {
                suite_passed = false;
                self.writer.dump();
            }
            debug!(state = ?spec.state(), "spec completed");
            self.reporters.spec_did_complete(&spec.summary());
        }

        suite_passed
    }

    fn begin_summary(&self) -> SuiteBeginSummary {
        let specs = self.specs.lock().unwrap();
        SuiteBeginSummary {
            suite_description: self.description.clone(),
            suite_id: self.suite_id.clone(),
            specs_before_sharding: specs.count_before_trim(),
            total_specs: specs.count(),
            will_run_count: specs.will_run_count(),
            pending_count: specs.pending_count(),
            skipped_count: specs.skipped_count(),
        }
    }

    fn end_summary(
        &self,
        suite_passed: bool,
        before_suite_passed: bool,
        start: Instant,
    ) -> SuiteEndSummary {
        let specs = self.specs.lock().unwrap();
        let will_run_count = specs.will_run_count();
        // A failed before-suite means no ordinary unit executed; every unit
        // that would have run is charged as failed so that
        // pending + skipped + passed + failed still equals the total.
        let failed_count = if before_suite_passed {
            specs.failed_count()
        } else {
            will_run_count
        };

        SuiteEndSummary {
            suite_description: self.description.clone(),
            suite_id: self.suite_id.clone(),
            specs_before_sharding: specs.count_before_trim(),
            total_specs: specs.count(),
            will_run_count,
            pending_count: specs.pending_count(),
            skipped_count: specs.skipped_count(),
            passed_count: specs.passed_count(),
            failed_count,
            suite_succeeded: suite_passed,
            run_time: start.elapsed(),
        }
    }
}

/// Generate the per-run suite identifier: four groups of four lowercase hex
/// digits. Only the shape and practical non-collision are contractual.
fn random_suite_id() -> String {
    let mut rng = rand::rng();
    format!(
        "{:04x}-{:04x}-{:04x}-{:04x}",
        rng.random::<u16>(),
        rng.random::<u16>(),
        rng.random::<u16>(),
        rng.random::<u16>()
    )
}
