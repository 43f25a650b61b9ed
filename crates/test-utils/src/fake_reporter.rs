use std::sync::Mutex;

use specrun::{
    Reporter, SpecSummary, SuiteBeginSummary, SuiteConfig, SuiteEndSummary, SuiteNodeSummary,
};

/// A [`Reporter`] that records every event it receives, in order, for later
/// inspection by tests.
#[derive(Default)]
pub struct FakeReporter {
    inner: Mutex<Recorded>,
}

#[derive(Default, Clone)]
struct Recorded {
    config: Option<SuiteConfig>,
    begin_summary: Option<SuiteBeginSummary>,
    before_suite_summary: Option<SuiteNodeSummary>,
    spec_will_run_summaries: Vec<SpecSummary>,
    spec_summaries: Vec<SpecSummary>,
    after_suite_summary: Option<SuiteNodeSummary>,
    end_summary: Option<SuiteEndSummary>,
}

impl FakeReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(&self) -> Option<SuiteConfig> {
        self.inner.lock().unwrap().config.clone()
    }

    pub fn begin_summary(&self) -> Option<SuiteBeginSummary> {
        self.inner.lock().unwrap().begin_summary.clone()
    }

    pub fn before_suite_summary(&self) -> Option<SuiteNodeSummary> {
        self.inner.lock().unwrap().before_suite_summary.clone()
    }

    pub fn spec_will_run_summaries(&self) -> Vec<SpecSummary> {
        self.inner.lock().unwrap().spec_will_run_summaries.clone()
    }

    pub fn spec_summaries(&self) -> Vec<SpecSummary> {
        self.inner.lock().unwrap().spec_summaries.clone()
    }

    pub fn after_suite_summary(&self) -> Option<SuiteNodeSummary> {
        self.inner.lock().unwrap().after_suite_summary.clone()
    }

    pub fn end_summary(&self) -> Option<SuiteEndSummary> {
        self.inner.lock().unwrap().end_summary.clone()
    }
}

impl Reporter for FakeReporter {
    fn suite_will_begin(&self, config: &SuiteConfig, summary: &SuiteBeginSummary) {
        let mut inner = self.inner.lock().unwrap();
        inner.config = Some(config.clone());
        inner.begin_summary = Some(summary.clone());
    }

    fn before_suite_did_run(&self, summary: &SuiteNodeSummary) {
        self.inner.lock().unwrap().before_suite_summary = Some(summary.clone());
    }

    fn spec_will_run(&self, summary: &SpecSummary) {
        self.inner
            .lock()
            .unwrap()
            .spec_will_run_summaries
            .push(summary.clone());
    }

    fn spec_did_complete(&self, summary: &SpecSummary) {
        self.inner
            .lock()
            .unwrap()
            .spec_summaries
            .push(summary.clone());
    }

    fn after_suite_did_run(&self, summary: &SuiteNodeSummary) {
        self.inner.lock().unwrap().after_suite_summary = Some(summary.clone());
    }

    fn suite_did_end(&self, summary: &SuiteEndSummary) {
        self.inner.lock().unwrap().end_summary = Some(summary.clone());
    }
}
