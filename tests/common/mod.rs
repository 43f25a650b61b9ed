// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::Arc;

use specrun::{
    Disposition, Failer, OutputBuffer, Reporter, Spec, SpecCollection, SpecRunner, SuiteConfig,
    SuiteNode, SuiteNodeType,
};
use specrun_test_utils::{new_run_log, tracking_spec, tracking_suite_node, FakeReporter,
    FakeWriter, RunLog};

pub use specrun_test_utils::init_tracing;

/// Shared fixtures for driving a runner against fakes: a failure signal,
/// a recording writer, two reporters and an execution log.
pub struct Harness {
    pub failer: Arc<Failer>,
    pub writer: Arc<FakeWriter>,
    pub reporter1: Arc<FakeReporter>,
    pub reporter2: Arc<FakeReporter>,
    pub log: RunLog,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            failer: Arc::new(Failer::new()),
            writer: Arc::new(FakeWriter::new()),
            reporter1: Arc::new(FakeReporter::new()),
            reporter2: Arc::new(FakeReporter::new()),
            log: new_run_log(),
        }
    }

    pub fn runner(
        &self,
        config: SuiteConfig,
        before_suite: Option<SuiteNode>,
        specs: Vec<Spec>,
        after_suite: Option<SuiteNode>,
    ) -> SpecRunner {
        self.runner_with_collection(config, before_suite, SpecCollection::new(specs), after_suite)
    }

    pub fn runner_with_collection(
        &self,
        config: SuiteConfig,
        before_suite: Option<SuiteNode>,
        specs: SpecCollection,
        after_suite: Option<SuiteNode>,
    ) -> SpecRunner {
        SpecRunner::new(
            "description",
            before_suite,
            specs,
            after_suite,
            vec![
                Arc::clone(&self.reporter1) as Arc<dyn Reporter>,
                Arc::clone(&self.reporter2) as Arc<dyn Reporter>,
            ],
            Arc::clone(&self.writer) as Arc<dyn OutputBuffer>,
            config,
        )
    }

    pub fn spec(&self, text: &str, disposition: Disposition, should_fail: bool) -> Spec {
        tracking_spec(
            text,
            disposition,
            should_fail,
            &self.failer,
            &self.writer,
            &self.log,
        )
    }

    pub fn before_suite(&self, text: &str, should_fail: bool) -> SuiteNode {
        tracking_suite_node(
            SuiteNodeType::BeforeSuite,
            text,
            should_fail,
            &self.failer,
            &self.writer,
            &self.log,
        )
    }

    pub fn after_suite(&self, text: &str, should_fail: bool) -> SuiteNode {
        tracking_suite_node(
            SuiteNodeType::AfterSuite,
            text,
            should_fail,
            &self.failer,
            &self.writer,
            &self.log,
        )
    }

    /// Labels of the unit bodies that actually executed, in order.
    pub fn things_that_ran(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }
}
