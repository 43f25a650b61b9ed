// src/reporter.rs

//! Reporter capability and fan-out.
//!
//! Every registered reporter receives the identical ordered sequence of
//! lifecycle events. Dispatch is synchronous and in registration order: a
//! reporter's handling of one event completes before the next event is
//! dispatched, and before the runner's state machine advances.

use std::sync::Arc;

use crate::config::SuiteConfig;
use crate::types::{SpecSummary, SuiteBeginSummary, SuiteEndSummary, SuiteNodeSummary};

/// An observer of suite lifecycle events.
pub trait Reporter: Send + Sync {
    fn suite_will_begin(&self, config: &SuiteConfig, summary: &SuiteBeginSummary);
    fn before_suite_did_run(&self, summary: &SuiteNodeSummary);
    fn spec_will_run(&self, summary: &SpecSummary);
    fn spec_did_complete(&self, summary: &SpecSummary);
    fn after_suite_did_run(&self, summary: &SuiteNodeSummary);
    fn suite_did_end(&self, summary: &SuiteEndSummary);
}

/// Broadcasts each event to every registered reporter in registration
/// order.
pub struct ReporterFanout {
    reporters: Vec<Arc<dyn Reporter>>,
}

impl ReporterFanout {
    pub fn new(reporters: Vec<Arc<dyn Reporter>>) -> Self {
        Self { reporters }
    }

    pub fn suite_will_begin(&self, config: &SuiteConfig, summary: &SuiteBeginSummary) {
        for reporter in &self.reporters {
            reporter.suite_will_begin(config, summary);
        }
    }

    pub fn before_suite_did_run(&self, summary: &SuiteNodeSummary) {
        for reporter in &self.reporters {
            reporter.before_suite_did_run(summary);
        }
    }

    pub fn spec_will_run(&self, summary: &SpecSummary) {
        for reporter in &self.reporters {
            reporter.spec_will_run(summary);
        }
    }

    pub fn spec_did_complete(&self, summary: &SpecSummary) {
        for reporter in &self.reporters {
            reporter.spec_did_complete(summary);
        }
    }

    pub fn after_suite_did_run(&self, summary: &SuiteNodeSummary) {
        for reporter in &self.reporters {
            reporter.after_suite_did_run(summary);
        }
    }

    pub fn suite_did_end(&self, summary: &SuiteEndSummary) {
        for reporter in &self.reporters {
            reporter.suite_did_end(summary);
        }
    }
}
