// src/suite_node.rs

//! Suite-level units: the optional Before-Suite and After-Suite actions.
//!
//! Unlike a [`crate::spec::Spec`] a suite node has no disposition; if it is
//! present it runs exactly once and produces its own summary, independent of
//! the per-spec summaries.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use tracing::debug;

use crate::failer::Failer;
use crate::spec::panic_message;
use crate::types::{CodeLocation, SpecState, SuiteNodeSummary, SuiteNodeType};

type NodeBody = Box<dyn Fn() + Send + 'static>;

pub struct SuiteNode {
    node_type: SuiteNodeType,
    location: CodeLocation,
    body: NodeBody,
    failer: Arc<Failer>,
    summary: Option<SuiteNodeSummary>,
}

impl SuiteNode {
    pub fn new(
        node_type: SuiteNodeType,
        location: CodeLocation,
        failer: Arc<Failer>,
        body: impl Fn() + Send + 'static,
    ) -> Self {
        Self {
            node_type,
            location,
            body: Box::new(body),
            failer,
            summary: None,
        }
    }

    /// Execute the node once, returning the resulting summary.
    pub fn run(&mut self) -> SuiteNodeSummary {
        debug!(node = ?self.node_type, "running suite node");
        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| (self.body)()));
        let run_time = start.elapsed();

        if let Err(payload) = result {
            self.failer
                .panicked(panic_message(payload.as_ref()), self.location.clone());
        }

        let failure = self.failer.drain();
        let summary = SuiteNodeSummary {
            node_type: self.node_type,
            state: if failure.is_some() {
                SpecState::Failed
            } else {
                SpecState::Passed
            },
            run_time,
            failure,
        };
        self.summary = Some(summary.clone());
        summary
    }

    /// True once the node has run and did not fail.
    pub fn passed(&self) -> bool {
        self.summary.as_ref().is_some_and(SuiteNodeSummary::passed)
    }
}
