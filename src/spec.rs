// src/spec.rs

//! A single runnable unit of work ("spec") with a disposition and a label
//! path.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::debug;

use crate::failer::Failer;
use crate::types::{CodeLocation, SpecFailure, SpecState, SpecSummary};

/// Classification of a unit prior to execution.
///
/// Fixed at construction, except that `skip()` may flip a unit to `Skipped`
/// exactly once before the run begins. `Focused` units execute like
/// `Normal` ones; focus filtering happens when the collection is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Normal,
    Focused,
    Pending,
    Skipped,
}

type SpecBody = Box<dyn Fn() + Send + 'static>;

pub struct Spec {
    component_texts: Vec<String>,
    component_code_locations: Vec<CodeLocation>,
    disposition: Disposition,
    body: SpecBody,
    failer: Arc<Failer>,
    outcome: Option<SpecState>,
    failure: Option<SpecFailure>,
    run_time: Duration,
}

impl Spec {
    pub fn new(
        component_texts: Vec<String>,
        component_code_locations: Vec<CodeLocation>,
        disposition: Disposition,
        failer: Arc<Failer>,
        body: impl Fn() + Send + 'static,
    ) -> Self {
        Self {
            component_texts,
            component_code_locations,
            disposition,
            body: Box::new(body),
            failer,
            outcome: None,
            failure: None,
            run_time: Duration::ZERO,
        }
    }

    /// One-time transition to `Skipped`, applied strictly before the run.
    pub fn skip(&mut self) {
        debug_assert!(self.outcome.is_none(), "skip() after execution");
        self.disposition = Disposition::Skipped;
    }

    /// Human-readable nesting path, outermost label first.
    pub fn component_texts(&self) -> &[String] {
        &self.component_texts
    }

    pub fn is_pending(&self) -> bool {
        self.disposition == Disposition::Pending
    }

    pub fn is_skipped(&self) -> bool {
        self.disposition == Disposition::Skipped
    }

    /// Whether this unit's body will actually execute.
    pub fn will_run(&self) -> bool {
        !self.is_pending() && !self.is_skipped()
    }

    pub fn passed(&self) -> bool {
        self.outcome == Some(SpecState::Passed)
    }

    pub fn failed(&self) -> bool {
        self.outcome == Some(SpecState::Failed)
    }

    /// Execute the body once, recovering panics and consulting the failure
    /// signal to classify the outcome.
    pub fn run(&mut self) {
        debug!(spec = %self.component_texts.join(" / "), "running spec");
        let start = Instant::now();
        let result = panic::catch_unwind(AssertUnwindSafe(|| (self.body)()));
        self.run_time = start.elapsed();

        if let Err(payload) = result {
            self.failer
                .panicked(panic_message(payload.as_ref()), self.declaration_site());
        }

        match self.failer.drain() {
            Some(failure) => {
                self.failure = Some(failure);
                self.outcome = Some(SpecState::Failed);
            }
            None => self.outcome = Some(SpecState::Passed),
        }
    }

    /// Current state as surfaced in summaries.
    pub fn state(&self) -> SpecState {
        match self.disposition {
            Disposition::Pending => SpecState::Pending,
            Disposition::Skipped => SpecState::Skipped,
            _ => self.outcome.unwrap_or(SpecState::Running),
        }
    }

    pub fn summary(&self) -> SpecSummary {
        SpecSummary {
            component_texts: self.component_texts.clone(),
            component_code_locations: self.component_code_locations.clone(),
            state: self.state(),
            run_time: self.run_time,
            failure: self.failure.clone(),
        }
    }

    fn declaration_site(&self) -> CodeLocation {
        self.component_code_locations
            .last()
            .cloned()
            .unwrap_or_else(|| CodeLocation {
                file_name: "<unknown>".to_string(),
                line_number: 0,
            })
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("unit body panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("unit body panicked: {s}")
    } else {
        "unit body panicked".to_string()
    }
}
