// src/failer.rs

//! The failure signal a running unit uses to declare "I failed".
//!
//! A `Failer` is shared (via `Arc`) between the units that may raise it and
//! the code that drives them. Within one execution window only the first
//! failure is kept; draining the signal at the end of the window returns it
//! and clears the slot for the next unit.

use std::sync::Mutex;

use tracing::debug;

use crate::types::{CodeLocation, SpecFailure};

#[derive(Debug, Default)]
pub struct Failer {
    state: Mutex<Option<SpecFailure>>,
}

impl Failer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a failure with a message and source location.
    ///
    /// If the signal was already raised in this window the call is ignored;
    /// the first occurrence wins.
    pub fn fail(&self, message: impl Into<String>, location: CodeLocation) {
        self.record(SpecFailure {
            message: message.into(),
            location,
            forwarded_panic: false,
        });
    }

    /// Record a failure recovered from a panicking unit body.
    pub fn panicked(&self, message: impl Into<String>, location: CodeLocation) {
        self.record(SpecFailure {
            message: message.into(),
            location,
            forwarded_panic: true,
        });
    }

    /// Read and clear the signal at the end of an execution window.
    pub fn drain(&self) -> Option<SpecFailure> {
        self.state.lock().unwrap().take()
    }

    fn record(&self, failure: SpecFailure) {
        let mut state = self.state.lock().unwrap();
        match *state {
            Some(ref first) => {
                debug!(
                    kept = %first.message,
                    dropped = %failure.message,
                    "failure signal already raised; keeping first occurrence"
                );
            }
            None => *state = Some(failure),
        }
    }
}
