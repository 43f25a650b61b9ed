// src/types.rs

//! Shared value types: code locations, spec states, and the immutable
//! summary structs handed to reporters.
//!
//! Summaries derive `Serialize`/`Deserialize` so that report sinks can emit
//! them as machine-readable records without reaching into engine internals.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Source location attached to failures and spec declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeLocation {
    pub file_name: String,
    pub line_number: u32,
}

impl CodeLocation {
    /// Capture the caller's source location.
    #[track_caller]
    pub fn here() -> Self {
        let loc = std::panic::Location::caller();
        Self {
            file_name: loc.file().to_string(),
            line_number: loc.line(),
        }
    }
}

impl fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file_name, self.line_number)
    }
}

/// State of a spec as surfaced in summaries.
///
/// `Running` only ever appears in will-run summaries and in the
/// current-spec slot; by the time a completion summary is emitted every
/// spec is in one of the four terminal states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpecState {
    Running,
    Passed,
    Failed,
    Pending,
    Skipped,
}

/// A recorded failure: the message handed to the failure signal plus where
/// it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecFailure {
    pub message: String,
    pub location: CodeLocation,
    /// True when the failure was recovered from a panicking unit body
    /// rather than declared through `Failer::fail`.
    pub forwarded_panic: bool,
}

/// Which suite-level unit a [`SuiteNodeSummary`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuiteNodeType {
    BeforeSuite,
    AfterSuite,
}

/// Per-spec snapshot emitted both as the will-run notification and as the
/// completion notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecSummary {
    /// Human-readable nesting path of the spec, outermost label first.
    pub component_texts: Vec<String>,
    pub component_code_locations: Vec<CodeLocation>,
    pub state: SpecState,
    pub run_time: Duration,
    pub failure: Option<SpecFailure>,
}

/// Outcome of a Before-Suite or After-Suite unit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteNodeSummary {
    pub node_type: SuiteNodeType,
    pub state: SpecState,
    pub run_time: Duration,
    pub failure: Option<SpecFailure>,
}

impl SuiteNodeSummary {
    pub fn passed(&self) -> bool {
        self.state == SpecState::Passed
    }
}

/// Snapshot emitted to every reporter before any unit runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteBeginSummary {
    pub suite_description: String,
    /// Random per-run token, four groups of four lowercase hex digits.
    pub suite_id: String,
    pub specs_before_sharding: usize,
    pub total_specs: usize,
    pub will_run_count: usize,
    pub pending_count: usize,
    pub skipped_count: usize,
}

/// Snapshot emitted to every reporter after the last unit has finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteEndSummary {
    pub suite_description: String,
    pub suite_id: String,
    pub specs_before_sharding: usize,
    pub total_specs: usize,
    pub will_run_count: usize,
    pub pending_count: usize,
    pub skipped_count: usize,
    pub passed_count: usize,
    pub failed_count: usize,
    pub suite_succeeded: bool,
    pub run_time: Duration,
}
