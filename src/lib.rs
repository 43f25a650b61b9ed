// src/lib.rs

//! `specrun` — a suite execution engine.
//!
//! Given an ordered [`SpecCollection`] of runnable units and optional
//! before-/after-suite units, a [`SpecRunner`] drives them in sequence,
//! tracks pass/fail/pending/skip outcomes, fans lifecycle events out to
//! every registered [`Reporter`], and decides overall suite success.
//!
//! The run is single-threaded by design; parallelism is achieved by running
//! independent engine instances, each given a disjoint shard of the same
//! collection via [`SpecCollection::trim_for_sharding`].

pub mod collection;
pub mod config;
pub mod errors;
pub mod failer;
pub mod reporter;
pub mod runner;
pub mod spec;
pub mod suite_node;
pub mod types;
pub mod writer;

pub use collection::SpecCollection;
pub use config::SuiteConfig;
pub use failer::Failer;
pub use reporter::{Reporter, ReporterFanout};
pub use runner::SpecRunner;
pub use spec::{Disposition, Spec};
pub use suite_node::SuiteNode;
pub use types::{
    CodeLocation, SpecFailure, SpecState, SpecSummary, SuiteBeginSummary, SuiteEndSummary,
    SuiteNodeSummary, SuiteNodeType,
};
pub use writer::{BufferingWriter, OutputBuffer};
