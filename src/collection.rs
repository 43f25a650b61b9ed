// src/collection.rs

//! The ordered collection of specs for one run.
//!
//! Ordering is stable and significant: it determines both execution order
//! and reporting order. The collection supports a one-time pre-run trim
//! that restricts it to the subset assigned to one parallel shard while
//! remembering the pre-trim total for reporting.

use tracing::{debug, warn};

use crate::spec::Spec;

pub struct SpecCollection {
    specs: Vec<Spec>,
    count_before_trim: usize,
}

impl SpecCollection {
    /// Build a collection from specs in their declaration order.
    pub fn new(specs: Vec<Spec>) -> Self {
        let count_before_trim = specs.len();
        Self {
            specs,
            count_before_trim,
        }
    }

    /// Restrict the collection to the units assigned to `shard_index`
    /// (1-based) out of `shard_total` shards.
    ///
    /// Units are partitioned into contiguous blocks in original order: with
    /// `len = base * shard_total + rem`, shards `1..=rem` receive `base + 1`
    /// units and the remaining shards receive `base`. Read back in shard
    /// order, the shards reconstruct the original sequence exactly.
    ///
    /// An out-of-range request leaves the collection untouched.
    pub fn trim_for_sharding(&mut self, shard_total: usize, shard_index: usize) {
        if shard_total == 0 || shard_index < 1 || shard_index > shard_total {
            warn!(
                shard_total,
                shard_index, "ignoring out-of-range shard trim request"
            );
            return;
        }

        let (start, count) = shard_range(self.specs.len(), shard_total, shard_index);
        let shard: Vec<Spec> = self.specs.drain(start..start + count).collect();
        self.specs = shard;
        debug!(
            shard_total,
            shard_index,
            before = self.count_before_trim,
            after = self.specs.len(),
            "trimmed collection for sharding"
        );
    }

    /// Number of specs before any shard trim was applied.
    pub fn count_before_trim(&self) -> usize {
        self.count_before_trim
    }

    pub fn count(&self) -> usize {
        self.specs.len()
    }

    pub fn will_run_count(&self) -> usize {
        self.specs.iter().filter(|s| s.will_run()).count()
    }

    pub fn pending_count(&self) -> usize {
        self.specs.iter().filter(|s| s.is_pending()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.specs.iter().filter(|s| s.is_skipped()).count()
    }

    pub fn passed_count(&self) -> usize {
        self.specs.iter().filter(|s| s.passed()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.specs.iter().filter(|s| s.failed()).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Spec> {
        self.specs.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Spec> {
        self.specs.iter_mut()
    }
}

/// Compute the (start, count) range of the given 1-based shard.
fn shard_range(len: usize, shard_total: usize, shard_index: usize) -> (usize, usize) {
    let base = len / shard_total;
    let rem = len % shard_total;
    if shard_index <= rem {
        ((base + 1) * (shard_index - 1), base + 1)
    } else {
        (
            rem * (base + 1) + (shard_index - 1 - rem) * base,
            base,
        )
    }
}
