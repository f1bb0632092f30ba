//! Per-category node buckets.
//!
//! One forward pass over the region classifies every ordinary node, appends
//! it to its category's bucket in original program order, and records its
//! latency estimate. The pass does not touch the graph.
//!
//! Two preconditions the detector was supposed to guarantee are re-checked
//! here and are fatal when violated (see [`MutationError`]): the loop must
//! contain no global-memory writes, and the aggregate latency of the
//! interleavable memory categories must fit under the compute engine's hide
//! capacity. A silent skip would mask a detector logic error.

use smallvec::SmallVec;
use tracing::debug;
use vega_sdag::{InstInfo, NodeId, Region};

use crate::classify::{InstCategory, classify};
use crate::error::{GlobalWriteInHotLoopSnafu, LatencyBudgetExceededSnafu, Result};
use crate::latency::LatencyModel;

/// All ordinary nodes of a region, partitioned by category.
///
/// Rebuilt per invocation and discarded afterwards; nothing persists across
/// regions.
#[derive(Debug)]
pub struct CategoryBuckets {
    buckets: [SmallVec<[NodeId; 8]>; InstCategory::COUNT],
    /// Latency weight per ordinary node, indexed by node ordinal.
    latencies: Vec<u64>,
}

impl CategoryBuckets {
    /// Bucket every ordinary node of `region` and check the fatal
    /// preconditions.
    pub fn build<I: InstInfo>(region: &Region<I>, model: &LatencyModel) -> Result<Self> {
        let mut buckets: [SmallVec<[NodeId; 8]>; InstCategory::COUNT] = Default::default();
        let mut latencies = Vec::with_capacity(region.len());

        for (id, inst) in region.iter() {
            let category = classify(inst);
            if category == InstCategory::GlobalWrite {
                return GlobalWriteInHotLoopSnafu { node: id }.fail();
            }
            buckets[category.index()].push(id);
            latencies.push(model.weight(category));
        }

        let this = Self { buckets, latencies };
        debug!(
            shared_read = this.count(InstCategory::SharedRead),
            shared_write = this.count(InstCategory::SharedWrite),
            global_read = this.count(InstCategory::GlobalRead),
            compute = this.count(InstCategory::ComputeAcc),
            barrier = this.count(InstCategory::Barrier),
            "bucketized hot-loop region"
        );

        let demand = (this.count(InstCategory::GlobalRead) as u64) * model.global_read
            + (this.count(InstCategory::SharedWrite) as u64) * model.shared_write
            + (this.count(InstCategory::SharedRead) as u64) * model.shared_read;
        let compute_count = this.count(InstCategory::ComputeAcc);
        let capacity = (compute_count as u64) * model.hide_per_compute;
        if demand > capacity {
            return LatencyBudgetExceededSnafu { demand, capacity, compute_count }.fail();
        }

        Ok(this)
    }

    /// Nodes of `category` in original program order.
    pub fn bucket(&self, category: InstCategory) -> &[NodeId] {
        &self.buckets[category.index()]
    }

    pub fn count(&self, category: InstCategory) -> usize {
        self.buckets[category.index()].len()
    }

    /// Latency estimate recorded for one node.
    pub fn latency(&self, id: NodeId) -> u64 {
        self.latencies[id.index()]
    }
}
