//! Artificial-edge insertion.
//!
//! Categories are processed in increasing priority order. Each category's
//! bucket is walked from its tail (latest occurrence) in lockstep with the
//! compute-accumulate bucket's tail; every matched pair gets one artificial
//! edge making the compute node the dependent and the memory node its
//! must-follow target, so the scheduler places the fetch no later than the
//! compute op it is paired with.
//!
//! The compute cursor is shared and monotonically decreasing across all
//! categories: the compute bucket is consumed exactly once, front-loading
//! the most latency-sensitive category against the latest compute
//! operations. Pairing for a category ends when either side exhausts.

use tracing::debug;
use vega_sdag::{DepKind, InstInfo, Region};

use crate::bucket::CategoryBuckets;
use crate::classify::InstCategory;
use crate::priority::PriorityMap;

/// Insert the interleaving edges. Returns the number of edges added.
///
/// Acyclic by construction: compute and memory nodes come from disjoint
/// buckets and every new edge points memory -> compute in the host's
/// predecessor direction; `Region::add_edge` re-checks in debug builds.
pub fn interleave<I: InstInfo>(
    region: &mut Region<I>,
    buckets: &CategoryBuckets,
    priorities: &PriorityMap,
) -> usize {
    let compute = buckets.bucket(InstCategory::ComputeAcc);
    let mut compute_cursor = compute.len();
    let mut added = 0;

    for category in priorities.in_rank_order() {
        let memory = buckets.bucket(category);
        let mut memory_cursor = memory.len();

        while memory_cursor > 0 && compute_cursor > 0 {
            memory_cursor -= 1;
            compute_cursor -= 1;
            let mem_node = memory[memory_cursor];
            let compute_node = compute[compute_cursor];
            if region.add_edge(compute_node, mem_node, DepKind::Artificial) {
                debug!(?category, "edge {compute_node} must follow {mem_node}");
                added += 1;
            }
        }
    }

    added
}
