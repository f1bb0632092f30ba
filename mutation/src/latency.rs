//! Per-category latency estimates.
//!
//! The weights are tuning heuristics derived from hardware latency figures
//! for one accelerator generation. They must stay consistent within a single
//! pass invocation but are configuration, not law; callers may substitute
//! their own model.

use crate::classify::InstCategory;

/// Estimated issue-to-result latency per instruction category, in cycles,
/// plus the latency each compute-accumulate operation can hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyModel {
    pub shared_read: u64,
    pub shared_write: u64,
    pub global_read: u64,
    pub global_write: u64,
    pub scalar_mul: u64,
    pub barrier: u64,
    pub other: u64,
    /// Latency one compute-accumulate operation hides while it executes.
    pub hide_per_compute: u64,
}

impl Default for LatencyModel {
    fn default() -> Self {
        Self {
            shared_read: 4,
            shared_write: 30,
            global_read: 30,
            global_write: 30,
            scalar_mul: 8,
            barrier: 55,
            other: 4,
            hide_per_compute: 56,
        }
    }
}

impl LatencyModel {
    /// Weight assigned to each node of `category`.
    ///
    /// Compute-accumulate nodes carry no memory latency of their own; their
    /// contribution is the `hide_per_compute` capacity instead.
    pub fn weight(&self, category: InstCategory) -> u64 {
        match category {
            InstCategory::SharedRead => self.shared_read,
            InstCategory::SharedWrite => self.shared_write,
            InstCategory::GlobalRead => self.global_read,
            InstCategory::GlobalWrite => self.global_write,
            InstCategory::ScalarMul => self.scalar_mul,
            InstCategory::Barrier => self.barrier,
            InstCategory::ComputeAcc => 0,
            InstCategory::Other => self.other,
        }
    }
}
