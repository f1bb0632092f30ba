//! Scheduling DAG mutations for the Vega backend.
//!
//! A mutation runs after the host scheduler has built a region's dependency
//! graph and before list scheduling picks the final order. It may only add
//! advisory [`DepKind::Artificial`](vega_sdag::DepKind) edges; the scheduler
//! then consumes the augmented graph.
//!
//! # Module Organization
//!
//! - [`classify`] - Instruction categories and the classifier predicates
//! - [`detect`] - GEMM hot-loop shape recognition
//! - [`latency`] - Per-category latency weights and the hide-capacity model
//! - [`bucket`] - Per-category node buckets built in one forward pass
//! - [`priority`] - Reverse-scan priority ranks for the memory categories
//! - [`interleave`] - Artificial-edge insertion pairing memory against compute
//! - [`error`] - Fatal precondition errors
//!
//! The concrete mutation shipped here is [`GemmInterleave`]: inside a tight
//! matrix-multiply-accumulate loop it spreads shared/global memory fetches
//! between the MFMA operations instead of letting the scheduler cluster
//! them, hiding memory latency behind compute throughput.

pub mod bucket;
pub mod classify;
pub mod detect;
pub mod error;
pub mod interleave;
pub mod latency;
pub mod priority;


use tracing::debug;
use vega_sdag::{InstInfo, Region};

pub use bucket::CategoryBuckets;
pub use classify::{BARRIER_MARKER, InstCategory, classify};
pub use detect::is_gemm_hot_loop;
pub use error::{MutationError, Result};
pub use interleave::interleave;
pub use latency::LatencyModel;
pub use priority::{PriorityMap, assign_priorities};

/// One graph-mutation pass over a scheduling region.
///
/// The pipeline invokes each registered mutation exactly once per region.
/// A mutation communicates purely through edges it adds; returning an error
/// aborts compilation of the region (fatal internal-consistency breach, not
/// a recoverable condition).
pub trait DagMutation<I: InstInfo> {
    /// Stable pass name for logs.
    fn name(&self) -> &'static str;

    /// Apply the mutation to `region`, adding edges in place.
    fn apply(&self, region: &mut Region<I>) -> Result<()>;
}

/// Ordered list of mutations run sequentially over a region.
pub struct MutationPipeline<I: InstInfo> {
    passes: Vec<Box<dyn DagMutation<I>>>,
}

impl<I: InstInfo> MutationPipeline<I> {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn push(&mut self, pass: Box<dyn DagMutation<I>>) {
        self.passes.push(pass);
    }

    /// Run every registered mutation in order. The first fatal error stops
    /// the pipeline; the region must be considered poisoned afterwards.
    pub fn run(&self, region: &mut Region<I>) -> Result<()> {
        for pass in &self.passes {
            debug!(pass = pass.name(), "running DAG mutation");
            pass.apply(region)?;
        }
        Ok(())
    }
}

impl<I: InstInfo> Default for MutationPipeline<I> {
    fn default() -> Self {
        Self::new()
    }
}

/// GEMM hot-loop interleaving mutation.
///
/// Pipeline per region:
/// 1. [`is_gemm_hot_loop`] gates everything; no match means a silent no-op.
/// 2. [`CategoryBuckets::build`] buckets nodes and checks the fatal
///    preconditions (no global writes, enough compute to hide against).
/// 3. [`assign_priorities`] ranks the memory categories by how close their
///    last occurrence sits to the loop end.
/// 4. [`interleave`] pairs each ranked category's bucket tail against the
///    shared compute-accumulate cursor, adding one artificial edge per pair.
///
/// A single invocation per freshly built region is assumed; re-applying to
/// an already mutated region is outside the contract.
pub struct GemmInterleave {
    model: LatencyModel,
}

impl GemmInterleave {
    pub fn new() -> Self {
        Self { model: LatencyModel::default() }
    }

    /// Use a non-default latency model (tuning, not correctness).
    pub fn with_model(model: LatencyModel) -> Self {
        Self { model }
    }

    /// Boxed factory for pipeline registration.
    pub fn boxed<I: InstInfo>() -> Box<dyn DagMutation<I>> {
        Box::new(Self::new())
    }
}

impl Default for GemmInterleave {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: InstInfo> DagMutation<I> for GemmInterleave {
    fn name(&self) -> &'static str {
        "gemm-interleave"
    }

    fn apply(&self, region: &mut Region<I>) -> Result<()> {
        if !is_gemm_hot_loop(region) {
            return Ok(());
        }
        debug!(nodes = region.len(), "inside a GEMM hot loop region");
        region.dump(|inst| format!("{:?}", classify(inst)));

        let buckets = CategoryBuckets::build(region, &self.model)?;
        let priorities = assign_priorities(region);
        let added = interleave(region, &buckets, &priorities);
        debug!(added, "interleaving edges inserted");
        Ok(())
    }
}
