use snafu::Snafu;
use vega_sdag::NodeId;

pub type Result<T, E = MutationError> = std::result::Result<T, E>;

/// Fatal internal-consistency failures raised after a positive hot-loop
/// match. These indicate the detector accepted a shape the mutation is not
/// defined for; they are logic errors, not recoverable runtime conditions,
/// and abort compilation of the region.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(visibility(pub))]
pub enum MutationError {
    /// A store to global memory inside the detected hot loop.
    #[snafu(display("global-memory write {node} inside a detected GEMM hot loop"))]
    GlobalWriteInHotLoop { node: NodeId },

    /// The loop's memory latency cannot be hidden by its compute work.
    #[snafu(display(
        "memory latency {demand} exceeds the hide capacity {capacity} of {compute_count} compute-accumulate ops"
    ))]
    LatencyBudgetExceeded { demand: u64, capacity: u64, compute_count: usize },
}
