//! Instruction categories and the classifier.
//!
//! Classification is derived, never stored: a pure function of the
//! instruction's static capability predicates, recomputed on demand.

use vega_sdag::InstInfo;

/// Marker substring identifying a workgroup barrier embedded in inline
/// assembly text. A narrow signature match, not a general barrier
/// abstraction; absence of the marker is simply a non-match.
pub const BARRIER_MARKER: &str = "s_barrier";

/// Category of one instruction inside a scheduling region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstCategory {
    /// Read from workgroup-local shared memory.
    SharedRead,
    /// Write to workgroup-local shared memory.
    SharedWrite,
    /// Read from off-chip global memory.
    GlobalRead,
    /// Write to off-chip global memory (unsupported inside the hot loop).
    GlobalWrite,
    /// Matrix fused multiply-accumulate on the compute engine.
    ComputeAcc,
    /// Scalar multiply.
    ScalarMul,
    /// Workgroup synchronization barrier.
    Barrier,
    /// Anything else.
    Other,
}

impl InstCategory {
    pub const COUNT: usize = 8;

    /// Dense index for per-category tables.
    pub fn index(self) -> usize {
        match self {
            InstCategory::SharedRead => 0,
            InstCategory::SharedWrite => 1,
            InstCategory::GlobalRead => 2,
            InstCategory::GlobalWrite => 3,
            InstCategory::ComputeAcc => 4,
            InstCategory::ScalarMul => 5,
            InstCategory::Barrier => 6,
            InstCategory::Other => 7,
        }
    }

    /// Categories eligible for priority ranking and interleaving.
    pub fn is_interleavable_memory(self) -> bool {
        matches!(self, InstCategory::SharedWrite | InstCategory::SharedRead | InstCategory::GlobalRead)
    }
}

/// Classify one instruction from its capability predicates.
///
/// Total: every instruction maps to exactly one category, defaulting to
/// [`InstCategory::Other`]. Write is checked before read so read-modify-write
/// memory ops land on the write side.
pub fn classify<I: InstInfo>(inst: &I) -> InstCategory {
    if inst.is_compute_accumulate() {
        return InstCategory::ComputeAcc;
    }
    if inst.is_shared_mem() {
        if inst.may_write() {
            return InstCategory::SharedWrite;
        }
        if inst.may_read() {
            return InstCategory::SharedRead;
        }
    }
    if inst.is_global_mem() {
        if inst.may_write() {
            return InstCategory::GlobalWrite;
        }
        if inst.may_read() {
            return InstCategory::GlobalRead;
        }
    }
    if inst.is_scalar_mul() {
        return InstCategory::ScalarMul;
    }
    if let Some(text) = inst.inline_text()
        && text.contains(BARRIER_MARKER)
    {
        return InstCategory::Barrier;
    }
    InstCategory::Other
}
