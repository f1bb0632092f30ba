//! GEMM hot-loop recognition.
//!
//! A structural pattern match on fixed instruction signatures, no semantic
//! analysis: the loop body must open with a shared-memory read (the operand
//! tile fetch) and the region's exit sentinel must be the loop backedge, a
//! conditional branch on the scalar condition flag. Absence of the pattern
//! is the expected common case and stays silent.

use tracing::trace;
use vega_sdag::{InstInfo, Region};

use crate::classify::{InstCategory, classify};

/// Whether `region` matches the GEMM hot-loop shape.
pub fn is_gemm_hot_loop<I: InstInfo>(region: &Region<I>) -> bool {
    let Some((_, first)) = region.first() else {
        return false;
    };
    if classify(first) != InstCategory::SharedRead {
        return false;
    }
    trace!("region opens with a shared-memory read");

    match region.exit_inst() {
        Some(exit) => exit.is_cond_branch_on_flag(),
        None => false,
    }
}
