//! Instruction capability queries.
//!
//! The scheduler does not interpret machine instructions itself; the host
//! target description answers a fixed set of predicates about each one.
//! Everything a mutation pass may ask about an instruction goes through
//! this trait, which keeps the graph generic over the actual machine IR.

/// Static capability queries for one machine instruction.
///
/// All methods are pure reads of the instruction's static shape (opcode,
/// operands); none may observe scheduling state. A conforming instruction
/// answers every query, with `false`/`None` meaning "not that kind".
pub trait InstInfo {
    /// Instruction executes on the shared-memory (workgroup-local) engine.
    fn is_shared_mem(&self) -> bool;

    /// Instruction executes on the global-memory engine.
    fn is_global_mem(&self) -> bool;

    /// Instruction may read from its memory operand.
    fn may_read(&self) -> bool;

    /// Instruction may write to its memory operand.
    fn may_write(&self) -> bool;

    /// Instruction is a matrix fused multiply-accumulate on the compute engine.
    fn is_compute_accumulate(&self) -> bool;

    /// Instruction is a scalar multiply opcode.
    fn is_scalar_mul(&self) -> bool;

    /// Instruction is a conditional branch on the scalar condition flag.
    ///
    /// This is the loop-backedge signature the hot-loop detector matches on
    /// the region's exit sentinel.
    fn is_cond_branch_on_flag(&self) -> bool;

    /// Embedded textual operand, if the instruction carries one.
    ///
    /// Inline-assembly blobs expose their text here; barrier recognition
    /// scans it for a marker substring.
    fn inline_text(&self) -> Option<&str>;
}
