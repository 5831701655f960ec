//! Pipeline latch structures for inter-stage communication.
//!
//! Each latch holds exactly one in-flight instruction (or a no-op bubble)
//! together with the values handed from one stage to the next stage's
//! equivalent point in the following cycle. All latches default to a
//! no-op with zeroed auxiliary fields, which is also the value injected
//! by stalls and flushes.

use crate::isa::Instruction;

/// IF/ID latch (Fetch to Decode).
#[derive(Clone, Debug, Default)]
pub struct IfId {
    /// Instruction fetched from instruction memory.
    pub inst: Instruction,
    /// PC of the instruction plus one; the base for branch targets.
    pub pc_plus1: i32,
}

/// ID/EX latch (Decode to Execute).
///
/// Operand values are the register-file reads from decode, before any
/// forwarding: forwarding is applied only as the instruction enters
/// Execute, from this cycle's snapshot of the later latches.
#[derive(Clone, Debug, Default)]
pub struct IdEx {
    /// Decoded instruction.
    pub inst: Instruction,
    /// PC of the instruction plus one.
    pub pc_plus1: i32,
    /// Register-file value of the first source operand.
    pub val_a: i32,
    /// Register-file value of the second source operand.
    pub val_b: i32,
}

/// EX/MEM latch (Execute to Memory).
#[derive(Clone, Debug, Default)]
pub struct ExMem {
    /// Instruction that just executed.
    pub inst: Instruction,
    /// Branch target, `pc_plus1 + offset`. Meaningful only for `beq`.
    pub branch_target: i32,
    /// Whether the forwarded operands compared equal.
    pub eq: bool,
    /// ALU result: sum, nor, or memory address.
    pub alu: i32,
    /// Forwarded second operand, the data for a store.
    pub store_data: i32,
}

/// MEM/WB latch (Memory to Writeback).
#[derive(Clone, Debug, Default)]
pub struct MemWb {
    /// Instruction that just finished the Memory stage.
    pub inst: Instruction,
    /// Value to commit to the register file (add/nor result or loaded
    /// word).
    pub write_data: i32,
}

/// WB/END latch (Writeback to Retire).
///
/// The register file is not read-before-write transparent within a
/// cycle: an instruction decoding in the same cycle a value is committed
/// still reads the stale register. This latch keeps the freshly
/// committed value visible to the forwarding unit for one extra cycle.
#[derive(Clone, Debug, Default)]
pub struct WbEnd {
    /// Instruction that committed last cycle.
    pub inst: Instruction,
    /// The committed value.
    pub write_data: i32,
}
