//! Pipeline latches and the hazard/forwarding unit.

/// Data hazard detection and operand forwarding.
pub mod hazards;

/// Inter-stage pipeline latch structures.
pub mod latches;

pub use latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
