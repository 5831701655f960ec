//! CPU core: machine state, pipeline latches, hazards, and stage logic.

/// Architectural plus pipeline state and the per-cycle transition.
pub mod machine;

/// Pipeline latch structures and the hazard/forwarding unit.
pub mod pipeline;

/// General-purpose register file.
pub mod register_file;

/// The five pipeline stage functions.
pub mod stages;

pub use machine::Machine;
