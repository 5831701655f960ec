//! LC-2K Cycle-Accurate Pipelined Simulator Library.
//!
//! This crate implements a cycle-accurate simulator for the LC-2K
//! architecture: a 32-bit word-addressed machine with 8 registers and a
//! small instruction set (add, nor, lw, sw, beq, halt, noop). The core is a
//! 5-stage in-order pipeline (Fetch, Decode, Execute, Memory, Writeback)
//! with an extra retire latch, data forwarding, load-use stall insertion,
//! and predict-not-taken branch handling resolved in the Memory stage.
//!
//! # Architecture
//!
//! * **Core**: the whole pipeline advances through a pure per-cycle
//!   transition — every stage reads a snapshot of the previous cycle's
//!   state and writes into the next one, which is committed atomically.
//! * **Trace**: the full architectural and pipeline state is rendered to
//!   stdout before every cycle in the exact format expected by the
//!   course tooling that consumes it.
//!
//! # Modules
//!
//! * `config`: TOML configuration loading and defaults.
//! * `core`: machine state, pipeline latches, hazard unit, and stages.
//! * `error`: fatal error types for loading and simulation.
//! * `isa`: instruction word decoding and encoding.
//! * `sim`: machine-code loader and the simulation run loop.
//! * `stats`: execution statistics collection.
//! * `trace`: per-cycle state rendering with Don't-Care field gating.

/// Configuration system for trace and memory settings.
pub mod config;

/// Machine state, pipeline latches, hazard detection, and stage logic.
pub mod core;

/// Fatal error types raised while loading or simulating.
pub mod error;

/// LC-2K instruction set: decoding, encoding, and field layout.
pub mod isa;

/// Machine-code file loader and the cycle-stepped run loop.
pub mod sim;

/// Execution statistics collection and reporting.
pub mod stats;

/// Textual state trace rendering.
pub mod trace;
