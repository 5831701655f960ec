//! Simulation harness: the loader and the cycle-stepped run loop.

/// Machine-code file loader.
pub mod loader;

use crate::core::Machine;
use crate::error::SimError;
use crate::trace;
use std::io::Write;

/// Runs a machine to completion, writing the per-cycle trace to `out`.
///
/// The full state is printed before each cycle executes. The loop stops
/// once the halting instruction occupies the MEM/WB latch, then reports
/// the cycle total and dumps the final state.
pub fn run<W: Write>(mut machine: Machine, out: &mut W) -> Result<Machine, SimError> {
    while !machine.halted() {
        trace::write_state(&machine, out)?;
        machine = machine.step()?;
    }

    writeln!(out, "Machine halted")?;
    writeln!(out, "Total of {} cycles executed", machine.cycles)?;
    writeln!(out, "Final state of machine:")?;
    trace::write_state(&machine, out)?;

    Ok(machine)
}
