//! LC-2K General-Purpose Register File.
//!
//! Eight registers, with register 0 hardwired to zero: reads always
//! return 0 and writes are discarded.

use crate::isa::NUM_REGS;

/// General-purpose register file.
#[derive(Debug, Clone, Default)]
pub struct RegisterFile {
    regs: [i32; NUM_REGS],
}

impl RegisterFile {
    /// Creates a register file with every register set to zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a register. Register 0 always reads as 0.
    pub fn read(&self, idx: usize) -> i32 {
        if idx == 0 {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Writes a register. Writes to register 0 are silently discarded.
    pub fn write(&mut self, idx: usize, val: i32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }
}
