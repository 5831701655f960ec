//! Machine state and the per-cycle pipeline transition.

use crate::config::Config;
use crate::core::pipeline::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::core::register_file::RegisterFile;
use crate::core::stages;
use crate::error::SimError;
use crate::isa::Opcode;
use crate::stats::SimStats;

/// Complete machine state: architectural state plus every pipeline latch.
///
/// The simulated pipeline concurrency comes from a double-buffering
/// discipline: [`Machine::step`] computes a whole new `Machine` from an
/// immutable snapshot of the current one, so no stage can observe a value
/// another stage already updated within the same cycle.
#[derive(Clone, Debug)]
pub struct Machine {
    /// Cycles executed so far.
    pub cycles: u32,
    /// Program counter, a word index into instruction memory.
    pub pc: i32,
    /// Instruction memory, one word per address.
    pub instr_mem: Vec<i32>,
    /// Data memory. Starts as a copy of the program image and grows as
    /// stores touch addresses beyond it.
    pub data_mem: Vec<i32>,
    /// Words in the loaded program image; bounds the trace's data-memory
    /// dump.
    pub num_loaded: usize,
    /// General-purpose registers.
    pub regs: RegisterFile,

    /// Fetch to Decode latch.
    pub if_id: IfId,
    /// Decode to Execute latch.
    pub id_ex: IdEx,
    /// Execute to Memory latch.
    pub ex_mem: ExMem,
    /// Memory to Writeback latch.
    pub mem_wb: MemWb,
    /// Writeback to Retire latch.
    pub wb_end: WbEnd,

    /// Execution counters.
    pub stats: SimStats,
    /// Emit per-stage diagnostics to stderr.
    pub trace: bool,
    /// Upper bound of the word address space.
    pub max_words: usize,
}

impl Machine {
    /// Builds the initial machine state for a loaded program image.
    ///
    /// Both memory views start as copies of the image; registers, the PC,
    /// and the cycle counter are zero; every latch holds a no-op.
    pub fn new(program: &[i32], config: &Config) -> Self {
        Self {
            cycles: 0,
            pc: 0,
            instr_mem: program.to_vec(),
            data_mem: program.to_vec(),
            num_loaded: program.len(),
            regs: RegisterFile::new(),
            if_id: IfId::default(),
            id_ex: IdEx::default(),
            ex_mem: ExMem::default(),
            mem_wb: MemWb::default(),
            wb_end: WbEnd::default(),
            stats: SimStats::default(),
            trace: config.general.trace_pipeline,
            max_words: config.memory.max_words,
        }
    }

    /// Whether the halting instruction has reached the MEM/WB latch. No
    /// further cycle is started once this holds.
    pub fn halted(&self) -> bool {
        self.mem_wb.inst.opcode == Opcode::Halt
    }

    /// Computes the next cycle's complete state from this one.
    ///
    /// Every stage reads exclusively from `self` and writes exclusively
    /// into the returned state, so the five transitions of one cycle all
    /// see the same pre-cycle snapshot. Stage order matters only for the
    /// two exceptional transitions: a taken branch resolved in Memory
    /// overrides whatever Fetch and Decode produced this cycle.
    pub fn step(&self) -> Result<Machine, SimError> {
        let mut next = self.clone();
        next.cycles = self.cycles + 1;

        stages::fetch(self, &mut next)?;
        stages::decode(self, &mut next)?;
        stages::execute(self, &mut next);
        stages::memory_access(self, &mut next)?;
        stages::write_back(self, &mut next);

        Ok(next)
    }
}
