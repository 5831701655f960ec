//! Simulation statistics collection and reporting.
//!
//! Counters accumulate as the pipeline runs and are reported to stderr
//! after halt so the stdout state trace stays byte-exact.

/// Execution statistics for one simulation run.
#[derive(Debug, Clone, Default)]
pub struct SimStats {
    /// Instructions (other than pipeline bubbles) that reached writeback.
    pub instructions_retired: u64,
    /// Loads that reached the Memory stage.
    pub inst_load: u64,
    /// Stores that reached the Memory stage.
    pub inst_store: u64,
    /// One-cycle bubbles inserted for load-use hazards.
    pub stalls_data: u64,
    /// Taken branches, each costing a three-slot pipeline flush under
    /// the predict-not-taken policy.
    pub branch_mispredictions: u64,
}

impl SimStats {
    /// Prints a summary block to stderr.
    pub fn print(&self, cycles: u32) {
        eprintln!("--- Simulation Statistics ---");
        eprintln!("Cycles:            {}", cycles);
        eprintln!("Instructions:      {}", self.instructions_retired);
        eprintln!("Loads:             {}", self.inst_load);
        eprintln!("Stores:            {}", self.inst_store);
        eprintln!("Load-use stalls:   {}", self.stalls_data);
        eprintln!("Branch flushes:    {}", self.branch_mispredictions);
        if cycles > 0 {
            eprintln!(
                "IPC:               {:.3}",
                self.instructions_retired as f64 / cycles as f64
            );
        }
    }
}
