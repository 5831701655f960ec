use crate::core::pipeline::IfId;
use crate::core::Machine;
use crate::error::SimError;
use crate::isa::Instruction;

/// Fetch stage: read instruction memory at PC and advance PC by one.
///
/// This is the default transition; it can be overridden later in the same
/// cycle by a load-use stall (decode freezes PC and IF/ID) or by a taken
/// branch resolved in Memory (flush and PC redirect). Addresses past the
/// loaded image read as zero up to the configured limit.
pub fn fetch(cur: &Machine, next: &mut Machine) -> Result<(), SimError> {
    let pc = cur.pc;
    if pc < 0 || pc as usize >= cur.max_words {
        return Err(SimError::PcOutOfRange(pc, cur.max_words));
    }

    let word = cur.instr_mem.get(pc as usize).copied().unwrap_or(0);

    if cur.trace {
        eprintln!("IF  pc={} inst=0x{:08X}", pc, word as u32);
    }

    next.pc = pc + 1;
    next.if_id = IfId {
        inst: Instruction::decode(word),
        pc_plus1: pc + 1,
    };
    Ok(())
}
