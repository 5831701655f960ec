use crate::core::pipeline::{hazards, IdEx};
use crate::core::Machine;
use crate::error::SimError;
use crate::isa::Opcode;

/// Decode stage: read the register file and detect load-use hazards.
///
/// Operands are read verbatim from the register file; forwarding happens
/// only at Execute. On a load-use hazard the ID/EX latch gets a bubble
/// while IF/ID and the PC are frozen to their pre-cycle values, stalling
/// fetch and decode for exactly one cycle.
pub fn decode(cur: &Machine, next: &mut Machine) -> Result<(), SimError> {
    let inst = cur.if_id.inst;

    // jalr is decodable but has no defined behavior in this core.
    if inst.opcode == Opcode::Jalr {
        return Err(SimError::UnsupportedJalr(inst.raw as u32));
    }

    next.id_ex = IdEx {
        inst,
        pc_plus1: cur.if_id.pc_plus1,
        val_a: cur.regs.read(inst.reg_a),
        val_b: cur.regs.read(inst.reg_b),
    };

    if hazards::load_use_stall(&cur.id_ex, &cur.if_id) {
        if cur.trace {
            eprintln!("ID  load-use stall, refetching pc={}", cur.pc);
        }
        next.id_ex = IdEx::default();
        next.if_id = cur.if_id.clone();
        next.pc = cur.pc;
        next.stats.stalls_data += 1;
    }

    Ok(())
}
