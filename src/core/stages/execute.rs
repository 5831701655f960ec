use crate::core::pipeline::{hazards, ExMem};
use crate::core::Machine;
use crate::isa::Opcode;

/// Execute stage: ALU computation and branch comparison on forwarded
/// operands.
///
/// The equality flag and branch target are computed unconditionally; the
/// trace layer decides whether they are meaningful for the opcode. The
/// load/store address uses the un-forwarded offset (immediates are never
/// in-flight) with the forwarded base operand.
pub fn execute(cur: &Machine, next: &mut Machine) {
    let id_ex = &cur.id_ex;
    let inst = id_ex.inst;

    let (a, b) = hazards::forward_operands(id_ex, &cur.ex_mem, &cur.mem_wb, &cur.wb_end);

    let alu = match inst.opcode {
        Opcode::Add => a.wrapping_add(b),
        Opcode::Nor => !(a | b),
        Opcode::Lw | Opcode::Sw => a.wrapping_add(inst.offset),
        _ => 0,
    };

    if cur.trace && !matches!(inst.opcode, Opcode::Noop) {
        eprintln!(
            "EX  {} a={} b={} alu={}",
            inst.opcode.mnemonic(),
            a,
            b,
            alu
        );
    }

    next.ex_mem = ExMem {
        inst,
        branch_target: id_ex.pc_plus1.wrapping_add(inst.offset),
        eq: a == b,
        alu,
        store_data: b,
    };
}
