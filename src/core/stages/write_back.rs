use crate::core::pipeline::WbEnd;
use crate::core::Machine;
use crate::isa::Opcode;

/// Writeback stage: commit to the register file and expose the value for
/// one extra cycle of forwarding.
///
/// Add/nor write their destination field, lw writes its regB field;
/// register 0 is guarded by the register file itself. The instruction and
/// value are also copied into WB/END so the forwarding unit can serve
/// consumers that read the register file before this write landed.
pub fn write_back(cur: &Machine, next: &mut Machine) {
    let mem_wb = &cur.mem_wb;

    next.wb_end = WbEnd {
        inst: mem_wb.inst,
        write_data: mem_wb.write_data,
    };

    if let Some(dest) = mem_wb.inst.commit_dest() {
        if cur.trace {
            eprintln!("WB  r{} <= {}", dest, mem_wb.write_data);
        }
        next.regs.write(dest, mem_wb.write_data);
    }

    if mem_wb.inst.opcode != Opcode::Noop {
        next.stats.instructions_retired += 1;
    }
}
