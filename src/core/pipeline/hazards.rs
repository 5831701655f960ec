//! Data hazard detection and register forwarding.
//!
//! Two mechanisms resolve read-after-write hazards:
//!
//! * a one-cycle stall when a load's destination is read by the very next
//!   instruction (the loaded value does not exist until after Memory), and
//! * operand forwarding into Execute from the EX/MEM, MEM/WB, and WB/END
//!   latches for every other producer/consumer distance.

use crate::core::pipeline::latches::{ExMem, IdEx, IfId, MemWb, WbEnd};
use crate::isa::Opcode;

/// Checks for a load-use hazard between the instruction about to execute
/// and the instruction just decoded.
///
/// Returns `true` when the ID/EX latch holds a `lw` whose destination is
/// a source operand of the IF/ID instruction. The engine then injects a
/// bubble into ID/EX and freezes fetch and decode for one cycle.
pub fn load_use_stall(id_ex: &IdEx, if_id: &IfId) -> bool {
    if id_ex.inst.opcode != Opcode::Lw {
        return false;
    }
    let dest = id_ex.inst.reg_b;
    let next = &if_id.inst;
    (next.reads_reg_a() && next.reg_a == dest) || (next.reads_reg_b() && next.reg_b == dest)
}

/// Supplies up-to-date operand values to the Execute stage.
///
/// Priority, highest last: WB/END, then MEM/WB, then EX/MEM, so fresher
/// producers overwrite older ones. Only add/nor results are available in
/// EX/MEM (a load's data has not been read yet at that point). Register 0
/// never triggers a forward. The second operand doubles as the store-data
/// path, so `sw` picks up forwarded data here as well.
///
/// Returns the `(operand_a, operand_b)` pair to execute with.
pub fn forward_operands(
    id_ex: &IdEx,
    ex_mem: &ExMem,
    mem_wb: &MemWb,
    wb_end: &WbEnd,
) -> (i32, i32) {
    let mut a = id_ex.val_a;
    let mut b = id_ex.val_b;
    let src_a = id_ex.inst.reg_a;
    let src_b = id_ex.inst.reg_b;

    let mut apply = |dest: Option<usize>, val: i32| {
        if let Some(dest) = dest {
            if dest != 0 {
                if dest == src_a {
                    a = val;
                }
                if dest == src_b {
                    b = val;
                }
            }
        }
    };

    apply(wb_end.inst.commit_dest(), wb_end.write_data);
    apply(mem_wb.inst.commit_dest(), mem_wb.write_data);
    apply(ex_mem.inst.alu_dest(), ex_mem.alu);

    (a, b)
}
