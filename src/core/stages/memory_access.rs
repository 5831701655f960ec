use crate::core::pipeline::{ExMem, IdEx, IfId, MemWb};
use crate::core::Machine;
use crate::error::SimError;
use crate::isa::Opcode;

fn data_index(addr: i32, limit: usize) -> Result<usize, SimError> {
    if addr < 0 || addr as usize >= limit {
        Err(SimError::AddressOutOfRange(addr, limit))
    } else {
        Ok(addr as usize)
    }
}

/// Memory stage: data memory access and branch resolution.
///
/// Stores write the forwarded store data at the computed address, growing
/// data memory as needed; loads read it (zero past the image); add/nor
/// pass their ALU result through as the commit value. A `beq` whose
/// operands compared equal resolves here: PC is redirected to the branch
/// target and the three younger latches (IF/ID, ID/EX, EX/MEM) are reset
/// to no-ops, discarding the speculatively fetched instructions.
pub fn memory_access(cur: &Machine, next: &mut Machine) -> Result<(), SimError> {
    let ex_mem = &cur.ex_mem;
    let inst = ex_mem.inst;

    let mut write_data = 0;
    match inst.opcode {
        Opcode::Sw => {
            let idx = data_index(ex_mem.alu, cur.max_words)?;
            if idx >= next.data_mem.len() {
                next.data_mem.resize(idx + 1, 0);
            }
            next.data_mem[idx] = ex_mem.store_data;
            next.stats.inst_store += 1;
            if cur.trace {
                eprintln!("MEM dataMem[{}] <= {}", idx, ex_mem.store_data);
            }
        }
        Opcode::Lw => {
            let idx = data_index(ex_mem.alu, cur.max_words)?;
            write_data = cur.data_mem.get(idx).copied().unwrap_or(0);
            next.stats.inst_load += 1;
            if cur.trace {
                eprintln!("MEM {} <= dataMem[{}]", write_data, idx);
            }
        }
        Opcode::Add | Opcode::Nor => write_data = ex_mem.alu,
        _ => {}
    }

    next.mem_wb = MemWb { inst, write_data };

    if inst.opcode == Opcode::Beq && ex_mem.eq {
        if cur.trace {
            eprintln!("MEM taken beq, flushing and redirecting pc={}", ex_mem.branch_target);
        }
        next.pc = ex_mem.branch_target;
        next.if_id = IfId::default();
        next.id_ex = IdEx::default();
        next.ex_mem = ExMem::default();
        next.stats.branch_mispredictions += 1;
    }

    Ok(())
}
