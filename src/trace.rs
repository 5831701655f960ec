//! Textual state trace rendering.
//!
//! Reproduces the diagnostic format consumed by downstream tooling: one
//! full state block per cycle plus a final dump, with per-opcode
//! "(Don't Care)" annotations on fields that carry no meaning for the
//! instruction occupying a latch. The gating is data-driven through a
//! per-opcode validity table so none of it leaks into the engine.

use crate::core::Machine;
use crate::isa::{sign_extend_16, NUM_REGS};
use std::io::{self, Write};

/// Which trace fields are meaningful for a given opcode.
struct FieldValidity {
    pc_plus1: bool,
    val_a: bool,
    val_b: bool,
    offset: bool,
    branch: bool,
    alu: bool,
    store_data: bool,
    write_data: bool,
}

/// Indexed by opcode: add, nor, lw, sw, beq, jalr, halt, noop.
const VALIDITY: [FieldValidity; 8] = [
    // add
    FieldValidity { pc_plus1: true, val_a: true, val_b: true, offset: false, branch: false, alu: true, store_data: false, write_data: true },
    // nor
    FieldValidity { pc_plus1: true, val_a: true, val_b: true, offset: false, branch: false, alu: true, store_data: false, write_data: true },
    // lw
    FieldValidity { pc_plus1: true, val_a: true, val_b: false, offset: true, branch: false, alu: true, store_data: false, write_data: true },
    // sw
    FieldValidity { pc_plus1: true, val_a: true, val_b: true, offset: true, branch: false, alu: true, store_data: true, write_data: false },
    // beq
    FieldValidity { pc_plus1: true, val_a: true, val_b: true, offset: true, branch: true, alu: false, store_data: false, write_data: false },
    // jalr
    FieldValidity { pc_plus1: true, val_a: true, val_b: false, offset: false, branch: false, alu: false, store_data: false, write_data: false },
    // halt
    FieldValidity { pc_plus1: true, val_a: false, val_b: false, offset: false, branch: false, alu: false, store_data: false, write_data: false },
    // noop
    FieldValidity { pc_plus1: false, val_a: false, val_b: false, offset: false, branch: false, alu: false, store_data: false, write_data: false },
];

/// Words whose opcode field falls outside the instruction space (data
/// words reached by a runaway fetch) show everything but pcPlus1 as
/// Don't Care.
const VALIDITY_FILL: FieldValidity = FieldValidity {
    pc_plus1: true,
    val_a: false,
    val_b: false,
    offset: false,
    branch: false,
    alu: false,
    store_data: false,
    write_data: false,
};

fn validity(word: i32) -> &'static FieldValidity {
    // Arithmetic shift, unmasked: out-of-range and negative opcode
    // fields select the .fill rendering rules.
    let op = word >> 22;
    if (0..=7).contains(&op) {
        &VALIDITY[op as usize]
    } else {
        &VALIDITY_FILL
    }
}

fn dc(valid: bool) -> &'static str {
    if valid {
        ""
    } else {
        " (Don't Care)"
    }
}

fn field0(word: i32) -> u32 {
    (word as u32 >> 19) & 0x7
}

fn field1(word: i32) -> u32 {
    (word as u32 >> 16) & 0x7
}

fn field2(word: i32) -> i32 {
    sign_extend_16((word as u32 & 0xFFFF) as i32)
}

/// Disassembles a 32-bit word into its mnemonic form.
///
/// Words whose opcode field is outside the 8 encodable opcodes render as
/// `.fill <value>`, matching how data words appear in a program listing.
pub fn disassemble(word: i32) -> String {
    const MNEMONICS: [&str; 5] = ["add", "nor", "lw", "sw", "beq"];
    match word >> 22 {
        op @ 0..=4 => format!(
            "{} {} {} {}",
            MNEMONICS[op as usize],
            field0(word),
            field1(word),
            field2(word)
        ),
        5 => format!("jalr {} {}", field0(word), field1(word)),
        6 => "halt".to_string(),
        7 => "noop".to_string(),
        _ => format!(".fill {}", word),
    }
}

fn write_instruction<W: Write>(out: &mut W, word: i32) -> io::Result<()> {
    writeln!(
        out,
        "\t\tinstruction = 0x{:08X} ( {} )",
        word as u32,
        disassemble(word)
    )
}

/// Writes the full architectural and pipeline state for one cycle.
pub fn write_state<W: Write>(m: &Machine, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "@@@")?;
    writeln!(out, "state before cycle {} starts:", m.cycles)?;
    writeln!(out, "\tpc = {}", m.pc)?;

    writeln!(out, "\tdata memory:")?;
    for i in 0..m.num_loaded {
        writeln!(out, "\t\tdataMem[ {} ] = 0x{:08X}", i, m.data_mem[i] as u32)?;
    }

    writeln!(out, "\tregisters:")?;
    for i in 0..NUM_REGS {
        writeln!(out, "\t\treg[ {} ] = {}", i, m.regs.read(i))?;
    }

    let v = validity(m.if_id.inst.raw);
    writeln!(out, "\tIF/ID pipeline register:")?;
    write_instruction(out, m.if_id.inst.raw)?;
    writeln!(out, "\t\tpcPlus1 = {}{}", m.if_id.pc_plus1, dc(v.pc_plus1))?;

    let v = validity(m.id_ex.inst.raw);
    writeln!(out, "\tID/EX pipeline register:")?;
    write_instruction(out, m.id_ex.inst.raw)?;
    writeln!(out, "\t\tpcPlus1 = {}{}", m.id_ex.pc_plus1, dc(v.pc_plus1))?;
    writeln!(out, "\t\tvalA = {}{}", m.id_ex.val_a, dc(v.val_a))?;
    writeln!(out, "\t\tvalB = {}{}", m.id_ex.val_b, dc(v.val_b))?;
    writeln!(out, "\t\toffset = {}{}", m.id_ex.inst.offset, dc(v.offset))?;

    let v = validity(m.ex_mem.inst.raw);
    writeln!(out, "\tEX/MEM pipeline register:")?;
    write_instruction(out, m.ex_mem.inst.raw)?;
    writeln!(
        out,
        "\t\tbranchTarget {}{}",
        m.ex_mem.branch_target,
        dc(v.branch)
    )?;
    writeln!(
        out,
        "\t\teq ? {}{}",
        if m.ex_mem.eq { "True" } else { "False" },
        dc(v.branch)
    )?;
    writeln!(out, "\t\taluResult = {}{}", m.ex_mem.alu, dc(v.alu))?;
    writeln!(out, "\t\tvalB = {}{}", m.ex_mem.store_data, dc(v.store_data))?;

    let v = validity(m.mem_wb.inst.raw);
    writeln!(out, "\tMEM/WB pipeline register:")?;
    write_instruction(out, m.mem_wb.inst.raw)?;
    writeln!(out, "\t\twriteData = {}{}", m.mem_wb.write_data, dc(v.write_data))?;

    let v = validity(m.wb_end.inst.raw);
    writeln!(out, "\tWB/END pipeline register:")?;
    write_instruction(out, m.wb_end.inst.raw)?;
    writeln!(out, "\t\twriteData = {}{}", m.wb_end.write_data, dc(v.write_data))?;

    writeln!(out, "end state")?;
    Ok(())
}
