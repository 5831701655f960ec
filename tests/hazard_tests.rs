//! Unit tests for load-use stall detection and operand forwarding.

use lc2k_emulator::core::pipeline::hazards;
use lc2k_emulator::core::pipeline::{ExMem, IdEx, IfId, MemWb, WbEnd};
use lc2k_emulator::isa::{encode, Instruction};

/// Creates an IF/ID latch holding the given word.
fn if_id(word: i32) -> IfId {
    IfId {
        inst: Instruction::decode(word),
        pc_plus1: 1,
    }
}

/// Creates an ID/EX latch holding the given word and operand values.
fn id_ex(word: i32, val_a: i32, val_b: i32) -> IdEx {
    IdEx {
        inst: Instruction::decode(word),
        pc_plus1: 1,
        val_a,
        val_b,
    }
}

/// Creates an EX/MEM latch with an ALU result.
fn ex_mem(word: i32, alu: i32) -> ExMem {
    ExMem {
        inst: Instruction::decode(word),
        alu,
        ..Default::default()
    }
}

/// Creates a MEM/WB latch with a commit value.
fn mem_wb(word: i32, write_data: i32) -> MemWb {
    MemWb {
        inst: Instruction::decode(word),
        write_data,
    }
}

/// Creates a WB/END latch with a committed value.
fn wb_end(word: i32, write_data: i32) -> WbEnd {
    WbEnd {
        inst: Instruction::decode(word),
        write_data,
    }
}

#[test]
fn stall_when_load_destination_read_as_reg_a() {
    let ex = id_ex(encode::lw(0, 1, 0), 0, 0);
    let id = if_id(encode::add(1, 0, 2));
    assert!(hazards::load_use_stall(&ex, &id));
}

#[test]
fn stall_when_load_destination_read_as_reg_b() {
    let ex = id_ex(encode::lw(0, 1, 0), 0, 0);
    let id = if_id(encode::beq(0, 1, 5));
    assert!(hazards::load_use_stall(&ex, &id));
}

#[test]
fn no_stall_for_independent_instruction() {
    let ex = id_ex(encode::lw(0, 1, 0), 0, 0);
    let id = if_id(encode::add(2, 3, 4));
    assert!(!hazards::load_use_stall(&ex, &id));
}

#[test]
fn no_stall_when_producer_is_not_a_load() {
    let ex = id_ex(encode::add(0, 0, 1), 0, 0);
    let id = if_id(encode::add(1, 1, 2));
    assert!(!hazards::load_use_stall(&ex, &id));
}

#[test]
fn no_stall_when_load_only_matches_non_source_field() {
    // A following lw reads only reg_a; its reg_b field is a destination.
    let ex = id_ex(encode::lw(0, 1, 0), 0, 0);
    let id = if_id(encode::lw(2, 1, 0));
    assert!(!hazards::load_use_stall(&ex, &id));
}

#[test]
fn forward_from_ex_mem_wins_over_older_stages() {
    let consumer = id_ex(encode::add(1, 2, 3), 10, 20);
    let (a, b) = hazards::forward_operands(
        &consumer,
        &ex_mem(encode::add(0, 0, 1), 111),
        &mem_wb(encode::add(0, 0, 1), 222),
        &wb_end(encode::add(0, 0, 1), 333),
    );
    assert_eq!(a, 111);
    assert_eq!(b, 20);
}

#[test]
fn forward_from_mem_wb_wins_over_wb_end() {
    let consumer = id_ex(encode::add(1, 2, 3), 10, 20);
    let (a, _) = hazards::forward_operands(
        &consumer,
        &ExMem::default(),
        &mem_wb(encode::lw(0, 1, 0), 222),
        &wb_end(encode::add(0, 0, 1), 333),
    );
    assert_eq!(a, 222);
}

#[test]
fn forward_from_wb_end_when_no_newer_producer() {
    let consumer = id_ex(encode::add(1, 2, 3), 10, 20);
    let (a, _) = hazards::forward_operands(
        &consumer,
        &ExMem::default(),
        &MemWb::default(),
        &wb_end(encode::lw(0, 1, 0), 333),
    );
    assert_eq!(a, 333);
}

#[test]
fn load_in_ex_mem_does_not_forward() {
    // A load's data is not available leaving Execute; the older MEM/WB
    // value must win even though EX/MEM targets the same register.
    let consumer = id_ex(encode::add(1, 2, 3), 10, 20);
    let (a, _) = hazards::forward_operands(
        &consumer,
        &ex_mem(encode::lw(0, 1, 0), 999),
        &mem_wb(encode::add(0, 0, 1), 222),
        &WbEnd::default(),
    );
    assert_eq!(a, 222);
}

#[test]
fn register_zero_never_forwards() {
    let consumer = id_ex(encode::add(0, 0, 1), 0, 0);
    let (a, b) = hazards::forward_operands(
        &consumer,
        &ex_mem(encode::add(1, 1, 0), 999),
        &mem_wb(encode::add(1, 1, 0), 888),
        &wb_end(encode::add(1, 1, 0), 777),
    );
    assert_eq!(a, 0);
    assert_eq!(b, 0);
}

#[test]
fn store_data_operand_is_forwarded() {
    // sw carries its store data in the second operand slot.
    let consumer = id_ex(encode::sw(2, 1, 0), 5, 0);
    let (_, b) = hazards::forward_operands(
        &consumer,
        &ex_mem(encode::nor(0, 0, 1), -1),
        &MemWb::default(),
        &WbEnd::default(),
    );
    assert_eq!(b, -1);
}

#[test]
fn both_operands_forward_from_one_producer() {
    let consumer = id_ex(encode::add(1, 1, 2), 10, 10);
    let (a, b) = hazards::forward_operands(
        &consumer,
        &ex_mem(encode::add(0, 0, 1), 42),
        &MemWb::default(),
        &WbEnd::default(),
    );
    assert_eq!(a, 42);
    assert_eq!(b, 42);
}
