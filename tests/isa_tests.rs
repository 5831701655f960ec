//! Instruction decoding and encoding tests.

use lc2k_emulator::isa::{encode, sign_extend_16, Instruction, Opcode, NOOP_WORD};

#[test]
fn decode_r_type_fields() {
    let inst = Instruction::decode(encode::add(1, 2, 3));
    assert_eq!(inst.opcode, Opcode::Add);
    assert_eq!(inst.reg_a, 1);
    assert_eq!(inst.reg_b, 2);
    assert_eq!(inst.dest, 3);
}

#[test]
fn decode_i_type_negative_offset() {
    let inst = Instruction::decode(encode::lw(4, 5, -1));
    assert_eq!(inst.opcode, Opcode::Lw);
    assert_eq!(inst.reg_a, 4);
    assert_eq!(inst.reg_b, 5);
    assert_eq!(inst.offset, -1);
}

#[test]
fn decode_i_type_positive_offset() {
    let inst = Instruction::decode(encode::beq(0, 7, 32767));
    assert_eq!(inst.opcode, Opcode::Beq);
    assert_eq!(inst.offset, 32767);
}

#[test]
fn sign_extension_boundaries() {
    assert_eq!(sign_extend_16(0x0000), 0);
    assert_eq!(sign_extend_16(0x7FFF), 32767);
    assert_eq!(sign_extend_16(0x8000), -32768);
    assert_eq!(sign_extend_16(0xFFFF), -1);
}

#[test]
fn noop_and_halt_encodings() {
    assert_eq!(encode::noop(), NOOP_WORD);
    assert_eq!(NOOP_WORD, 0x01C0_0000);
    assert_eq!(encode::halt(), 0x0180_0000);
    assert_eq!(Instruction::noop().opcode, Opcode::Noop);
}

#[test]
fn decode_is_total_over_opcode_space() {
    for bits in 0..8u32 {
        let word = (bits << 22) as i32;
        let inst = Instruction::decode(word);
        assert_eq!(inst.opcode as u32, bits);
    }
    assert_eq!(Opcode::from_bits(5), Opcode::Jalr);
}

#[test]
fn commit_destinations() {
    assert_eq!(Instruction::decode(encode::add(1, 2, 3)).commit_dest(), Some(3));
    assert_eq!(Instruction::decode(encode::nor(1, 2, 4)).commit_dest(), Some(4));
    assert_eq!(Instruction::decode(encode::lw(1, 5, 0)).commit_dest(), Some(5));
    assert_eq!(Instruction::decode(encode::sw(1, 5, 0)).commit_dest(), None);
    assert_eq!(Instruction::decode(encode::beq(1, 5, 0)).commit_dest(), None);
    assert_eq!(Instruction::decode(encode::halt()).commit_dest(), None);
}

#[test]
fn only_alu_results_forward_from_execute() {
    assert_eq!(Instruction::decode(encode::add(1, 2, 3)).alu_dest(), Some(3));
    assert_eq!(Instruction::decode(encode::lw(1, 5, 0)).alu_dest(), None);
}

#[test]
fn source_operand_usage() {
    let lw = Instruction::decode(encode::lw(1, 2, 0));
    assert!(lw.reads_reg_a());
    assert!(!lw.reads_reg_b());

    let beq = Instruction::decode(encode::beq(1, 2, 0));
    assert!(beq.reads_reg_a());
    assert!(beq.reads_reg_b());

    let halt = Instruction::decode(encode::halt());
    assert!(!halt.reads_reg_a());
    assert!(!halt.reads_reg_b());
}
