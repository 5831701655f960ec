//! LC-2K Instruction Set Architecture definitions.
//!
//! An LC-2K instruction is a 32-bit word: bits 24..22 hold the opcode,
//! bits 21..19 and 18..16 hold the two register fields, and bits 15..0
//! hold either a 3-bit destination register (R-type) or a 16-bit
//! two's-complement offset (I-type). Decoding is total over the 3-bit
//! opcode space; `jalr` is encodable but not implemented by the pipeline.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 8;

/// Encoding of the canonical no-op word (`noop` with all fields zero).
pub const NOOP_WORD: i32 = (Opcode::Noop as i32) << 22;

/// LC-2K opcodes, in encoding order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Opcode {
    /// R-type: dest = regA + regB.
    Add = 0,
    /// R-type: dest = ~(regA | regB).
    Nor = 1,
    /// I-type: regB = dataMem[regA + offset].
    Lw = 2,
    /// I-type: dataMem[regA + offset] = regB.
    Sw = 3,
    /// I-type: if regA == regB, branch to pc + 1 + offset.
    Beq = 4,
    /// Register-indirect jump. Encodable but unsupported by this core.
    Jalr = 5,
    /// Stops the machine once it reaches the MEM/WB latch.
    Halt = 6,
    /// No operation.
    #[default]
    Noop = 7,
}

impl Opcode {
    /// Decodes the low three bits into an opcode. Total: every 3-bit
    /// value maps to a variant.
    pub fn from_bits(bits: u32) -> Self {
        match bits & 0x7 {
            0 => Opcode::Add,
            1 => Opcode::Nor,
            2 => Opcode::Lw,
            3 => Opcode::Sw,
            4 => Opcode::Beq,
            5 => Opcode::Jalr,
            6 => Opcode::Halt,
            _ => Opcode::Noop,
        }
    }

    /// Assembly mnemonic for this opcode.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Opcode::Add => "add",
            Opcode::Nor => "nor",
            Opcode::Lw => "lw",
            Opcode::Sw => "sw",
            Opcode::Beq => "beq",
            Opcode::Jalr => "jalr",
            Opcode::Halt => "halt",
            Opcode::Noop => "noop",
        }
    }
}

/// Sign-extends a 16-bit two's-complement field to a full word.
pub fn sign_extend_16(field: i32) -> i32 {
    if field & 0x8000 != 0 {
        field - 0x10000
    } else {
        field
    }
}

/// A decoded LC-2K instruction.
///
/// Produced once by [`Instruction::decode`] and carried through every
/// pipeline latch so no stage re-derives bit fields. The raw word is kept
/// for trace rendering.
#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    /// The undecoded 32-bit word.
    pub raw: i32,
    /// Opcode from bits 24..22.
    pub opcode: Opcode,
    /// First register field (bits 21..19); source operand A.
    pub reg_a: usize,
    /// Second register field (bits 18..16); source operand B, or the
    /// destination of a `lw`.
    pub reg_b: usize,
    /// Destination register field (low 3 bits) for R-type instructions.
    pub dest: usize,
    /// Sign-extended 16-bit offset for I-type instructions.
    pub offset: i32,
}

impl Instruction {
    /// Decodes a 32-bit word. Total: never fails, even for `jalr` or
    /// data words (the pipeline rejects `jalr` when it reaches decode).
    pub fn decode(word: i32) -> Self {
        let bits = word as u32;
        Self {
            raw: word,
            opcode: Opcode::from_bits(bits >> 22),
            reg_a: ((bits >> 19) & 0x7) as usize,
            reg_b: ((bits >> 16) & 0x7) as usize,
            dest: (bits & 0x7) as usize,
            offset: sign_extend_16((bits & 0xFFFF) as i32),
        }
    }

    /// The canonical no-op instruction used for bubbles and flushes.
    pub fn noop() -> Self {
        Self::decode(NOOP_WORD)
    }

    /// Whether this instruction reads `reg_a` as a source operand.
    pub fn reads_reg_a(&self) -> bool {
        matches!(
            self.opcode,
            Opcode::Add | Opcode::Nor | Opcode::Lw | Opcode::Sw | Opcode::Beq
        )
    }

    /// Whether this instruction reads `reg_b` as a source operand.
    pub fn reads_reg_b(&self) -> bool {
        matches!(
            self.opcode,
            Opcode::Add | Opcode::Nor | Opcode::Sw | Opcode::Beq
        )
    }

    /// Register written at writeback, if any: the dest field for
    /// `add`/`nor`, `reg_b` for `lw`.
    pub fn commit_dest(&self) -> Option<usize> {
        match self.opcode {
            Opcode::Add | Opcode::Nor => Some(self.dest),
            Opcode::Lw => Some(self.reg_b),
            _ => None,
        }
    }

    /// Register whose value is already available leaving Execute. Only
    /// `add`/`nor` results exist at that point; a load's data does not
    /// appear until after the Memory stage.
    pub fn alu_dest(&self) -> Option<usize> {
        match self.opcode {
            Opcode::Add | Opcode::Nor => Some(self.dest),
            _ => None,
        }
    }
}

impl Default for Instruction {
    fn default() -> Self {
        Self::noop()
    }
}

/// Instruction encoders, mainly used to assemble test programs.
pub mod encode {
    use super::{Opcode, NOOP_WORD};

    fn r_type(op: Opcode, reg_a: usize, reg_b: usize, dest: usize) -> i32 {
        (((op as u32) << 22)
            | ((reg_a as u32 & 0x7) << 19)
            | ((reg_b as u32 & 0x7) << 16)
            | (dest as u32 & 0x7)) as i32
    }

    fn i_type(op: Opcode, reg_a: usize, reg_b: usize, offset: i32) -> i32 {
        (((op as u32) << 22)
            | ((reg_a as u32 & 0x7) << 19)
            | ((reg_b as u32 & 0x7) << 16)
            | (offset as u32 & 0xFFFF)) as i32
    }

    /// `add regA regB dest`
    pub fn add(reg_a: usize, reg_b: usize, dest: usize) -> i32 {
        r_type(Opcode::Add, reg_a, reg_b, dest)
    }

    /// `nor regA regB dest`
    pub fn nor(reg_a: usize, reg_b: usize, dest: usize) -> i32 {
        r_type(Opcode::Nor, reg_a, reg_b, dest)
    }

    /// `lw regA regB offset` — regB = dataMem[regA + offset]
    pub fn lw(reg_a: usize, reg_b: usize, offset: i32) -> i32 {
        i_type(Opcode::Lw, reg_a, reg_b, offset)
    }

    /// `sw regA regB offset` — dataMem[regA + offset] = regB
    pub fn sw(reg_a: usize, reg_b: usize, offset: i32) -> i32 {
        i_type(Opcode::Sw, reg_a, reg_b, offset)
    }

    /// `beq regA regB offset`
    pub fn beq(reg_a: usize, reg_b: usize, offset: i32) -> i32 {
        i_type(Opcode::Beq, reg_a, reg_b, offset)
    }

    /// `halt`
    pub fn halt() -> i32 {
        (Opcode::Halt as i32) << 22
    }

    /// `noop`
    pub fn noop() -> i32 {
        NOOP_WORD
    }
}
