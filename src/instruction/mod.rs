//! Instruction representation

use std::fmt;

pub mod decode_helper;

/// Number of architectural registers
pub const NUM_REGS: usize = 8;

/// NOOP: opcode 7 with every field zero
pub const NOOP: Instruction = Instruction(7 << 22);

/// LC-2K opcode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Opcode {
    Add = 0,
    Nor = 1,
    Lw = 2,
    Sw = 3,
    Beq = 4,
    Jalr = 5,
    Halt = 6,
    Noop = 7,
}

impl Opcode {
    /// Maps a decoded opcode value to its variant.
    /// Anything outside 0..=7 is not an instruction.
    pub fn from_bits(bits: i32) -> Option<Self> {
        use Opcode::*;
        Some(match bits {
            0 => Add,
            1 => Nor,
            2 => Lw,
            3 => Sw,
            4 => Beq,
            5 => Jalr,
            6 => Halt,
            7 => Noop,
            _ => return None,
        })
    }

    pub fn mnemonic(self) -> &'static str {
        use Opcode::*;
        match self {
            Add => "add",
            Nor => "nor",
            Lw => "lw",
            Sw => "sw",
            Beq => "beq",
            Jalr => "jalr",
            Halt => "halt",
            Noop => "noop",
        }
    }
}

/// Wrapped instruction word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Instruction(i32);

impl Instruction {
    pub fn new(raw_inst: i32) -> Self {
        Self(raw_inst)
    }

    /// Builds an instruction from its fields.
    /// `field2` is truncated to 16 bits.
    pub fn encode(opcode: Opcode, field0: u32, field1: u32, field2: i32) -> Self {
        Self(decode_helper::encode(opcode as i32, field0, field1, field2))
    }

    /// Raw representation
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Opcode value, possibly out of range
    pub fn opcode_bits(self) -> i32 {
        decode_helper::opcode(self.0)
    }

    pub fn opcode(self) -> Option<Opcode> {
        Opcode::from_bits(self.opcode_bits())
    }

    pub fn is(self, opcode: Opcode) -> bool {
        self.opcode() == Some(opcode)
    }

    pub fn field0(self) -> usize {
        decode_helper::field0(self.0) as usize
    }

    pub fn field1(self) -> usize {
        decode_helper::field1(self.0) as usize
    }

    pub fn field2(self) -> u16 {
        decode_helper::field2(self.0)
    }

    /// Sign-extended field2
    pub fn offset(self) -> i32 {
        decode_helper::sign_extend_16(self.field2())
    }

    /// Register written back by this instruction, if any.
    /// add/nor write field2, lw writes field1.
    pub fn dest_reg(self) -> Option<usize> {
        match self.opcode()? {
            Opcode::Add | Opcode::Nor => {
                let dest = self.field2() as usize;
                (dest < NUM_REGS).then_some(dest)
            }
            Opcode::Lw => Some(self.field1()),
            _ => None,
        }
    }

    /// Whether field0 or field1 names `reg`
    pub fn reads(self, reg: usize) -> bool {
        self.field0() == reg || self.field1() == reg
    }
}

impl Default for Instruction {
    fn default() -> Self {
        NOOP
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Opcode::*;
        match self.opcode() {
            Some(op @ (Add | Nor | Lw | Sw | Beq)) => write!(
                f,
                "{} {} {} {}",
                op.mnemonic(),
                self.field0(),
                self.field1(),
                self.offset()
            ),
            Some(op @ Jalr) => {
                write!(f, "{} {} {}", op.mnemonic(), self.field0(), self.field1())
            }
            Some(op @ (Halt | Noop)) => f.write_str(op.mnemonic()),
            None => write!(f, ".fill {}", self.0),
        }
    }
}
