//! ALU implementation

use crate::instruction::Opcode;

/// Computes the ALU result for an opcode.
/// Returns `None` for opcodes that do not drive the ALU, in which case the
/// EX/MEM register keeps its previous result.
pub fn alu(opcode: Option<Opcode>, val_a: i32, val_b: i32, offset: i32) -> Option<i32> {
    use Opcode::*;
    match opcode? {
        Add => Some(val_a.wrapping_add(val_b)),
        Nor => Some(!(val_a | val_b)),
        Lw | Sw => Some(val_a.wrapping_add(offset)),
        Beq => Some(val_a.wrapping_sub(val_b)),
        Jalr | Halt | Noop => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(alu(Some(Opcode::Add), 3, 4, 100), Some(7));
        assert_eq!(alu(Some(Opcode::Nor), 0, 0, 0), Some(-1));
        assert_eq!(alu(Some(Opcode::Nor), 0b1010, 0b0101, 0), Some(!0b1111));
        assert_eq!(alu(Some(Opcode::Lw), 10, 99, -3), Some(7));
        assert_eq!(alu(Some(Opcode::Sw), 10, 99, 5), Some(15));
        assert_eq!(alu(Some(Opcode::Beq), 5, 5, 0), Some(0));
    }

    #[test]
    fn wraps_on_overflow() {
        assert_eq!(alu(Some(Opcode::Add), i32::MAX, 1, 0), Some(i32::MIN));
        assert_eq!(alu(Some(Opcode::Beq), i32::MIN, 1, 0), Some(i32::MAX));
    }

    #[test]
    fn idle_opcodes() {
        assert_eq!(alu(Some(Opcode::Halt), 1, 2, 3), None);
        assert_eq!(alu(Some(Opcode::Noop), 1, 2, 3), None);
        assert_eq!(alu(Some(Opcode::Jalr), 1, 2, 3), None);
        assert_eq!(alu(None, 1, 2, 3), None);
    }
}
