//! Bit-level decoding helpers.
//! Layout: opcode in bits 24..22, field0 in 21..19, field1 in 18..16,
//! field2 in 15..0.

const REG_MASK: i32 = 0x7;
const FIELD2_MASK: i32 = 0xFFFF;

/// Extracts the opcode.
/// The shift is arithmetic, so words with high bits set yield values
/// outside 0..=7.
pub fn opcode(raw_inst: i32) -> i32 {
    raw_inst >> 22
}

/// Extracts field0 (regA)
pub fn field0(raw_inst: i32) -> u32 {
    ((raw_inst >> 19) & REG_MASK) as u32
}

/// Extracts field1 (regB)
pub fn field1(raw_inst: i32) -> u32 {
    ((raw_inst >> 16) & REG_MASK) as u32
}

/// Extracts field2 as the raw 16-bit pattern
pub fn field2(raw_inst: i32) -> u16 {
    (raw_inst & FIELD2_MASK) as u16
}

/// Sign-extends a 16-bit pattern to 32 bits
pub fn sign_extend_16(value: u16) -> i32 {
    value as i16 as i32
}

/// Packs the four fields into a raw word
pub fn encode(opcode: i32, field0: u32, field1: u32, field2: i32) -> i32 {
    (opcode << 22)
        | ((field0 as i32 & REG_MASK) << 19)
        | ((field1 as i32 & REG_MASK) << 16)
        | (field2 & FIELD2_MASK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fields() {
        // lw 1 2 -3
        let raw = (2 << 22) | (1 << 19) | (2 << 16) | 0xFFFD;
        assert_eq!(opcode(raw), 2);
        assert_eq!(field0(raw), 1);
        assert_eq!(field1(raw), 2);
        assert_eq!(field2(raw), 0xFFFD);
        assert_eq!(sign_extend_16(field2(raw)), -3);
    }

    #[test]
    fn sign_extension_boundaries() {
        assert_eq!(sign_extend_16(0x7FFF), 32767);
        assert_eq!(sign_extend_16(0x8000), -32768);
        assert_eq!(sign_extend_16(0xFFFF), -1);
        assert_eq!(sign_extend_16(0), 0);
    }

    #[test]
    fn negative_word_has_negative_opcode() {
        assert!(opcode(-1) < 0);
        assert_eq!(opcode(8 << 22), 8);
    }

    #[test]
    fn encode_masks_offset() {
        assert_eq!(encode(4, 0, 0, -1), (4 << 22) | 0xFFFF);
        assert_eq!(encode(7, 0, 0, 0), 29360128);
    }
}
