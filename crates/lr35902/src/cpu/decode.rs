//! Opcode bit-field decoding.
//!
//! Most of the LR35902 opcode space is built from a handful of regular
//! fields. Everything here is a pure function of the opcode byte.

use super::flags::Flag;
use super::regs::Registers;

/// Plain 8-bit register.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg8 {
    B,
    C,
    D,
    E,
    H,
    L,
    A,
}

impl Reg8 {
    pub const ALL: [Reg8; 7] = [Reg8::B, Reg8::C, Reg8::D, Reg8::E, Reg8::H, Reg8::L, Reg8::A];
}

/// Location named by a 3-bit register field: a register, or the byte at
/// the address held in HL.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operand8 {
    Reg(Reg8),
    IndirectHl,
}

impl Operand8 {
    /// Map a 3-bit field (0..=7) to B, C, D, E, H, L, (HL), A.
    #[inline]
    pub const fn from_index(index: u8) -> Self {
        match index & 0x07 {
            0 => Operand8::Reg(Reg8::B),
            1 => Operand8::Reg(Reg8::C),
            2 => Operand8::Reg(Reg8::D),
            3 => Operand8::Reg(Reg8::E),
            4 => Operand8::Reg(Reg8::H),
            5 => Operand8::Reg(Reg8::L),
            6 => Operand8::IndirectHl,
            _ => Operand8::Reg(Reg8::A),
        }
    }

    #[inline]
    pub const fn is_indirect(self) -> bool {
        matches!(self, Operand8::IndirectHl)
    }

    /// Resolve to a plain register on a path the dispatcher reserves for
    /// register operands.
    ///
    /// # Panics
    ///
    /// Panics on `(HL)`. Reaching that means the dispatch table routed a
    /// memory form to a register-only executor, which is an emulator bug.
    #[inline]
    #[track_caller]
    pub fn expect_register(self, opcode: u8) -> Reg8 {
        match self {
            Operand8::Reg(reg) => reg,
            Operand8::IndirectHl => panic!(
                "opcode 0x{opcode:02X} decoded to (HL) on a register-only path; dispatch table defect"
            ),
        }
    }
}

/// Register pair selected by bits 4–5 in the arithmetic/load families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    BC,
    DE,
    HL,
    SP,
}

/// Register pair selected by bits 4–5 in PUSH/POP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16Stack {
    BC,
    DE,
    HL,
    AF,
}

/// Branch condition selected by bits 3–4.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Condition {
    NZ,
    Z,
    NC,
    C,
}

impl Condition {
    #[inline]
    pub fn holds(self, regs: &Registers) -> bool {
        match self {
            Condition::NZ => !regs.flag(Flag::Z),
            Condition::Z => regs.flag(Flag::Z),
            Condition::NC => !regs.flag(Flag::C),
            Condition::C => regs.flag(Flag::C),
        }
    }
}

/// Source operand in bits 0–2.
#[inline]
pub const fn decode_r8(opcode: u8) -> Operand8 {
    Operand8::from_index(opcode)
}

/// Destination operand in bits 3–5, as used by `LD r,r'` (0x40–0x7F) and
/// the INC/DEC/LD r,n columns.
#[inline]
pub const fn decode_ld_dest(opcode: u8) -> Operand8 {
    Operand8::from_index(opcode >> 3)
}

#[inline]
pub const fn decode_r16(opcode: u8) -> Reg16 {
    match (opcode >> 4) & 0x03 {
        0 => Reg16::BC,
        1 => Reg16::DE,
        2 => Reg16::HL,
        _ => Reg16::SP,
    }
}

#[inline]
pub const fn decode_r16_stack(opcode: u8) -> Reg16Stack {
    match (opcode >> 4) & 0x03 {
        0 => Reg16Stack::BC,
        1 => Reg16Stack::DE,
        2 => Reg16Stack::HL,
        _ => Reg16Stack::AF,
    }
}

#[inline]
pub const fn decode_condition(opcode: u8) -> Condition {
    match (opcode >> 3) & 0x03 {
        0 => Condition::NZ,
        1 => Condition::Z,
        2 => Condition::NC,
        _ => Condition::C,
    }
}

/// Target of `RST n`: bits 3–5 times eight.
#[inline]
pub const fn decode_rst_vector(opcode: u8) -> u16 {
    (opcode & 0x38) as u16
}

#[inline]
pub fn read_pair(regs: &Registers, pair: Reg16) -> u16 {
    match pair {
        Reg16::BC => regs.bc(),
        Reg16::DE => regs.de(),
        Reg16::HL => regs.hl(),
        Reg16::SP => regs.sp,
    }
}

#[inline]
pub fn write_pair(regs: &mut Registers, pair: Reg16, value: u16) {
    match pair {
        Reg16::BC => regs.set_bc(value),
        Reg16::DE => regs.set_de(value),
        Reg16::HL => regs.set_hl(value),
        Reg16::SP => regs.sp = value,
    }
}

#[inline]
pub fn read_stack_pair(regs: &Registers, pair: Reg16Stack) -> u16 {
    match pair {
        Reg16Stack::BC => regs.bc(),
        Reg16Stack::DE => regs.de(),
        Reg16Stack::HL => regs.hl(),
        Reg16Stack::AF => regs.af(),
    }
}

#[inline]
pub fn write_stack_pair(regs: &mut Registers, pair: Reg16Stack, value: u16) {
    match pair {
        Reg16Stack::BC => regs.set_bc(value),
        Reg16Stack::DE => regs.set_de(value),
        Reg16Stack::HL => regs.set_hl(value),
        Reg16Stack::AF => regs.set_af(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn r8_field_order() {
        let expected = [
            Operand8::Reg(Reg8::B),
            Operand8::Reg(Reg8::C),
            Operand8::Reg(Reg8::D),
            Operand8::Reg(Reg8::E),
            Operand8::Reg(Reg8::H),
            Operand8::Reg(Reg8::L),
            Operand8::IndirectHl,
            Operand8::Reg(Reg8::A),
        ];
        for (i, want) in expected.iter().enumerate() {
            // ADD A,r column and LD r,r' destination rows.
            assert_eq!(decode_r8(0x80 + i as u8), *want);
            assert_eq!(decode_ld_dest(0x40 + ((i as u8) << 3)), *want);
        }
    }

    #[test]
    fn ld_block_splits_destination_and_source() {
        // LD D,(HL)
        assert_eq!(decode_ld_dest(0x56), Operand8::Reg(Reg8::D));
        assert_eq!(decode_r8(0x56), Operand8::IndirectHl);
        // LD (HL),E
        assert_eq!(decode_ld_dest(0x73), Operand8::IndirectHl);
        assert_eq!(decode_r8(0x73), Operand8::Reg(Reg8::E));
    }

    #[test]
    fn r16_families_share_one_field() {
        for (base, pair) in [(0x01, Reg16::BC), (0x11, Reg16::DE), (0x21, Reg16::HL), (0x31, Reg16::SP)] {
            // LD rr,nn / INC rr / ADD HL,rr / DEC rr
            for offset in [0x00, 0x02, 0x08, 0x0A] {
                assert_eq!(decode_r16(base + offset), pair);
            }
        }
        assert_eq!(decode_r16_stack(0xC5), Reg16Stack::BC);
        assert_eq!(decode_r16_stack(0xD1), Reg16Stack::DE);
        assert_eq!(decode_r16_stack(0xE5), Reg16Stack::HL);
        assert_eq!(decode_r16_stack(0xF1), Reg16Stack::AF);
    }

    #[test]
    fn conditions_and_rst_vectors() {
        assert_eq!(decode_condition(0x20), Condition::NZ);
        assert_eq!(decode_condition(0x28), Condition::Z);
        assert_eq!(decode_condition(0xD2), Condition::NC);
        assert_eq!(decode_condition(0xDC), Condition::C);
        let vectors: Vec<u16> = [0xC7, 0xCF, 0xD7, 0xDF, 0xE7, 0xEF, 0xF7, 0xFF]
            .into_iter()
            .map(decode_rst_vector)
            .collect();
        assert_eq!(vectors, [0x00, 0x08, 0x10, 0x18, 0x20, 0x28, 0x30, 0x38]);
    }

    #[test]
    fn decoders_are_idempotent() {
        for op in 0..=u8::MAX {
            assert_eq!(decode_r8(op), decode_r8(op));
            assert_eq!(decode_ld_dest(op), decode_ld_dest(op));
            assert_eq!(decode_r16(op), decode_r16(op));
            assert_eq!(decode_r16_stack(op), decode_r16_stack(op));
            assert_eq!(decode_condition(op), decode_condition(op));
        }
    }

    #[test]
    fn pair_helpers_round_trip() {
        let mut regs = Registers::default();
        for pair in [Reg16::BC, Reg16::DE, Reg16::HL, Reg16::SP] {
            write_pair(&mut regs, pair, 0xAA55);
            assert_eq!(read_pair(&regs, pair), 0xAA55);
        }
        write_stack_pair(&mut regs, Reg16Stack::AF, 0x12FF);
        assert_eq!(read_stack_pair(&regs, Reg16Stack::AF), 0x12F0);
    }

    #[test]
    fn conditions_read_flags() {
        let mut regs = Registers::default();
        assert!(Condition::NZ.holds(&regs));
        assert!(Condition::NC.holds(&regs));
        regs.f = 0x90;
        assert!(Condition::Z.holds(&regs));
        assert!(Condition::C.holds(&regs));
        assert!(!Condition::NZ.holds(&regs));
    }

    #[test]
    fn expect_register_resolves_plain_registers() {
        assert_eq!(decode_ld_dest(0x3C).expect_register(0x3C), Reg8::A);
    }

    #[test]
    #[should_panic(expected = "dispatch table defect")]
    fn expect_register_rejects_hl_indirect() {
        decode_ld_dest(0x34).expect_register(0x34);
    }
}
