use super::{Cpu, Flag, Flags};

/// Half-carry out of bit 3 for `a + b + carry_in`.
#[inline]
pub fn half_carry_add8(a: u8, b: u8, carry_in: u8) -> bool {
    (a & 0x0F) + (b & 0x0F) + carry_in >= 0x10
}

/// Carry out of bit 7 for `a + b + carry_in`.
#[inline]
pub fn carry_add8(a: u8, b: u8, carry_in: u8) -> bool {
    a as u16 + b as u16 + carry_in as u16 > 0xFF
}

/// Borrow into bit 4 for `a - b - borrow_in`.
#[inline]
pub fn half_carry_sub8(a: u8, b: u8, borrow_in: u8) -> bool {
    (a & 0x0F) < (b & 0x0F) + borrow_in
}

/// Borrow out of bit 7 for `a - b - borrow_in`.
#[inline]
pub fn carry_sub8(a: u8, b: u8, borrow_in: u8) -> bool {
    (a as u16) < b as u16 + borrow_in as u16
}

/// Carry out of bit 11 for the 16-bit `ADD HL,rr`.
#[inline]
pub fn half_carry_add16(hl: u16, value: u16) -> bool {
    (hl & 0x0FFF) + (value & 0x0FFF) >= 0x1000
}

/// Carry out of bit 15 for the 16-bit `ADD HL,rr`.
#[inline]
pub fn carry_add16(hl: u16, value: u16) -> bool {
    hl > 0xFFFF - value
}

impl Cpu {
    #[inline]
    fn carry_bit(&self) -> u8 {
        self.regs.flag(Flag::C) as u8
    }

    /// ADD (`use_carry == false`) or ADC on A.
    ///
    /// Z is taken from the truncated 8-bit result.
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = if use_carry { self.carry_bit() } else { 0 };
        let result = a.wrapping_add(value).wrapping_add(carry_in);

        let mut flags = Flags::zero_if(result);
        flags.set(Flags::HALF_CARRY, half_carry_add8(a, value, carry_in));
        flags.set(Flags::CARRY, carry_add8(a, value, carry_in));

        self.regs.a = result;
        self.regs.set_flags(flags);
    }

    /// SUB (`use_carry == false`) or SBC on A.
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let borrow_in = if use_carry { self.carry_bit() } else { 0 };
        self.regs.a = self.sub_flags(a, value, borrow_in);
    }

    /// Flags of `A - value`, result discarded.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.sub_flags(self.regs.a, value, 0);
    }

    fn sub_flags(&mut self, a: u8, value: u8, borrow_in: u8) -> u8 {
        let result = a.wrapping_sub(value).wrapping_sub(borrow_in);

        let mut flags = Flags::zero_if(result) | Flags::SUBTRACT;
        flags.set(Flags::HALF_CARRY, half_carry_sub8(a, value, borrow_in));
        flags.set(Flags::CARRY, carry_sub8(a, value, borrow_in));
        self.regs.set_flags(flags);

        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        let result = self.regs.a & value;
        self.regs.a = result;
        self.regs.set_flags(Flags::zero_if(result) | Flags::HALF_CARRY);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        let result = self.regs.a | value;
        self.regs.a = result;
        self.regs.set_flags(Flags::zero_if(result));
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        let result = self.regs.a ^ value;
        self.regs.a = result;
        self.regs.set_flags(Flags::zero_if(result));
    }

    /// Dispatch on the ALU operation field (bits 3–5) shared by the
    /// register (0x80–0xBF) and immediate (0xC6–0xFE) groups.
    pub(super) fn alu_op(&mut self, operation: u8, value: u8) {
        match operation & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// BCD correction of A after an add or subtract. The correction comes
    /// from C, H and the digits of A; N selects its direction and is kept.
    pub(super) fn alu_daa(&mut self) {
        let flags = self.regs.flags();
        let mut a = self.regs.a;
        let mut adjust: u8 = if flags.contains(Flags::CARRY) { 0x60 } else { 0x00 };
        if flags.contains(Flags::HALF_CARRY) {
            adjust |= 0x06;
        }

        let subtract = flags.contains(Flags::SUBTRACT);
        if !subtract {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        let mut out = Flags::zero_if(a);
        out.set(Flags::SUBTRACT, subtract);
        out.set(Flags::CARRY, adjust >= 0x60);
        self.regs.a = a;
        self.regs.set_flags(out);
    }

    /// 8-bit increment used by INC r and INC (HL).
    ///
    /// C is carried over from before the increment.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        let mut flags = self.regs.flags();
        flags.set(Flags::ZERO, result == 0);
        flags.remove(Flags::SUBTRACT);
        flags.set(Flags::HALF_CARRY, half_carry_add8(value, 1, 0));
        self.regs.set_flags(flags);
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL).
    ///
    /// Sets N; C is carried over.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        let mut flags = self.regs.flags();
        flags.set(Flags::ZERO, result == 0);
        flags.insert(Flags::SUBTRACT);
        flags.set(Flags::HALF_CARRY, half_carry_sub8(value, 1, 0));
        self.regs.set_flags(flags);
        result
    }

    /// 16-bit add for `ADD HL,rr`.
    ///
    /// Z is unaffected; N is cleared; H and C come from bits 11 and 15.
    #[inline]
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let mut flags = self.regs.flags();
        flags.remove(Flags::SUBTRACT);
        flags.set(Flags::HALF_CARRY, half_carry_add16(hl, value));
        flags.set(Flags::CARRY, carry_add16(hl, value));
        self.regs.set_flags(flags);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// Add a signed 8-bit immediate to a 16-bit base (ADD SP,e8 and
    /// LD HL,SP+e8).
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(super) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        let mut flags = Flags::empty();
        flags.set(Flags::HALF_CARRY, half_carry_add8(base as u8, imm8, 0));
        flags.set(Flags::CARRY, carry_add8(base as u8, imm8, 0));
        self.regs.set_flags(flags);
        base.wrapping_add(offset)
    }

    /// Rotate/shift core shared by the CB page and the accumulator
    /// shortcuts. `op` is the CB row (bits 3–5): RLC, RRC, RL, RR, SLA,
    /// SRA, SWAP, SRL.
    ///
    /// Carry is taken from the bit shifted out before the shift is applied.
    /// N and H are cleared and Z reflects the result.
    pub(super) fn alu_shift(&mut self, op: u8, value: u8) -> u8 {
        let carry_in = self.regs.flag(Flag::C);
        let (result, carry_out) = match op & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            3 => ((value >> 1) | ((carry_in as u8) << 7), value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };

        let mut flags = Flags::zero_if(result);
        flags.set(Flags::CARRY, carry_out);
        self.regs.set_flags(flags);
        result
    }
}
