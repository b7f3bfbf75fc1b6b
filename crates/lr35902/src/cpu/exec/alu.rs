use crate::config::{CcfBehavior, RotateAZero};
use crate::cpu::decode::{decode_r16, decode_r8, read_pair};
use crate::cpu::{Cpu, Flag, Flags};
use crate::memory::Memory;

impl Cpu {
    pub(super) fn exec_alu_reg_group<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let src = decode_r8(opcode);
        let value = self.read_operand(mem, src);
        self.alu_op(opcode >> 3, value);

        if src.is_indirect() { 8 } else { 4 }
    }

    pub(super) fn exec_alu_imm<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE
        ));
        let value = self.fetch8(mem);
        self.alu_op(opcode >> 3, value);
        8
    }

    /// RLCA / RRCA / RLA / RRA.
    ///
    /// Same rotation as the CB forms. Z follows `CpuConfig::rotate_a_zero`.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        self.regs.a = self.alu_shift(opcode >> 3, self.regs.a);
        match self.config.rotate_a_zero {
            RotateAZero::Clear => self.regs.set_flag(Flag::Z, false),
            RotateAZero::FromResult => {}
        }
        4
    }

    pub(super) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = read_pair(&self.regs, decode_r16(opcode));
        self.alu_add16_hl(value);
        8
    }

    pub(super) fn exec_add_sp_r8<M: Memory>(&mut self, mem: &mut M) -> u32 {
        let imm = self.fetch8(mem);
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        16
    }

    pub(super) fn exec_ld_hl_sp_r8<M: Memory>(&mut self, mem: &mut M) -> u32 {
        let imm = self.fetch8(mem);
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        12
    }

    pub(super) fn exec_daa(&mut self) -> u32 {
        self.alu_daa();
        4
    }

    pub(super) fn exec_cpl(&mut self) -> u32 {
        self.regs.a = !self.regs.a;
        let flags = self.regs.flags() | Flags::SUBTRACT | Flags::HALF_CARRY;
        self.regs.set_flags(flags);
        4
    }

    pub(super) fn exec_scf(&mut self) -> u32 {
        let flags = (self.regs.flags() & Flags::ZERO) | Flags::CARRY;
        self.regs.set_flags(flags);
        4
    }

    pub(super) fn exec_ccf(&mut self) -> u32 {
        let carry = match self.config.ccf {
            CcfBehavior::Toggle => !self.regs.flag(Flag::C),
            CcfBehavior::Clear => false,
        };
        let mut flags = self.regs.flags() & Flags::ZERO;
        flags.set(Flags::CARRY, carry);
        self.regs.set_flags(flags);
        4
    }
}
