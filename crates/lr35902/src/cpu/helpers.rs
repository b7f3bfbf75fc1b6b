use super::decode::{Condition, Operand8};
use super::Cpu;
use crate::memory::Memory;

impl Cpu {
    /// Read an 8-bit operand: a register, or the byte at (HL).
    #[inline]
    pub(super) fn read_operand<M: Memory>(&mut self, mem: &mut M, operand: Operand8) -> u8 {
        match operand {
            Operand8::Reg(reg) => self.regs.get8(reg),
            Operand8::IndirectHl => mem.read8(self.regs.hl()),
        }
    }

    /// Write an 8-bit operand. The encoding matches `read_operand`.
    #[inline]
    pub(super) fn write_operand<M: Memory>(&mut self, mem: &mut M, operand: Operand8, value: u8) {
        match operand {
            Operand8::Reg(reg) => self.regs.set8(reg, value),
            Operand8::IndirectHl => mem.write8(self.regs.hl(), value),
        }
    }

    #[inline]
    pub(super) fn fetch8<M: Memory>(&mut self, mem: &mut M) -> u8 {
        let value = mem.read8(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(1);
        value
    }

    #[inline]
    pub(super) fn fetch16<M: Memory>(&mut self, mem: &mut M) -> u16 {
        let value = mem.read16(self.regs.pc);
        self.regs.pc = self.regs.pc.wrapping_add(2);
        value
    }

    /// Stack grows downward: SP -= 2, then the word lands at SP (low byte
    /// at SP, high byte at SP+1).
    #[inline]
    pub(super) fn push_u16<M: Memory>(&mut self, mem: &mut M, value: u16) {
        self.regs.sp = self.regs.sp.wrapping_sub(2);
        mem.write16(self.regs.sp, value);
    }

    #[inline]
    pub(super) fn pop_u16<M: Memory>(&mut self, mem: &mut M) -> u16 {
        let value = mem.read16(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(2);
        value
    }

    #[inline]
    pub(super) fn condition(&self, cond: Option<Condition>) -> bool {
        cond.map_or(true, |cc| cc.holds(&self.regs))
    }

    /// JR / JR cc. The signed offset is applied to the PC after the operand,
    /// which is consumed whether or not the jump is taken.
    pub(super) fn jr<M: Memory>(&mut self, mem: &mut M, cond: Option<Condition>) -> u32 {
        let offset = self.fetch8(mem) as i8;
        if self.condition(cond) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            12
        } else {
            8
        }
    }

    /// Absolute jump helper used by JP a16 / JP cc,a16.
    pub(super) fn jp<M: Memory>(&mut self, mem: &mut M, cond: Option<Condition>) -> u32 {
        let addr = self.fetch16(mem);
        if self.condition(cond) {
            self.regs.pc = addr;
            16
        } else {
            12
        }
    }

    /// Call helper used by CALL a16 / CALL cc,a16.
    pub(super) fn call<M: Memory>(&mut self, mem: &mut M, cond: Option<Condition>) -> u32 {
        let addr = self.fetch16(mem);
        if self.condition(cond) {
            let ret = self.regs.pc;
            self.push_u16(mem, ret);
            self.regs.pc = addr;
            24
        } else {
            12
        }
    }

    /// RET cc.
    pub(super) fn ret_cond<M: Memory>(&mut self, mem: &mut M, cond: Condition) -> u32 {
        if cond.holds(&self.regs) {
            self.regs.pc = self.pop_u16(mem);
            20
        } else {
            8
        }
    }
}
