use crate::cpu::decode::{decode_ld_dest, decode_r16, decode_r8, write_pair};
use crate::cpu::Cpu;
use crate::memory::Memory;

/// Address register for the `LD (rr),A` / `LD A,(rr)` column, and what
/// happens to HL afterwards.
#[derive(Clone, Copy)]
enum IndirectPair {
    Bc,
    De,
    HlInc,
    HlDec,
}

impl IndirectPair {
    fn decode(opcode: u8) -> Self {
        match (opcode >> 4) & 0x03 {
            0 => IndirectPair::Bc,
            1 => IndirectPair::De,
            2 => IndirectPair::HlInc,
            _ => IndirectPair::HlDec,
        }
    }
}

impl Cpu {
    pub(super) fn exec_ld_rr_d16<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.fetch16(mem);
        write_pair(&mut self.regs, decode_r16(opcode), value);
        12
    }

    pub(super) fn exec_ld_r_d8<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x3E
        ));
        let reg = decode_ld_dest(opcode).expect_register(opcode);
        let value = self.fetch8(mem);
        self.regs.set8(reg, value);
        8
    }

    pub(super) fn exec_ld_hl_d8<M: Memory>(&mut self, mem: &mut M) -> u32 {
        let value = self.fetch8(mem);
        mem.write8(self.regs.hl(), value);
        12
    }

    /// LD r,r' / LD r,(HL) / LD (HL),r. HALT (0x76) is dispatched before
    /// reaching here.
    pub(super) fn exec_ld_r_r<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let dst = decode_ld_dest(opcode);
        let src = decode_r8(opcode);
        let value = self.read_operand(mem, src);
        self.write_operand(mem, dst, value);

        if dst.is_indirect() || src.is_indirect() { 8 } else { 4 }
    }

    /// Resolve the address for the indirect A column and apply the HL
    /// post-increment/decrement.
    fn indirect_address(&mut self, opcode: u8) -> u16 {
        match IndirectPair::decode(opcode) {
            IndirectPair::Bc => self.regs.bc(),
            IndirectPair::De => self.regs.de(),
            IndirectPair::HlInc => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            IndirectPair::HlDec => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(super) fn exec_ld_indirect_a<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_address(opcode);
        mem.write8(addr, self.regs.a);
        8
    }

    pub(super) fn exec_ld_a_indirect<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_address(opcode);
        self.regs.a = mem.read8(addr);
        8
    }

    pub(super) fn exec_ld_a16_sp<M: Memory>(&mut self, mem: &mut M) -> u32 {
        let addr = self.fetch16(mem);
        mem.write16(addr, self.regs.sp);
        20
    }

    pub(super) fn exec_ldh_a8<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));
        let addr = 0xFF00 | self.fetch8(mem) as u16;
        if opcode == 0xE0 {
            mem.write8(addr, self.regs.a);
        } else {
            self.regs.a = mem.read8(addr);
        }
        12
    }

    pub(super) fn exec_ldh_c<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));
        let addr = 0xFF00 | self.regs.c as u16;
        if opcode == 0xE2 {
            mem.write8(addr, self.regs.a);
        } else {
            self.regs.a = mem.read8(addr);
        }
        8
    }

    pub(super) fn exec_ld_a16_a<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));
        let addr = self.fetch16(mem);
        if opcode == 0xEA {
            mem.write8(addr, self.regs.a);
        } else {
            self.regs.a = mem.read8(addr);
        }
        16
    }

    pub(super) fn exec_ld_sp_hl(&mut self) -> u32 {
        self.regs.sp = self.regs.hl();
        8
    }
}
