use crate::cpu::decode::{decode_ld_dest, decode_r16, read_pair, write_pair};
use crate::cpu::Cpu;
use crate::memory::Memory;

impl Cpu {
    pub(super) fn exec_inc8_reg(&mut self, opcode: u8) -> u32 {
        debug_assert!(
            matches!(opcode, 0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x3C),
            "unexpected INC r opcode {opcode:#04x}"
        );

        let reg = decode_ld_dest(opcode).expect_register(opcode);
        let result = self.alu_inc8(self.regs.get8(reg));
        self.regs.set8(reg, result);
        4
    }

    pub(super) fn exec_dec8_reg(&mut self, opcode: u8) -> u32 {
        debug_assert!(
            matches!(opcode, 0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x3D),
            "unexpected DEC r opcode {opcode:#04x}"
        );

        let reg = decode_ld_dest(opcode).expect_register(opcode);
        let result = self.alu_dec8(self.regs.get8(reg));
        self.regs.set8(reg, result);
        4
    }

    pub(super) fn exec_inc8_hl<M: Memory>(&mut self, mem: &mut M) -> u32 {
        let addr = self.regs.hl();
        let result = self.alu_inc8(mem.read8(addr));
        mem.write8(addr, result);
        12
    }

    pub(super) fn exec_dec8_hl<M: Memory>(&mut self, mem: &mut M) -> u32 {
        let addr = self.regs.hl();
        let result = self.alu_dec8(mem.read8(addr));
        mem.write8(addr, result);
        12
    }

    pub(super) fn exec_inc16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));
        let pair = decode_r16(opcode);
        let value = read_pair(&self.regs, pair).wrapping_add(1);
        write_pair(&mut self.regs, pair, value);
        8
    }

    pub(super) fn exec_dec16_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        let pair = decode_r16(opcode);
        let value = read_pair(&self.regs, pair).wrapping_sub(1);
        write_pair(&mut self.regs, pair, value);
        8
    }
}
