use crate::cpu::decode::decode_rst_vector;
use crate::cpu::Cpu;
use crate::memory::Memory;

impl Cpu {
    pub(super) fn exec_jp_hl(&mut self) -> u32 {
        self.regs.pc = self.regs.hl();
        4
    }

    pub(super) fn exec_rst<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(
            opcode,
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF
        ));
        let ret = self.regs.pc;
        self.push_u16(mem, ret);
        self.regs.pc = decode_rst_vector(opcode);
        16
    }

    pub(super) fn exec_ret<M: Memory>(&mut self, mem: &mut M) -> u32 {
        self.regs.pc = self.pop_u16(mem);
        16
    }

    /// RETI enables IME immediately, unlike EI.
    pub(super) fn exec_reti<M: Memory>(&mut self, mem: &mut M) -> u32 {
        self.regs.pc = self.pop_u16(mem);
        self.ime = true;
        16
    }
}
