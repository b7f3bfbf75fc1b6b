use crate::cpu::decode::{decode_r16_stack, read_stack_pair, write_stack_pair};
use crate::cpu::Cpu;
use crate::memory::Memory;

impl Cpu {
    pub(super) fn exec_push_rr<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = read_stack_pair(&self.regs, decode_r16_stack(opcode));
        self.push_u16(mem, value);
        16
    }

    /// POP AF drops the low nibble of F through `set_af`.
    pub(super) fn exec_pop_rr<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(mem);
        write_stack_pair(&mut self.regs, decode_r16_stack(opcode), value);
        12
    }
}
