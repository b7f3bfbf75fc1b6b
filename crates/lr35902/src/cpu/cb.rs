use super::decode::decode_r8;
use super::{Cpu, Flags};
use crate::memory::Memory;

impl Cpu {
    /// Execute the instruction following a 0xCB prefix.
    ///
    /// The page is fully regular: bits 6–7 pick the group, bits 3–5 the
    /// operation or bit index, bits 0–2 the operand.
    pub(super) fn step_cb<M: Memory>(&mut self, mem: &mut M) -> u32 {
        let cb = self.fetch8(mem);
        let group = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let operand = decode_r8(cb);
        let indirect = operand.is_indirect();

        match group {
            0 => {
                // RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL
                let value = self.read_operand(mem, operand);
                let result = self.alu_shift(y, value);
                self.write_operand(mem, operand, result);
                if indirect { 16 } else { 8 }
            }
            1 => {
                // BIT b, r: Z from the tested bit, H set, N clear, C kept.
                let value = self.read_operand(mem, operand);
                let mut flags = (self.regs.flags() & Flags::CARRY) | Flags::HALF_CARRY;
                flags.set(Flags::ZERO, value & (1 << y) == 0);
                self.regs.set_flags(flags);
                if indirect { 12 } else { 8 }
            }
            2 => {
                // RES b, r
                let value = self.read_operand(mem, operand) & !(1 << y);
                self.write_operand(mem, operand, value);
                if indirect { 16 } else { 8 }
            }
            _ => {
                // SET b, r
                let value = self.read_operand(mem, operand) | (1 << y);
                self.write_operand(mem, operand, value);
                if indirect { 16 } else { 8 }
            }
        }
    }
}
