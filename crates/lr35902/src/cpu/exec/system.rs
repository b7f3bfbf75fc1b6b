use crate::cpu::Cpu;
use crate::memory::Memory;

impl Cpu {
    pub(super) fn exec_stop<M: Memory>(&mut self, mem: &mut M) -> u32 {
        // STOP is officially a 2-byte instruction; the second byte is
        // often 0 and ignored. Fetch and discard it so PC matches hardware.
        let _padding = self.fetch8(mem);
        self.stopped = true;
        log::debug!("STOP at PC=0x{:04X}", self.regs.pc.wrapping_sub(2));
        4
    }

    pub(super) fn exec_halt(&mut self) -> u32 {
        self.halted = true;
        log::debug!("HALT at PC=0x{:04X}", self.regs.pc.wrapping_sub(1));
        4
    }

    pub(super) fn exec_di(&mut self) -> u32 {
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        4
    }

    pub(super) fn exec_ei(&mut self) -> u32 {
        // Picked up by `apply_ime_delay` one instruction later.
        self.ime_enable_pending = true;
        4
    }
}
