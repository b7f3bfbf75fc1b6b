mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::decode::decode_condition;
use super::Cpu;
use crate::memory::Memory;

/// Whether `opcode` is an instruction on the LR35902.
///
/// The eleven holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD) hard-lock
/// real hardware; everything else, including the 0xCB prefix, executes.
pub const fn is_implemented(opcode: u8) -> bool {
    !matches!(
        opcode,
        0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD
    )
}

impl Cpu {
    /// Decode and execute a single opcode and return the number of cycles,
    /// or `None` for an opcode hole. PC already points past `opcode`.
    pub(super) fn exec_opcode<M: Memory>(&mut self, mem: &mut M, opcode: u8) -> Option<u32> {
        let cycles = match opcode {
            // 0x00: NOP
            0x00 => 4,

            // LD rr, d16
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(mem, opcode),

            // LD (BC/DE/HL±), A
            0x02 | 0x12 | 0x22 | 0x32 => self.exec_ld_indirect_a(mem, opcode),

            // LD A, (BC/DE/HL±)
            0x0A | 0x1A | 0x2A | 0x3A => self.exec_ld_a_indirect(mem, opcode),

            // 16-bit INC rr / DEC rr
            0x03 | 0x13 | 0x23 | 0x33 => self.exec_inc16_rr(opcode),
            0x0B | 0x1B | 0x2B | 0x3B => self.exec_dec16_rr(opcode),

            // INC r / DEC r, with the (HL) forms split out.
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x3C => self.exec_inc8_reg(opcode),
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x3D => self.exec_dec8_reg(opcode),
            0x34 => self.exec_inc8_hl(mem),
            0x35 => self.exec_dec8_hl(mem),

            // LD r, d8 / LD (HL), d8
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x3E => self.exec_ld_r_d8(mem, opcode),
            0x36 => self.exec_ld_hl_d8(mem),

            // RLCA / RRCA / RLA / RRA
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            // LD (a16), SP
            0x08 => self.exec_ld_a16_sp(mem),

            // ADD HL, rr (16-bit)
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(opcode),

            // STOP
            0x10 => self.exec_stop(mem),

            // JR r8 / JR cc, r8
            0x18 => self.jr(mem, None),
            0x20 | 0x28 | 0x30 | 0x38 => self.jr(mem, Some(decode_condition(opcode))),

            0x27 => self.exec_daa(),
            0x2F => self.exec_cpl(),
            0x37 => self.exec_scf(),
            0x3F => self.exec_ccf(),

            // HALT sits in the middle of the LD block.
            0x76 => self.exec_halt(),

            // LD r, r' and the (HL) forms
            0x40..=0x7F => self.exec_ld_r_r(mem, opcode),

            // ALU A, r / ALU A, (HL)
            0x80..=0xBF => self.exec_alu_reg_group(mem, opcode),

            // ALU A, d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                self.exec_alu_imm(mem, opcode)
            }

            // RET cc / RET / RETI
            0xC0 | 0xC8 | 0xD0 | 0xD8 => self.ret_cond(mem, decode_condition(opcode)),
            0xC9 => self.exec_ret(mem),
            0xD9 => self.exec_reti(mem),

            // POP rr / PUSH rr
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop_rr(mem, opcode),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push_rr(mem, opcode),

            // JP a16 / JP cc, a16 / JP (HL)
            0xC3 => self.jp(mem, None),
            0xC2 | 0xCA | 0xD2 | 0xDA => self.jp(mem, Some(decode_condition(opcode))),
            0xE9 => self.exec_jp_hl(),

            // CALL a16 / CALL cc, a16
            0xCD => self.call(mem, None),
            0xC4 | 0xCC | 0xD4 | 0xDC => self.call(mem, Some(decode_condition(opcode))),

            // RST nn
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(mem, opcode),

            // CB-prefixed page.
            0xCB => self.step_cb(mem),

            // High-page loads through an immediate offset.
            0xE0 | 0xF0 => self.exec_ldh_a8(mem, opcode),

            // LDH (C),A / LDH A,(C)
            0xE2 | 0xF2 => self.exec_ldh_c(mem, opcode),

            // ADD SP, r8
            0xE8 => self.exec_add_sp_r8(mem),

            // Absolute A loads and stores.
            0xEA | 0xFA => self.exec_ld_a16_a(mem, opcode),

            // DI / EI
            0xF3 => self.exec_di(),
            0xFB => self.exec_ei(),

            // LD HL, SP+r8
            0xF8 => self.exec_ld_hl_sp_r8(mem),

            // LD SP, HL
            0xF9 => self.exec_ld_sp_hl(),

            // Opcode holes (D3, DB, DD, E3, E4, EB, EC, ED, F4, FC, FD).
            _ => {
                debug_assert!(!is_implemented(opcode));
                return None;
            }
        };
        Some(cycles)
    }
}
