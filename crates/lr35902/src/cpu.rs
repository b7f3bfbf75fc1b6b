mod alu;
mod cb;
pub mod decode;
mod exec;
mod flags;
mod helpers;
mod regs;


pub use exec::is_implemented;
pub use flags::{Flag, Flags};
pub use regs::Registers;

use crate::config::{CpuConfig, IllegalOpcodePolicy, PowerOnState};
use crate::error::CpuError;
use crate::memory::Memory;

/// Cycle cost of servicing an interrupt through [`Cpu::enter_interrupt`].
pub const INTERRUPT_ENTRY_CYCLES: u32 = 20;

/// Game Boy CPU core.
///
/// Holds the register file plus the register-level control state
/// (`ime`, `halted`, `stopped`). Deciding when interrupts fire and when a
/// halted CPU wakes up is left to whoever drives [`Cpu::step`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    /// Set by HALT. While set, `step` idles without fetching.
    pub halted: bool,
    /// Set by STOP. Behaves like `halted` from the core's point of view.
    pub stopped: bool,
    ime_enable_pending: bool,
    ime_enable_delay: bool,
    /// When true, the CPU has executed an illegal opcode under
    /// [`IllegalOpcodePolicy::Lock`] and `step` returns 0 until reset.
    locked: bool,
    config: CpuConfig,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU with every register zeroed and the default policies.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            stopped: false,
            ime_enable_pending: false,
            ime_enable_delay: false,
            locked: false,
            config,
        };
        cpu.apply_power_on_state();
        cpu
    }

    #[inline]
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Return to the configured power-on state, clearing any lock.
    pub fn reset(&mut self) {
        self.ime = false;
        self.halted = false;
        self.stopped = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.locked = false;
        self.apply_power_on_state();
        log::debug!("CPU reset ({:?})", self.config.power_on);
    }

    fn apply_power_on_state(&mut self) {
        self.regs = match self.config.power_on {
            PowerOnState::Zeroed => Registers::default(),
            // Values the DMG boot ROM leaves behind when it hands control to
            // the cartridge at 0x0100 (Pan Docs, "Power Up Sequence").
            PowerOnState::Dmg => Registers {
                a: 0x01,
                f: 0xB0,
                b: 0x00,
                c: 0x13,
                d: 0x00,
                e: 0xD8,
                h: 0x01,
                l: 0x4D,
                sp: 0xFFFE,
                pc: 0x0100,
            },
        };
    }

    /// Run one instruction and return the T-cycles it took.
    ///
    /// Illegal opcodes are handled according to
    /// [`CpuConfig::illegal_opcode`] and cost 0 cycles, which no real
    /// instruction does.
    pub fn step<M: Memory>(&mut self, mem: &mut M) -> u32 {
        match self.try_step(mem) {
            Ok(cycles) => cycles,
            Err(CpuError::Locked) => 0,
            Err(CpuError::IllegalOpcode { opcode, addr }) => {
                self.apply_illegal_opcode_policy(opcode, addr);
                0
            }
        }
    }

    /// Like [`Cpu::step`], but reports an illegal opcode as an error instead
    /// of applying the configured policy.
    ///
    /// On error PC has moved past the offending byte. The hole counts as the
    /// instruction after an EI, so a pending enable still lands; nothing
    /// else changes.
    pub fn try_step<M: Memory>(&mut self, mem: &mut M) -> Result<u32, CpuError> {
        if self.locked {
            return Err(CpuError::Locked);
        }

        if self.halted || self.stopped {
            // Idle until the scheduler calls `wake` or `enter_interrupt`.
            return Ok(4);
        }

        let addr = self.regs.pc;
        let opcode = self.fetch8(mem);
        if log::log_enabled!(log::Level::Trace) {
            self.trace_instruction(addr, opcode);
        }

        let cycles = self.exec_opcode(mem, opcode);
        self.apply_ime_delay();
        cycles.ok_or(CpuError::IllegalOpcode { opcode, addr })
    }

    /// Leave HALT/STOP. Called by the scheduler when a wake-up condition
    /// (pending interrupt, joypad line) is met.
    pub fn wake(&mut self) {
        self.halted = false;
        self.stopped = false;
    }

    /// Register-level interrupt entry: clear IME, leave HALT, push PC and
    /// jump to `vector`.
    ///
    /// The caller owns IE/IF and decides when this happens.
    pub fn enter_interrupt<M: Memory>(&mut self, mem: &mut M, vector: u16) -> u32 {
        log::debug!(
            "interrupt entry: vector=0x{:04X} pc=0x{:04X} sp=0x{:04X}",
            vector,
            self.regs.pc,
            self.regs.sp
        );
        self.ime = false;
        self.ime_enable_pending = false;
        self.ime_enable_delay = false;
        self.halted = false;
        let pc = self.regs.pc;
        self.push_u16(mem, pc);
        self.regs.pc = vector;
        INTERRUPT_ENTRY_CYCLES
    }

    /// IME becomes 1 after the instruction following EI completes.
    fn apply_ime_delay(&mut self) {
        if self.ime_enable_delay {
            self.ime = true;
            self.ime_enable_delay = false;
        } else if self.ime_enable_pending {
            self.ime_enable_pending = false;
            self.ime_enable_delay = true;
        }
    }

    fn apply_illegal_opcode_policy(&mut self, opcode: u8, addr: u16) {
        match self.config.illegal_opcode {
            IllegalOpcodePolicy::Ignore => {
                log::warn!("skipping illegal opcode 0x{opcode:02X} at PC=0x{addr:04X}");
            }
            IllegalOpcodePolicy::Lock => {
                log::error!(
                    "CPU locked: illegal opcode 0x{opcode:02X} at PC=0x{addr:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                self.locked = true;
            }
        }
    }

    fn trace_instruction(&self, addr: u16, opcode: u8) {
        log::trace!(
            "PC=0x{addr:04X} op=0x{opcode:02X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X} SP=0x{sp:04X}",
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
            sp = self.regs.sp,
        );
    }
}
