use std::fmt;

/// Conditions reported by [`Cpu::try_step`](crate::Cpu::try_step).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CpuError {
    /// The byte at `addr` is not an instruction on this CPU.
    IllegalOpcode { opcode: u8, addr: u16 },
    /// A previous illegal opcode locked the CPU; only `reset` recovers.
    Locked,
}

impl fmt::Display for CpuError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CpuError::IllegalOpcode { opcode, addr } => {
                write!(f, "illegal opcode 0x{opcode:02X} at 0x{addr:04X}")
            }
            CpuError::Locked => write!(f, "CPU is locked after an illegal opcode"),
        }
    }
}

impl std::error::Error for CpuError {}
