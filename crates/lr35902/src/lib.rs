pub mod config;
pub mod cpu;
pub mod error;
pub mod memory;

pub use config::{CcfBehavior, CpuConfig, IllegalOpcodePolicy, PowerOnState, RotateAZero};
pub use cpu::{is_implemented, Cpu, Flag, Flags, Registers};
pub use error::CpuError;
pub use memory::{FlatMemory, Memory};

/// Size of the addressable space seen by the CPU.
pub const ADDRESS_SPACE: usize = 0x1_0000;
