use typed_builder::TypedBuilder;

/// Register values the CPU starts from on `new`/`reset`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerOnState {
    /// Every register and pointer is zero.
    #[default]
    Zeroed,
    /// Values the DMG boot ROM leaves behind when it jumps to 0x0100.
    Dmg,
}

/// What `Cpu::step` does with one of the opcode holes (D3, DB, DD, E3, E4,
/// EB, EC, ED, F4, FC, FD).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IllegalOpcodePolicy {
    /// Skip the byte and report 0 cycles.
    #[default]
    Ignore,
    /// Hard-lock like the real chip: every later step reports 0 cycles
    /// until `reset`.
    Lock,
}

/// Carry handling for `CCF`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CcfBehavior {
    /// Complement carry, as documented for the LR35902 and Z80.
    #[default]
    Toggle,
    /// Always clear carry. Kept for traces recorded against cores that
    /// got this wrong.
    Clear,
}

/// Zero flag after the unprefixed accumulator rotates (RLCA, RRCA, RLA,
/// RRA). The CB forms always take Z from the result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RotateAZero {
    /// Always clear Z, as the LR35902 does.
    #[default]
    Clear,
    /// Z reflects the rotated A, like the CB forms.
    FromResult,
}

/// Construction-time options for a [`Cpu`](crate::Cpu).
///
/// ```
/// use lr35902::{CpuConfig, IllegalOpcodePolicy, PowerOnState};
///
/// let config = CpuConfig::builder()
///     .power_on(PowerOnState::Dmg)
///     .illegal_opcode(IllegalOpcodePolicy::Lock)
///     .build();
/// assert_eq!(config.power_on, PowerOnState::Dmg);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub power_on: PowerOnState,
    #[builder(default)]
    pub illegal_opcode: IllegalOpcodePolicy,
    #[builder(default)]
    pub ccf: CcfBehavior,
    #[builder(default)]
    pub rotate_a_zero: RotateAZero,
}
