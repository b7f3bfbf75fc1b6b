use bitflags::bitflags;

bitflags! {
    /// Contents of the F register.
    ///
    /// Only the upper nibble exists on the chip; bits 0–3 read back as zero.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Flags: u8 {
        const ZERO = 0b1000_0000;
        const SUBTRACT = 0b0100_0000;
        const HALF_CARRY = 0b0010_0000;
        const CARRY = 0b0001_0000;
    }
}

/// One flag of F. The discriminant is its bit index.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    pub const ALL: [Flag; 4] = [Flag::Z, Flag::N, Flag::H, Flag::C];

    #[inline]
    pub const fn mask(self) -> u8 {
        1 << (self as u8)
    }
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        Flags::from_bits_retain(flag.mask())
    }
}

impl Flags {
    /// Flags produced by a result that only defines Z, with N/H/C cleared.
    #[inline]
    pub fn zero_if(value: u8) -> Self {
        if value == 0 {
            Flags::ZERO
        } else {
            Flags::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selectors_match_flag_bits() {
        assert_eq!(Flags::from(Flag::Z), Flags::ZERO);
        assert_eq!(Flags::from(Flag::N), Flags::SUBTRACT);
        assert_eq!(Flags::from(Flag::H), Flags::HALF_CARRY);
        assert_eq!(Flags::from(Flag::C), Flags::CARRY);
    }

    #[test]
    fn truncation_drops_low_nibble() {
        assert_eq!(Flags::from_bits_truncate(0xFF).bits(), 0xF0);
    }
}
