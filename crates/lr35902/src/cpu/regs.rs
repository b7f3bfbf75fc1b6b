use super::decode::Reg8;
use super::flags::{Flag, Flags};

/// Register file of the LR35902.
///
/// Pairs (BC, DE, HL, AF) are views over the byte registers rather than
/// separate storage. Packing is little-endian: the second register of the
/// pair (C, E, L, F) is the low byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_le_bytes([self.f, self.a])
    }

    /// Write AF. The low nibble of F does not exist on the chip and is
    /// dropped, which is what `POP AF` relies on.
    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [f, a] = value.to_le_bytes();
        self.a = a;
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_le_bytes([self.c, self.b])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [c, b] = value.to_le_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_le_bytes([self.e, self.d])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [e, d] = value.to_le_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_le_bytes([self.l, self.h])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [l, h] = value.to_le_bytes();
        self.h = h;
        self.l = l;
    }

    #[inline]
    pub fn get8(&self, reg: Reg8) -> u8 {
        match reg {
            Reg8::B => self.b,
            Reg8::C => self.c,
            Reg8::D => self.d,
            Reg8::E => self.e,
            Reg8::H => self.h,
            Reg8::L => self.l,
            Reg8::A => self.a,
        }
    }

    #[inline]
    pub fn set8(&mut self, reg: Reg8, value: u8) {
        match reg {
            Reg8::B => self.b = value,
            Reg8::C => self.c = value,
            Reg8::D => self.d = value,
            Reg8::E => self.e = value,
            Reg8::H => self.h = value,
            Reg8::L => self.l = value,
            Reg8::A => self.a = value,
        }
    }

    /// Read one flag. Only its own bit of F is inspected.
    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        (self.f & flag.mask()) != 0
    }

    /// Set or clear one flag. No other bit of F is touched.
    #[inline]
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        if value {
            self.f |= flag.mask();
        } else {
            self.f &= !flag.mask();
        }
    }

    #[inline]
    pub fn zero(&self) -> bool {
        self.flag(Flag::Z)
    }

    #[inline]
    pub fn set_zero(&mut self, value: bool) {
        self.set_flag(Flag::Z, value);
    }

    #[inline]
    pub fn subtract(&self) -> bool {
        self.flag(Flag::N)
    }

    #[inline]
    pub fn set_subtract(&mut self, value: bool) {
        self.set_flag(Flag::N, value);
    }

    #[inline]
    pub fn half_carry(&self) -> bool {
        self.flag(Flag::H)
    }

    #[inline]
    pub fn set_half_carry(&mut self, value: bool) {
        self.set_flag(Flag::H, value);
    }

    #[inline]
    pub fn carry(&self) -> bool {
        self.flag(Flag::C)
    }

    #[inline]
    pub fn set_carry(&mut self, value: bool) {
        self.set_flag(Flag::C, value);
    }

    /// The defined flag bits of F.
    #[inline]
    pub fn flags(&self) -> Flags {
        Flags::from_bits_truncate(self.f)
    }

    /// Replace F wholesale. Instructions write flags through here, which
    /// keeps the low nibble at zero.
    #[inline]
    pub fn set_flags(&mut self, flags: Flags) {
        self.f = flags.bits();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_registers_are_zeroed() {
        let regs = Registers::default();
        assert_eq!(
            [regs.a, regs.f, regs.b, regs.c, regs.d, regs.e, regs.h, regs.l],
            [0; 8]
        );
        assert_eq!((regs.pc, regs.sp), (0, 0));
    }

    #[test]
    fn pair_views_read_backing_registers() {
        let mut regs = Registers::default();
        regs.b = 0xAA;
        regs.c = 0x55;
        regs.d = 0x12;
        regs.e = 0x34;
        regs.h = 0xC0;
        regs.l = 0x01;
        regs.a = 0xAA;
        regs.f = 0x50;
        assert_eq!(regs.bc(), 0xAA55);
        assert_eq!(regs.de(), 0x1234);
        assert_eq!(regs.hl(), 0xC001);
        assert_eq!(regs.af(), 0xAA50);
    }

    #[test]
    fn pair_round_trip_over_full_domain() {
        let mut regs = Registers::default();
        for v in 0..=u16::MAX {
            regs.set_bc(v);
            assert_eq!(regs.bc(), v);
            assert_eq!(regs.b, (v >> 8) as u8);
            assert_eq!(regs.c, v as u8);

            regs.set_de(v);
            assert_eq!(regs.de(), v);
            assert_eq!((regs.d, regs.e), ((v >> 8) as u8, v as u8));

            regs.set_hl(v);
            assert_eq!(regs.hl(), v);
            assert_eq!((regs.h, regs.l), ((v >> 8) as u8, v as u8));

            regs.set_af(v);
            assert_eq!(regs.af(), v & 0xFFF0);
            assert_eq!(regs.a, (v >> 8) as u8);
        }
    }

    #[test]
    fn pair_write_touches_only_its_registers() {
        let mut regs = Registers {
            a: 1,
            f: 0x20,
            b: 2,
            c: 3,
            d: 4,
            e: 5,
            h: 6,
            l: 7,
            sp: 0x1111,
            pc: 0x2222,
        };
        let before = regs;
        regs.set_de(0xAA55);
        assert_eq!(regs.d, 0xAA);
        assert_eq!(regs.e, 0x55);
        regs.d = before.d;
        regs.e = before.e;
        assert_eq!(regs, before);
    }

    #[test]
    fn set_af_masks_flag_low_nibble() {
        let mut regs = Registers::default();
        regs.set_af(0xAA55);
        assert_eq!(regs.a, 0xAA);
        assert_eq!(regs.f, 0x50);
    }

    #[test]
    fn flag_setters_touch_exactly_one_bit() {
        let mut regs = Registers::default();
        for initial in 0..=u8::MAX {
            for flag in Flag::ALL {
                regs.f = initial;
                regs.set_flag(flag, true);
                assert_eq!(regs.f, initial | flag.mask());
                assert!(regs.flag(flag));

                regs.f = initial;
                regs.set_flag(flag, false);
                assert_eq!(regs.f, initial & !flag.mask());
                assert!(!regs.flag(flag));
            }
        }
    }

    #[test]
    fn named_flag_accessors_use_documented_bits() {
        let mut regs = Registers::default();
        regs.set_zero(true);
        assert_eq!(regs.f, 0x80);
        regs.set_zero(false);
        regs.set_subtract(true);
        assert_eq!(regs.f, 0x40);
        regs.set_subtract(false);
        regs.set_half_carry(true);
        assert_eq!(regs.f, 0x20);
        regs.set_half_carry(false);
        regs.set_carry(true);
        assert_eq!(regs.f, 0x10);
        assert!(regs.carry() && !regs.zero() && !regs.subtract() && !regs.half_carry());
        regs.set_carry(false);
        assert_eq!(regs.f, 0);
    }

    #[test]
    fn get8_set8_follow_selector() {
        let mut regs = Registers::default();
        for (i, reg) in Reg8::ALL.into_iter().enumerate() {
            regs.set8(reg, i as u8 + 1);
        }
        assert_eq!(
            [regs.b, regs.c, regs.d, regs.e, regs.h, regs.l, regs.a],
            [1, 2, 3, 4, 5, 6, 7]
        );
        assert_eq!(regs.get8(Reg8::H), 5);
    }
}
