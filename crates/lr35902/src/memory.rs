use anyhow::{ensure, Result};

use crate::ADDRESS_SPACE;

/// Abstraction over the addressable space seen by the CPU.
///
/// The core never bounds-checks: every 16-bit address is handed to the
/// implementation, which decides how to map, mirror or ignore it.
pub trait Memory {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Read a little-endian word as two byte accesses at `addr` and
    /// `addr + 1`, low byte first. The second address wraps at 0xFFFF.
    fn read16(&mut self, addr: u16) -> u16 {
        let lo = self.read8(addr);
        let hi = self.read8(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    /// Write a little-endian word as two byte accesses at `addr` and
    /// `addr + 1`, low byte first.
    fn write16(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
    }
}

impl<M: Memory + ?Sized> Memory for &mut M {
    fn read8(&mut self, addr: u16) -> u8 {
        (**self).read8(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        (**self).write8(addr, value)
    }

    fn read16(&mut self, addr: u16) -> u16 {
        (**self).read16(addr)
    }

    fn write16(&mut self, addr: u16, value: u16) {
        (**self).write16(addr, value)
    }
}

/// Flat 64 KiB RAM with no memory map.
///
/// Handy for tests and small tools that want to run raw instruction
/// streams; real machines plug in their own bus.
#[derive(Clone)]
pub struct FlatMemory {
    bytes: Box<[u8; ADDRESS_SPACE]>,
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FlatMemory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.bytes.iter().filter(|b| **b != 0).count();
        f.debug_struct("FlatMemory")
            .field("non_zero_bytes", &used)
            .finish()
    }
}

impl FlatMemory {
    pub fn new() -> Self {
        Self {
            bytes: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Copy `image` into memory starting at `origin`.
    ///
    /// Images that would run past 0xFFFF are rejected rather than wrapped.
    pub fn load(&mut self, origin: u16, image: &[u8]) -> Result<()> {
        let start = origin as usize;
        let end = start + image.len();
        ensure!(
            end <= ADDRESS_SPACE,
            "image of {} bytes at 0x{:04X} overflows the address space by {} bytes",
            image.len(),
            origin,
            end - ADDRESS_SPACE
        );
        self.bytes[start..end].copy_from_slice(image);
        log::debug!("loaded {} bytes at 0x{:04X}", image.len(), origin);
        Ok(())
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl Memory for FlatMemory {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.bytes[addr as usize]
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.bytes[addr as usize] = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_little_endian() {
        let mut mem = FlatMemory::new();
        mem.write16(0xC000, 0xBEEF);
        assert_eq!(mem.read8(0xC000), 0xEF);
        assert_eq!(mem.read8(0xC001), 0xBE);
        assert_eq!(mem.read16(0xC000), 0xBEEF);
    }

    #[test]
    fn word_access_wraps_at_top_of_memory() {
        let mut mem = FlatMemory::new();
        mem.write16(0xFFFF, 0x1234);
        assert_eq!(mem.read8(0xFFFF), 0x34);
        assert_eq!(mem.read8(0x0000), 0x12);
        assert_eq!(mem.read16(0xFFFF), 0x1234);
    }

    #[test]
    fn load_copies_image() -> Result<()> {
        let mut mem = FlatMemory::new();
        mem.load(0x0100, &[0x00, 0x3C, 0x76])?;
        assert_eq!(&mem.as_slice()[0x0100..0x0103], &[0x00, 0x3C, 0x76]);
        Ok(())
    }

    #[test]
    fn load_rejects_overflowing_image() {
        let mut mem = FlatMemory::new();
        let err = mem.load(0xFFFE, &[1, 2, 3]).unwrap_err();
        assert!(err.to_string().contains("overflows"), "{err}");
        // Nothing was written.
        assert_eq!(mem.read8(0xFFFE), 0);
    }
}
