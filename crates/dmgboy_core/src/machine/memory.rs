//! Fixed-purpose memory blocks and the address-space layout.

use rand::{rngs::StdRng, RngCore, SeedableRng};

pub const ROM_BANK0_START: u16 = 0x0000;
pub const ROM_BANKN_START: u16 = 0x4000;
pub const VRAM_START: u16 = 0x8000;
pub const VRAM_END: u16 = 0x9FFF;
pub const EXT_RAM_START: u16 = 0xA000;
pub const EXT_RAM_END: u16 = 0xBFFF;
pub const WRAM_START: u16 = 0xC000;
pub const WRAM_END: u16 = 0xDFFF;
pub const ECHO_START: u16 = 0xE000;
pub const ECHO_END: u16 = 0xFDFF;
pub const OAM_START: u16 = 0xFE00;
pub const OAM_END: u16 = 0xFE9F;
pub const UNUSABLE_START: u16 = 0xFEA0;
pub const UNUSABLE_END: u16 = 0xFEFF;
pub const IO_START: u16 = 0xFF00;
pub const IO_END: u16 = 0xFF7F;
pub const HRAM_START: u16 = 0xFF80;
pub const HRAM_END: u16 = 0xFFFE;
pub const IE_ADDR: u16 = 0xFFFF;

pub const WRAM_SIZE: usize = 0x2000;
pub const HRAM_SIZE: usize = 0x7F;

/// Read/write contract for a block the bus routes to.
///
/// Addresses are relative to the start of the block; the bus subtracts the
/// partition base before calling in.
pub trait Addressable {
    fn read(&self, offset: u16) -> u8;
    fn write(&mut self, offset: u16, value: u8);
}

/// A flat RAM block of `N` bytes.
#[derive(Clone)]
pub struct Ram<const N: usize> {
    bytes: Box<[u8; N]>,
}

/// 8 KiB internal work RAM at 0xC000, also visible through echo RAM.
pub type WorkRam = Ram<WRAM_SIZE>;
/// 127 bytes of high RAM at 0xFF80.
pub type HighRam = Ram<HRAM_SIZE>;

impl<const N: usize> Default for Ram<N> {
    fn default() -> Self {
        Self {
            bytes: Box::new([0; N]),
        }
    }
}

impl<const N: usize> Ram<N> {
    /// Fill with a reproducible pseudo-random pattern, approximating the
    /// undefined power-on contents of SRAM.
    pub fn randomize(&mut self, rng: &mut StdRng) {
        rng.fill_bytes(&mut self.bytes[..]);
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..]
    }
}

impl<const N: usize> Addressable for Ram<N> {
    #[inline]
    fn read(&self, offset: u16) -> u8 {
        self.bytes.get(offset as usize).copied().unwrap_or(0xFF)
    }

    #[inline]
    fn write(&mut self, offset: u16, value: u8) {
        if let Some(byte) = self.bytes.get_mut(offset as usize) {
            *byte = value;
        }
    }
}

/// 0xFEA0-0xFEFF. Writes are dropped and reads return 0xFF.
#[derive(Clone, Copy, Debug, Default)]
pub struct Unusable;

impl Addressable for Unusable {
    #[inline]
    fn read(&self, _offset: u16) -> u8 {
        0xFF
    }

    #[inline]
    fn write(&mut self, _offset: u16, _value: u8) {}
}

/// Seeded generator used for power-on RAM contents.
pub(crate) fn power_on_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
