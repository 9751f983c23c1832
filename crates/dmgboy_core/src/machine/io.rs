//! I/O register addresses and the backing bank for registers that have no
//! dedicated peripheral model (serial, sound, unused cells).

use super::memory::{Addressable, IO_START};

pub const P1: u16 = 0xFF00;
pub const SB: u16 = 0xFF01;
pub const SC: u16 = 0xFF02;
pub const DIV: u16 = 0xFF04;
pub const TIMA: u16 = 0xFF05;
pub const TMA: u16 = 0xFF06;
pub const TAC: u16 = 0xFF07;
pub const IF: u16 = 0xFF0F;
pub const NR10: u16 = 0xFF10;
pub const NR52: u16 = 0xFF26;
pub const LCDC: u16 = 0xFF40;
pub const STAT: u16 = 0xFF41;
pub const SCY: u16 = 0xFF42;
pub const SCX: u16 = 0xFF43;
pub const LY: u16 = 0xFF44;
pub const LYC: u16 = 0xFF45;
pub const DMA: u16 = 0xFF46;
pub const BGP: u16 = 0xFF47;
pub const OBP0: u16 = 0xFF48;
pub const OBP1: u16 = 0xFF49;
pub const WY: u16 = 0xFF4A;
pub const WX: u16 = 0xFF4B;
/// Writing a non-zero value here unmaps the boot ROM.
pub const BOOT: u16 = 0xFF50;

const IO_SIZE: usize = 0x80;

/// Plain byte cells for 0xFF00-0xFF7F.
///
/// Peripherals with behaviour (joypad, timer, PPU, interrupt flags, DMA)
/// are routed elsewhere by the bus; whatever remains is stored here as
/// written. Sound registers live here and are never interpreted.
#[derive(Clone)]
pub struct IoRegisters {
    cells: [u8; IO_SIZE],
}

impl Default for IoRegisters {
    fn default() -> Self {
        Self {
            cells: [0; IO_SIZE],
        }
    }
}

impl IoRegisters {
    /// Read by absolute address (0xFF00-0xFF7F).
    #[inline]
    pub fn get(&self, addr: u16) -> u8 {
        self.read(addr.wrapping_sub(IO_START))
    }

    /// Write by absolute address (0xFF00-0xFF7F).
    #[inline]
    pub fn set(&mut self, addr: u16, value: u8) {
        self.write(addr.wrapping_sub(IO_START), value);
    }
}

impl Addressable for IoRegisters {
    #[inline]
    fn read(&self, offset: u16) -> u8 {
        self.cells.get(offset as usize).copied().unwrap_or(0xFF)
    }

    #[inline]
    fn write(&mut self, offset: u16, value: u8) {
        if let Some(cell) = self.cells.get_mut(offset as usize) {
            *cell = value;
        }
    }
}
