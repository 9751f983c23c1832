use super::{bank_mask, ROM_BANK_SIZE};

const RAM_SIZE: usize = 0x200;

/// MBC2: up to 256 KiB ROM and 512 half-bytes of built-in RAM.
///
/// Both registers sit in 0x0000-0x3FFF; address bit 8 picks between the
/// RAM gate (clear) and the 4-bit ROM bank (set).
pub(in super::super) struct Mbc2 {
    rom: Vec<u8>,
    ram: [u8; RAM_SIZE],
    rom_bank_mask: usize,
    rom_bank: u8,
    ram_enabled: bool,
}

impl Mbc2 {
    pub(super) fn new(rom: Vec<u8>) -> Self {
        Self {
            rom_bank_mask: bank_mask(rom.len(), ROM_BANK_SIZE),
            rom,
            ram: [0; RAM_SIZE],
            rom_bank: 1,
            ram_enabled: false,
        }
    }

    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            0
        } else {
            usize::from(self.rom_bank) & self.rom_bank_mask
        };
        let index = bank * ROM_BANK_SIZE + usize::from(addr & 0x3FFF);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn write_rom(&mut self, addr: u16, value: u8) {
        if addr >= 0x4000 {
            return;
        }
        if addr & 0x0100 == 0 {
            self.ram_enabled = value & 0x0F == 0x0A;
        } else {
            self.rom_bank = value & 0x0F;
            if self.rom_bank == 0 {
                self.rom_bank = 1;
            }
            log::trace!("mbc2: rom bank {}", self.rom_bank);
        }
    }

    /// The RAM is 4 bits wide; the upper nibble is open bus and reads 1s.
    pub(super) fn read_ram(&self, addr: u16) -> Option<u8> {
        if !self.ram_enabled {
            return None;
        }
        Some(0xF0 | self.ram[usize::from(addr & 0x1FFF) % RAM_SIZE])
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        if self.ram_enabled {
            self.ram[usize::from(addr & 0x1FFF) % RAM_SIZE] = value & 0x0F;
        }
    }

    pub(super) fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub(super) fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }
}
