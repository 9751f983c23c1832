use super::{bank_mask, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// MBC1: up to 2 MiB ROM and 32 KiB RAM.
///
/// BANK1 (0x2000-0x3FFF) holds the low five ROM bank bits and can never be
/// zero. BANK2 (0x4000-0x5FFF) supplies ROM bank bits 5-6 for the
/// switchable region at all times; in mode 1 it also selects the RAM bank
/// and the bank seen at 0x0000-0x3FFF.
pub(in super::super) struct Mbc1 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    rom_bank_mask: usize,
    ram_bank_mask: usize,
    ram_enabled: bool,
    bank1: u8,
    bank2: u8,
    mode: bool,
}

impl Mbc1 {
    pub(super) fn new(rom: Vec<u8>, ram_size: usize) -> Self {
        Self {
            rom_bank_mask: bank_mask(rom.len(), ROM_BANK_SIZE),
            ram_bank_mask: bank_mask(ram_size, RAM_BANK_SIZE),
            rom,
            ram: vec![0; ram_size],
            ram_enabled: false,
            bank1: 1,
            bank2: 0,
            mode: false,
        }
    }

    /// Bank mapped at 0x0000-0x3FFF.
    fn low_bank(&self) -> usize {
        if self.mode {
            (usize::from(self.bank2) << 5) & self.rom_bank_mask
        } else {
            0
        }
    }

    /// Bank mapped at 0x4000-0x7FFF.
    pub(super) fn high_bank(&self) -> usize {
        ((usize::from(self.bank2) << 5) | usize::from(self.bank1)) & self.rom_bank_mask
    }

    fn ram_bank(&self) -> usize {
        if self.mode {
            usize::from(self.bank2) & self.ram_bank_mask
        } else {
            0
        }
    }

    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            self.low_bank()
        } else {
            self.high_bank()
        };
        let index = bank * ROM_BANK_SIZE + usize::from(addr & 0x3FFF);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn write_rom(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            0x2000..=0x3FFF => {
                self.bank1 = value & 0x1F;
                if self.bank1 == 0 {
                    self.bank1 = 1;
                }
                log::trace!("mbc1: bank1={} -> rom bank {}", self.bank1, self.high_bank());
            }
            0x4000..=0x5FFF => {
                self.bank2 = value & 0x03;
                log::trace!("mbc1: bank2={}", self.bank2);
            }
            _ => self.mode = value & 0x01 != 0,
        }
    }

    fn ram_index(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled || self.ram.is_empty() {
            return None;
        }
        let index = self.ram_bank() * RAM_BANK_SIZE + usize::from(addr & 0x1FFF);
        Some(index % self.ram.len())
    }

    pub(super) fn read_ram(&self, addr: u16) -> Option<u8> {
        self.ram_index(addr).map(|index| self.ram[index])
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        if let Some(index) = self.ram_index(addr) {
            self.ram[index] = value;
        }
    }

    pub(super) fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub(super) fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }
}
