use super::{bank_mask, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// MBC5: up to 8 MiB ROM (9-bit bank number) and 128 KiB RAM.
///
/// A combined bank number of 0 maps bank 1 into 0x4000-0x7FFF.
/// On rumble carts bit 3 of the RAM bank register drives the motor.
pub(in super::super) struct Mbc5 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    rom_bank_mask: usize,
    ram_bank_mask: usize,
    rom_bank: u16,
    ram_bank: u8,
    ram_enabled: bool,
    rumble: bool,
    motor: bool,
}

impl Mbc5 {
    pub(super) fn new(rom: Vec<u8>, ram_size: usize, rumble: bool) -> Self {
        Self {
            rom_bank_mask: bank_mask(rom.len(), ROM_BANK_SIZE),
            ram_bank_mask: bank_mask(ram_size, RAM_BANK_SIZE),
            rom,
            ram: vec![0; ram_size],
            rom_bank: 1,
            ram_bank: 0,
            ram_enabled: false,
            rumble,
            motor: false,
        }
    }

    pub(super) fn motor(&self) -> bool {
        self.motor
    }

    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        let bank = if addr < 0x4000 {
            0
        } else {
            usize::from(self.rom_bank.max(1)) & self.rom_bank_mask
        };
        let index = bank * ROM_BANK_SIZE + usize::from(addr & 0x3FFF);
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(super) fn write_rom(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x1FFF => {
                self.ram_enabled = if self.rumble {
                    value == 0x0A
                } else {
                    value & 0x0F == 0x0A
                };
            }
            0x2000..=0x2FFF => {
                self.rom_bank = (self.rom_bank & 0x100) | u16::from(value);
                log::trace!("mbc5: rom bank {}", self.rom_bank);
            }
            0x3000..=0x3FFF => {
                self.rom_bank = (self.rom_bank & 0xFF) | (u16::from(value & 0x01) << 8);
                log::trace!("mbc5: rom bank {}", self.rom_bank);
            }
            0x4000..=0x5FFF => {
                if self.rumble {
                    self.motor = value & 0x08 != 0;
                    self.ram_bank = value & 0x07;
                } else {
                    self.ram_bank = value & 0x0F;
                }
            }
            _ => {}
        }
    }

    fn ram_index(&self, addr: u16) -> Option<usize> {
        if !self.ram_enabled || self.ram.is_empty() {
            return None;
        }
        let bank = usize::from(self.ram_bank) & self.ram_bank_mask;
        Some((bank * RAM_BANK_SIZE + usize::from(addr & 0x1FFF)) % self.ram.len())
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
