use super::rtc::Rtc;
use super::{bank_mask, RAM_BANK_SIZE, ROM_BANK_SIZE};

/// MBC3: up to 2 MiB ROM, 32 KiB RAM and an optional real-time clock.
///
/// The RAM bank register doubles as the RTC register select: values 0-3
/// pick a RAM bank, 0x08-0x0C map one clock register at 0xA000-0xBFFF.
pub(in super::super) struct Mbc3 {
    rom: Vec<u8>,
    ram: Vec<u8>,
    rom_bank_mask: usize,
    ram_bank_mask: usize,
    rom_bank: u8,
    ram_select: u8,
    ram_enabled: bool,
    rtc: Option<Rtc>,
}

impl Mbc3 {
    pub(super) fn new(rom: Vec<u8>, ram_size: usize, has_rtc: bool) -> Self {
        Self {
            rom_bank_mask: bank_mask(rom.len(), ROM_BANK_SIZE),
            ram_bank_mask: bank_mask(ram_size, RAM_BANK_SIZE),
            rom,
            ram: vec![0; ram_size],
            rom_bank: 1,
            ram_select: 0,
            ram_enabled: false,
            rtc: has_rtc.then(Rtc::new),
        }
    }

    pub(super) fn rtc(&self) -> Option<&Rtc> {
        self.rtc.as_ref()
    }

    pub(super) fn tick(&mut self, cycles: u32) {
        if let Some(rtc) = self.rtc.as_mut() {
            rtc.tick(cycles);
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
        match addr {
            0x0000..=0x1FFF => self.ram_enabled = value & 0x0F == 0x0A,
            0x2000..=0x3FFF => {
                self.rom_bank = value & 0x7F;
                if self.rom_bank == 0 {
                    self.rom_bank = 1;
                }
                log::trace!("mbc3: rom bank {}", self.rom_bank);
            }
            0x4000..=0x5FFF => self.ram_select = value,
            _ => {
                if let Some(rtc) = self.rtc.as_mut() {
                    rtc.write_latch(value);
                }
            }
        }
    }

    fn ram_index(&self, addr: u16) -> Option<usize> {
        if self.ram.is_empty() {
            return None;
        }
        let bank = usize::from(self.ram_select) & self.ram_bank_mask;
        Some((bank * RAM_BANK_SIZE + usize::from(addr & 0x1FFF)) % self.ram.len())
    }

    pub(super) fn read_ram(&self, addr: u16) -> Option<u8> {
        if !self.ram_enabled {
            return None;
        }
        match self.ram_select {
            0x00..=0x03 => self.ram_index(addr).map(|index| self.ram[index]),
            0x08..=0x0C => self.rtc.as_ref().map(|rtc| rtc.read(self.ram_select)),
            _ => None,
        }
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        if !self.ram_enabled {
            return;
        }
        match self.ram_select {
            0x00..=0x03 => {
                if let Some(index) = self.ram_index(addr) {
                    self.ram[index] = value;
                }
            }
            0x08..=0x0C => {
                let select = self.ram_select;
                if let Some(rtc) = self.rtc.as_mut() {
                    rtc.write(select, value);
                }
            }
            _ => {}
        }
    }

    pub(super) fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub(super) fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }
}
