//! Cartridge slot: header decode plus the bank controller it selects.
//!
//! The controller family is fixed for the life of the cartridge, so it is a
//! closed enum dispatched with `match` rather than a trait object.

pub mod header;
mod mbc1;
mod mbc2;
mod mbc3;
mod mbc5;
mod rom_only;
mod rom_ram;
mod rtc;

pub use header::{CartridgeKind, ControllerKind, Header};
pub use rtc::{Rtc, RtcRegisters};

use crate::error::LoadError;
use mbc1::Mbc1;
use mbc2::Mbc2;
use mbc3::Mbc3;
use mbc5::Mbc5;
use rom_only::RomOnly;
use rom_ram::RomRam;

pub(crate) const ROM_BANK_SIZE: usize = 0x4000;
pub(crate) const RAM_BANK_SIZE: usize = 0x2000;

/// Mask applied to bank numbers so they wrap around the banks present.
/// Sizes are powers of two once the image has been padded.
#[inline]
fn bank_mask(len: usize, bank_size: usize) -> usize {
    (len / bank_size).max(1) - 1
}

enum Controller {
    RomOnly(RomOnly),
    RomRam(RomRam),
    Mbc1(Mbc1),
    Mbc2(Mbc2),
    Mbc3(Mbc3),
    Mbc5(Mbc5),
}

macro_rules! dispatch {
    ($controller:expr, $mbc:ident => $body:expr) => {
        match $controller {
            Controller::RomOnly($mbc) => $body,
            Controller::RomRam($mbc) => $body,
            Controller::Mbc1($mbc) => $body,
            Controller::Mbc2($mbc) => $body,
            Controller::Mbc3($mbc) => $body,
            Controller::Mbc5($mbc) => $body,
        }
    };
}

pub struct Cartridge {
    header: Header,
    kind: CartridgeKind,
    controller: Controller,
}

impl Cartridge {
    /// Decode the header and build the matching controller.
    ///
    /// Images shorter than the header are rejected. Images shorter than the
    /// declared size, or whose size is not a power-of-two number of banks,
    /// are padded with 0xFF.
    pub fn from_rom(rom: &[u8]) -> Result<Self, LoadError> {
        let header = Header::parse(rom)?;
        let kind = header.kind()?;
        let declared = header.rom_size()?;
        let ram_size = if kind.ram { header.ram_size()? } else { 0 };

        if !header.logo_matches() {
            log::warn!("cartridge logo does not match; a real boot ROM would lock up");
        }
        if !header.header_checksum_matches() {
            log::warn!(
                "header checksum mismatch: header says 0x{:02X}",
                header.header_checksum
            );
        }

        let size = declared.max(rom.len()).next_power_of_two().max(0x8000);
        let mut image = rom.to_vec();
        if image.len() < size {
            log::warn!(
                "ROM image is {} bytes, padding to {} bytes with 0xFF",
                image.len(),
                size
            );
            image.resize(size, 0xFF);
        }

        log::info!(
            "cartridge \"{}\": {:?}, ROM {} KiB, RAM {} KiB",
            header.title,
            kind.controller,
            image.len() / 1024,
            ram_size / 1024
        );

        let controller = match kind.controller {
            ControllerKind::RomOnly => Controller::RomOnly(RomOnly::new(image)),
            ControllerKind::RomRam => Controller::RomRam(RomRam::new(image, ram_size)),
            ControllerKind::Mbc1 => Controller::Mbc1(Mbc1::new(image, ram_size)),
            ControllerKind::Mbc2 => Controller::Mbc2(Mbc2::new(image)),
            ControllerKind::Mbc3 => Controller::Mbc3(Mbc3::new(image, ram_size, kind.rtc)),
            ControllerKind::Mbc5 => Controller::Mbc5(Mbc5::new(image, ram_size, kind.rumble)),
        };

        Ok(Self {
            header,
            kind,
            controller,
        })
    }

    pub fn header(&self) -> &Header {
        &self.header
    }

    pub fn kind(&self) -> CartridgeKind {
        self.kind
    }

    pub fn has_battery(&self) -> bool {
        self.kind.battery
    }

    /// 0x0000-0x7FFF.
    #[inline]
    pub fn read_rom(&self, addr: u16) -> u8 {
        dispatch!(&self.controller, mbc => mbc.read_rom(addr))
    }

    /// Writes to the ROM area drive the controller registers.
    #[inline]
    pub fn write_rom(&mut self, addr: u16, value: u8) {
        dispatch!(&mut self.controller, mbc => mbc.write_rom(addr, value))
    }

    /// 0xA000-0xBFFF. With the RAM gate closed or no RAM fitted the data
    /// lines float, which reads back as noise.
    #[inline]
    pub fn read_sram(&self, addr: u16) -> u8 {
        self.sram(addr).unwrap_or_else(rand::random::<u8>)
    }

    /// Like [`Cartridge::read_sram`] but deterministic: floating reads
    /// come back as 0xFF.
    #[inline]
    pub fn peek_sram(&self, addr: u16) -> u8 {
        self.sram(addr).unwrap_or(0xFF)
    }

    fn sram(&self, addr: u16) -> Option<u8> {
        dispatch!(&self.controller, mbc => mbc.read_ram(addr))
    }

    #[inline]
    pub fn write_sram(&mut self, addr: u16, value: u8) {
        dispatch!(&mut self.controller, mbc => mbc.write_ram(addr, value))
    }

    /// Advance the cartridge clock, if there is one.
    pub fn tick(&mut self, cycles: u32) {
        if let Controller::Mbc3(mbc) = &mut self.controller {
            mbc.tick(cycles);
        }
    }

    /// External RAM contents, for writing battery saves.
    pub fn ram(&self) -> &[u8] {
        dispatch!(&self.controller, mbc => mbc.ram())
    }

    /// Restore external RAM from a save. Extra bytes are ignored and a short
    /// save only fills the start of RAM.
    pub fn load_ram(&mut self, data: &[u8]) {
        let is_mbc2 = matches!(self.controller, Controller::Mbc2(_));
        let ram = dispatch!(&mut self.controller, mbc => mbc.ram_mut());
        let len = ram.len().min(data.len());
        ram[..len].copy_from_slice(&data[..len]);
        if is_mbc2 {
            ram.iter_mut().for_each(|nibble| *nibble &= 0x0F);
        }
        if len < data.len() {
            log::warn!("save is {} bytes, cartridge RAM is {}", data.len(), len);
        }
    }

    pub fn rtc(&self) -> Option<&Rtc> {
        match &self.controller {
            Controller::Mbc3(mbc) => mbc.rtc(),
            _ => None,
        }
    }

    /// Whether the rumble motor is currently switched on.
    pub fn rumble_active(&self) -> bool {
        match &self.controller {
            Controller::Mbc5(mbc) => mbc.motor(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
