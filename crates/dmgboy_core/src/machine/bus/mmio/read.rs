use super::super::GameBoyBus;
use super::Access;
use crate::machine::io;
use crate::machine::memory::*;

impl GameBoyBus {
    /// CPU read.
    pub fn read(&self, addr: u16) -> u8 {
        self.load(addr, Access::Cpu)
    }

    /// Side-effect free read for debuggers and snapshots: ignores PPU
    /// access blocking and reads floating cartridge RAM as 0xFF.
    pub fn peek(&self, addr: u16) -> u8 {
        self.load(addr, Access::Peek)
    }

    pub(in super::super) fn load(&self, addr: u16, access: Access) -> u8 {
        match addr {
            0x0000..=0x00FF if self.boot_mapped => self
                .boot_rom
                .as_deref()
                .and_then(|boot| boot.get(addr as usize).copied())
                .unwrap_or_else(|| self.cartridge.read_rom(addr)),
            ROM_BANK0_START..=0x7FFF => self.cartridge.read_rom(addr),

            VRAM_START..=VRAM_END => {
                if access == Access::Cpu && self.lock_vram_oam && !self.ppu.vram_accessible() {
                    0xFF
                } else {
                    self.ppu.vram().read(addr - VRAM_START)
                }
            }

            EXT_RAM_START..=EXT_RAM_END => match access {
                Access::Peek => self.cartridge.peek_sram(addr),
                _ => self.cartridge.read_sram(addr),
            },

            WRAM_START..=WRAM_END => self.wram.read(addr - WRAM_START),
            ECHO_START..=ECHO_END => self.wram.read(addr - ECHO_START),

            OAM_START..=OAM_END => {
                if access == Access::Cpu && self.lock_vram_oam && !self.ppu.oam_accessible() {
                    0xFF
                } else {
                    self.ppu.oam().read(addr - OAM_START)
                }
            }

            UNUSABLE_START..=UNUSABLE_END => self.unusable.read(addr - UNUSABLE_START),
            IO_START..=IO_END => self.read_io(addr),
            HRAM_START..=HRAM_END => self.hram.read(addr - HRAM_START),
            IE_ADDR => self.interrupts.read_ie(),
        }
    }

    fn read_io(&self, addr: u16) -> u8 {
        match addr {
            io::P1 => self.joypad.read(),
            io::DIV => self.timer.div(),
            io::TIMA => self.timer.tima(),
            io::TMA => self.timer.tma(),
            io::TAC => self.timer.tac(),
            io::IF => self.interrupts.read_if(),
            io::DMA => self.dma.register(),
            io::LCDC..=io::WX => self.ppu.read_register(addr),
            io::BOOT => 0xFF,
            _ => self.io.get(addr),
        }
    }
}
