use super::super::GameBoyBus;
use crate::machine::io;
use crate::machine::memory::*;

impl GameBoyBus {
    /// CPU write.
    pub fn write(&mut self, addr: u16, value: u8) {
        match addr {
            ROM_BANK0_START..=0x7FFF => self.cartridge.write_rom(addr, value),

            VRAM_START..=VRAM_END => {
                if !self.lock_vram_oam || self.ppu.vram_accessible() {
                    self.ppu.vram_mut().write(addr - VRAM_START, value);
                }
            }

            EXT_RAM_START..=EXT_RAM_END => self.cartridge.write_sram(addr, value),

            WRAM_START..=WRAM_END => self.wram.write(addr - WRAM_START, value),
            ECHO_START..=ECHO_END => self.wram.write(addr - ECHO_START, value),

            OAM_START..=OAM_END => {
                if !self.lock_vram_oam || self.ppu.oam_accessible() {
                    self.ppu.oam_mut().write(addr - OAM_START, value);
                }
            }

            UNUSABLE_START..=UNUSABLE_END => self.unusable.write(addr - UNUSABLE_START, value),
            IO_START..=IO_END => self.write_io(addr, value),
            HRAM_START..=HRAM_END => self.hram.write(addr - HRAM_START, value),
            IE_ADDR => self.interrupts.write_ie(value),
        }
    }

    pub(in super::super) fn write_io(&mut self, addr: u16, value: u8) {
        match addr {
            io::P1 => self.joypad.write(value),
            io::DIV => self.timer.write_div(&mut self.interrupts),
            io::TIMA => self.timer.write_tima(value),
            io::TMA => self.timer.write_tma(value),
            io::TAC => self.timer.write_tac(value, &mut self.interrupts),
            io::IF => self.interrupts.write_if(value),
            io::DMA => self.start_oam_dma(value),
            io::LCDC..=io::WX => self.ppu.write_register(addr, value, &mut self.interrupts),
            io::BOOT => {
                if value != 0 && self.boot_mapped {
                    self.boot_mapped = false;
                    log::info!("boot ROM unmapped");
                }
            }
            _ => self.io.set(addr, value),
        }
    }
}
