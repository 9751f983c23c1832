//! The DMG address space.
//!
//! One router owns every memory-mapped component and decodes addresses by
//! range; components see offsets relative to their own block through
//! [`Addressable`](super::memory::Addressable) or dedicated register methods.

mod dma;
mod init;
mod mmio;
mod traits;

pub(crate) use traits::PeekBus;

use self::dma::OamDma;
use super::cartridge::Cartridge;
use super::interrupts::InterruptController;
use super::io::IoRegisters;
use super::joypad::{Button, Joypad};
use super::memory::{HighRam, Unusable, WorkRam};
use super::ppu::Ppu;
use super::timer::Timer;
use crate::config::GameBoyConfig;

pub struct GameBoyBus {
    cartridge: Cartridge,
    /// Boot ROM image; visible at 0x0000-0x00FF while `boot_mapped` is set.
    boot_rom: Option<Vec<u8>>,
    boot_mapped: bool,
    wram: WorkRam,
    hram: HighRam,
    unusable: Unusable,
    io: IoRegisters,
    ppu: Ppu,
    timer: Timer,
    interrupts: InterruptController,
    joypad: Joypad,
    dma: OamDma,
    lock_vram_oam: bool,
    oam_dma_stall: bool,
}

impl GameBoyBus {
    /// Wire up a machine around `cartridge`.
    ///
    /// With a boot ROM every peripheral starts from its power-on state and
    /// the boot ROM is mapped over the cartridge header. Without one the
    /// I/O registers are set to the values the boot ROM would leave behind.
    pub fn new(cartridge: Cartridge, config: &GameBoyConfig) -> Self {
        let mut bus = Self {
            cartridge,
            boot_mapped: config.boot_rom.is_some(),
            boot_rom: config.boot_rom.clone(),
            wram: WorkRam::default(),
            hram: HighRam::default(),
            unusable: Unusable,
            io: IoRegisters::default(),
            ppu: Ppu::new(),
            timer: Timer::new(),
            interrupts: InterruptController::new(),
            joypad: Joypad::new(),
            dma: OamDma::default(),
            lock_vram_oam: config.lock_vram_oam,
            oam_dma_stall: config.oam_dma_stall,
        };
        if config.randomize_ram {
            bus.randomize_internal_ram(config.ram_seed);
        }
        if !bus.boot_mapped {
            bus.apply_post_boot_state();
        }
        bus
    }

    /// Advance every clocked component by `cycles` machine cycles, then run
    /// off any stall an OAM DMA started during those cycles. Returns the
    /// stall length so the caller can account for it.
    pub fn tick(&mut self, cycles: u32) -> u32 {
        self.advance(cycles);
        let stall = self.dma.take_stall();
        if stall != 0 {
            self.advance(stall);
        }
        stall
    }

    fn advance(&mut self, cycles: u32) {
        if cycles == 0 {
            return;
        }
        self.ppu.update(cycles, &mut self.interrupts);
        self.timer.update(cycles, &mut self.interrupts);
        self.cartridge.tick(cycles);
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.joypad.update(button, pressed, &mut self.interrupts);
    }

    pub fn boot_rom_mapped(&self) -> bool {
        self.boot_mapped
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn cartridge_mut(&mut self) -> &mut Cartridge {
        &mut self.cartridge
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub(crate) fn ppu_mut(&mut self) -> &mut Ppu {
        &mut self.ppu
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    pub fn interrupts(&self) -> &InterruptController {
        &self.interrupts
    }

    pub fn joypad(&self) -> &Joypad {
        &self.joypad
    }

    pub fn wram(&self) -> &WorkRam {
        &self.wram
    }

    pub fn hram(&self) -> &HighRam {
        &self.hram
    }
}
