use crate::config::GameBoyConfig;
use crate::cpu::{self, Cpu, CpuState, Registers};
use crate::error::LoadError;
use crate::CYCLES_PER_FRAME;

use super::bus::PeekBus;
use super::cartridge::Cartridge;
use super::joypad::Button;
use super::ppu::PpuMode;
use super::GameBoyBus;

/// Largest boot ROM the DMG can map (0x0000-0x00FF).
const BOOT_ROM_MAX: usize = 0x100;

/// Snapshot of the LCD timing state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PpuState {
    pub mode: PpuMode,
    pub ly: u8,
    pub lcd_enabled: bool,
    pub frame_count: u64,
}

/// A complete DMG: the CPU core and everything behind the bus.
///
/// Time only moves through [`GameBoy::step`]; every accessor here is a
/// read-only snapshot.
pub struct GameBoy {
    pub cpu: Cpu,
    pub(crate) bus: GameBoyBus,
    cycles: u64,
}

impl GameBoy {
    /// Build a machine from a ROM image.
    ///
    /// Fails when the header names a controller that is not emulated or the
    /// image is too short to hold a header.
    pub fn new(rom: &[u8], config: GameBoyConfig) -> Result<Self, LoadError> {
        if let Some(boot) = &config.boot_rom {
            if boot.len() > BOOT_ROM_MAX {
                return Err(LoadError::BootRomTooLarge { len: boot.len() });
            }
        }

        let cartridge = Cartridge::from_rom(rom)?;
        let cpu = if config.boot_rom.is_some() {
            Cpu::power_on()
        } else {
            Cpu::new()
        };
        let bus = GameBoyBus::new(cartridge, &config);
        Ok(Self { cpu, bus, cycles: 0 })
    }

    /// [`GameBoy::new`] with the default configuration.
    pub fn from_rom(rom: &[u8]) -> Result<Self, LoadError> {
        Self::new(rom, GameBoyConfig::default())
    }

    /// Execute one instruction (or interrupt dispatch) and advance the rest
    /// of the machine by the same amount. Returns the machine cycles that
    /// elapsed, including any OAM DMA stall; 0 once the CPU has locked up.
    pub fn step(&mut self) -> u32 {
        let cycles = self.cpu.step(&mut self.bus);
        let total = cycles + self.bus.tick(cycles);
        self.cycles += u64::from(total);
        total
    }

    /// Run until the PPU finishes a frame, or one frame's worth of cycles
    /// passes with the LCD off, or the CPU locks up. Returns the cycles run.
    pub fn run_frame(&mut self) -> u32 {
        self.bus.ppu_mut().take_frame_ready();
        let mut elapsed = 0;
        while elapsed < CYCLES_PER_FRAME {
            let cycles = self.step();
            if cycles == 0 {
                log::warn!("cpu locked at pc=0x{:04X}", self.cpu.regs.pc);
                break;
            }
            elapsed += cycles;
            if self.bus.ppu_mut().take_frame_ready() {
                break;
            }
        }
        elapsed
    }

    pub fn set_button(&mut self, button: Button, pressed: bool) {
        self.bus.set_button(button, pressed);
    }

    pub fn press(&mut self, button: Button) {
        self.set_button(button, true);
    }

    pub fn release(&mut self, button: Button) {
        self.set_button(button, false);
    }

    /// Last completed frame, 160x144 shades in row-major order.
    pub fn frame(&self) -> &[u8] {
        self.bus.ppu().frame()
    }

    pub fn registers(&self) -> &Registers {
        &self.cpu.regs
    }

    pub fn cpu_state(&self) -> CpuState {
        self.cpu.state()
    }

    /// Machine cycles elapsed since power-on.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn ppu_state(&self) -> PpuState {
        let ppu = self.bus.ppu();
        PpuState {
            mode: ppu.mode(),
            ly: ppu.ly(),
            lcd_enabled: ppu.lcd_enabled(),
            frame_count: ppu.frame_count(),
        }
    }

    /// Read any address without side effects.
    pub fn peek(&self, addr: u16) -> u8 {
        self.bus.peek(addr)
    }

    pub fn bus(&self) -> &GameBoyBus {
        &self.bus
    }

    pub fn cartridge(&self) -> &Cartridge {
        self.bus.cartridge()
    }

    pub fn cartridge_mut(&mut self) -> &mut Cartridge {
        self.bus.cartridge_mut()
    }

    /// Disassemble the instruction at `addr` as currently mapped.
    pub fn disassemble(&self, addr: u16) -> (String, u16) {
        cpu::disassemble(&mut PeekBus(&self.bus), addr)
    }
}
