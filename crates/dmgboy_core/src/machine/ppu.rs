//! Pixel processing unit.
//!
//! Timing is modelled per phase rather than per dot: each visible scanline
//! runs OAM search (20 cycles), draw (43) and hblank (51), and vblank spans
//! ten whole lines. The full scanline is composed when the draw phase
//! begins.

mod regs;
mod render;

pub use regs::{Lcdc, StatSelect};

use super::interrupts::{Interrupt, InterruptController};
use super::io;
use super::memory::Addressable;
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const OAM_SEARCH_CYCLES: u32 = 20;
pub const DRAW_CYCLES: u32 = 43;
pub const HBLANK_CYCLES: u32 = 51;
pub const LINE_CYCLES: u32 = OAM_SEARCH_CYCLES + DRAW_CYCLES + HBLANK_CYCLES;
pub const VISIBLE_LINES: u8 = 144;
pub const LAST_LINE: u8 = 153;

pub const VRAM_SIZE: usize = 0x2000;
pub const OAM_SIZE: usize = 0xA0;

/// STAT mode numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PpuMode {
    #[default]
    HBlank = 0,
    VBlank = 1,
    OamSearch = 2,
    Draw = 3,
}

impl PpuMode {
    /// Length of one pass through this phase. VBlank is counted per line.
    #[inline]
    fn duration(self) -> u32 {
        match self {
            PpuMode::OamSearch => OAM_SEARCH_CYCLES,
            PpuMode::Draw => DRAW_CYCLES,
            PpuMode::HBlank => HBLANK_CYCLES,
            PpuMode::VBlank => LINE_CYCLES,
        }
    }
}

/// 8 KiB of tile data and tile maps at 0x8000.
#[derive(Clone)]
pub struct Vram(Box<[u8; VRAM_SIZE]>);

/// Sprite attribute table at 0xFE00, 40 entries of 4 bytes.
#[derive(Clone)]
pub struct Oam([u8; OAM_SIZE]);

impl Default for Vram {
    fn default() -> Self {
        Self(Box::new([0; VRAM_SIZE]))
    }
}

impl Default for Oam {
    fn default() -> Self {
        Self([0; OAM_SIZE])
    }
}

impl Addressable for Vram {
    #[inline]
    fn read(&self, offset: u16) -> u8 {
        self.0[offset as usize & (VRAM_SIZE - 1)]
    }

    #[inline]
    fn write(&mut self, offset: u16, value: u8) {
        self.0[offset as usize & (VRAM_SIZE - 1)] = value;
    }
}

impl Addressable for Oam {
    #[inline]
    fn read(&self, offset: u16) -> u8 {
        self.0.get(offset as usize).copied().unwrap_or(0xFF)
    }

    #[inline]
    fn write(&mut self, offset: u16, value: u8) {
        if let Some(byte) = self.0.get_mut(offset as usize) {
            *byte = value;
        }
    }
}

impl Oam {
    /// Replace the whole table, as an OAM DMA transfer does.
    pub fn load(&mut self, data: &[u8; OAM_SIZE]) {
        self.0 = *data;
    }
}

pub struct Ppu {
    vram: Vram,
    oam: Oam,
    lcdc: Lcdc,
    stat: StatSelect,
    scy: u8,
    scx: u8,
    ly: u8,
    lyc: u8,
    bgp: u8,
    obp0: u8,
    obp1: u8,
    wy: u8,
    wx: u8,
    mode: PpuMode,
    /// Cycles spent in the current phase.
    dot: u32,
    /// Internal window line counter; only advances on lines that drew it.
    window_line: u8,
    /// OR of all enabled STAT sources; the interrupt fires on its rising edge.
    stat_line: bool,
    back: Box<[u8]>,
    front: Box<[u8]>,
    frame_ready: bool,
    frames: u64,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    /// PPU at power-on: LCD off, all registers clear.
    pub fn new() -> Self {
        Self {
            vram: Vram::default(),
            oam: Oam::default(),
            lcdc: Lcdc::empty(),
            stat: StatSelect::empty(),
            scy: 0,
            scx: 0,
            ly: 0,
            lyc: 0,
            bgp: 0,
            obp0: 0,
            obp1: 0,
            wy: 0,
            wx: 0,
            mode: PpuMode::HBlank,
            dot: 0,
            window_line: 0,
            stat_line: false,
            back: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT].into_boxed_slice(),
            front: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT].into_boxed_slice(),
            frame_ready: false,
            frames: 0,
        }
    }

    /// Registers as the boot ROM leaves them: LCD and background on,
    /// BGP=0xFC, starting a fresh frame.
    pub fn post_boot() -> Self {
        let mut ppu = Self::new();
        ppu.lcdc = Lcdc::from_bits_retain(0x91);
        ppu.bgp = 0xFC;
        ppu.mode = PpuMode::OamSearch;
        ppu
    }

    #[inline]
    pub fn mode(&self) -> PpuMode {
        self.mode
    }

    #[inline]
    pub fn ly(&self) -> u8 {
        self.ly
    }

    #[inline]
    pub fn lcdc(&self) -> Lcdc {
        self.lcdc
    }

    #[inline]
    pub fn lcd_enabled(&self) -> bool {
        self.lcdc.contains(Lcdc::LCD_ENABLE)
    }

    /// Completed frames since construction.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Last completed frame: 160x144 shades (0 = lightest, 3 = darkest)
    /// in row-major order.
    #[inline]
    pub fn frame(&self) -> &[u8] {
        &self.front
    }

    /// True once after each vblank entry.
    pub fn take_frame_ready(&mut self) -> bool {
        std::mem::take(&mut self.frame_ready)
    }

    #[inline]
    pub fn vram(&self) -> &Vram {
        &self.vram
    }

    #[inline]
    pub fn vram_mut(&mut self) -> &mut Vram {
        &mut self.vram
    }

    #[inline]
    pub fn oam(&self) -> &Oam {
        &self.oam
    }

    #[inline]
    pub fn oam_mut(&mut self) -> &mut Oam {
        &mut self.oam
    }

    /// Whether the CPU could reach VRAM right now on hardware.
    #[inline]
    pub fn vram_accessible(&self) -> bool {
        self.mode != PpuMode::Draw
    }

    /// Whether the CPU could reach OAM right now on hardware.
    #[inline]
    pub fn oam_accessible(&self) -> bool {
        !matches!(self.mode, PpuMode::OamSearch | PpuMode::Draw)
    }

    /// Advance by `cycles` machine cycles, crossing as many phase and line
    /// boundaries as needed.
    pub fn update(&mut self, cycles: u32, interrupts: &mut InterruptController) {
        if !self.lcd_enabled() {
            return;
        }

        let mut remaining = cycles;
        while remaining > 0 {
            let left = self.mode.duration() - self.dot;
            let step = left.min(remaining);
            self.dot += step;
            remaining -= step;
            if self.dot == self.mode.duration() {
                self.dot = 0;
                self.next_phase(interrupts);
            }
        }
    }

    fn next_phase(&mut self, interrupts: &mut InterruptController) {
        match self.mode {
            PpuMode::OamSearch => {
                self.mode = PpuMode::Draw;
                self.render_scanline();
            }
            PpuMode::Draw => self.mode = PpuMode::HBlank,
            PpuMode::HBlank => {
                self.ly += 1;
                if self.ly == VISIBLE_LINES {
                    self.enter_vblank(interrupts);
                } else {
                    self.mode = PpuMode::OamSearch;
                }
            }
            PpuMode::VBlank => {
                if self.ly == LAST_LINE {
                    self.ly = 0;
                    self.window_line = 0;
                    self.mode = PpuMode::OamSearch;
                } else {
                    self.ly += 1;
                }
            }
        }
        self.update_stat_line(interrupts);
    }

    fn enter_vblank(&mut self, interrupts: &mut InterruptController) {
        self.mode = PpuMode::VBlank;
        interrupts.request(Interrupt::VBlank);
        std::mem::swap(&mut self.front, &mut self.back);
        self.frame_ready = true;
        self.frames += 1;
        log::debug!("ppu: vblank, frame {}", self.frames);
    }

    /// Recompute the STAT interrupt line and request INT 48h on a rising edge.
    fn update_stat_line(&mut self, interrupts: &mut InterruptController) {
        if !self.lcd_enabled() {
            self.stat_line = false;
            return;
        }

        let coincidence = self.ly == self.lyc;
        let line = (self.stat.contains(StatSelect::LYC) && coincidence)
            || (self.stat.contains(StatSelect::HBLANK) && self.mode == PpuMode::HBlank)
            || (self.stat.contains(StatSelect::VBLANK) && self.mode == PpuMode::VBlank)
            || (self.stat.contains(StatSelect::OAM) && self.mode == PpuMode::OamSearch);

        if line && !self.stat_line {
            log::debug!(
                "ppu: STAT rising edge (ly={} mode={:?} select={:?})",
                self.ly,
                self.mode,
                self.stat
            );
            interrupts.request(Interrupt::LcdStat);
        }
        self.stat_line = line;
    }

    fn read_stat(&self) -> u8 {
        let mut value = 0x80 | self.stat.bits();
        if self.ly == self.lyc {
            value |= 0x04;
        }
        if self.lcd_enabled() {
            value |= self.mode as u8;
        }
        value
    }

    fn write_lcdc(&mut self, value: u8, interrupts: &mut InterruptController) {
        let was_enabled = self.lcd_enabled();
        self.lcdc = Lcdc::from_bits_retain(value);
        let enabled = self.lcd_enabled();

        if was_enabled && !enabled {
            log::debug!("ppu: LCD off at ly={}", self.ly);
            self.ly = 0;
            self.dot = 0;
            self.mode = PpuMode::HBlank;
            self.window_line = 0;
            self.stat_line = false;
            self.front.fill(0);
            self.back.fill(0);
        } else if !was_enabled && enabled {
            log::debug!("ppu: LCD on");
            self.ly = 0;
            self.dot = 0;
            self.mode = PpuMode::OamSearch;
            self.window_line = 0;
            self.update_stat_line(interrupts);
        }
    }

    /// Read an LCD register by absolute address (0xFF40-0xFF4B, except DMA).
    pub fn read_register(&self, addr: u16) -> u8 {
        match addr {
            io::LCDC => self.lcdc.bits(),
            io::STAT => self.read_stat(),
            io::SCY => self.scy,
            io::SCX => self.scx,
            io::LY => self.ly,
            io::LYC => self.lyc,
            io::BGP => self.bgp,
            io::OBP0 => self.obp0,
            io::OBP1 => self.obp1,
            io::WY => self.wy,
            io::WX => self.wx,
            _ => 0xFF,
        }
    }

    /// Write an LCD register. LY is read-only; STAT only takes the
    /// interrupt select bits.
    pub fn write_register(&mut self, addr: u16, value: u8, interrupts: &mut InterruptController) {
        match addr {
            io::LCDC => self.write_lcdc(value, interrupts),
            io::STAT => {
                self.stat = StatSelect::from_bits_truncate(value);
                self.update_stat_line(interrupts);
            }
            io::SCY => self.scy = value,
            io::SCX => self.scx = value,
            io::LYC => {
                self.lyc = value;
                self.update_stat_line(interrupts);
            }
            io::BGP => self.bgp = value,
            io::OBP0 => self.obp0 = value,
            io::OBP1 => self.obp1 = value,
            io::WY => self.wy = value,
            io::WX => self.wx = value,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests;
