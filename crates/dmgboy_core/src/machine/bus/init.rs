use super::GameBoyBus;
use crate::machine::io;
use crate::machine::memory::power_on_rng;
use crate::machine::ppu::Ppu;
use crate::machine::timer::Timer;

/// I/O register values at PC=0x0100 after the DMG boot ROM has run.
const POST_BOOT_IO: &[(u16, u8)] = &[
    (io::P1, 0xCF),
    (io::SB, 0x00),
    (io::SC, 0x7E),
    (io::IF, 0xE1),
    // Sound.
    (0xFF10, 0x80),
    (0xFF11, 0xBF),
    (0xFF12, 0xF3),
    (0xFF13, 0xFF),
    (0xFF14, 0xBF),
    (0xFF16, 0x3F),
    (0xFF17, 0x00),
    (0xFF18, 0xFF),
    (0xFF19, 0xBF),
    (0xFF1A, 0x7F),
    (0xFF1B, 0xFF),
    (0xFF1C, 0x9F),
    (0xFF1D, 0xFF),
    (0xFF1E, 0xBF),
    (0xFF20, 0xFF),
    (0xFF21, 0x00),
    (0xFF22, 0x00),
    (0xFF23, 0xBF),
    (0xFF24, 0x77),
    (0xFF25, 0xF3),
    (0xFF26, 0xF1),
    // LCD. LCDC itself comes from `Ppu::post_boot`.
    (io::STAT, 0x85),
    (io::SCY, 0x00),
    (io::SCX, 0x00),
    (io::LYC, 0x00),
    (io::BGP, 0xFC),
    (io::OBP0, 0xFF),
    (io::OBP1, 0xFF),
    (io::WY, 0x00),
    (io::WX, 0x00),
];

impl GameBoyBus {
    /// Skip the boot ROM: put every peripheral where the boot ROM would
    /// have left it.
    pub(super) fn apply_post_boot_state(&mut self) {
        self.boot_mapped = false;
        self.ppu = Ppu::post_boot();
        self.timer = Timer::post_boot();
        for &(addr, value) in POST_BOOT_IO {
            self.write_io(addr, value);
        }
        self.dma.set_register(0xFF);
    }

    /// Work RAM and high RAM come up holding garbage on hardware; fill them
    /// from a seeded generator so runs stay reproducible.
    pub(super) fn randomize_internal_ram(&mut self, seed: u64) {
        let mut rng = power_on_rng(seed);
        self.wram.randomize(&mut rng);
        self.hram.randomize(&mut rng);
    }
}
