use super::mmio::Access;
use super::GameBoyBus;
use crate::machine::ppu::OAM_SIZE;

/// Machine cycles an OAM DMA transfer occupies the bus.
pub const OAM_DMA_CYCLES: u32 = 160;

/// OAM DMA controller (0xFF46).
#[derive(Clone, Copy, Debug, Default)]
pub(super) struct OamDma {
    register: u8,
    stall: u32,
}

impl OamDma {
    pub(super) fn register(&self) -> u8 {
        self.register
    }

    pub(super) fn set_register(&mut self, value: u8) {
        self.register = value;
    }

    pub(super) fn take_stall(&mut self) -> u32 {
        std::mem::take(&mut self.stall)
    }
}

/// First source address for a DMA page. Pages 0xE0-0xFF read from work RAM
/// the way echo RAM does.
pub(super) fn source_base(page: u8) -> u16 {
    let page = if page >= 0xE0 { page - 0x20 } else { page };
    u16::from(page) << 8
}

impl GameBoyBus {
    /// Copy 160 bytes from `page`00-`page`9F into OAM.
    ///
    /// The copy happens at once; the bus time it takes on hardware is
    /// charged afterwards as a stall when `oam_dma_stall` is enabled.
    pub(super) fn start_oam_dma(&mut self, page: u8) {
        let base = source_base(page);
        let mut data = [0u8; OAM_SIZE];
        for (offset, byte) in (0u16..).zip(data.iter_mut()) {
            *byte = self.load(base.wrapping_add(offset), Access::Dma);
        }
        self.ppu.oam_mut().load(&data);

        self.dma.register = page;
        if self.oam_dma_stall {
            self.dma.stall = OAM_DMA_CYCLES;
        }
        log::debug!("oam dma from 0x{:04X}", base);
    }
}
