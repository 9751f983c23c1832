/// ROM plus a fixed RAM chip, no banking and no registers.
///
/// RAM smaller than 8 KiB repeats across 0xA000-0xBFFF.
pub(in super::super) struct RomRam {
    rom: Vec<u8>,
    ram: Vec<u8>,
}

impl RomRam {
    pub(super) fn new(rom: Vec<u8>, ram_size: usize) -> Self {
        let ram_size = if ram_size == 0 { 0x2000 } else { ram_size.min(0x2000) };
        Self {
            rom,
            ram: vec![0; ram_size],
        }
    }

    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    pub(super) fn write_rom(&mut self, _addr: u16, _value: u8) {}

    #[inline]
    fn ram_index(&self, addr: u16) -> usize {
        usize::from(addr & 0x1FFF) % self.ram.len()
    }

    pub(super) fn read_ram(&self, addr: u16) -> Option<u8> {
        Some(self.ram[self.ram_index(addr)])
    }

    pub(super) fn write_ram(&mut self, addr: u16, value: u8) {
        let index = self.ram_index(addr);
        self.ram[index] = value;
    }

    pub(super) fn ram(&self) -> &[u8] {
        &self.ram
    }

    pub(super) fn ram_mut(&mut self) -> &mut [u8] {
        &mut self.ram
    }
}
