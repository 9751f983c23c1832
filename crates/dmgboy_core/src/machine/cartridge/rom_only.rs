/// 32 KiB cartridge with no bank controller and no RAM.
pub(in super::super) struct RomOnly {
    rom: Vec<u8>,
}

impl RomOnly {
    pub(super) fn new(rom: Vec<u8>) -> Self {
        Self { rom }
    }

    pub(super) fn read_rom(&self, addr: u16) -> u8 {
        self.rom.get(addr as usize).copied().unwrap_or(0xFF)
    }

    /// There are no registers to write.
    pub(super) fn write_rom(&mut self, _addr: u16, _value: u8) {}

    pub(super) fn read_ram(&self, _addr: u16) -> Option<u8> {
        None
    }

    pub(super) fn write_ram(&mut self, _addr: u16, _value: u8) {}

    pub(super) fn ram(&self) -> &[u8] {
        &[]
    }

    pub(super) fn ram_mut(&mut self) -> &mut [u8] {
        &mut []
    }
}
