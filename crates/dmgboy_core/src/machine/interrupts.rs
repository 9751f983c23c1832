use bitflags::bitflags;

bitflags! {
    /// IE/IF bit layout.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 0b0000_0001;
        const LCD_STAT = 0b0000_0010;
        const TIMER = 0b0000_0100;
        const SERIAL = 0b0000_1000;
        const JOYPAD = 0b0001_0000;
    }
}

/// Interrupt sources, in priority order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Interrupt {
    VBlank,
    LcdStat,
    Timer,
    Serial,
    Joypad,
}

impl Interrupt {
    /// Highest priority first.
    pub const PRIORITY: [Interrupt; 5] = [
        Interrupt::VBlank,
        Interrupt::LcdStat,
        Interrupt::Timer,
        Interrupt::Serial,
        Interrupt::Joypad,
    ];

    #[inline]
    pub fn flag(self) -> InterruptFlags {
        match self {
            Interrupt::VBlank => InterruptFlags::VBLANK,
            Interrupt::LcdStat => InterruptFlags::LCD_STAT,
            Interrupt::Timer => InterruptFlags::TIMER,
            Interrupt::Serial => InterruptFlags::SERIAL,
            Interrupt::Joypad => InterruptFlags::JOYPAD,
        }
    }

    #[inline]
    pub fn mask(self) -> u8 {
        self.flag().bits()
    }

    /// Handler address: 0x40, 0x48, 0x50, 0x58 or 0x60.
    #[inline]
    pub fn vector(self) -> u16 {
        0x0040 + 8 * self.mask().trailing_zeros() as u16
    }

    /// Highest-priority source set in `bits`, if any.
    pub fn highest(bits: u8) -> Option<Interrupt> {
        Self::PRIORITY
            .into_iter()
            .find(|interrupt| bits & interrupt.mask() != 0)
    }
}

/// IE and IF registers.
///
/// The master enable flag lives in the CPU; this only tracks which sources
/// are enabled and which have been requested.
#[derive(Clone, Debug, Default)]
pub struct InterruptController {
    enable: u8,
    request: InterruptFlags,
}

impl InterruptController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.enable = 0;
        self.request = InterruptFlags::empty();
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.enable & self.request.bits() & 0x1F != 0
    }

    #[inline]
    pub fn highest_priority(&self) -> Option<Interrupt> {
        Interrupt::highest(self.enable & self.request.bits())
    }

    #[inline]
    pub fn request(&mut self, interrupt: Interrupt) {
        self.request.insert(interrupt.flag());
    }

    #[inline]
    pub fn clear(&mut self, interrupt: Interrupt) {
        self.request.remove(interrupt.flag());
    }

    #[inline]
    pub fn requested(&self) -> InterruptFlags {
        self.request
    }

    #[inline]
    pub fn is_requested(&self, interrupt: Interrupt) -> bool {
        self.request.contains(interrupt.flag())
    }

    /// IF (0xFF0F). The three unused bits read as 1.
    #[inline]
    pub fn read_if(&self) -> u8 {
        0xE0 | self.request.bits()
    }

    #[inline]
    pub fn write_if(&mut self, value: u8) {
        self.request = InterruptFlags::from_bits_truncate(value);
    }

    /// IE (0xFFFF). All eight bits are stored.
    #[inline]
    pub fn read_ie(&self) -> u8 {
        self.enable
    }

    #[inline]
    pub fn write_ie(&mut self, value: u8) {
        self.enable = value;
    }
}
