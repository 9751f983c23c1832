use crate::CYCLES_PER_SECOND;

/// MBC3 clock register values, in RTC register select order 0x08-0x0C.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RtcRegisters {
    pub seconds: u8,
    pub minutes: u8,
    pub hours: u8,
    pub day_low: u8,
    /// Bit 0: day counter bit 8, bit 6: halt, bit 7: day counter carry.
    pub day_high: u8,
}

impl RtcRegisters {
    #[inline]
    pub fn day(&self) -> u16 {
        (u16::from(self.day_high & 0x01) << 8) | u16::from(self.day_low)
    }

    #[inline]
    fn set_day(&mut self, day: u16) {
        self.day_low = day as u8;
        self.day_high = (self.day_high & !0x01) | ((day >> 8) as u8 & 0x01);
    }

    #[inline]
    pub fn halted(&self) -> bool {
        self.day_high & 0x40 != 0
    }

    fn get(&self, select: u8) -> u8 {
        match select {
            0x08 => self.seconds,
            0x09 => self.minutes,
            0x0A => self.hours,
            0x0B => self.day_low,
            _ => self.day_high,
        }
    }

    fn set(&mut self, select: u8, value: u8) {
        match select {
            0x08 => self.seconds = value & 0x3F,
            0x09 => self.minutes = value & 0x3F,
            0x0A => self.hours = value & 0x1F,
            0x0B => self.day_low = value,
            _ => self.day_high = value & 0xC1,
        }
    }

    /// Count one second. Each field wraps at its hardware width, so a value
    /// written out of range runs up to the wrap without carrying.
    fn advance_second(&mut self) {
        self.seconds = (self.seconds + 1) & 0x3F;
        if self.seconds != 60 {
            return;
        }
        self.seconds = 0;
        self.minutes = (self.minutes + 1) & 0x3F;
        if self.minutes != 60 {
            return;
        }
        self.minutes = 0;
        self.hours = (self.hours + 1) & 0x1F;
        if self.hours != 24 {
            return;
        }
        self.hours = 0;
        let day = self.day() + 1;
        if day > 0x1FF {
            self.set_day(0);
            self.day_high |= 0x80;
        } else {
            self.set_day(day);
        }
    }
}

/// MBC3 real-time clock, driven by emulated time.
///
/// Reads always return the latched copy. Writing 0 and then 1 to the latch
/// register copies the live counters into it.
#[derive(Clone, Debug, Default)]
pub struct Rtc {
    live: RtcRegisters,
    latched: RtcRegisters,
    latch_armed: bool,
    /// Machine cycles since the last whole second.
    sub_second: u32,
}

impl Rtc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live(&self) -> RtcRegisters {
        self.live
    }

    pub fn latched(&self) -> RtcRegisters {
        self.latched
    }

    pub fn tick(&mut self, cycles: u32) {
        if self.live.halted() {
            return;
        }
        self.sub_second += cycles;
        while self.sub_second >= CYCLES_PER_SECOND {
            self.sub_second -= CYCLES_PER_SECOND;
            self.live.advance_second();
        }
    }

    pub fn write_latch(&mut self, value: u8) {
        match value {
            0x00 => self.latch_armed = true,
            0x01 if self.latch_armed => {
                self.latched = self.live;
                self.latch_armed = false;
                log::trace!("rtc: latched {:?}", self.latched);
            }
            _ => self.latch_armed = false,
        }
    }

    /// Read the register selected by 0x08-0x0C.
    pub fn read(&self, select: u8) -> u8 {
        self.latched.get(select)
    }

    /// Write goes to the counters themselves and to the latched copy so the
    /// value reads back immediately. Writing seconds restarts the divider.
    pub fn write(&mut self, select: u8, value: u8) {
        self.live.set(select, value);
        self.latched.set(select, value);
        if select == 0x08 {
            self.sub_second = 0;
        }
    }
}
