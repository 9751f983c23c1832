/// Divider and programmable timer (DIV, TIMA, TMA, TAC).
///
/// A hidden 16-bit counter advances once per machine cycle and DIV exposes
/// bits 13:6 of it. TIMA increments on the falling edge of the counter bit
/// selected by TAC, which is what makes DIV and TAC writes able to produce
/// an extra increment when they pull the selected bit low.
use super::interrupts::{Interrupt, InterruptController};

#[derive(Clone, Debug, Default)]
pub struct Timer {
    counter: u16,
    tima: u8,
    tma: u8,
    tac: u8,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Power-on state as left by the DMG boot ROM at PC=0x0100, with DIV
    /// reading 0xAB.
    pub fn post_boot() -> Self {
        Self {
            counter: 0x2AC0,
            ..Self::default()
        }
    }

    #[inline]
    fn enabled(&self) -> bool {
        self.tac & 0x04 != 0
    }

    /// Counter bit watched for the selected rate:
    /// 00 -> bit 7 (4096 Hz), 01 -> bit 1 (262144 Hz),
    /// 10 -> bit 3 (65536 Hz), 11 -> bit 5 (16384 Hz).
    #[inline]
    fn counter_bit(&self) -> bool {
        let bit = match self.tac & 0x03 {
            0x00 => 7,
            0x01 => 1,
            0x02 => 3,
            _ => 5,
        };
        self.counter & (1 << bit) != 0
    }

    /// Input to the falling-edge detector.
    #[inline]
    fn timer_input(&self) -> bool {
        self.enabled() && self.counter_bit()
    }

    fn increment_tima(&mut self, interrupts: &mut InterruptController) {
        let (next, overflow) = self.tima.overflowing_add(1);
        if overflow {
            self.tima = self.tma;
            interrupts.request(Interrupt::Timer);
        } else {
            self.tima = next;
        }
    }

    /// Advance by `cycles` machine cycles.
    pub fn update(&mut self, cycles: u32, interrupts: &mut InterruptController) {
        for _ in 0..cycles {
            let before = self.timer_input();
            self.counter = self.counter.wrapping_add(1);
            if before && !self.timer_input() {
                self.increment_tima(interrupts);
            }
        }
    }

    #[inline]
    pub fn div(&self) -> u8 {
        (self.counter >> 6) as u8
    }

    #[inline]
    pub fn tima(&self) -> u8 {
        self.tima
    }

    #[inline]
    pub fn tma(&self) -> u8 {
        self.tma
    }

    /// TAC with its unused upper bits reading as 1.
    #[inline]
    pub fn tac(&self) -> u8 {
        self.tac | 0xF8
    }

    /// Any write to DIV clears the whole counter.
    pub fn write_div(&mut self, interrupts: &mut InterruptController) {
        let before = self.timer_input();
        self.counter = 0;
        if before {
            self.increment_tima(interrupts);
        }
    }

    pub fn write_tima(&mut self, value: u8) {
        self.tima = value;
    }

    pub fn write_tma(&mut self, value: u8) {
        self.tma = value;
    }

    /// Disabling the timer or switching rate while the watched bit is high
    /// counts as a falling edge.
    pub fn write_tac(&mut self, value: u8, interrupts: &mut InterruptController) {
        let before = self.timer_input();
        self.tac = value & 0x07;
        if before && !self.timer_input() {
            self.increment_tima(interrupts);
        }
    }
}
