use crate::cpu::Bus;
use crate::machine::interrupts::Interrupt;

use super::GameBoyBus;

impl Bus for GameBoyBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.read(addr)
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.write(addr, value)
    }

    fn pending_interrupt(&mut self) -> Option<Interrupt> {
        self.interrupts.highest_priority()
    }

    fn acknowledge_interrupt(&mut self, interrupt: Interrupt) {
        self.interrupts.clear(interrupt);
    }
}

/// Read-only view of the bus for the disassembler: reads are peeks and
/// writes are dropped.
pub(crate) struct PeekBus<'a>(pub(crate) &'a GameBoyBus);

impl Bus for PeekBus<'_> {
    fn read8(&mut self, addr: u16) -> u8 {
        self.0.peek(addr)
    }

    fn write8(&mut self, _addr: u16, _value: u8) {}
}
