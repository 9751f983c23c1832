use super::{Bus, Cpu};
use crate::machine::interrupts::Interrupt;

/// Machine cycles charged for an interrupt dispatch.
pub(super) const DISPATCH_CYCLES: u32 = 5;

impl Cpu {
    /// Service `interrupt`: clear IME and its request bit, push PC and jump
    /// to the fixed vector.
    pub(super) fn dispatch_interrupt(&mut self, bus: &mut dyn Bus, interrupt: Interrupt) -> u32 {
        self.ime = false;
        self.ei_pending = false;
        self.ei_armed = false;
        bus.acknowledge_interrupt(interrupt);

        let pc = self.regs.pc;
        self.push_u16(bus, pc);
        self.regs.pc = interrupt.vector();

        log::debug!(
            "interrupt {:?}: vector=0x{:04X} return=0x{:04X} sp=0x{:04X}",
            interrupt,
            self.regs.pc,
            pc,
            self.regs.sp,
        );
        DISPATCH_CYCLES
    }

    /// Advance the EI delay by one instruction.
    #[inline]
    pub(super) fn apply_ime_delay(&mut self) {
        if self.ei_armed {
            self.ime = true;
            self.ei_armed = false;
        } else if self.ei_pending {
            self.ei_pending = false;
            self.ei_armed = true;
        }
    }
}
