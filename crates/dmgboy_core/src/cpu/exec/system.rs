use crate::cpu::alu::Shift;
use crate::cpu::{Bus, Cpu, CpuState, Flags, Timing};

impl Cpu {
    pub(in crate::cpu) fn op_nop(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        Timing::Base
    }

    /// RLCA/RRCA/RLA/RRA. Unlike the CB forms these always clear Z.
    pub(in crate::cpu) fn op_rotate_a(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Timing {
        let shift = match opcode {
            0x07 => Shift::Rlc,
            0x0F => Shift::Rrc,
            0x17 => Shift::Rl,
            _ => Shift::Rr,
        };
        self.regs.a = self.alu_shift(shift, self.regs.a);
        self.set_flag(Flags::Z, false);
        Timing::Base
    }

    /// HALT. With IME clear and an interrupt already pending the CPU does
    /// not halt; instead the next opcode byte is read twice.
    pub(in crate::cpu) fn op_halt(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        if !self.ime && bus.pending_interrupt().is_some() {
            self.halt_bug = true;
        } else {
            self.state = CpuState::Halted;
        }
        Timing::Base
    }

    /// STOP is two bytes long; the padding byte is fetched and dropped.
    /// Entering STOP also resets the divider.
    pub(in crate::cpu) fn op_stop(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        let _padding = self.fetch8(bus);
        bus.write8(0xFF04, 0);
        self.state = CpuState::Stopped;
        Timing::Base
    }

    pub(in crate::cpu) fn op_di(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.ime = false;
        self.ei_pending = false;
        self.ei_armed = false;
        Timing::Base
    }

    /// EI takes effect after the instruction that follows it.
    pub(in crate::cpu) fn op_ei(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        if !self.ime {
            self.ei_pending = true;
        }
        Timing::Base
    }

    /// Opcode holes lock the CPU until power-off.
    pub(in crate::cpu) fn op_illegal(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Timing {
        log::error!(
            "illegal opcode 0x{:02X} at 0x{:04X}, CPU locked",
            opcode,
            self.regs.pc.wrapping_sub(1)
        );
        self.state = CpuState::Locked;
        Timing::Base
    }
}
