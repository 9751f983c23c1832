use crate::cpu::alu::Shift;
use crate::cpu::{Bus, Cpu, Flags, Timing};

impl Cpu {
    fn cb_shift(&mut self, bus: &mut dyn Bus, opcode: u8, shift: Shift) -> Timing {
        let value = self.read_reg8(bus, opcode);
        let result = self.alu_shift(shift, value);
        self.write_reg8(bus, opcode, result);
        Timing::Base
    }

    pub(in crate::cpu) fn cb_rlc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Rlc)
    }

    pub(in crate::cpu) fn cb_rrc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Rrc)
    }

    pub(in crate::cpu) fn cb_rl(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Rl)
    }

    pub(in crate::cpu) fn cb_rr(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Rr)
    }

    pub(in crate::cpu) fn cb_sla(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Sla)
    }

    pub(in crate::cpu) fn cb_sra(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Sra)
    }

    pub(in crate::cpu) fn cb_swap(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Swap)
    }

    pub(in crate::cpu) fn cb_srl(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        self.cb_shift(bus, opcode, Shift::Srl)
    }

    /// BIT b,r: Z is the complement of the tested bit, H set, C preserved.
    pub(in crate::cpu) fn cb_bit(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, opcode);
        self.set_flag(Flags::Z, value & (1 << bit) == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, true);
        Timing::Base
    }

    pub(in crate::cpu) fn cb_res(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, opcode);
        self.write_reg8(bus, opcode, value & !(1 << bit));
        Timing::Base
    }

    pub(in crate::cpu) fn cb_set(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let bit = (opcode >> 3) & 0x07;
        let value = self.read_reg8(bus, opcode);
        self.write_reg8(bus, opcode, value | (1 << bit));
        Timing::Base
    }
}
