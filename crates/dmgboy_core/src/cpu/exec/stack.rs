use crate::cpu::{Bus, Cpu, Registers, Timing};

impl Cpu {
    pub(in crate::cpu) fn op_push(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.regs.get(Registers::rp2(opcode));
        self.push_u16(bus, value);
        Timing::Base
    }

    /// POP rr. POP AF drops the low nibble of F.
    pub(in crate::cpu) fn op_pop(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16(bus);
        self.regs.set(Registers::rp2(opcode), value);
        Timing::Base
    }
}
