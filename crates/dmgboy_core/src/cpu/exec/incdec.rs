use crate::cpu::{Bus, Cpu, Registers, Timing};

impl Cpu {
    pub(in crate::cpu) fn op_inc8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let reg = opcode >> 3;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_inc8(value);
        self.write_reg8(bus, reg, result);
        Timing::Base
    }

    pub(in crate::cpu) fn op_dec8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let reg = opcode >> 3;
        let value = self.read_reg8(bus, reg);
        let result = self.alu_dec8(value);
        self.write_reg8(bus, reg, result);
        Timing::Base
    }

    /// INC rr; no flags are affected.
    pub(in crate::cpu) fn op_inc16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));
        self.regs.inc(Registers::rp(opcode));
        Timing::Base
    }

    /// DEC rr; no flags are affected.
    pub(in crate::cpu) fn op_dec16(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        self.regs.dec(Registers::rp(opcode));
        Timing::Base
    }
}
