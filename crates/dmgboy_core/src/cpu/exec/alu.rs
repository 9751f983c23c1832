use crate::cpu::{Bus, Cpu, Flags, Registers, Timing};

impl Cpu {
    /// 0x80-0xBF: ADD/ADC/SUB/SBC/AND/XOR/OR/CP with a register or (HL).
    pub(in crate::cpu) fn op_alu_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let value = self.read_reg8(bus, opcode);
        self.alu_dispatch(opcode >> 3, value);
        Timing::Base
    }

    /// Immediate forms of the ALU group (0xC6, 0xCE, ..., 0xFE).
    pub(in crate::cpu) fn op_alu_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let value = self.fetch8(bus);
        self.alu_dispatch(opcode >> 3, value);
        Timing::Base
    }

    pub(in crate::cpu) fn op_add_hl_rr(&mut self, _bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.regs.get(Registers::rp(opcode));
        self.alu_add16_hl(value);
        Timing::Base
    }

    pub(in crate::cpu) fn op_add_sp_e8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        let offset = self.fetch8(bus) as i8;
        self.regs.sp = self.alu_add16_signed(self.regs.sp, offset);
        Timing::Base
    }

    pub(in crate::cpu) fn op_daa(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.alu_daa();
        Timing::Base
    }

    pub(in crate::cpu) fn op_cpl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.regs.a = !self.regs.a;
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, true);
        Timing::Base
    }

    pub(in crate::cpu) fn op_scf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, true);
        Timing::Base
    }

    pub(in crate::cpu) fn op_ccf(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        let carry = self.flag(Flags::C);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::C, !carry);
        Timing::Base
    }
}
