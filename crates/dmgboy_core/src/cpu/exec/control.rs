use crate::cpu::{Bus, Cpu, Timing};

impl Cpu {
    pub(in crate::cpu) fn op_jr(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.jr(bus, true)
    }

    pub(in crate::cpu) fn op_jr_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let cond = self.condition(opcode);
        self.jr(bus, cond)
    }

    pub(in crate::cpu) fn op_jp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.jp(bus, true)
    }

    pub(in crate::cpu) fn op_jp_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let cond = self.condition(opcode);
        self.jp(bus, cond)
    }

    pub(in crate::cpu) fn op_jp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.regs.pc = self.regs.hl();
        Timing::Base
    }

    pub(in crate::cpu) fn op_call(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.call(bus, true)
    }

    pub(in crate::cpu) fn op_call_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let cond = self.condition(opcode);
        self.call(bus, cond)
    }

    pub(in crate::cpu) fn op_ret(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.ret(bus, true)
    }

    pub(in crate::cpu) fn op_ret_cc(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let cond = self.condition(opcode);
        self.ret(bus, cond)
    }

    /// RETI enables interrupts immediately, without the EI delay.
    pub(in crate::cpu) fn op_reti(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.regs.pc = self.pop_u16(bus);
        self.ime = true;
        Timing::Base
    }

    pub(in crate::cpu) fn op_rst(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = u16::from(opcode & 0x38);
        Timing::Base
    }
}
