use crate::cpu::{Bus, Cpu, Registers, Timing};

impl Cpu {
    pub(in crate::cpu) fn op_ld_rr_d16(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.fetch16(bus);
        self.regs.set(Registers::rp(opcode), value);
        Timing::Base
    }

    pub(in crate::cpu) fn op_ld_r_d8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let value = self.fetch8(bus);
        self.write_reg8(bus, opcode >> 3, value);
        Timing::Base
    }

    /// LD r,r' including the (HL) forms. 0x76 is HALT and never lands here.
    pub(in crate::cpu) fn op_ld_r_r(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        let value = self.read_reg8(bus, opcode);
        self.write_reg8(bus, opcode >> 3, value);
        Timing::Base
    }

    /// Address for the (BC), (DE), (HL+) and (HL-) forms, applying the HL
    /// post-increment/decrement.
    fn indirect_addr(&mut self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_add(1));
                hl
            }
            _ => {
                let hl = self.regs.hl();
                self.regs.set_hl(hl.wrapping_sub(1));
                hl
            }
        }
    }

    pub(in crate::cpu) fn op_ld_indirect_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let addr = self.indirect_addr(opcode);
        bus.write8(addr, self.regs.a);
        Timing::Base
    }

    pub(in crate::cpu) fn op_ld_a_indirect(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let addr = self.indirect_addr(opcode);
        self.regs.a = bus.read8(addr);
        Timing::Base
    }

    pub(in crate::cpu) fn op_ld_a16_sp(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        let addr = self.fetch16(bus);
        let [hi, lo] = self.regs.sp.to_be_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
        Timing::Base
    }

    pub(in crate::cpu) fn op_ldh_a8(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));
        let addr = 0xFF00 | u16::from(self.fetch8(bus));
        if opcode == 0xE0 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        Timing::Base
    }

    pub(in crate::cpu) fn op_ldh_c(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));
        let addr = 0xFF00 | u16::from(self.regs.c);
        if opcode == 0xE2 {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        Timing::Base
    }

    pub(in crate::cpu) fn op_ld_a16_a(&mut self, bus: &mut dyn Bus, opcode: u8) -> Timing {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));
        let addr = self.fetch16(bus);
        if opcode == 0xEA {
            bus.write8(addr, self.regs.a);
        } else {
            self.regs.a = bus.read8(addr);
        }
        Timing::Base
    }

    pub(in crate::cpu) fn op_ld_hl_sp_e8(&mut self, bus: &mut dyn Bus, _opcode: u8) -> Timing {
        let offset = self.fetch8(bus) as i8;
        let value = self.alu_add16_signed(self.regs.sp, offset);
        self.regs.set_hl(value);
        Timing::Base
    }

    pub(in crate::cpu) fn op_ld_sp_hl(&mut self, _bus: &mut dyn Bus, _opcode: u8) -> Timing {
        self.regs.sp = self.regs.hl();
        Timing::Base
    }
}
