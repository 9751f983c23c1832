use super::{Bus, Cpu, Flags, Timing};

impl Cpu {
    /// Read an 8-bit register or (HL) by its 3-bit opcode index:
    /// 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
    #[inline]
    pub(super) fn read_reg8(&mut self, bus: &mut dyn Bus, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.regs.b,
            1 => self.regs.c,
            2 => self.regs.d,
            3 => self.regs.e,
            4 => self.regs.h,
            5 => self.regs.l,
            6 => bus.read8(self.regs.hl()),
            _ => self.regs.a,
        }
    }

    /// Write an 8-bit register or (HL); same encoding as `read_reg8`.
    #[inline]
    pub(super) fn write_reg8(&mut self, bus: &mut dyn Bus, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.regs.b = value,
            1 => self.regs.c = value,
            2 => self.regs.d = value,
            3 => self.regs.e = value,
            4 => self.regs.h = value,
            5 => self.regs.l = value,
            6 => bus.write8(self.regs.hl(), value),
            _ => self.regs.a = value,
        }
    }

    /// Read the byte at PC, then advance PC.
    #[inline]
    pub(super) fn fetch8(&mut self, bus: &mut dyn Bus) -> u8 {
        let value = bus.read8(self.regs.pc);
        if self.halt_bug {
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    /// Little-endian 16-bit immediate.
    #[inline]
    pub(super) fn fetch16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = self.fetch8(bus);
        let hi = self.fetch8(bus);
        u16::from_le_bytes([lo, hi])
    }

    /// Push high byte then low byte, pre-decrementing SP for each.
    #[inline]
    pub(super) fn push_u16(&mut self, bus: &mut dyn Bus, value: u16) {
        let [hi, lo] = value.to_be_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        bus.write8(self.regs.sp, lo);
    }

    /// Pop low byte then high byte, post-incrementing SP for each.
    #[inline]
    pub(super) fn pop_u16(&mut self, bus: &mut dyn Bus) -> u16 {
        let lo = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        let hi = bus.read8(self.regs.sp);
        self.regs.sp = self.regs.sp.wrapping_add(1);
        u16::from_le_bytes([lo, hi])
    }

    /// Evaluate the `cc` field (bits 3-4): NZ, Z, NC, C.
    #[inline]
    pub(super) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.flag(Flags::Z),
            1 => self.flag(Flags::Z),
            2 => !self.flag(Flags::C),
            _ => self.flag(Flags::C),
        }
    }

    /// Relative jump; the displacement is relative to the byte after the operand.
    pub(super) fn jr(&mut self, bus: &mut dyn Bus, cond: bool) -> Timing {
        let offset = self.fetch8(bus) as i8;
        if !cond {
            return Timing::Base;
        }
        self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
        Timing::Taken
    }

    pub(super) fn jp(&mut self, bus: &mut dyn Bus, cond: bool) -> Timing {
        let addr = self.fetch16(bus);
        if !cond {
            return Timing::Base;
        }
        self.regs.pc = addr;
        Timing::Taken
    }

    pub(super) fn call(&mut self, bus: &mut dyn Bus, cond: bool) -> Timing {
        let addr = self.fetch16(bus);
        if !cond {
            return Timing::Base;
        }
        let ret = self.regs.pc;
        self.push_u16(bus, ret);
        self.regs.pc = addr;
        Timing::Taken
    }

    pub(super) fn ret(&mut self, bus: &mut dyn Bus, cond: bool) -> Timing {
        if !cond {
            return Timing::Base;
        }
        self.regs.pc = self.pop_u16(bus);
        Timing::Taken
    }
}
