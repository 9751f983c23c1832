use super::{Cpu, Flags};

/// Half carry out of bit 3 for an 8-bit addition.
#[inline]
pub fn half_carry_add(a: u8, b: u8) -> bool {
    (a & 0x0F) + (b & 0x0F) > 0x0F
}

/// Half borrow into bit 3 for an 8-bit subtraction `a - b`.
#[inline]
pub fn half_carry_sub(a: u8, b: u8) -> bool {
    (b & 0x0F) > (a & 0x0F)
}

/// Rotate/shift operations shared by the accumulator rotates and the CB table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shift {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
}

impl Cpu {
    /// Core 8-bit ADD/ADC operation on A.
    ///
    /// `use_carry` selects between ADD (false) and ADC (true).
    pub(super) fn alu_add(&mut self, value: u8, use_carry: bool) {
        let a = self.regs.a;
        let carry_in = u8::from(use_carry && self.flag(Flags::C));

        let half = (a & 0x0F) + (value & 0x0F) + carry_in;
        let full = u16::from(a) + u16::from(value) + u16::from(carry_in);
        let result = full as u8;

        self.regs.a = result;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, half > 0x0F);
        self.set_flag(Flags::C, full > 0xFF);
    }

    /// Core 8-bit SUB/SBC operation on A.
    ///
    /// `use_carry` selects between SUB (false) and SBC (true).
    pub(super) fn alu_sub(&mut self, value: u8, use_carry: bool) {
        let result = self.subtract(value, use_carry);
        self.regs.a = result;
    }

    /// Compare A with `value`, setting flags as if `A - value` was performed.
    #[inline]
    pub(super) fn alu_cp(&mut self, value: u8) {
        self.subtract(value, false);
    }

    fn subtract(&mut self, value: u8, use_carry: bool) -> u8 {
        let a = self.regs.a;
        let carry_in = i16::from(use_carry && self.flag(Flags::C));

        let half = i16::from(a & 0x0F) - i16::from(value & 0x0F) - carry_in;
        let full = i16::from(a) - i16::from(value) - carry_in;
        let result = full as u8;

        self.regs.f = Flags::N;
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::H, half < 0);
        self.set_flag(Flags::C, full < 0);
        result
    }

    #[inline]
    pub(super) fn alu_and(&mut self, value: u8) {
        self.regs.a &= value;
        self.regs.f = Flags::H;
        self.set_flag(Flags::Z, self.regs.a == 0);
    }

    #[inline]
    pub(super) fn alu_or(&mut self, value: u8) {
        self.regs.a |= value;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::Z, self.regs.a == 0);
    }

    #[inline]
    pub(super) fn alu_xor(&mut self, value: u8) {
        self.regs.a ^= value;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::Z, self.regs.a == 0);
    }

    /// Run the ALU operation selected by bits 3-5 of an 0x80-0xBF or
    /// immediate-operand opcode.
    pub(super) fn alu_dispatch(&mut self, op: u8, value: u8) {
        match op & 0x07 {
            0 => self.alu_add(value, false),
            1 => self.alu_add(value, true),
            2 => self.alu_sub(value, false),
            3 => self.alu_sub(value, true),
            4 => self.alu_and(value),
            5 => self.alu_xor(value),
            6 => self.alu_or(value),
            _ => self.alu_cp(value),
        }
    }

    /// Decimal adjust accumulator after BCD addition/subtraction.
    ///
    /// After an addition the correction is derived from the carry flags and
    /// the value of A; after a subtraction only the flags are consulted.
    /// Z, H and C are updated and N is left alone.
    pub(super) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust: u8 = if self.flag(Flags::C) { 0x60 } else { 0x00 };
        if self.flag(Flags::H) {
            adjust |= 0x06;
        }

        if !self.flag(Flags::N) {
            if (a & 0x0F) > 0x09 {
                adjust |= 0x06;
            }
            if a > 0x99 {
                adjust |= 0x60;
            }
            a = a.wrapping_add(adjust);
        } else {
            a = a.wrapping_sub(adjust);
        }

        self.set_flag(Flags::C, adjust >= 0x60);
        self.set_flag(Flags::H, false);
        self.set_flag(Flags::Z, a == 0);
        self.regs.a = a;
    }

    /// 8-bit increment used by INC r and INC (HL). C is unchanged.
    #[inline]
    pub(super) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, half_carry_add(value, 1));
        result
    }

    /// 8-bit decrement used by DEC r and DEC (HL). C is unchanged.
    #[inline]
    pub(super) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::N, true);
        self.set_flag(Flags::H, half_carry_sub(value, 1));
        result
    }

    /// ADD HL,rr. Z is unchanged; H and C come from bits 11 and 15.
    pub(super) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let (result, carry) = hl.overflowing_add(value);
        self.set_flag(Flags::N, false);
        self.set_flag(Flags::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flags::C, carry);
        self.regs.set_hl(result);
    }

    /// SP plus a signed immediate, as used by ADD SP,e8 and LD HL,SP+e8.
    ///
    /// Flags come from the unsigned addition of the low byte; Z and N are
    /// always cleared.
    pub(super) fn alu_add16_signed(&mut self, base: u16, offset: i8) -> u16 {
        let value = offset as u8;
        self.regs.f = Flags::empty();
        self.set_flag(Flags::H, half_carry_add(base as u8, value));
        self.set_flag(Flags::C, (base & 0x00FF) + u16::from(value) > 0x00FF);
        base.wrapping_add(offset as i16 as u16)
    }

    /// Rotate or shift `value`, setting Z from the result and C from the
    /// bit shifted out. N and H are cleared.
    pub(super) fn alu_shift(&mut self, shift: Shift, value: u8) -> u8 {
        let carry_in = self.flag(Flags::C);
        let (result, carry_out) = match shift {
            Shift::Rlc => (value.rotate_left(1), value & 0x80 != 0),
            Shift::Rrc => (value.rotate_right(1), value & 0x01 != 0),
            Shift::Rl => ((value << 1) | u8::from(carry_in), value & 0x80 != 0),
            Shift::Rr => ((value >> 1) | (u8::from(carry_in) << 7), value & 0x01 != 0),
            Shift::Sla => (value << 1, value & 0x80 != 0),
            Shift::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            Shift::Swap => (value.rotate_left(4), false),
            Shift::Srl => (value >> 1, value & 0x01 != 0),
        };
        self.regs.f = Flags::empty();
        self.set_flag(Flags::Z, result == 0);
        self.set_flag(Flags::C, carry_out);
        result
    }
}
