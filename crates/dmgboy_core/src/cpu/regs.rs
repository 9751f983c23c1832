use bitflags::bitflags;

bitflags! {
    /// Flag bits in the F register. Bits 0-3 do not exist and always read 0.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Flags: u8 {
        /// Zero.
        const Z = 0b1000_0000;
        /// Subtract.
        const N = 0b0100_0000;
        /// Half carry.
        const H = 0b0010_0000;
        /// Carry.
        const C = 0b0001_0000;
    }
}

/// 16-bit register views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reg16 {
    AF,
    BC,
    DE,
    HL,
    SP,
}

/// Register file for the LR35902.
///
/// Only the 8-bit halves are stored; the pairs AF, BC, DE and HL are
/// composed on demand, so a pair and its halves can never disagree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Registers {
    pub a: u8,
    pub f: Flags,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

impl Registers {
    /// Register state after the DMG boot ROM hands over to the cartridge.
    pub fn post_boot() -> Self {
        let mut regs = Self::default();
        regs.set_af(0x01B0);
        regs.set_bc(0x0013);
        regs.set_de(0x00D8);
        regs.set_hl(0x014D);
        regs.sp = 0xFFFE;
        regs.pc = 0x0100;
        regs
    }

    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f.bits()])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        self.f = Flags::from_bits_truncate(f);
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    pub fn get(&self, reg: Reg16) -> u16 {
        match reg {
            Reg16::AF => self.af(),
            Reg16::BC => self.bc(),
            Reg16::DE => self.de(),
            Reg16::HL => self.hl(),
            Reg16::SP => self.sp,
        }
    }

    pub fn set(&mut self, reg: Reg16, value: u16) {
        match reg {
            Reg16::AF => self.set_af(value),
            Reg16::BC => self.set_bc(value),
            Reg16::DE => self.set_de(value),
            Reg16::HL => self.set_hl(value),
            Reg16::SP => self.sp = value,
        }
    }

    /// Increment a pair as one 16-bit value, carrying from the low half.
    #[inline]
    pub fn inc(&mut self, reg: Reg16) {
        let value = self.get(reg).wrapping_add(1);
        self.set(reg, value);
    }

    /// Decrement a pair as one 16-bit value, borrowing from the high half.
    #[inline]
    pub fn dec(&mut self, reg: Reg16) {
        let value = self.get(reg).wrapping_sub(1);
        self.set(reg, value);
    }

    /// Pair selected by the `rp` field (bits 4-5) of an opcode.
    #[inline]
    pub(crate) fn rp(opcode: u8) -> Reg16 {
        match (opcode >> 4) & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::SP,
        }
    }

    /// Pair selected by the `rp2` field of PUSH/POP, where SP is replaced by AF.
    #[inline]
    pub(crate) fn rp2(opcode: u8) -> Reg16 {
        match (opcode >> 4) & 0x03 {
            0 => Reg16::BC,
            1 => Reg16::DE,
            2 => Reg16::HL,
            _ => Reg16::AF,
        }
    }
}
