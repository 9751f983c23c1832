use lazy_static::lazy_static;

use super::{Bus, Cpu, Timing};

/// Opcode handler. The opcode byte is passed through so grouped handlers can
/// decode their register and condition fields.
pub(crate) type Handler = fn(&mut Cpu, &mut dyn Bus, u8) -> Timing;

/// One entry of an opcode dispatch table.
///
/// Cycle counts are in machine cycles. `taken_cycles` differs from `cycles`
/// only for conditional control flow, where `cycles` is the cost when the
/// condition is false.
#[derive(Clone, Copy)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    pub cycles: u8,
    pub taken_cycles: u8,
    pub(crate) execute: Handler,
}

impl Instruction {
    const fn new(mnemonic: &'static str, length: u8, cycles: u8, execute: Handler) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            taken_cycles: cycles,
            execute,
        }
    }

    const fn branch(
        mnemonic: &'static str,
        length: u8,
        cycles: u8,
        taken_cycles: u8,
        execute: Handler,
    ) -> Self {
        Self {
            mnemonic,
            length,
            cycles,
            taken_cycles,
            execute,
        }
    }

    const fn illegal() -> Self {
        Self::new("ILLEGAL", 1, 1, Cpu::op_illegal)
    }

    /// Cost of this instruction given how its handler resolved.
    #[inline]
    pub(crate) fn cost(&self, timing: Timing) -> u32 {
        match timing {
            Timing::Base => self.cycles as u32,
            Timing::Taken => self.taken_cycles as u32,
        }
    }
}

macro_rules! instr {
    ($mne:expr, $len:expr, $cyc:expr, $exec:expr) => {
        Instruction::new($mne, $len, $cyc, $exec)
    };
}

macro_rules! branch {
    ($mne:expr, $len:expr, $cyc:expr, $taken:expr, $exec:expr) => {
        Instruction::branch($mne, $len, $cyc, $taken, $exec)
    };
}

macro_rules! illegal {
    () => {
        Instruction::illegal()
    };
}

/// Escape byte selecting [`CB_OPCODES`].
pub const CB_PREFIX: u8 = 0xCB;

lazy_static! {
    /// Unprefixed opcodes. The 0xCB entry is only used for disassembly;
    /// the CPU follows the prefix into [`CB_OPCODES`] before dispatching.
    pub static ref OPCODES: [Instruction; 256] = [
        // 0x00
        instr!("NOP", 1, 1, Cpu::op_nop), // 00
        instr!("LD BC,d16", 3, 3, Cpu::op_ld_rr_d16), // 01
        instr!("LD (BC),A", 1, 2, Cpu::op_ld_indirect_a), // 02
        instr!("INC BC", 1, 2, Cpu::op_inc16), // 03
        instr!("INC B", 1, 1, Cpu::op_inc8), // 04
        instr!("DEC B", 1, 1, Cpu::op_dec8), // 05
        instr!("LD B,d8", 2, 2, Cpu::op_ld_r_d8), // 06
        instr!("RLCA", 1, 1, Cpu::op_rotate_a), // 07
        instr!("LD (a16),SP", 3, 5, Cpu::op_ld_a16_sp), // 08
        instr!("ADD HL,BC", 1, 2, Cpu::op_add_hl_rr), // 09
        instr!("LD A,(BC)", 1, 2, Cpu::op_ld_a_indirect), // 0A
        instr!("DEC BC", 1, 2, Cpu::op_dec16), // 0B
        instr!("INC C", 1, 1, Cpu::op_inc8), // 0C
        instr!("DEC C", 1, 1, Cpu::op_dec8), // 0D
        instr!("LD C,d8", 2, 2, Cpu::op_ld_r_d8), // 0E
        instr!("RRCA", 1, 1, Cpu::op_rotate_a), // 0F
        // 0x10
        instr!("STOP", 2, 1, Cpu::op_stop), // 10
        instr!("LD DE,d16", 3, 3, Cpu::op_ld_rr_d16), // 11
        instr!("LD (DE),A", 1, 2, Cpu::op_ld_indirect_a), // 12
        instr!("INC DE", 1, 2, Cpu::op_inc16), // 13
        instr!("INC D", 1, 1, Cpu::op_inc8), // 14
        instr!("DEC D", 1, 1, Cpu::op_dec8), // 15
        instr!("LD D,d8", 2, 2, Cpu::op_ld_r_d8), // 16
        instr!("RLA", 1, 1, Cpu::op_rotate_a), // 17
        instr!("JR r8", 2, 3, Cpu::op_jr), // 18
        instr!("ADD HL,DE", 1, 2, Cpu::op_add_hl_rr), // 19
        instr!("LD A,(DE)", 1, 2, Cpu::op_ld_a_indirect), // 1A
        instr!("DEC DE", 1, 2, Cpu::op_dec16), // 1B
        instr!("INC E", 1, 1, Cpu::op_inc8), // 1C
        instr!("DEC E", 1, 1, Cpu::op_dec8), // 1D
        instr!("LD E,d8", 2, 2, Cpu::op_ld_r_d8), // 1E
        instr!("RRA", 1, 1, Cpu::op_rotate_a), // 1F
        // 0x20
        branch!("JR NZ,r8", 2, 2, 3, Cpu::op_jr_cc), // 20
        instr!("LD HL,d16", 3, 3, Cpu::op_ld_rr_d16), // 21
        instr!("LD (HL+),A", 1, 2, Cpu::op_ld_indirect_a), // 22
        instr!("INC HL", 1, 2, Cpu::op_inc16), // 23
        instr!("INC H", 1, 1, Cpu::op_inc8), // 24
        instr!("DEC H", 1, 1, Cpu::op_dec8), // 25
        instr!("LD H,d8", 2, 2, Cpu::op_ld_r_d8), // 26
        instr!("DAA", 1, 1, Cpu::op_daa), // 27
        branch!("JR Z,r8", 2, 2, 3, Cpu::op_jr_cc), // 28
        instr!("ADD HL,HL", 1, 2, Cpu::op_add_hl_rr), // 29
        instr!("LD A,(HL+)", 1, 2, Cpu::op_ld_a_indirect), // 2A
        instr!("DEC HL", 1, 2, Cpu::op_dec16), // 2B
        instr!("INC L", 1, 1, Cpu::op_inc8), // 2C
        instr!("DEC L", 1, 1, Cpu::op_dec8), // 2D
        instr!("LD L,d8", 2, 2, Cpu::op_ld_r_d8), // 2E
        instr!("CPL", 1, 1, Cpu::op_cpl), // 2F
        // 0x30
        branch!("JR NC,r8", 2, 2, 3, Cpu::op_jr_cc), // 30
        instr!("LD SP,d16", 3, 3, Cpu::op_ld_rr_d16), // 31
        instr!("LD (HL-),A", 1, 2, Cpu::op_ld_indirect_a), // 32
        instr!("INC SP", 1, 2, Cpu::op_inc16), // 33
        instr!("INC (HL)", 1, 3, Cpu::op_inc8), // 34
        instr!("DEC (HL)", 1, 3, Cpu::op_dec8), // 35
        instr!("LD (HL),d8", 2, 3, Cpu::op_ld_r_d8), // 36
        instr!("SCF", 1, 1, Cpu::op_scf), // 37
        branch!("JR C,r8", 2, 2, 3, Cpu::op_jr_cc), // 38
        instr!("ADD HL,SP", 1, 2, Cpu::op_add_hl_rr), // 39
        instr!("LD A,(HL-)", 1, 2, Cpu::op_ld_a_indirect), // 3A
        instr!("DEC SP", 1, 2, Cpu::op_dec16), // 3B
        instr!("INC A", 1, 1, Cpu::op_inc8), // 3C
        instr!("DEC A", 1, 1, Cpu::op_dec8), // 3D
        instr!("LD A,d8", 2, 2, Cpu::op_ld_r_d8), // 3E
        instr!("CCF", 1, 1, Cpu::op_ccf), // 3F
        // 0x40
        instr!("LD B,B", 1, 1, Cpu::op_ld_r_r), // 40
        instr!("LD B,C", 1, 1, Cpu::op_ld_r_r), // 41
        instr!("LD B,D", 1, 1, Cpu::op_ld_r_r), // 42
        instr!("LD B,E", 1, 1, Cpu::op_ld_r_r), // 43
        instr!("LD B,H", 1, 1, Cpu::op_ld_r_r), // 44
        instr!("LD B,L", 1, 1, Cpu::op_ld_r_r), // 45
        instr!("LD B,(HL)", 1, 2, Cpu::op_ld_r_r), // 46
        instr!("LD B,A", 1, 1, Cpu::op_ld_r_r), // 47
        instr!("LD C,B", 1, 1, Cpu::op_ld_r_r), // 48
        instr!("LD C,C", 1, 1, Cpu::op_ld_r_r), // 49
        instr!("LD C,D", 1, 1, Cpu::op_ld_r_r), // 4A
        instr!("LD C,E", 1, 1, Cpu::op_ld_r_r), // 4B
        instr!("LD C,H", 1, 1, Cpu::op_ld_r_r), // 4C
        instr!("LD C,L", 1, 1, Cpu::op_ld_r_r), // 4D
        instr!("LD C,(HL)", 1, 2, Cpu::op_ld_r_r), // 4E
        instr!("LD C,A", 1, 1, Cpu::op_ld_r_r), // 4F
        // 0x50
        instr!("LD D,B", 1, 1, Cpu::op_ld_r_r), // 50
        instr!("LD D,C", 1, 1, Cpu::op_ld_r_r), // 51
        instr!("LD D,D", 1, 1, Cpu::op_ld_r_r), // 52
        instr!("LD D,E", 1, 1, Cpu::op_ld_r_r), // 53
        instr!("LD D,H", 1, 1, Cpu::op_ld_r_r), // 54
        instr!("LD D,L", 1, 1, Cpu::op_ld_r_r), // 55
        instr!("LD D,(HL)", 1, 2, Cpu::op_ld_r_r), // 56
        instr!("LD D,A", 1, 1, Cpu::op_ld_r_r), // 57
        instr!("LD E,B", 1, 1, Cpu::op_ld_r_r), // 58
        instr!("LD E,C", 1, 1, Cpu::op_ld_r_r), // 59
        instr!("LD E,D", 1, 1, Cpu::op_ld_r_r), // 5A
        instr!("LD E,E", 1, 1, Cpu::op_ld_r_r), // 5B
        instr!("LD E,H", 1, 1, Cpu::op_ld_r_r), // 5C
        instr!("LD E,L", 1, 1, Cpu::op_ld_r_r), // 5D
        instr!("LD E,(HL)", 1, 2, Cpu::op_ld_r_r), // 5E
        instr!("LD E,A", 1, 1, Cpu::op_ld_r_r), // 5F
        // 0x60
        instr!("LD H,B", 1, 1, Cpu::op_ld_r_r), // 60
        instr!("LD H,C", 1, 1, Cpu::op_ld_r_r), // 61
        instr!("LD H,D", 1, 1, Cpu::op_ld_r_r), // 62
        instr!("LD H,E", 1, 1, Cpu::op_ld_r_r), // 63
        instr!("LD H,H", 1, 1, Cpu::op_ld_r_r), // 64
        instr!("LD H,L", 1, 1, Cpu::op_ld_r_r), // 65
        instr!("LD H,(HL)", 1, 2, Cpu::op_ld_r_r), // 66
        instr!("LD H,A", 1, 1, Cpu::op_ld_r_r), // 67
        instr!("LD L,B", 1, 1, Cpu::op_ld_r_r), // 68
        instr!("LD L,C", 1, 1, Cpu::op_ld_r_r), // 69
        instr!("LD L,D", 1, 1, Cpu::op_ld_r_r), // 6A
        instr!("LD L,E", 1, 1, Cpu::op_ld_r_r), // 6B
        instr!("LD L,H", 1, 1, Cpu::op_ld_r_r), // 6C
        instr!("LD L,L", 1, 1, Cpu::op_ld_r_r), // 6D
        instr!("LD L,(HL)", 1, 2, Cpu::op_ld_r_r), // 6E
        instr!("LD L,A", 1, 1, Cpu::op_ld_r_r), // 6F
        // 0x70
        instr!("LD (HL),B", 1, 2, Cpu::op_ld_r_r), // 70
        instr!("LD (HL),C", 1, 2, Cpu::op_ld_r_r), // 71
        instr!("LD (HL),D", 1, 2, Cpu::op_ld_r_r), // 72
        instr!("LD (HL),E", 1, 2, Cpu::op_ld_r_r), // 73
        instr!("LD (HL),H", 1, 2, Cpu::op_ld_r_r), // 74
        instr!("LD (HL),L", 1, 2, Cpu::op_ld_r_r), // 75
        instr!("HALT", 1, 1, Cpu::op_halt), // 76
        instr!("LD (HL),A", 1, 2, Cpu::op_ld_r_r), // 77
        instr!("LD A,B", 1, 1, Cpu::op_ld_r_r), // 78
        instr!("LD A,C", 1, 1, Cpu::op_ld_r_r), // 79
        instr!("LD A,D", 1, 1, Cpu::op_ld_r_r), // 7A
        instr!("LD A,E", 1, 1, Cpu::op_ld_r_r), // 7B
        instr!("LD A,H", 1, 1, Cpu::op_ld_r_r), // 7C
        instr!("LD A,L", 1, 1, Cpu::op_ld_r_r), // 7D
        instr!("LD A,(HL)", 1, 2, Cpu::op_ld_r_r), // 7E
        instr!("LD A,A", 1, 1, Cpu::op_ld_r_r), // 7F
        // 0x80
        instr!("ADD A,B", 1, 1, Cpu::op_alu_r), // 80
        instr!("ADD A,C", 1, 1, Cpu::op_alu_r), // 81
        instr!("ADD A,D", 1, 1, Cpu::op_alu_r), // 82
        instr!("ADD A,E", 1, 1, Cpu::op_alu_r), // 83
        instr!("ADD A,H", 1, 1, Cpu::op_alu_r), // 84
        instr!("ADD A,L", 1, 1, Cpu::op_alu_r), // 85
        instr!("ADD A,(HL)", 1, 2, Cpu::op_alu_r), // 86
        instr!("ADD A,A", 1, 1, Cpu::op_alu_r), // 87
        instr!("ADC A,B", 1, 1, Cpu::op_alu_r), // 88
        instr!("ADC A,C", 1, 1, Cpu::op_alu_r), // 89
        instr!("ADC A,D", 1, 1, Cpu::op_alu_r), // 8A
        instr!("ADC A,E", 1, 1, Cpu::op_alu_r), // 8B
        instr!("ADC A,H", 1, 1, Cpu::op_alu_r), // 8C
        instr!("ADC A,L", 1, 1, Cpu::op_alu_r), // 8D
        instr!("ADC A,(HL)", 1, 2, Cpu::op_alu_r), // 8E
        instr!("ADC A,A", 1, 1, Cpu::op_alu_r), // 8F
        // 0x90
        instr!("SUB B", 1, 1, Cpu::op_alu_r), // 90
        instr!("SUB C", 1, 1, Cpu::op_alu_r), // 91
        instr!("SUB D", 1, 1, Cpu::op_alu_r), // 92
        instr!("SUB E", 1, 1, Cpu::op_alu_r), // 93
        instr!("SUB H", 1, 1, Cpu::op_alu_r), // 94
        instr!("SUB L", 1, 1, Cpu::op_alu_r), // 95
        instr!("SUB (HL)", 1, 2, Cpu::op_alu_r), // 96
        instr!("SUB A", 1, 1, Cpu::op_alu_r), // 97
        instr!("SBC A,B", 1, 1, Cpu::op_alu_r), // 98
        instr!("SBC A,C", 1, 1, Cpu::op_alu_r), // 99
        instr!("SBC A,D", 1, 1, Cpu::op_alu_r), // 9A
        instr!("SBC A,E", 1, 1, Cpu::op_alu_r), // 9B
        instr!("SBC A,H", 1, 1, Cpu::op_alu_r), // 9C
        instr!("SBC A,L", 1, 1, Cpu::op_alu_r), // 9D
        instr!("SBC A,(HL)", 1, 2, Cpu::op_alu_r), // 9E
        instr!("SBC A,A", 1, 1, Cpu::op_alu_r), // 9F
        // 0xA0
        instr!("AND B", 1, 1, Cpu::op_alu_r), // A0
        instr!("AND C", 1, 1, Cpu::op_alu_r), // A1
        instr!("AND D", 1, 1, Cpu::op_alu_r), // A2
        instr!("AND E", 1, 1, Cpu::op_alu_r), // A3
        instr!("AND H", 1, 1, Cpu::op_alu_r), // A4
        instr!("AND L", 1, 1, Cpu::op_alu_r), // A5
        instr!("AND (HL)", 1, 2, Cpu::op_alu_r), // A6
        instr!("AND A", 1, 1, Cpu::op_alu_r), // A7
        instr!("XOR B", 1, 1, Cpu::op_alu_r), // A8
        instr!("XOR C", 1, 1, Cpu::op_alu_r), // A9
        instr!("XOR D", 1, 1, Cpu::op_alu_r), // AA
        instr!("XOR E", 1, 1, Cpu::op_alu_r), // AB
        instr!("XOR H", 1, 1, Cpu::op_alu_r), // AC
        instr!("XOR L", 1, 1, Cpu::op_alu_r), // AD
        instr!("XOR (HL)", 1, 2, Cpu::op_alu_r), // AE
        instr!("XOR A", 1, 1, Cpu::op_alu_r), // AF
        // 0xB0
        instr!("OR B", 1, 1, Cpu::op_alu_r), // B0
        instr!("OR C", 1, 1, Cpu::op_alu_r), // B1
        instr!("OR D", 1, 1, Cpu::op_alu_r), // B2
        instr!("OR E", 1, 1, Cpu::op_alu_r), // B3
        instr!("OR H", 1, 1, Cpu::op_alu_r), // B4
        instr!("OR L", 1, 1, Cpu::op_alu_r), // B5
        instr!("OR (HL)", 1, 2, Cpu::op_alu_r), // B6
        instr!("OR A", 1, 1, Cpu::op_alu_r), // B7
        instr!("CP B", 1, 1, Cpu::op_alu_r), // B8
        instr!("CP C", 1, 1, Cpu::op_alu_r), // B9
        instr!("CP D", 1, 1, Cpu::op_alu_r), // BA
        instr!("CP E", 1, 1, Cpu::op_alu_r), // BB
        instr!("CP H", 1, 1, Cpu::op_alu_r), // BC
        instr!("CP L", 1, 1, Cpu::op_alu_r), // BD
        instr!("CP (HL)", 1, 2, Cpu::op_alu_r), // BE
        instr!("CP A", 1, 1, Cpu::op_alu_r), // BF
        // 0xC0
        branch!("RET NZ", 1, 2, 5, Cpu::op_ret_cc), // C0
        instr!("POP BC", 1, 3, Cpu::op_pop), // C1
        branch!("JP NZ,a16", 3, 3, 4, Cpu::op_jp_cc), // C2
        instr!("JP a16", 3, 4, Cpu::op_jp), // C3
        branch!("CALL NZ,a16", 3, 3, 6, Cpu::op_call_cc), // C4
        instr!("PUSH BC", 1, 4, Cpu::op_push), // C5
        instr!("ADD A,d8", 2, 2, Cpu::op_alu_d8), // C6
        instr!("RST 00H", 1, 4, Cpu::op_rst), // C7
        branch!("RET Z", 1, 2, 5, Cpu::op_ret_cc), // C8
        instr!("RET", 1, 4, Cpu::op_ret), // C9
        branch!("JP Z,a16", 3, 3, 4, Cpu::op_jp_cc), // CA
        instr!("PREFIX CB", 1, 1, Cpu::op_nop), // CB
        branch!("CALL Z,a16", 3, 3, 6, Cpu::op_call_cc), // CC
        instr!("CALL a16", 3, 6, Cpu::op_call), // CD
        instr!("ADC A,d8", 2, 2, Cpu::op_alu_d8), // CE
        instr!("RST 08H", 1, 4, Cpu::op_rst), // CF
        // 0xD0
        branch!("RET NC", 1, 2, 5, Cpu::op_ret_cc), // D0
        instr!("POP DE", 1, 3, Cpu::op_pop), // D1
        branch!("JP NC,a16", 3, 3, 4, Cpu::op_jp_cc), // D2
        illegal!(), // D3
        branch!("CALL NC,a16", 3, 3, 6, Cpu::op_call_cc), // D4
        instr!("PUSH DE", 1, 4, Cpu::op_push), // D5
        instr!("SUB d8", 2, 2, Cpu::op_alu_d8), // D6
        instr!("RST 10H", 1, 4, Cpu::op_rst), // D7
        branch!("RET C", 1, 2, 5, Cpu::op_ret_cc), // D8
        instr!("RETI", 1, 4, Cpu::op_reti), // D9
        branch!("JP C,a16", 3, 3, 4, Cpu::op_jp_cc), // DA
        illegal!(), // DB
        branch!("CALL C,a16", 3, 3, 6, Cpu::op_call_cc), // DC
        illegal!(), // DD
        instr!("SBC A,d8", 2, 2, Cpu::op_alu_d8), // DE
        instr!("RST 18H", 1, 4, Cpu::op_rst), // DF
        // 0xE0
        instr!("LDH (a8),A", 2, 3, Cpu::op_ldh_a8), // E0
        instr!("POP HL", 1, 3, Cpu::op_pop), // E1
        instr!("LD (C),A", 1, 2, Cpu::op_ldh_c), // E2
        illegal!(), // E3
        illegal!(), // E4
        instr!("PUSH HL", 1, 4, Cpu::op_push), // E5
        instr!("AND d8", 2, 2, Cpu::op_alu_d8), // E6
        instr!("RST 20H", 1, 4, Cpu::op_rst), // E7
        instr!("ADD SP,r8", 2, 4, Cpu::op_add_sp_e8), // E8
        instr!("JP HL", 1, 1, Cpu::op_jp_hl), // E9
        instr!("LD (a16),A", 3, 4, Cpu::op_ld_a16_a), // EA
        illegal!(), // EB
        illegal!(), // EC
        illegal!(), // ED
        instr!("XOR d8", 2, 2, Cpu::op_alu_d8), // EE
        instr!("RST 28H", 1, 4, Cpu::op_rst), // EF
        // 0xF0
        instr!("LDH A,(a8)", 2, 3, Cpu::op_ldh_a8), // F0
        instr!("POP AF", 1, 3, Cpu::op_pop), // F1
        instr!("LD A,(C)", 1, 2, Cpu::op_ldh_c), // F2
        instr!("DI", 1, 1, Cpu::op_di), // F3
        illegal!(), // F4
        instr!("PUSH AF", 1, 4, Cpu::op_push), // F5
        instr!("OR d8", 2, 2, Cpu::op_alu_d8), // F6
        instr!("RST 30H", 1, 4, Cpu::op_rst), // F7
        instr!("LD HL,SP+r8", 2, 3, Cpu::op_ld_hl_sp_e8), // F8
        instr!("LD SP,HL", 1, 2, Cpu::op_ld_sp_hl), // F9
        instr!("LD A,(a16)", 3, 4, Cpu::op_ld_a16_a), // FA
        instr!("EI", 1, 1, Cpu::op_ei), // FB
        illegal!(), // FC
        illegal!(), // FD
        instr!("CP d8", 2, 2, Cpu::op_alu_d8), // FE
        instr!("RST 38H", 1, 4, Cpu::op_rst), // FF
    ];

    /// 0xCB-prefixed opcodes. Lengths and cycles include the prefix byte.
    pub static ref CB_OPCODES: [Instruction; 256] = [
        // 0x00
        instr!("RLC B", 2, 2, Cpu::cb_rlc), // 00
        instr!("RLC C", 2, 2, Cpu::cb_rlc), // 01
        instr!("RLC D", 2, 2, Cpu::cb_rlc), // 02
        instr!("RLC E", 2, 2, Cpu::cb_rlc), // 03
        instr!("RLC H", 2, 2, Cpu::cb_rlc), // 04
        instr!("RLC L", 2, 2, Cpu::cb_rlc), // 05
        instr!("RLC (HL)", 2, 4, Cpu::cb_rlc), // 06
        instr!("RLC A", 2, 2, Cpu::cb_rlc), // 07
        instr!("RRC B", 2, 2, Cpu::cb_rrc), // 08
        instr!("RRC C", 2, 2, Cpu::cb_rrc), // 09
        instr!("RRC D", 2, 2, Cpu::cb_rrc), // 0A
        instr!("RRC E", 2, 2, Cpu::cb_rrc), // 0B
        instr!("RRC H", 2, 2, Cpu::cb_rrc), // 0C
        instr!("RRC L", 2, 2, Cpu::cb_rrc), // 0D
        instr!("RRC (HL)", 2, 4, Cpu::cb_rrc), // 0E
        instr!("RRC A", 2, 2, Cpu::cb_rrc), // 0F
        // 0x10
        instr!("RL B", 2, 2, Cpu::cb_rl), // 10
        instr!("RL C", 2, 2, Cpu::cb_rl), // 11
        instr!("RL D", 2, 2, Cpu::cb_rl), // 12
        instr!("RL E", 2, 2, Cpu::cb_rl), // 13
        instr!("RL H", 2, 2, Cpu::cb_rl), // 14
        instr!("RL L", 2, 2, Cpu::cb_rl), // 15
        instr!("RL (HL)", 2, 4, Cpu::cb_rl), // 16
        instr!("RL A", 2, 2, Cpu::cb_rl), // 17
        instr!("RR B", 2, 2, Cpu::cb_rr), // 18
        instr!("RR C", 2, 2, Cpu::cb_rr), // 19
        instr!("RR D", 2, 2, Cpu::cb_rr), // 1A
        instr!("RR E", 2, 2, Cpu::cb_rr), // 1B
        instr!("RR H", 2, 2, Cpu::cb_rr), // 1C
        instr!("RR L", 2, 2, Cpu::cb_rr), // 1D
        instr!("RR (HL)", 2, 4, Cpu::cb_rr), // 1E
        instr!("RR A", 2, 2, Cpu::cb_rr), // 1F
        // 0x20
        instr!("SLA B", 2, 2, Cpu::cb_sla), // 20
        instr!("SLA C", 2, 2, Cpu::cb_sla), // 21
        instr!("SLA D", 2, 2, Cpu::cb_sla), // 22
        instr!("SLA E", 2, 2, Cpu::cb_sla), // 23
        instr!("SLA H", 2, 2, Cpu::cb_sla), // 24
        instr!("SLA L", 2, 2, Cpu::cb_sla), // 25
        instr!("SLA (HL)", 2, 4, Cpu::cb_sla), // 26
        instr!("SLA A", 2, 2, Cpu::cb_sla), // 27
        instr!("SRA B", 2, 2, Cpu::cb_sra), // 28
        instr!("SRA C", 2, 2, Cpu::cb_sra), // 29
        instr!("SRA D", 2, 2, Cpu::cb_sra), // 2A
        instr!("SRA E", 2, 2, Cpu::cb_sra), // 2B
        instr!("SRA H", 2, 2, Cpu::cb_sra), // 2C
        instr!("SRA L", 2, 2, Cpu::cb_sra), // 2D
        instr!("SRA (HL)", 2, 4, Cpu::cb_sra), // 2E
        instr!("SRA A", 2, 2, Cpu::cb_sra), // 2F
        // 0x30
        instr!("SWAP B", 2, 2, Cpu::cb_swap), // 30
        instr!("SWAP C", 2, 2, Cpu::cb_swap), // 31
        instr!("SWAP D", 2, 2, Cpu::cb_swap), // 32
        instr!("SWAP E", 2, 2, Cpu::cb_swap), // 33
        instr!("SWAP H", 2, 2, Cpu::cb_swap), // 34
        instr!("SWAP L", 2, 2, Cpu::cb_swap), // 35
        instr!("SWAP (HL)", 2, 4, Cpu::cb_swap), // 36
        instr!("SWAP A", 2, 2, Cpu::cb_swap), // 37
        instr!("SRL B", 2, 2, Cpu::cb_srl), // 38
        instr!("SRL C", 2, 2, Cpu::cb_srl), // 39
        instr!("SRL D", 2, 2, Cpu::cb_srl), // 3A
        instr!("SRL E", 2, 2, Cpu::cb_srl), // 3B
        instr!("SRL H", 2, 2, Cpu::cb_srl), // 3C
        instr!("SRL L", 2, 2, Cpu::cb_srl), // 3D
        instr!("SRL (HL)", 2, 4, Cpu::cb_srl), // 3E
        instr!("SRL A", 2, 2, Cpu::cb_srl), // 3F
        // 0x40
        instr!("BIT 0,B", 2, 2, Cpu::cb_bit), // 40
        instr!("BIT 0,C", 2, 2, Cpu::cb_bit), // 41
        instr!("BIT 0,D", 2, 2, Cpu::cb_bit), // 42
        instr!("BIT 0,E", 2, 2, Cpu::cb_bit), // 43
        instr!("BIT 0,H", 2, 2, Cpu::cb_bit), // 44
        instr!("BIT 0,L", 2, 2, Cpu::cb_bit), // 45
        instr!("BIT 0,(HL)", 2, 3, Cpu::cb_bit), // 46
        instr!("BIT 0,A", 2, 2, Cpu::cb_bit), // 47
        instr!("BIT 1,B", 2, 2, Cpu::cb_bit), // 48
        instr!("BIT 1,C", 2, 2, Cpu::cb_bit), // 49
        instr!("BIT 1,D", 2, 2, Cpu::cb_bit), // 4A
        instr!("BIT 1,E", 2, 2, Cpu::cb_bit), // 4B
        instr!("BIT 1,H", 2, 2, Cpu::cb_bit), // 4C
        instr!("BIT 1,L", 2, 2, Cpu::cb_bit), // 4D
        instr!("BIT 1,(HL)", 2, 3, Cpu::cb_bit), // 4E
        instr!("BIT 1,A", 2, 2, Cpu::cb_bit), // 4F
        // 0x50
        instr!("BIT 2,B", 2, 2, Cpu::cb_bit), // 50
        instr!("BIT 2,C", 2, 2, Cpu::cb_bit), // 51
        instr!("BIT 2,D", 2, 2, Cpu::cb_bit), // 52
        instr!("BIT 2,E", 2, 2, Cpu::cb_bit), // 53
        instr!("BIT 2,H", 2, 2, Cpu::cb_bit), // 54
        instr!("BIT 2,L", 2, 2, Cpu::cb_bit), // 55
        instr!("BIT 2,(HL)", 2, 3, Cpu::cb_bit), // 56
        instr!("BIT 2,A", 2, 2, Cpu::cb_bit), // 57
        instr!("BIT 3,B", 2, 2, Cpu::cb_bit), // 58
        instr!("BIT 3,C", 2, 2, Cpu::cb_bit), // 59
        instr!("BIT 3,D", 2, 2, Cpu::cb_bit), // 5A
        instr!("BIT 3,E", 2, 2, Cpu::cb_bit), // 5B
        instr!("BIT 3,H", 2, 2, Cpu::cb_bit), // 5C
        instr!("BIT 3,L", 2, 2, Cpu::cb_bit), // 5D
        instr!("BIT 3,(HL)", 2, 3, Cpu::cb_bit), // 5E
        instr!("BIT 3,A", 2, 2, Cpu::cb_bit), // 5F
        // 0x60
        instr!("BIT 4,B", 2, 2, Cpu::cb_bit), // 60
        instr!("BIT 4,C", 2, 2, Cpu::cb_bit), // 61
        instr!("BIT 4,D", 2, 2, Cpu::cb_bit), // 62
        instr!("BIT 4,E", 2, 2, Cpu::cb_bit), // 63
        instr!("BIT 4,H", 2, 2, Cpu::cb_bit), // 64
        instr!("BIT 4,L", 2, 2, Cpu::cb_bit), // 65
        instr!("BIT 4,(HL)", 2, 3, Cpu::cb_bit), // 66
        instr!("BIT 4,A", 2, 2, Cpu::cb_bit), // 67
        instr!("BIT 5,B", 2, 2, Cpu::cb_bit), // 68
        instr!("BIT 5,C", 2, 2, Cpu::cb_bit), // 69
        instr!("BIT 5,D", 2, 2, Cpu::cb_bit), // 6A
        instr!("BIT 5,E", 2, 2, Cpu::cb_bit), // 6B
        instr!("BIT 5,H", 2, 2, Cpu::cb_bit), // 6C
        instr!("BIT 5,L", 2, 2, Cpu::cb_bit), // 6D
        instr!("BIT 5,(HL)", 2, 3, Cpu::cb_bit), // 6E
        instr!("BIT 5,A", 2, 2, Cpu::cb_bit), // 6F
        // 0x70
        instr!("BIT 6,B", 2, 2, Cpu::cb_bit), // 70
        instr!("BIT 6,C", 2, 2, Cpu::cb_bit), // 71
        instr!("BIT 6,D", 2, 2, Cpu::cb_bit), // 72
        instr!("BIT 6,E", 2, 2, Cpu::cb_bit), // 73
        instr!("BIT 6,H", 2, 2, Cpu::cb_bit), // 74
        instr!("BIT 6,L", 2, 2, Cpu::cb_bit), // 75
        instr!("BIT 6,(HL)", 2, 3, Cpu::cb_bit), // 76
        instr!("BIT 6,A", 2, 2, Cpu::cb_bit), // 77
        instr!("BIT 7,B", 2, 2, Cpu::cb_bit), // 78
        instr!("BIT 7,C", 2, 2, Cpu::cb_bit), // 79
        instr!("BIT 7,D", 2, 2, Cpu::cb_bit), // 7A
        instr!("BIT 7,E", 2, 2, Cpu::cb_bit), // 7B
        instr!("BIT 7,H", 2, 2, Cpu::cb_bit), // 7C
        instr!("BIT 7,L", 2, 2, Cpu::cb_bit), // 7D
        instr!("BIT 7,(HL)", 2, 3, Cpu::cb_bit), // 7E
        instr!("BIT 7,A", 2, 2, Cpu::cb_bit), // 7F
        // 0x80
        instr!("RES 0,B", 2, 2, Cpu::cb_res), // 80
        instr!("RES 0,C", 2, 2, Cpu::cb_res), // 81
        instr!("RES 0,D", 2, 2, Cpu::cb_res), // 82
        instr!("RES 0,E", 2, 2, Cpu::cb_res), // 83
        instr!("RES 0,H", 2, 2, Cpu::cb_res), // 84
        instr!("RES 0,L", 2, 2, Cpu::cb_res), // 85
        instr!("RES 0,(HL)", 2, 4, Cpu::cb_res), // 86
        instr!("RES 0,A", 2, 2, Cpu::cb_res), // 87
        instr!("RES 1,B", 2, 2, Cpu::cb_res), // 88
        instr!("RES 1,C", 2, 2, Cpu::cb_res), // 89
        instr!("RES 1,D", 2, 2, Cpu::cb_res), // 8A
        instr!("RES 1,E", 2, 2, Cpu::cb_res), // 8B
        instr!("RES 1,H", 2, 2, Cpu::cb_res), // 8C
        instr!("RES 1,L", 2, 2, Cpu::cb_res), // 8D
        instr!("RES 1,(HL)", 2, 4, Cpu::cb_res), // 8E
        instr!("RES 1,A", 2, 2, Cpu::cb_res), // 8F
        // 0x90
        instr!("RES 2,B", 2, 2, Cpu::cb_res), // 90
        instr!("RES 2,C", 2, 2, Cpu::cb_res), // 91
        instr!("RES 2,D", 2, 2, Cpu::cb_res), // 92
        instr!("RES 2,E", 2, 2, Cpu::cb_res), // 93
        instr!("RES 2,H", 2, 2, Cpu::cb_res), // 94
        instr!("RES 2,L", 2, 2, Cpu::cb_res), // 95
        instr!("RES 2,(HL)", 2, 4, Cpu::cb_res), // 96
        instr!("RES 2,A", 2, 2, Cpu::cb_res), // 97
        instr!("RES 3,B", 2, 2, Cpu::cb_res), // 98
        instr!("RES 3,C", 2, 2, Cpu::cb_res), // 99
        instr!("RES 3,D", 2, 2, Cpu::cb_res), // 9A
        instr!("RES 3,E", 2, 2, Cpu::cb_res), // 9B
        instr!("RES 3,H", 2, 2, Cpu::cb_res), // 9C
        instr!("RES 3,L", 2, 2, Cpu::cb_res), // 9D
        instr!("RES 3,(HL)", 2, 4, Cpu::cb_res), // 9E
        instr!("RES 3,A", 2, 2, Cpu::cb_res), // 9F
        // 0xA0
        instr!("RES 4,B", 2, 2, Cpu::cb_res), // A0
        instr!("RES 4,C", 2, 2, Cpu::cb_res), // A1
        instr!("RES 4,D", 2, 2, Cpu::cb_res), // A2
        instr!("RES 4,E", 2, 2, Cpu::cb_res), // A3
        instr!("RES 4,H", 2, 2, Cpu::cb_res), // A4
        instr!("RES 4,L", 2, 2, Cpu::cb_res), // A5
        instr!("RES 4,(HL)", 2, 4, Cpu::cb_res), // A6
        instr!("RES 4,A", 2, 2, Cpu::cb_res), // A7
        instr!("RES 5,B", 2, 2, Cpu::cb_res), // A8
        instr!("RES 5,C", 2, 2, Cpu::cb_res), // A9
        instr!("RES 5,D", 2, 2, Cpu::cb_res), // AA
        instr!("RES 5,E", 2, 2, Cpu::cb_res), // AB
        instr!("RES 5,H", 2, 2, Cpu::cb_res), // AC
        instr!("RES 5,L", 2, 2, Cpu::cb_res), // AD
        instr!("RES 5,(HL)", 2, 4, Cpu::cb_res), // AE
        instr!("RES 5,A", 2, 2, Cpu::cb_res), // AF
        // 0xB0
        instr!("RES 6,B", 2, 2, Cpu::cb_res), // B0
        instr!("RES 6,C", 2, 2, Cpu::cb_res), // B1
        instr!("RES 6,D", 2, 2, Cpu::cb_res), // B2
        instr!("RES 6,E", 2, 2, Cpu::cb_res), // B3
        instr!("RES 6,H", 2, 2, Cpu::cb_res), // B4
        instr!("RES 6,L", 2, 2, Cpu::cb_res), // B5
        instr!("RES 6,(HL)", 2, 4, Cpu::cb_res), // B6
        instr!("RES 6,A", 2, 2, Cpu::cb_res), // B7
        instr!("RES 7,B", 2, 2, Cpu::cb_res), // B8
        instr!("RES 7,C", 2, 2, Cpu::cb_res), // B9
        instr!("RES 7,D", 2, 2, Cpu::cb_res), // BA
        instr!("RES 7,E", 2, 2, Cpu::cb_res), // BB
        instr!("RES 7,H", 2, 2, Cpu::cb_res), // BC
        instr!("RES 7,L", 2, 2, Cpu::cb_res), // BD
        instr!("RES 7,(HL)", 2, 4, Cpu::cb_res), // BE
        instr!("RES 7,A", 2, 2, Cpu::cb_res), // BF
        // 0xC0
        instr!("SET 0,B", 2, 2, Cpu::cb_set), // C0
        instr!("SET 0,C", 2, 2, Cpu::cb_set), // C1
        instr!("SET 0,D", 2, 2, Cpu::cb_set), // C2
        instr!("SET 0,E", 2, 2, Cpu::cb_set), // C3
        instr!("SET 0,H", 2, 2, Cpu::cb_set), // C4
        instr!("SET 0,L", 2, 2, Cpu::cb_set), // C5
        instr!("SET 0,(HL)", 2, 4, Cpu::cb_set), // C6
        instr!("SET 0,A", 2, 2, Cpu::cb_set), // C7
        instr!("SET 1,B", 2, 2, Cpu::cb_set), // C8
        instr!("SET 1,C", 2, 2, Cpu::cb_set), // C9
        instr!("SET 1,D", 2, 2, Cpu::cb_set), // CA
        instr!("SET 1,E", 2, 2, Cpu::cb_set), // CB
        instr!("SET 1,H", 2, 2, Cpu::cb_set), // CC
        instr!("SET 1,L", 2, 2, Cpu::cb_set), // CD
        instr!("SET 1,(HL)", 2, 4, Cpu::cb_set), // CE
        instr!("SET 1,A", 2, 2, Cpu::cb_set), // CF
        // 0xD0
        instr!("SET 2,B", 2, 2, Cpu::cb_set), // D0
        instr!("SET 2,C", 2, 2, Cpu::cb_set), // D1
        instr!("SET 2,D", 2, 2, Cpu::cb_set), // D2
        instr!("SET 2,E", 2, 2, Cpu::cb_set), // D3
        instr!("SET 2,H", 2, 2, Cpu::cb_set), // D4
        instr!("SET 2,L", 2, 2, Cpu::cb_set), // D5
        instr!("SET 2,(HL)", 2, 4, Cpu::cb_set), // D6
        instr!("SET 2,A", 2, 2, Cpu::cb_set), // D7
        instr!("SET 3,B", 2, 2, Cpu::cb_set), // D8
        instr!("SET 3,C", 2, 2, Cpu::cb_set), // D9
        instr!("SET 3,D", 2, 2, Cpu::cb_set), // DA
        instr!("SET 3,E", 2, 2, Cpu::cb_set), // DB
        instr!("SET 3,H", 2, 2, Cpu::cb_set), // DC
        instr!("SET 3,L", 2, 2, Cpu::cb_set), // DD
        instr!("SET 3,(HL)", 2, 4, Cpu::cb_set), // DE
        instr!("SET 3,A", 2, 2, Cpu::cb_set), // DF
        // 0xE0
        instr!("SET 4,B", 2, 2, Cpu::cb_set), // E0
        instr!("SET 4,C", 2, 2, Cpu::cb_set), // E1
        instr!("SET 4,D", 2, 2, Cpu::cb_set), // E2
        instr!("SET 4,E", 2, 2, Cpu::cb_set), // E3
        instr!("SET 4,H", 2, 2, Cpu::cb_set), // E4
        instr!("SET 4,L", 2, 2, Cpu::cb_set), // E5
        instr!("SET 4,(HL)", 2, 4, Cpu::cb_set), // E6
        instr!("SET 4,A", 2, 2, Cpu::cb_set), // E7
        instr!("SET 5,B", 2, 2, Cpu::cb_set), // E8
        instr!("SET 5,C", 2, 2, Cpu::cb_set), // E9
        instr!("SET 5,D", 2, 2, Cpu::cb_set), // EA
        instr!("SET 5,E", 2, 2, Cpu::cb_set), // EB
        instr!("SET 5,H", 2, 2, Cpu::cb_set), // EC
        instr!("SET 5,L", 2, 2, Cpu::cb_set), // ED
        instr!("SET 5,(HL)", 2, 4, Cpu::cb_set), // EE
        instr!("SET 5,A", 2, 2, Cpu::cb_set), // EF
        // 0xF0
        instr!("SET 6,B", 2, 2, Cpu::cb_set), // F0
        instr!("SET 6,C", 2, 2, Cpu::cb_set), // F1
        instr!("SET 6,D", 2, 2, Cpu::cb_set), // F2
        instr!("SET 6,E", 2, 2, Cpu::cb_set), // F3
        instr!("SET 6,H", 2, 2, Cpu::cb_set), // F4
        instr!("SET 6,L", 2, 2, Cpu::cb_set), // F5
        instr!("SET 6,(HL)", 2, 4, Cpu::cb_set), // F6
        instr!("SET 6,A", 2, 2, Cpu::cb_set), // F7
        instr!("SET 7,B", 2, 2, Cpu::cb_set), // F8
        instr!("SET 7,C", 2, 2, Cpu::cb_set), // F9
        instr!("SET 7,D", 2, 2, Cpu::cb_set), // FA
        instr!("SET 7,E", 2, 2, Cpu::cb_set), // FB
        instr!("SET 7,H", 2, 2, Cpu::cb_set), // FC
        instr!("SET 7,L", 2, 2, Cpu::cb_set), // FD
        instr!("SET 7,(HL)", 2, 4, Cpu::cb_set), // FE
        instr!("SET 7,A", 2, 2, Cpu::cb_set), // FF
    ];
}
