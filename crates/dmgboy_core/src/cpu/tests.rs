use super::*;

struct TestBus {
    memory: [u8; 0x10000],
}

impl Default for TestBus {
    fn default() -> Self {
        Self {
            memory: [0; 0x10000],
        }
    }
}

impl Bus for TestBus {
    fn read8(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write8(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

/// CPU at PC=0x0100 with `program` loaded there.
fn setup(program: &[u8]) -> (Cpu, TestBus) {
    let mut bus = TestBus::default();
    bus.memory[0x100..0x100 + program.len()].copy_from_slice(program);
    (Cpu::new(), bus)
}

fn run(cpu: &mut Cpu, bus: &mut TestBus, steps: usize) -> u32 {
    (0..steps).map(|_| cpu.step(bus)).sum()
}

#[test]
fn eight_bit_registers_hold_any_value() {
    let mut regs = Registers::default();
    for value in 0..=0xFFu8 {
        regs.b = value;
        regs.l = value;
        assert_eq!(regs.b, value);
        assert_eq!(regs.l, value);
    }
}

#[test]
fn register_pairs_split_into_halves() {
    let mut regs = Registers::default();
    for value in 0..=0xFFFFu16 {
        regs.set(Reg16::BC, value);
        assert_eq!(u16::from(regs.b) << 8 | u16::from(regs.c), value);
        regs.set(Reg16::HL, value);
        assert_eq!(regs.hl(), value);
        assert_eq!(u16::from(regs.h) << 8 | u16::from(regs.l), value);
    }
}

#[test]
fn af_drops_low_flag_nibble() {
    let mut regs = Registers::default();
    regs.set(Reg16::AF, 0x12FF);
    assert_eq!(regs.a, 0x12);
    assert_eq!(regs.f.bits(), 0xF0);
    assert_eq!(regs.af(), 0x12F0);
}

#[test]
fn pair_increment_carries_into_high_byte() {
    let mut regs = Registers::default();
    regs.set(Reg16::DE, 0x12FF);
    regs.inc(Reg16::DE);
    assert_eq!((regs.d, regs.e), (0x13, 0x00));
    regs.dec(Reg16::DE);
    assert_eq!(regs.de(), 0x12FF);
    regs.set(Reg16::SP, 0x0000);
    regs.dec(Reg16::SP);
    assert_eq!(regs.sp, 0xFFFF);
}

#[test]
fn half_carry_laws_hold_for_all_operands() {
    let mut cpu = Cpu::new();
    for a in 0..=0xFFu8 {
        for b in 0..=0xFFu8 {
            let add = (a & 0x0F) + (b & 0x0F) > 0x0F;
            let sub = (b & 0x0F) > (a & 0x0F);
            assert_eq!(half_carry_add(a, b), add);
            assert_eq!(half_carry_sub(a, b), sub);

            cpu.regs.a = a;
            cpu.alu_add(b, false);
            assert_eq!(cpu.flag(Flags::H), add, "ADD {a:02X},{b:02X}");

            cpu.regs.a = a;
            cpu.alu_sub(b, false);
            assert_eq!(cpu.flag(Flags::H), sub, "SUB {a:02X},{b:02X}");

            cpu.regs.a = a;
            cpu.alu_cp(b);
            assert_eq!(cpu.flag(Flags::H), sub, "CP {a:02X},{b:02X}");
            assert_eq!(cpu.regs.a, a);
        }
    }
}

#[test]
fn add_sets_carry_and_zero() {
    let mut cpu = Cpu::new();
    cpu.regs.a = 0xF0;
    cpu.alu_add(0x10, false);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flag(Flags::Z));
    assert!(cpu.flag(Flags::C));
    assert!(!cpu.flag(Flags::N));

    cpu.regs.a = 0x0E;
    cpu.alu_add(0x01, true);
    assert_eq!(cpu.regs.a, 0x10);
    assert!(cpu.flag(Flags::H));
}

#[test]
fn sbc_borrows_through_carry() {
    let mut cpu = Cpu::new();
    cpu.regs.a = 0x10;
    cpu.set_flag(Flags::C, true);
    cpu.alu_sub(0x0F, true);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flag(Flags::Z));
    assert!(cpu.flag(Flags::N));
    assert!(cpu.flag(Flags::H));
    assert!(!cpu.flag(Flags::C));
}

#[test]
fn push_pop_round_trip() {
    // PUSH BC; POP DE
    let (mut cpu, mut bus) = setup(&[0xC5, 0xD1]);
    cpu.regs.set(Reg16::BC, 0xBEEF);
    let sp = cpu.regs.sp;

    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.sp, sp - 2);
    assert_eq!(bus.memory[(sp - 1) as usize], 0xBE);
    assert_eq!(bus.memory[(sp - 2) as usize], 0xEF);

    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.de(), 0xBEEF);
    assert_eq!(cpu.regs.sp, sp);
}

#[test]
fn pop_af_masks_flags() {
    // PUSH BC; POP AF
    let (mut cpu, mut bus) = setup(&[0xC5, 0xF1]);
    cpu.regs.set(Reg16::BC, 0x12FF);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.af(), 0x12F0);
}

#[test]
fn daa_after_addition() {
    // LD A,0x45; ADD A,0x38; DAA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x45, 0xC6, 0x38, 0x27]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x83);
    assert!(!cpu.flag(Flags::C));
    assert!(!cpu.flag(Flags::H));
}

#[test]
fn daa_after_subtraction() {
    // LD A,0x83; SUB 0x38; DAA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x83, 0xD6, 0x38, 0x27]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x45);
    assert!(cpu.flag(Flags::N));
}

#[test]
fn daa_wraps_to_zero_with_carry() {
    // LD A,0x99; ADD A,0x01; DAA
    let (mut cpu, mut bus) = setup(&[0x3E, 0x99, 0xC6, 0x01, 0x27]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.regs.a, 0x00);
    assert!(cpu.flag(Flags::Z));
    assert!(cpu.flag(Flags::C));
}

#[test]
fn conditional_jumps_charge_taken_cost() {
    // JR NZ,+0; XOR A; JR NZ,+0; JP Z,0x0110
    let (mut cpu, mut bus) = setup(&[0x20, 0x00, 0xAF, 0x20, 0x00, 0xCA, 0x10, 0x01]);
    cpu.set_flag(Flags::Z, false);
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.step(&mut bus), 1);
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0110);
}

#[test]
fn conditional_calls_and_returns() {
    let (mut cpu, mut bus) = setup(&[
        0xAF, // XOR A (Z set)
        0xC4, 0x00, 0x02, // CALL NZ,0x0200 (not taken)
        0xCC, 0x00, 0x02, // CALL Z,0x0200
    ]);
    bus.memory[0x200] = 0xC0; // RET NZ
    bus.memory[0x201] = 0xC8; // RET Z

    assert_eq!(cpu.step(&mut bus), 1);
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.regs.pc, 0x0104);
    assert_eq!(cpu.step(&mut bus), 6);
    assert_eq!(cpu.regs.pc, 0x0200);
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(cpu.regs.pc, 0x0107);
    assert_eq!(cpu.regs.sp, 0xFFFE);
}

#[test]
fn jr_backwards() {
    // NOP; JR -3
    let (mut cpu, mut bus) = setup(&[0x00, 0x18, 0xFD]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.pc, 0x0100);
}

#[test]
fn rst_pushes_return_address() {
    let (mut cpu, mut bus) = setup(&[0xFF]);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x0038);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x01);
}

#[test]
fn load_sp_to_memory_is_little_endian() {
    // LD (0xC000),SP
    let (mut cpu, mut bus) = setup(&[0x08, 0x00, 0xC0]);
    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(bus.memory[0xC000], 0xFE);
    assert_eq!(bus.memory[0xC001], 0xFF);
}

#[test]
fn add_sp_signed_uses_low_byte_flags() {
    // ADD SP,+1; ADD SP,-2
    let (mut cpu, mut bus) = setup(&[0xE8, 0x01, 0xE8, 0xFE]);
    cpu.regs.sp = 0x00FF;
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.sp, 0x0100);
    assert!(cpu.flag(Flags::H));
    assert!(cpu.flag(Flags::C));
    assert!(!cpu.flag(Flags::Z));

    cpu.step(&mut bus);
    assert_eq!(cpu.regs.sp, 0x00FE);
}

#[test]
fn hl_indirect_loads_cost_two() {
    // LD HL,0xC000; LD (HL),0x77; LD B,(HL)
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0x36, 0x77, 0x46]);
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.step(&mut bus), 3);
    assert_eq!(cpu.step(&mut bus), 2);
    assert_eq!(cpu.regs.b, 0x77);
}

#[test]
fn rotate_accumulator_clears_zero() {
    // XOR A; RLCA
    let (mut cpu, mut bus) = setup(&[0xAF, 0x07]);
    run(&mut cpu, &mut bus, 2);
    assert_eq!(cpu.regs.a, 0);
    assert!(!cpu.flag(Flags::Z));
}

#[test]
fn cb_bit_tests_without_touching_carry() {
    // SCF; BIT 7,H
    let (mut cpu, mut bus) = setup(&[0x37, 0xCB, 0x7C]);
    cpu.regs.h = 0x7F;
    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 2);
    assert!(cpu.flag(Flags::Z));
    assert!(cpu.flag(Flags::H));
    assert!(!cpu.flag(Flags::N));
    assert!(cpu.flag(Flags::C));
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn cb_swap_and_rotate_through_carry() {
    // SWAP A; RL B
    let (mut cpu, mut bus) = setup(&[0xCB, 0x37, 0xCB, 0x10]);
    cpu.regs.a = 0xF1;
    cpu.regs.b = 0x80;
    cpu.set_flag(Flags::C, false);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 0x1F);
    assert!(!cpu.flag(Flags::C));
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.b, 0x00);
    assert!(cpu.flag(Flags::Z));
    assert!(cpu.flag(Flags::C));
}

#[test]
fn cb_memory_operands_cost_more() {
    // LD HL,0xC000; SET 0,(HL); BIT 0,(HL); RES 0,(HL)
    let (mut cpu, mut bus) = setup(&[0x21, 0x00, 0xC0, 0xCB, 0xC6, 0xCB, 0x46, 0xCB, 0x86]);
    cpu.step(&mut bus);
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(bus.memory[0xC000], 0x01);
    assert_eq!(cpu.step(&mut bus), 3);
    assert!(!cpu.flag(Flags::Z));
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(bus.memory[0xC000], 0x00);
}

#[test]
fn interrupt_dispatch_pushes_pc_and_clears_request() {
    let (mut cpu, mut bus) = setup(&[0x00]);
    cpu.ime = true;
    bus.memory[0xFFFF] = 0x05;
    bus.memory[0xFF0F] = 0x04 | 0x01;

    assert_eq!(cpu.step(&mut bus), 5);
    // VBlank outranks Timer.
    assert_eq!(cpu.regs.pc, 0x0040);
    assert!(!cpu.ime);
    assert_eq!(bus.memory[0xFF0F], 0x04);
    assert_eq!(bus.memory[0xFFFD], 0x01);
    assert_eq!(bus.memory[0xFFFC], 0x00);
}

#[test]
fn ei_takes_effect_after_next_instruction() {
    // EI; NOP; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0x00, 0x00]);
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    cpu.step(&mut bus);
    assert!(!cpu.ime);
    assert_eq!(cpu.step(&mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert!(cpu.ime);
    assert_eq!(cpu.step(&mut bus), 5);
    assert_eq!(cpu.regs.pc, 0x0040);
}

#[test]
fn di_cancels_pending_ei() {
    // EI; DI; NOP
    let (mut cpu, mut bus) = setup(&[0xFB, 0xF3, 0x00]);
    run(&mut cpu, &mut bus, 3);
    assert!(!cpu.ime);
}

#[test]
fn reti_enables_interrupts_immediately() {
    let (mut cpu, mut bus) = setup(&[0xD9]);
    cpu.regs.sp = 0xFFFC;
    bus.memory[0xFFFC] = 0x34;
    bus.memory[0xFFFD] = 0x12;
    assert_eq!(cpu.step(&mut bus), 4);
    assert_eq!(cpu.regs.pc, 0x1234);
    assert!(cpu.ime);
}

#[test]
fn halt_waits_for_enabled_interrupt() {
    // HALT; INC A
    let (mut cpu, mut bus) = setup(&[0x76, 0x3C]);
    cpu.regs.a = 0;
    cpu.step(&mut bus);
    assert_eq!(cpu.state(), CpuState::Halted);
    assert_eq!(cpu.step(&mut bus), 1);
    assert_eq!(cpu.regs.pc, 0x0101);

    // Requested but not enabled: still halted.
    bus.memory[0xFF0F] = 0x04;
    cpu.step(&mut bus);
    assert_eq!(cpu.state(), CpuState::Halted);

    // IME is clear, so the CPU resumes without dispatching.
    bus.memory[0xFFFF] = 0x04;
    cpu.step(&mut bus);
    assert_eq!(cpu.state(), CpuState::Running);
    assert_eq!(cpu.regs.a, 1);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn halt_bug_repeats_next_byte() {
    // HALT; INC A
    let (mut cpu, mut bus) = setup(&[0x76, 0x3C, 0x00]);
    cpu.regs.a = 0;
    bus.memory[0xFFFF] = 0x01;
    bus.memory[0xFF0F] = 0x01;

    cpu.step(&mut bus);
    assert_eq!(cpu.state(), CpuState::Running);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.pc, 0x0101);
    cpu.step(&mut bus);
    assert_eq!(cpu.regs.a, 2);
    assert_eq!(cpu.regs.pc, 0x0102);
}

#[test]
fn stop_waits_for_joypad_line() {
    let (mut cpu, mut bus) = setup(&[0x10, 0x00, 0x00]);
    bus.memory[0xFF00] = 0xFF;
    bus.memory[0xFF04] = 0x55;
    cpu.step(&mut bus);
    assert_eq!(cpu.state(), CpuState::Stopped);
    assert_eq!(cpu.regs.pc, 0x0102);
    assert_eq!(bus.memory[0xFF04], 0x00);

    cpu.step(&mut bus);
    assert_eq!(cpu.state(), CpuState::Stopped);

    bus.memory[0xFF00] = 0xEE;
    cpu.step(&mut bus);
    assert_eq!(cpu.state(), CpuState::Running);
    assert_eq!(cpu.regs.pc, 0x0103);
}

#[test]
fn illegal_opcode_locks_cpu() {
    let (mut cpu, mut bus) = setup(&[0xDD, 0x00]);
    assert_eq!(cpu.step(&mut bus), 0);
    assert_eq!(cpu.state(), CpuState::Locked);
    assert_eq!(cpu.step(&mut bus), 0);
    assert_eq!(cpu.regs.pc, 0x0101);

    cpu.reset();
    assert_eq!(cpu.state(), CpuState::Running);
}

#[test]
fn cycle_counter_accumulates() {
    // LD A,0x42; NOP; JP 0x0100
    let (mut cpu, mut bus) = setup(&[0x3E, 0x42, 0x00, 0xC3, 0x00, 0x01]);
    run(&mut cpu, &mut bus, 3);
    assert_eq!(cpu.cycles(), 2 + 1 + 4);
}

#[test]
fn opcode_tables_are_consistent() {
    for (opcode, instruction) in CB_OPCODES.iter().enumerate() {
        assert_eq!(instruction.length, 2, "CB {opcode:02X}");
        let expected = match (opcode & 0x07, opcode >> 6) {
            (6, 1) => 3,
            (6, _) => 4,
            _ => 2,
        };
        assert_eq!(instruction.cycles as usize, expected, "CB {opcode:02X}");
    }

    let illegal = [0xD3, 0xDB, 0xDD, 0xE3, 0xE4, 0xEB, 0xEC, 0xED, 0xF4, 0xFC, 0xFD];
    for (opcode, instruction) in OPCODES.iter().enumerate() {
        assert_eq!(
            instruction.mnemonic == "ILLEGAL",
            illegal.contains(&opcode),
            "{opcode:02X}"
        );
        assert!(instruction.taken_cycles >= instruction.cycles);
        assert!((1..=3).contains(&instruction.length));
    }
    assert_eq!(OPCODES[0x3E].cycles, 2);
    assert_eq!(OPCODES[0xCD].cycles, 6);
}

#[test]
fn disassembles_operands() {
    let mut bus = TestBus::default();
    bus.memory[0x100..0x10A].copy_from_slice(&[0x18, 0xFE, 0xE0, 0x40, 0xCB, 0x7C, 0xE8, 0xFE, 0x31, 0xFE]);
    bus.memory[0x10A] = 0xFF;

    assert_eq!(disassemble(&mut bus, 0x100), ("JR $0100".to_string(), 2));
    assert_eq!(disassemble(&mut bus, 0x102), ("LDH ($FF40),A".to_string(), 2));
    assert_eq!(disassemble(&mut bus, 0x104), ("BIT 7,H".to_string(), 2));
    assert_eq!(disassemble(&mut bus, 0x106), ("ADD SP,-2".to_string(), 2));
    assert_eq!(disassemble(&mut bus, 0x108), ("LD SP,$FFFE".to_string(), 3));
}
