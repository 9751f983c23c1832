//! Sharp LR35902 CPU core.
//!
//! Instructions are dispatched through two 256-entry tables (see
//! [`OPCODES`] and [`CB_OPCODES`]); each handler performs the data movement
//! and flag updates for a group of opcodes and reports whether a conditional
//! branch was taken so the table can charge the right cost. All cycle counts
//! are machine cycles.

mod alu;
mod disasm;
mod exec;
mod helpers;
mod interrupts;
mod regs;
mod table;

pub use alu::{half_carry_add, half_carry_sub};
pub use disasm::disassemble;
pub use regs::{Flags, Reg16, Registers};
pub use table::{Instruction, CB_OPCODES, CB_PREFIX, OPCODES};

use crate::machine::interrupts::Interrupt;

/// Memory interface seen by the CPU.
///
/// The machine bus implements this, and tests use a flat 64 KiB array.
/// Interrupt polling defaults to reading IE/IF through the address space so
/// that simple buses work unchanged.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Highest-priority interrupt that is both enabled and requested.
    fn pending_interrupt(&mut self) -> Option<Interrupt> {
        let pending = self.read8(0xFFFF) & self.read8(0xFF0F) & 0x1F;
        Interrupt::highest(pending)
    }

    /// Clear the request bit of an interrupt that is being serviced.
    fn acknowledge_interrupt(&mut self, interrupt: Interrupt) {
        let flags = self.read8(0xFF0F);
        self.write8(0xFF0F, flags & !interrupt.mask());
    }
}

/// Execution state of the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CpuState {
    #[default]
    Running,
    /// HALT: no fetches until an enabled interrupt is requested.
    Halted,
    /// STOP: no fetches until a joypad line goes low.
    Stopped,
    /// An illegal opcode was executed; only a reset recovers.
    Locked,
}

/// How a handler resolved, used to pick the table cost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Timing {
    Base,
    Taken,
}

pub struct Cpu {
    pub regs: Registers,
    /// Interrupt master enable.
    pub ime: bool,
    state: CpuState,
    /// EI was just executed; IME turns on after the following instruction.
    ei_pending: bool,
    ei_armed: bool,
    /// HALT bug: the next opcode fetch does not advance PC.
    halt_bug: bool,
    cycles: u64,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// CPU in the state the DMG boot ROM leaves it at PC=0x0100.
    pub fn new() -> Self {
        Self {
            regs: Registers::post_boot(),
            ime: false,
            state: CpuState::Running,
            ei_pending: false,
            ei_armed: false,
            halt_bug: false,
            cycles: 0,
        }
    }

    /// CPU at power-on, about to execute a boot ROM from 0x0000.
    pub fn power_on() -> Self {
        Self {
            regs: Registers::default(),
            ..Self::new()
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn state(&self) -> CpuState {
        self.state
    }

    /// Total machine cycles consumed since construction.
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    #[inline]
    pub(crate) fn flag(&self, flag: Flags) -> bool {
        self.regs.f.contains(flag)
    }

    #[inline]
    pub(crate) fn set_flag(&mut self, flag: Flags, value: bool) {
        self.regs.f.set(flag, value);
    }

    /// Execute one instruction, or dispatch one interrupt, and return the
    /// number of machine cycles it took.
    ///
    /// Returns 0 once the CPU has locked up on an illegal opcode.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let cycles = self.step_dyn(bus);
        self.cycles += u64::from(cycles);
        cycles
    }

    fn step_dyn(&mut self, bus: &mut dyn Bus) -> u32 {
        match self.state {
            CpuState::Locked => return 0,
            CpuState::Stopped => {
                if bus.read8(0xFF00) & 0x0F == 0x0F {
                    return 1;
                }
                self.state = CpuState::Running;
            }
            CpuState::Running | CpuState::Halted => {}
        }

        if let Some(interrupt) = bus.pending_interrupt() {
            // A pending interrupt always ends HALT, even with IME clear.
            if self.state == CpuState::Halted {
                self.state = CpuState::Running;
            }
            if self.ime {
                return self.dispatch_interrupt(bus, interrupt);
            }
        }

        if self.state == CpuState::Halted {
            return 1;
        }

        let mut opcode = self.fetch8(bus);
        let instruction = if opcode == CB_PREFIX {
            opcode = self.fetch8(bus);
            &CB_OPCODES[opcode as usize]
        } else {
            &OPCODES[opcode as usize]
        };

        let timing = (instruction.execute)(self, bus, opcode);
        self.apply_ime_delay();
        if self.state == CpuState::Locked {
            return 0;
        }
        instruction.cost(timing)
    }
}

#[cfg(test)]
mod tests;
