//! Opcode handlers, grouped the way the instruction set groups them.
//!
//! Each handler decodes its register/condition fields from the opcode byte,
//! so one function serves a whole row or column of the table.

mod alu;
mod cb;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;
