mod bus;
pub mod cartridge;
mod gameboy;
pub mod interrupts;
pub mod io;
pub mod joypad;
pub mod memory;
pub mod ppu;
pub mod timer;

pub use bus::GameBoyBus;
pub use gameboy::{GameBoy, PpuState};
