pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;

pub use config::GameBoyConfig;
pub use error::LoadError;
pub use machine::joypad::Button;
pub use machine::{GameBoy, PpuState};

/// Logical screen width in pixels for the Game Boy DMG.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;

/// Machine cycles in one scanline (OAM search + draw + hblank).
pub const CYCLES_PER_LINE: u32 = 114;
/// Machine cycles in one full frame, 154 scanlines including vblank.
///
/// One machine cycle is four clock ticks, so this is 70 224 ticks.
pub const CYCLES_PER_FRAME: u32 = CYCLES_PER_LINE * 154;
/// Machine cycles per emulated second (4.194304 MHz clock / 4).
pub const CYCLES_PER_SECOND: u32 = 1_048_576;
