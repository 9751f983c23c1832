use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dmgboy_core::{GameBoy, GameBoyConfig, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Boot ROM file looked up next to the ROM, then in the working directory.
pub const BOOT_ROM_FILE: &str = "dmg_boot.bin";

/// Locate and read the boot ROM. A missing file is not an error: the
/// machine then starts from the post-boot state.
pub fn find_boot_rom(rom_path: &Path) -> Result<Option<Vec<u8>>> {
    let mut candidates = Vec::new();
    if let Some(dir) = rom_path.parent() {
        candidates.push(dir.join(BOOT_ROM_FILE));
    }
    candidates.push(PathBuf::from(BOOT_ROM_FILE));

    for path in candidates {
        if path.is_file() {
            let data = std::fs::read(&path)
                .with_context(|| format!("failed to read boot ROM '{}'", path.display()))?;
            log::info!("using boot ROM '{}'", path.display());
            return Ok(Some(data));
        }
    }
    log::info!("no {} found, starting from post-boot state", BOOT_ROM_FILE);
    Ok(None)
}

fn save_path(rom_path: &Path) -> PathBuf {
    rom_path.with_extension("sav")
}

/// Encode a frame of shades as a binary PGM. Shade 0 is white.
pub fn encode_pgm(frame: &[u8]) -> Vec<u8> {
    let mut out = format!("P5\n{} {}\n255\n", SCREEN_WIDTH, SCREEN_HEIGHT).into_bytes();
    out.extend(frame.iter().map(|&shade| 255 - (shade & 0x03) * 85));
    out
}

/// Load `rom_path`, run `frames` frames and write the last frame to `out`.
///
/// Battery-backed cartridge RAM is read from and written back to a `.sav`
/// file beside the ROM.
pub fn run(rom_path: &Path, frames: u32, out: &Path) -> Result<()> {
    let rom = std::fs::read(rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let config = match find_boot_rom(rom_path)? {
        Some(boot) => GameBoyConfig::builder().boot_rom(boot).build(),
        None => GameBoyConfig::default(),
    };
    let mut gb = GameBoy::new(&rom, config)
        .with_context(|| format!("failed to load '{}'", rom_path.display()))?;

    let save = save_path(rom_path);
    if gb.cartridge().has_battery() && save.is_file() {
        let data = std::fs::read(&save)
            .with_context(|| format!("failed to read save '{}'", save.display()))?;
        gb.cartridge_mut().load_ram(&data);
        log::info!("loaded {} bytes of cartridge RAM", data.len());
    }

    for _ in 0..frames {
        gb.run_frame();
        if gb.cpu_state() == dmgboy_core::cpu::CpuState::Locked {
            log::warn!("cpu locked after {} cycles, stopping", gb.cycles());
            break;
        }
    }

    std::fs::write(out, encode_pgm(gb.frame()))
        .with_context(|| format!("failed to write '{}'", out.display()))?;
    log::info!(
        "wrote frame {} to '{}'",
        gb.ppu_state().frame_count,
        out.display()
    );

    if gb.cartridge().has_battery() && !gb.cartridge().ram().is_empty() {
        std::fs::write(&save, gb.cartridge().ram())
            .with_context(|| format!("failed to write save '{}'", save.display()))?;
    }
    Ok(())
}
