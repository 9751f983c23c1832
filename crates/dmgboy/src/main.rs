use std::path::PathBuf;

use anyhow::{bail, Context, Result};

const USAGE: &str = "Usage: dmgboy <rom_path> [frames] [out_pgm_path]";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(rom_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let frames: u32 = match args.next() {
        Some(value) => value
            .parse()
            .with_context(|| format!("invalid frame count '{value}'\n{USAGE}"))?,
        None => 60,
    };
    let out_path = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| rom_path.with_extension("pgm"));

    dmgboy::run(&rom_path, frames, &out_path)
}
