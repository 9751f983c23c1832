use thiserror::Error;

/// Errors raised while building a machine from a ROM image.
///
/// Everything the guest can do at runtime (bad bank numbers, reads from
/// unmapped regions, illegal opcodes) is modelled as hardware behaviour
/// instead; only loading can fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("ROM image is too small to contain a cartridge header ({len} bytes)")]
    RomTooSmall { len: usize },
    #[error("unsupported cartridge kind 0x{0:02X}")]
    UnsupportedCartridgeKind(u8),
    #[error("unsupported ROM size code 0x{0:02X}")]
    UnsupportedRomSize(u8),
    #[error("unsupported RAM size code 0x{0:02X}")]
    UnsupportedRamSize(u8),
    #[error("boot ROM must be at most 256 bytes, got {len}")]
    BootRomTooLarge { len: usize },
}
