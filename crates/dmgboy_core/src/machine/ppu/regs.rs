use bitflags::bitflags;

bitflags! {
    /// LCDC (0xFF40).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct Lcdc: u8 {
        const LCD_ENABLE = 0b1000_0000;
        /// Window tile map at 0x9C00 instead of 0x9800.
        const WINDOW_MAP = 0b0100_0000;
        const WINDOW_ENABLE = 0b0010_0000;
        /// Unsigned tile data at 0x8000 instead of signed at 0x9000.
        const TILE_DATA = 0b0001_0000;
        /// Background tile map at 0x9C00 instead of 0x9800.
        const BG_MAP = 0b0000_1000;
        /// 8x16 sprites.
        const OBJ_SIZE = 0b0000_0100;
        const OBJ_ENABLE = 0b0000_0010;
        /// On DMG this blanks both background and window.
        const BG_WINDOW_ENABLE = 0b0000_0001;
    }
}

bitflags! {
    /// Writable interrupt-source selects of STAT (0xFF41).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct StatSelect: u8 {
        const LYC = 0b0100_0000;
        const OAM = 0b0010_0000;
        const VBLANK = 0b0001_0000;
        const HBLANK = 0b0000_1000;
    }
}

bitflags! {
    /// Sprite attribute byte (OAM byte 3).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub(super) struct SpriteAttrs: u8 {
        /// Background colours 1-3 are drawn over the sprite.
        const BEHIND_BG = 0b1000_0000;
        const FLIP_Y = 0b0100_0000;
        const FLIP_X = 0b0010_0000;
        const PALETTE1 = 0b0001_0000;
    }
}
