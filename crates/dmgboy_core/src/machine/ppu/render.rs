use super::regs::SpriteAttrs;
use super::{Lcdc, Ppu};
use crate::machine::memory::Addressable;
use crate::SCREEN_WIDTH;

const MAX_SPRITES_PER_LINE: usize = 10;

#[derive(Clone, Copy, Debug)]
struct Sprite {
    /// Top edge in screen coordinates.
    y: i16,
    /// Left edge in screen coordinates.
    x: i16,
    tile: u8,
    attrs: SpriteAttrs,
    index: usize,
}

/// Apply a DMG palette register to a 2-bit colour id.
#[inline]
fn shade(palette: u8, color: u8) -> u8 {
    (palette >> (color * 2)) & 0x03
}

impl Ppu {
    /// Colour id (0-3) of one pixel of a tile row, from VRAM offsets.
    #[inline]
    fn tile_pixel(&self, row_offset: u16, bit: u8) -> u8 {
        let lo = self.vram.read(row_offset);
        let hi = self.vram.read(row_offset + 1);
        (((hi >> bit) & 0x01) << 1) | ((lo >> bit) & 0x01)
    }

    /// VRAM offset of a background/window tile, honouring the LCDC
    /// addressing mode.
    #[inline]
    fn bg_tile_offset(&self, tile: u8) -> u16 {
        if self.lcdc.contains(Lcdc::TILE_DATA) {
            u16::from(tile) * 16
        } else {
            (0x1000i32 + i32::from(tile as i8) * 16) as u16
        }
    }

    /// Colour id at (`x`, `y`) of the 256x256 map starting at VRAM offset `map`.
    #[inline]
    fn map_pixel(&self, map: u16, x: u8, y: u8) -> u8 {
        let tile_index = u16::from(y / 8) * 32 + u16::from(x / 8);
        let tile = self.vram.read(map + tile_index);
        let row = self.bg_tile_offset(tile) + u16::from(y % 8) * 2;
        self.tile_pixel(row, 7 - (x % 8))
    }

    /// Compose scanline LY into the back buffer.
    pub(super) fn render_scanline(&mut self) {
        let ly = self.ly;
        let mut bg_colors = [0u8; SCREEN_WIDTH];
        let mut line = [0u8; SCREEN_WIDTH];

        if self.lcdc.contains(Lcdc::BG_WINDOW_ENABLE) {
            self.render_background(ly, &mut bg_colors);
            self.render_window(ly, &mut bg_colors);
            for (pixel, &color) in line.iter_mut().zip(bg_colors.iter()) {
                *pixel = shade(self.bgp, color);
            }
        }

        if self.lcdc.contains(Lcdc::OBJ_ENABLE) {
            self.render_sprites(ly, &bg_colors, &mut line);
        }

        let start = usize::from(ly) * SCREEN_WIDTH;
        self.back[start..start + SCREEN_WIDTH].copy_from_slice(&line);
    }

    fn render_background(&self, ly: u8, colors: &mut [u8; SCREEN_WIDTH]) {
        let map = if self.lcdc.contains(Lcdc::BG_MAP) { 0x1C00 } else { 0x1800 };
        let y = ly.wrapping_add(self.scy);
        for (x, color) in colors.iter_mut().enumerate() {
            *color = self.map_pixel(map, (x as u8).wrapping_add(self.scx), y);
        }
    }

    fn render_window(&mut self, ly: u8, colors: &mut [u8; SCREEN_WIDTH]) {
        if !self.lcdc.contains(Lcdc::WINDOW_ENABLE) || ly < self.wy || self.wx > 166 {
            return;
        }

        let map = if self.lcdc.contains(Lcdc::WINDOW_MAP) { 0x1C00 } else { 0x1800 };
        let left = i16::from(self.wx) - 7;
        let y = self.window_line;
        for screen_x in left.max(0)..SCREEN_WIDTH as i16 {
            let x = (screen_x - left) as u8;
            colors[screen_x as usize] = self.map_pixel(map, x, y);
        }
        self.window_line = self.window_line.wrapping_add(1);
    }

    /// The first ten sprites in OAM order that overlap `ly`, sorted into
    /// drawing priority: lower X first, then lower OAM index.
    fn sprites_on_line(&self, ly: u8, height: i16) -> Vec<Sprite> {
        let mut sprites: Vec<Sprite> = (0..40)
            .map(|index| {
                let base = (index * 4) as u16;
                Sprite {
                    y: i16::from(self.oam.read(base)) - 16,
                    x: i16::from(self.oam.read(base + 1)) - 8,
                    tile: self.oam.read(base + 2),
                    attrs: SpriteAttrs::from_bits_truncate(self.oam.read(base + 3)),
                    index,
                }
            })
            .filter(|sprite| {
                let line = i16::from(ly);
                line >= sprite.y && line < sprite.y + height
            })
            .take(MAX_SPRITES_PER_LINE)
            .collect();
        sprites.sort_by_key(|sprite| (sprite.x, sprite.index));
        sprites
    }

    fn render_sprites(&self, ly: u8, bg_colors: &[u8; SCREEN_WIDTH], line: &mut [u8; SCREEN_WIDTH]) {
        let tall = self.lcdc.contains(Lcdc::OBJ_SIZE);
        let height: i16 = if tall { 16 } else { 8 };
        // Set once a higher-priority sprite owns the pixel, even if the
        // background then wins over it.
        let mut claimed = [false; SCREEN_WIDTH];

        for sprite in self.sprites_on_line(ly, height) {
            let mut row = i16::from(ly) - sprite.y;
            if sprite.attrs.contains(SpriteAttrs::FLIP_Y) {
                row = height - 1 - row;
            }
            let tile = if tall { sprite.tile & 0xFE } else { sprite.tile };
            let row_offset = u16::from(tile) * 16 + row as u16 * 2;
            let palette = if sprite.attrs.contains(SpriteAttrs::PALETTE1) {
                self.obp1
            } else {
                self.obp0
            };

            for col in 0..8i16 {
                let screen_x = sprite.x + col;
                if !(0..SCREEN_WIDTH as i16).contains(&screen_x) {
                    continue;
                }
                let x = screen_x as usize;
                if claimed[x] {
                    continue;
                }
                let bit = if sprite.attrs.contains(SpriteAttrs::FLIP_X) {
                    col as u8
                } else {
                    7 - col as u8
                };
                let color = self.tile_pixel(row_offset, bit);
                if color == 0 {
                    continue;
                }
                claimed[x] = true;
                if sprite.attrs.contains(SpriteAttrs::BEHIND_BG) && bg_colors[x] != 0 {
                    continue;
                }
                line[x] = shade(palette, color);
            }
        }
    }
}
