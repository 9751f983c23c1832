use super::*;
use crate::{CYCLES_PER_FRAME, CYCLES_PER_LINE};

fn lcd_on() -> (Ppu, InterruptController) {
    (Ppu::post_boot(), InterruptController::new())
}

fn pixel(ppu: &Ppu, x: usize, y: usize) -> u8 {
    ppu.frame()[y * SCREEN_WIDTH + x]
}

/// Fill all eight rows of a tile with the same colour id.
fn solid_tile(ppu: &mut Ppu, tile: u16, color: u8) {
    let lo = if color & 0x01 != 0 { 0xFF } else { 0x00 };
    let hi = if color & 0x02 != 0 { 0xFF } else { 0x00 };
    for row in 0..8 {
        ppu.vram_mut().write(tile * 16 + row * 2, lo);
        ppu.vram_mut().write(tile * 16 + row * 2 + 1, hi);
    }
}

fn place_sprite(ppu: &mut Ppu, index: u16, x: u8, y: u8, tile: u8, attrs: u8) {
    let base = index * 4;
    ppu.oam_mut().write(base, y + 16);
    ppu.oam_mut().write(base + 1, x + 8);
    ppu.oam_mut().write(base + 2, tile);
    ppu.oam_mut().write(base + 3, attrs);
}

#[test]
fn one_line_advances_ly_by_one() {
    let (mut ppu, mut interrupts) = lcd_on();
    ppu.update(CYCLES_PER_LINE - 1, &mut interrupts);
    assert_eq!(ppu.ly(), 0);
    ppu.update(1, &mut interrupts);
    assert_eq!(ppu.ly(), 1);
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
}

#[test]
fn phases_follow_oam_draw_hblank() {
    let (mut ppu, mut interrupts) = lcd_on();
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
    ppu.update(OAM_SEARCH_CYCLES, &mut interrupts);
    assert_eq!(ppu.mode(), PpuMode::Draw);
    ppu.update(DRAW_CYCLES, &mut interrupts);
    assert_eq!(ppu.mode(), PpuMode::HBlank);
    assert_eq!(ppu.read_register(io::STAT) & 0x03, 0);
}

#[test]
fn full_frame_of_70224_ticks_raises_one_vblank() {
    let (mut ppu, mut interrupts) = lcd_on();
    let mut vblanks = 0;
    let mut max_ly = 0;
    for _ in 0..CYCLES_PER_FRAME {
        ppu.update(1, &mut interrupts);
        max_ly = max_ly.max(ppu.ly());
        if interrupts.is_requested(Interrupt::VBlank) {
            vblanks += 1;
            interrupts.clear(Interrupt::VBlank);
        }
    }
    assert_eq!(CYCLES_PER_FRAME * 4, 70_224);
    assert_eq!(vblanks, 1);
    assert_eq!(max_ly, LAST_LINE);
    assert_eq!(ppu.ly(), 0);
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
    assert_eq!(ppu.frame_count(), 1);
    assert!(ppu.take_frame_ready());
    assert!(!ppu.take_frame_ready());
}

#[test]
fn vblank_starts_at_line_144() {
    let (mut ppu, mut interrupts) = lcd_on();
    ppu.update(u32::from(VISIBLE_LINES) * CYCLES_PER_LINE, &mut interrupts);
    assert_eq!(ppu.ly(), VISIBLE_LINES);
    assert_eq!(ppu.mode(), PpuMode::VBlank);
    assert!(interrupts.is_requested(Interrupt::VBlank));
}

#[test]
fn hblank_stat_interrupt() {
    let (mut ppu, mut interrupts) = lcd_on();
    ppu.write_register(io::STAT, StatSelect::HBLANK.bits(), &mut interrupts);
    ppu.update(OAM_SEARCH_CYCLES + DRAW_CYCLES - 1, &mut interrupts);
    assert!(!interrupts.is_requested(Interrupt::LcdStat));
    ppu.update(1, &mut interrupts);
    assert!(interrupts.is_requested(Interrupt::LcdStat));
}

#[test]
fn lyc_coincidence_sets_flag_and_interrupt() {
    let (mut ppu, mut interrupts) = lcd_on();
    ppu.write_register(io::LYC, 2, &mut interrupts);
    ppu.write_register(io::STAT, StatSelect::LYC.bits(), &mut interrupts);
    assert_eq!(ppu.read_register(io::STAT) & 0x04, 0);

    ppu.update(2 * CYCLES_PER_LINE, &mut interrupts);
    assert_eq!(ppu.ly(), 2);
    assert_eq!(ppu.read_register(io::STAT) & 0x04, 0x04);
    assert!(interrupts.is_requested(Interrupt::LcdStat));
}

#[test]
fn stat_interrupt_fires_on_rising_edge_only() {
    let (mut ppu, mut interrupts) = lcd_on();
    // LY == LYC == 0 already holds the line high.
    ppu.write_register(io::STAT, (StatSelect::LYC | StatSelect::HBLANK).bits(), &mut interrupts);
    assert!(interrupts.is_requested(Interrupt::LcdStat));
    interrupts.clear(Interrupt::LcdStat);

    // HBlank on the same line does not produce a second edge.
    ppu.update(OAM_SEARCH_CYCLES + DRAW_CYCLES, &mut interrupts);
    assert_eq!(ppu.mode(), PpuMode::HBlank);
    assert!(!interrupts.is_requested(Interrupt::LcdStat));
}

#[test]
fn stat_reads_unused_bit_as_one() {
    let ppu = Ppu::new();
    assert_eq!(ppu.read_register(io::STAT) & 0x80, 0x80);
}

#[test]
fn lcd_off_freezes_timing() {
    let (mut ppu, mut interrupts) = lcd_on();
    ppu.update(5 * CYCLES_PER_LINE + 30, &mut interrupts);
    ppu.write_register(io::LCDC, 0x11, &mut interrupts);
    assert_eq!(ppu.ly(), 0);
    assert_eq!(ppu.mode(), PpuMode::HBlank);

    ppu.update(CYCLES_PER_FRAME, &mut interrupts);
    assert_eq!(ppu.ly(), 0);
    assert!(!interrupts.is_requested(Interrupt::VBlank));

    ppu.write_register(io::LCDC, 0x91, &mut interrupts);
    assert_eq!(ppu.mode(), PpuMode::OamSearch);
    ppu.update(CYCLES_PER_LINE, &mut interrupts);
    assert_eq!(ppu.ly(), 1);
}

#[test]
fn vram_and_oam_accessibility_by_mode() {
    let (mut ppu, mut interrupts) = lcd_on();
    assert!(ppu.vram_accessible());
    assert!(!ppu.oam_accessible());
    ppu.update(OAM_SEARCH_CYCLES, &mut interrupts);
    assert!(!ppu.vram_accessible());
    assert!(!ppu.oam_accessible());
    ppu.update(DRAW_CYCLES, &mut interrupts);
    assert!(ppu.vram_accessible());
    assert!(ppu.oam_accessible());
}

#[test]
fn background_tiles_through_palette() {
    let (mut ppu, mut interrupts) = lcd_on();
    // Tile 0, row 0 uses colour 1; every other row colour 0.
    ppu.vram_mut().write(0, 0xFF);
    ppu.write_register(io::BGP, 0b1110_0100, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    assert_eq!(pixel(&ppu, 0, 0), 1);
    assert_eq!(pixel(&ppu, 159, 8), 1);
    assert_eq!(pixel(&ppu, 0, 1), 0);

    // Remap colour 1 to the darkest shade.
    ppu.write_register(io::BGP, 0b0000_1100, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);
    assert_eq!(pixel(&ppu, 3, 16), 3);
}

#[test]
fn scroll_registers_offset_background() {
    let (mut ppu, mut interrupts) = lcd_on();
    solid_tile(&mut ppu, 1, 2);
    // Map entry (1, 0) uses tile 1.
    ppu.vram_mut().write(0x1801, 1);
    ppu.write_register(io::BGP, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::SCX, 4, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);
    assert_eq!(pixel(&ppu, 3, 0), 0);
    assert_eq!(pixel(&ppu, 4, 0), 2);
    assert_eq!(pixel(&ppu, 11, 0), 2);
    assert_eq!(pixel(&ppu, 12, 0), 0);
}

#[test]
fn window_covers_background_from_wx() {
    let (mut ppu, mut interrupts) = lcd_on();
    solid_tile(&mut ppu, 0, 1);
    solid_tile(&mut ppu, 2, 2);
    for entry in 0..0x400 {
        ppu.vram_mut().write(0x1C00 + entry, 2);
    }
    ppu.write_register(io::BGP, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::WX, 87, &mut interrupts);
    ppu.write_register(io::WY, 10, &mut interrupts);
    let lcdc = Lcdc::LCD_ENABLE | Lcdc::TILE_DATA | Lcdc::BG_WINDOW_ENABLE | Lcdc::WINDOW_ENABLE | Lcdc::WINDOW_MAP;
    ppu.write_register(io::LCDC, lcdc.bits(), &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    assert_eq!(pixel(&ppu, 80, 9), 1);
    assert_eq!(pixel(&ppu, 79, 10), 1);
    assert_eq!(pixel(&ppu, 80, 10), 2);
    assert_eq!(pixel(&ppu, 159, 143), 2);
}

#[test]
fn sprite_drawn_with_object_palette() {
    let (mut ppu, mut interrupts) = lcd_on();
    solid_tile(&mut ppu, 1, 3);
    place_sprite(&mut ppu, 0, 0, 0, 1, 0);
    ppu.write_register(io::OBP0, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::OBP1, 0b0101_0100, &mut interrupts);
    place_sprite(&mut ppu, 1, 20, 0, 1, 0x10);
    ppu.write_register(io::LCDC, 0x93, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    assert_eq!(pixel(&ppu, 0, 0), 3);
    assert_eq!(pixel(&ppu, 7, 7), 3);
    assert_eq!(pixel(&ppu, 8, 0), 0);
    assert_eq!(pixel(&ppu, 20, 0), 1);
}

#[test]
fn behind_bg_sprite_only_shows_over_colour_zero() {
    let (mut ppu, mut interrupts) = lcd_on();
    // Background row 0 is colour 1, the rest colour 0.
    ppu.vram_mut().write(0, 0xFF);
    solid_tile(&mut ppu, 1, 3);
    place_sprite(&mut ppu, 0, 0, 0, 1, 0x80);
    ppu.write_register(io::BGP, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::OBP0, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::LCDC, 0x93, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    assert_eq!(pixel(&ppu, 0, 0), 1);
    assert_eq!(pixel(&ppu, 0, 1), 3);
}

#[test]
fn lower_x_sprite_wins_overlap() {
    let (mut ppu, mut interrupts) = lcd_on();
    solid_tile(&mut ppu, 1, 3);
    solid_tile(&mut ppu, 2, 2);
    place_sprite(&mut ppu, 0, 10, 0, 1, 0);
    place_sprite(&mut ppu, 1, 8, 0, 2, 0);
    ppu.write_register(io::OBP0, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::LCDC, 0x93, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    assert_eq!(pixel(&ppu, 9, 0), 2);
    assert_eq!(pixel(&ppu, 15, 0), 2);
    assert_eq!(pixel(&ppu, 16, 0), 3);
}

#[test]
fn equal_x_sprites_resolve_by_oam_index() {
    let (mut ppu, mut interrupts) = lcd_on();
    solid_tile(&mut ppu, 1, 3);
    solid_tile(&mut ppu, 2, 2);
    place_sprite(&mut ppu, 4, 30, 0, 2, 0);
    place_sprite(&mut ppu, 7, 30, 0, 1, 0);
    ppu.write_register(io::OBP0, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::LCDC, 0x93, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    assert_eq!(pixel(&ppu, 30, 0), 2);
}

#[test]
fn at_most_ten_sprites_per_line() {
    let (mut ppu, mut interrupts) = lcd_on();
    solid_tile(&mut ppu, 1, 3);
    for index in 0..11u16 {
        place_sprite(&mut ppu, index, index as u8 * 10, 0, 1, 0);
    }
    ppu.write_register(io::OBP0, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::LCDC, 0x93, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    assert_eq!(pixel(&ppu, 90, 0), 3);
    assert_eq!(pixel(&ppu, 100, 0), 0);
}

#[test]
fn tall_sprites_and_vertical_flip() {
    let (mut ppu, mut interrupts) = lcd_on();
    // Tile 4 is colour 1, tile 5 colour 2; together they form one 8x16 sprite.
    solid_tile(&mut ppu, 4, 1);
    solid_tile(&mut ppu, 5, 2);
    place_sprite(&mut ppu, 0, 0, 0, 5, 0);
    place_sprite(&mut ppu, 1, 16, 0, 4, 0x40);
    ppu.write_register(io::OBP0, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::LCDC, 0x97, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);

    // Odd tile numbers are rounded down in 8x16 mode.
    assert_eq!(pixel(&ppu, 0, 0), 1);
    assert_eq!(pixel(&ppu, 0, 15), 2);
    assert_eq!(pixel(&ppu, 16, 0), 2);
    assert_eq!(pixel(&ppu, 16, 15), 1);
}

#[test]
fn bg_disabled_renders_blank() {
    let (mut ppu, mut interrupts) = lcd_on();
    solid_tile(&mut ppu, 0, 3);
    ppu.write_register(io::BGP, 0b1110_0100, &mut interrupts);
    ppu.write_register(io::LCDC, 0x90, &mut interrupts);
    ppu.update(CYCLES_PER_FRAME, &mut interrupts);
    assert!(ppu.frame().iter().all(|&shade| shade == 0));
}
