use super::header::{header_checksum, NINTENDO_LOGO};
use super::*;
use crate::CYCLES_PER_SECOND;
use once_cell::sync::OnceCell;

/// Offset inside every bank where the fixtures store the bank number.
const MARKER: usize = 0x2000;

/// Build a ROM image with a valid header. Every bank carries its own number
/// (low byte, then high byte) at `MARKER`.
fn build_rom(cartridge_type: u8, rom_code: u8, ram_code: u8) -> Vec<u8> {
    let size = 0x8000usize << rom_code;
    let mut rom = vec![0u8; size];
    for bank in 0..size / ROM_BANK_SIZE {
        rom[bank * ROM_BANK_SIZE + MARKER] = bank as u8;
        rom[bank * ROM_BANK_SIZE + MARKER + 1] = (bank >> 8) as u8;
    }
    rom[0x104..0x134].copy_from_slice(&NINTENDO_LOGO);
    rom[0x134..0x13C].copy_from_slice(b"TESTCART");
    rom[0x147] = cartridge_type;
    rom[0x148] = rom_code;
    rom[0x149] = ram_code;
    rom[0x14D] = header_checksum(&rom);
    rom
}

static MBC1_2MIB: OnceCell<Vec<u8>> = OnceCell::new();

fn mbc1_2mib() -> &'static [u8] {
    MBC1_2MIB.get_or_init(|| build_rom(0x03, 0x06, 0x03))
}

fn romx_bank(cart: &Cartridge) -> u16 {
    let addr = 0x4000 + MARKER as u16;
    u16::from(cart.read_rom(addr)) | (u16::from(cart.read_rom(addr + 1)) << 8)
}

fn rom0_bank(cart: &Cartridge) -> u16 {
    let addr = MARKER as u16;
    u16::from(cart.read_rom(addr)) | (u16::from(cart.read_rom(addr + 1)) << 8)
}

#[test]
fn header_fields_decode() {
    let rom = build_rom(0x13, 0x05, 0x03);
    let cart = Cartridge::from_rom(&rom).unwrap();
    let header = cart.header();
    assert_eq!(header.title, "TESTCART");
    assert!(header.logo_matches());
    assert!(header.header_checksum_matches());
    assert_eq!(header.rom_size().unwrap(), 1024 * 1024);
    assert_eq!(header.ram_size().unwrap(), 0x8000);
    assert_eq!(cart.kind().controller, ControllerKind::Mbc3);
    assert!(cart.has_battery());
    assert!(cart.rtc().is_none());
}

#[test]
fn header_checksum_mismatch_is_detected_but_loads() {
    let mut rom = build_rom(0x00, 0x00, 0x00);
    rom[0x14D] ^= 0xFF;
    let cart = Cartridge::from_rom(&rom).unwrap();
    assert!(!cart.header().header_checksum_matches());
}

#[test]
fn unsupported_kind_is_rejected() {
    let rom = build_rom(0x20, 0x00, 0x00);
    assert_eq!(
        Cartridge::from_rom(&rom).err(),
        Some(LoadError::UnsupportedCartridgeKind(0x20))
    );
}

#[test]
fn image_shorter_than_header_is_rejected() {
    assert_eq!(
        Cartridge::from_rom(&[0; 0x100]).err(),
        Some(LoadError::RomTooSmall { len: 0x100 })
    );
}

#[test]
fn short_image_is_padded_to_declared_size() {
    let mut rom = build_rom(0x01, 0x02, 0x00);
    rom.truncate(0x8000);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x2000, 3);
    assert_eq!(cart.read_rom(0x4000 + MARKER as u16), 0xFF);
    cart.write_rom(0x2000, 1);
    assert_eq!(romx_bank(&cart), 1);
}

#[test]
fn rom_only_reads_flat_and_ignores_writes() {
    let mut rom = build_rom(0x00, 0x00, 0x00);
    rom[0x7FFF] = 0x5A;
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x2000, 0x01);
    assert_eq!(cart.read_rom(0x7FFF), 0x5A);
    assert_eq!(romx_bank(&cart), 1);
    // No RAM fitted: the bus floats.
    assert_eq!(cart.peek_sram(0xA000), 0xFF);
    assert!(cart.ram().is_empty());
}

#[test]
fn rom_ram_passes_ram_through() {
    let rom = build_rom(0x08, 0x00, 0x02);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_sram(0xA123, 0x77);
    assert_eq!(cart.read_sram(0xA123), 0x77);
}

#[test]
fn mbc1_bank_zero_promotes_to_one() {
    let mut cart = Cartridge::from_rom(mbc1_2mib()).unwrap();
    cart.write_rom(0x2000, 0x00);
    assert_eq!(romx_bank(&cart), 1);
    cart.write_rom(0x2000, 0x05);
    assert_eq!(romx_bank(&cart), 5);
}

#[test]
fn mbc1_secondary_bits_reach_bank_127() {
    let mut cart = Cartridge::from_rom(mbc1_2mib()).unwrap();
    cart.write_rom(0x6000, 0x00);
    cart.write_rom(0x2000, 31);
    cart.write_rom(0x4000, 3);
    assert_eq!(romx_bank(&cart), 127);
    assert_eq!(rom0_bank(&cart), 0);
}

#[test]
fn mbc1_mode1_remaps_bank0_region() {
    let mut cart = Cartridge::from_rom(mbc1_2mib()).unwrap();
    cart.write_rom(0x4000, 2);
    assert_eq!(rom0_bank(&cart), 0);
    cart.write_rom(0x6000, 0x01);
    assert_eq!(rom0_bank(&cart), 64);
    assert_eq!(romx_bank(&cart), 65);
}

#[test]
fn mbc1_bank_wraps_on_small_rom() {
    // 256 KiB: 16 banks.
    let rom = build_rom(0x01, 0x03, 0x00);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x2000, 0x11);
    assert_eq!(romx_bank(&cart), 1);
}

#[test]
fn mbc1_ram_gate() {
    let mut cart = Cartridge::from_rom(mbc1_2mib()).unwrap();

    cart.write_sram(0xA000, 0x42);
    assert_eq!(cart.peek_sram(0xA000), 0xFF);
    let reads: Vec<u8> = (0..64).map(|_| cart.read_sram(0xA000)).collect();
    assert!(reads.iter().any(|&value| value != 0x42));

    cart.write_rom(0x0000, 0x0A);
    assert_eq!(cart.read_sram(0xA000), 0x00, "write with the gate closed was dropped");
    cart.write_sram(0xA000, 0x42);
    assert_eq!(cart.read_sram(0xA000), 0x42);

    // Only the low nibble matters.
    cart.write_rom(0x0000, 0x00);
    assert_eq!(cart.peek_sram(0xA000), 0xFF);
    cart.write_rom(0x1FFF, 0xFA);
    assert_eq!(cart.read_sram(0xA000), 0x42);
}

#[test]
fn mbc1_ram_banks_only_switch_in_mode1() {
    let mut cart = Cartridge::from_rom(mbc1_2mib()).unwrap();
    cart.write_rom(0x0000, 0x0A);
    cart.write_sram(0xA000, 0x11);
    cart.write_rom(0x4000, 0x02);
    assert_eq!(cart.read_sram(0xA000), 0x11);

    cart.write_rom(0x6000, 0x01);
    cart.write_sram(0xA000, 0x22);
    cart.write_rom(0x6000, 0x00);
    assert_eq!(cart.read_sram(0xA000), 0x11);
    assert_eq!(cart.ram()[2 * RAM_BANK_SIZE], 0x22);
}

#[test]
fn mbc2_uses_address_bit_8() {
    let rom = build_rom(0x06, 0x03, 0x00);
    let mut cart = Cartridge::from_rom(&rom).unwrap();

    // Bit 8 clear: RAM gate, not the bank register.
    cart.write_rom(0x0000, 0x0A);
    assert_eq!(romx_bank(&cart), 1);

    cart.write_rom(0x0100, 0x07);
    assert_eq!(romx_bank(&cart), 7);
    cart.write_rom(0x2100, 0x00);
    assert_eq!(romx_bank(&cart), 1);
}

#[test]
fn mbc2_ram_is_four_bits_wide_and_mirrors() {
    let rom = build_rom(0x06, 0x03, 0x00);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x0000, 0x0A);
    cart.write_sram(0xA005, 0xAB);
    assert_eq!(cart.read_sram(0xA005), 0xFB);
    assert_eq!(cart.read_sram(0xA205), 0xFB);
    assert_eq!(cart.ram().len(), 0x200);
    assert_eq!(cart.ram()[5], 0x0B);
}

#[test]
fn mbc3_rom_bank_is_seven_bits() {
    let rom = build_rom(0x11, 0x06, 0x00);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x2000, 0x00);
    assert_eq!(romx_bank(&cart), 1);
    cart.write_rom(0x2000, 0xFF);
    assert_eq!(romx_bank(&cart), 127);
}

#[test]
fn mbc3_ram_banks() {
    let rom = build_rom(0x13, 0x02, 0x03);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x0000, 0x0A);
    for bank in 0..4u8 {
        cart.write_rom(0x4000, bank);
        cart.write_sram(0xA010, 0x30 + bank);
    }
    cart.write_rom(0x4000, 0x01);
    assert_eq!(cart.read_sram(0xA010), 0x31);
    assert_eq!(cart.ram()[3 * RAM_BANK_SIZE + 0x10], 0x33);
}

fn rtc_cart() -> Cartridge {
    let rom = build_rom(0x10, 0x02, 0x03);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x0000, 0x0A);
    cart
}

fn latch(cart: &mut Cartridge) {
    cart.write_rom(0x6000, 0x00);
    cart.write_rom(0x6000, 0x01);
}

fn read_rtc(cart: &mut Cartridge, select: u8) -> u8 {
    cart.write_rom(0x4000, select);
    cart.read_sram(0xA000)
}

fn write_rtc(cart: &mut Cartridge, select: u8, value: u8) {
    cart.write_rom(0x4000, select);
    cart.write_sram(0xA000, value);
}

#[test]
fn mbc3_rtc_reads_latched_snapshot() {
    let mut cart = rtc_cart();
    cart.tick(3 * CYCLES_PER_SECOND);
    assert_eq!(read_rtc(&mut cart, 0x08), 0, "not latched yet");

    latch(&mut cart);
    assert_eq!(read_rtc(&mut cart, 0x08), 3);

    cart.tick(2 * CYCLES_PER_SECOND);
    assert_eq!(read_rtc(&mut cart, 0x08), 3);

    // A lone 1 without the preceding 0 does not latch.
    cart.write_rom(0x6000, 0x01);
    assert_eq!(read_rtc(&mut cart, 0x08), 3);

    latch(&mut cart);
    assert_eq!(read_rtc(&mut cart, 0x08), 5);
}

#[test]
fn mbc3_rtc_carries_into_minutes_and_hours() {
    let mut cart = rtc_cart();
    write_rtc(&mut cart, 0x08, 59);
    write_rtc(&mut cart, 0x09, 59);
    write_rtc(&mut cart, 0x0A, 5);
    cart.tick(CYCLES_PER_SECOND);
    latch(&mut cart);
    assert_eq!(read_rtc(&mut cart, 0x08), 0);
    assert_eq!(read_rtc(&mut cart, 0x09), 0);
    assert_eq!(read_rtc(&mut cart, 0x0A), 6);
}

#[test]
fn mbc3_rtc_halt_stops_the_clock() {
    let mut cart = rtc_cart();
    write_rtc(&mut cart, 0x0C, 0x40);
    cart.tick(10 * CYCLES_PER_SECOND);
    latch(&mut cart);
    assert_eq!(read_rtc(&mut cart, 0x08), 0);

    write_rtc(&mut cart, 0x0C, 0x00);
    cart.tick(CYCLES_PER_SECOND);
    latch(&mut cart);
    assert_eq!(read_rtc(&mut cart, 0x08), 1);
}

#[test]
fn mbc3_rtc_day_counter_overflow_sets_carry() {
    let mut cart = rtc_cart();
    write_rtc(&mut cart, 0x08, 59);
    write_rtc(&mut cart, 0x09, 59);
    write_rtc(&mut cart, 0x0A, 23);
    write_rtc(&mut cart, 0x0B, 0xFF);
    write_rtc(&mut cart, 0x0C, 0x01);
    cart.tick(CYCLES_PER_SECOND);
    latch(&mut cart);
    assert_eq!(read_rtc(&mut cart, 0x0B), 0x00);
    assert_eq!(read_rtc(&mut cart, 0x0C), 0x80);

    let live = cart.rtc().unwrap().live();
    assert_eq!(live.day(), 0);
    assert_eq!(live.hours, 0);
}

#[test]
fn mbc3_rtc_register_masks() {
    let mut cart = rtc_cart();
    write_rtc(&mut cart, 0x0A, 0xFF);
    write_rtc(&mut cart, 0x0C, 0xFF);
    assert_eq!(read_rtc(&mut cart, 0x0A), 0x1F);
    assert_eq!(read_rtc(&mut cart, 0x0C), 0xC1);
}

#[test]
fn mbc5_nine_bit_bank_reaches_511() {
    let rom = build_rom(0x19, 0x08, 0x00);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x2000, 0xFF);
    cart.write_rom(0x3000, 0x01);
    assert_eq!(romx_bank(&cart), 511);

    cart.write_rom(0x3000, 0x00);
    assert_eq!(romx_bank(&cart), 255);
}

#[test]
fn mbc5_bank_zero_promotes_to_one() {
    let rom = build_rom(0x19, 0x02, 0x00);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x2000, 0x00);
    cart.write_rom(0x3000, 0x00);
    assert_eq!(romx_bank(&cart), 1);
    assert_eq!(rom0_bank(&cart), 0);

    cart.write_rom(0x2000, 0x03);
    assert_eq!(romx_bank(&cart), 3);
}

#[test]
fn rom_only_ignores_declared_ram() {
    let rom = build_rom(0x00, 0x00, 0x02);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    assert!(cart.ram().is_empty());
    cart.write_sram(0xA000, 0x42);
    assert_eq!(cart.peek_sram(0xA000), 0xFF);
}

#[test]
fn sram_access_below_a000_wraps_into_the_window() {
    let rom = build_rom(0x08, 0x00, 0x02);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_sram(0x0001, 0x5A);
    assert_eq!(cart.peek_sram(0xA001), 0x5A);
    assert_eq!(cart.read_sram(0x2001), 0x5A);

    let rom = build_rom(0x1B, 0x02, 0x03);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x0000, 0x0A);
    cart.write_sram(0x0000, 0x77);
    assert_eq!(cart.peek_sram(0xA000), 0x77);
    assert_eq!(cart.read_sram(0x8000), 0x77);
}

#[test]
fn mbc5_rumble_gate_needs_full_byte() {
    let rom = build_rom(0x1A, 0x02, 0x03);
    let mut plain = Cartridge::from_rom(&rom).unwrap();
    plain.write_rom(0x0000, 0x1A);
    plain.write_sram(0xA000, 0x99);
    assert_eq!(plain.peek_sram(0xA000), 0x99);

    let rom = build_rom(0x1D, 0x02, 0x03);
    let mut rumble = Cartridge::from_rom(&rom).unwrap();
    rumble.write_rom(0x0000, 0x1A);
    rumble.write_sram(0xA000, 0x99);
    assert_eq!(rumble.peek_sram(0xA000), 0xFF);

    rumble.write_rom(0x0000, 0x0A);
    rumble.write_sram(0xA000, 0x99);
    assert_eq!(rumble.peek_sram(0xA000), 0x99);
}

#[test]
fn mbc5_rumble_motor_bit() {
    let rom = build_rom(0x1D, 0x02, 0x03);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x0000, 0x0A);
    cart.write_sram(0xA000, 0x44);

    cart.write_rom(0x4000, 0x08);
    assert!(cart.rumble_active());
    // Motor bit is not part of the bank number.
    assert_eq!(cart.read_sram(0xA000), 0x44);

    cart.write_rom(0x4000, 0x00);
    assert!(!cart.rumble_active());
}

#[test]
fn battery_ram_round_trip() {
    let rom = build_rom(0x03, 0x02, 0x02);
    let mut cart = Cartridge::from_rom(&rom).unwrap();
    cart.write_rom(0x0000, 0x0A);
    cart.write_sram(0xA100, 0x5C);
    let save = cart.ram().to_vec();

    let mut restored = Cartridge::from_rom(&rom).unwrap();
    restored.load_ram(&save);
    restored.write_rom(0x0000, 0x0A);
    assert_eq!(restored.read_sram(0xA100), 0x5C);
}
