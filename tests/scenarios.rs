//! Cross-module end-to-end scenarios, each lifted verbatim from the
//! documented testable-properties worked examples: ROM-bank switching,
//! RAM-bank gating, DIV reset, TIMA overflow, the EI instruction delay, and
//! background palette decoding.

use pebble_core::bus::Bus;
use pebble_core::cartridge::Cartridge;
use pebble_core::memory_map::*;
use pebble_core::GameBoy;

fn mbc1_rom(banks: usize) -> Vec<u8> {
    let mut rom = vec![0u8; banks * ROM_BANK_N_SIZE];
    rom[0x0147] = 0x01; // MBC1, no RAM, no battery
    rom[0x0148] = (banks / 2).trailing_zeros() as u8;
    rom[0x0149] = 0x00;
    rom
}

fn mbc1_rom_with_ram(banks: usize) -> Vec<u8> {
    let mut rom = mbc1_rom(banks);
    rom[0x0147] = 0x03; // MBC1+RAM+BATTERY
    rom[0x0149] = 0x02; // 8 KiB RAM
    rom
}

fn plain_rom() -> Vec<u8> {
    vec![0u8; 0x8000]
}

#[test]
fn rom_bank_switch() {
    let mut rom = mbc1_rom(8);
    rom[5 * ROM_BANK_N_SIZE] = 0xAB;
    let mut bus = Bus::new(Cartridge::load(&rom).unwrap());

    bus.write_byte(0x2000, 0x05);

    assert_eq!(bus.read_byte(0x4000), 0xAB);
}

#[test]
fn ram_bank_gate() {
    let rom = mbc1_rom_with_ram(2);
    let mut bus = Bus::new(Cartridge::load(&rom).unwrap());

    bus.write_byte(0x0000, 0x00);
    bus.write_byte(0xA000, 0x42);
    let gated = bus.read_byte(0xA000);
    assert!(gated == 0x00 || gated == 0xFF);
    assert_ne!(gated, 0x42);

    bus.write_byte(0x0000, 0x0A);
    bus.write_byte(0xA000, 0x42);
    assert_eq!(bus.read_byte(0xA000), 0x42);
}

#[test]
fn div_reset() {
    let mut bus = Bus::new(Cartridge::load(&plain_rom()).unwrap());

    bus.write_byte(DIV_ADDR, 0x99);
    assert_eq!(bus.read_byte(DIV_ADDR), 0x00);

    bus.tick(255);
    assert_eq!(bus.read_byte(DIV_ADDR), 0x00);
}

#[test]
fn tima_overflow() {
    let mut bus = Bus::new(Cartridge::load(&plain_rom()).unwrap());

    bus.write_byte(TAC_ADDR, 0x05); // enabled, period 16
    bus.write_byte(TMA_ADDR, 0x37);
    bus.write_byte(TIMA_ADDR, 0xFF);

    bus.tick(16);

    assert_eq!(bus.read_byte(TIMA_ADDR), 0x37);
    assert_ne!(bus.read_byte(IF_ADDR) & (1 << TIMER_INTERRUPT_BIT), 0);
}

#[test]
fn ei_delay() {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100] = 0xF3; // DI
    rom[0x0101] = 0xFB; // EI
    rom[0x0102] = 0x00; // NOP
    rom[0x0103] = 0x00; // NOP

    let mut gb = GameBoy::new(&rom).unwrap();

    gb.step_instruction().unwrap(); // DI
    assert!(!gb.cpu.ime);
    gb.step_instruction().unwrap(); // EI
    assert!(!gb.cpu.ime);
    gb.step_instruction().unwrap(); // NOP
    assert!(!gb.cpu.ime);
    gb.step_instruction().unwrap(); // NOP
    assert!(gb.cpu.ime);
}

#[test]
fn palette_decodes_color_id_two_to_mid_gray() {
    let mut bus = Bus::new(Cartridge::load(&plain_rom()).unwrap());

    bus.write_byte(LCDC_ADDR, 0x91); // LCD on, BG on, unsigned tile addressing, 9800 map
    bus.write_byte(BGP_ADDR, 0xE4); // identity palette: id -> shade of same value

    // Background map entry (0,0) already points at tile 0 (memory starts zeroed).
    // Tile 0, row 1 (the row rendered for LY=1 with SCY=0), column 0 pixel: color id 2.
    bus.write_byte(0x8002, 0x00);
    bus.write_byte(0x8003, 0x80);

    bus.tick(456); // one full scanline: LY advances 0 -> 1 and row 1 is rasterized

    let frame = bus.ppu.frame_buffer();
    let idx = GB_WIDTH_BYTES * 3; // row 1, column 0
    assert_eq!(&frame[idx..idx + 3], &[0x77, 0x77, 0x77]);
}

const GB_WIDTH_BYTES: usize = 160;
