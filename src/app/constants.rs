use pebble_core::ppu::{GB_HEIGHT, GB_WIDTH, VRAM_DEBUG_HEIGHT, VRAM_DEBUG_WIDTH};
use sdl2::pixels::Color;
use std::time::Duration;

pub const TARGET_FPS: u32 = 60;
pub const TARGET_FRAME_DURATION: Duration = Duration::from_nanos(1_000_000_000u64 / TARGET_FPS as u64);

pub const PADDING: u32 = 10;
pub const DEBUG_BACKGROUND_COLOR: Color = Color::RGB(20, 20, 20);

pub const VRAM_DEBUG_SCALE: u32 = 2;

pub const DEBUG_INPUT_BOX_SIZE: u32 = 14;
pub const DEBUG_INPUT_PADDING: u32 = 4;
pub const DEBUG_INPUT_PRESSED_COLOR: Color = Color::RGB(50, 205, 50);
pub const DEBUG_INPUT_RELEASED_COLOR: Color = Color::RGB(70, 70, 70);
pub const DPAD_AREA_WIDTH: u32 = DEBUG_INPUT_BOX_SIZE * 3 + DEBUG_INPUT_PADDING * 2;
pub const DPAD_AREA_HEIGHT: u32 = DEBUG_INPUT_BOX_SIZE * 3 + DEBUG_INPUT_PADDING * 2;
pub const BUTTONS_AREA_WIDTH: u32 = DEBUG_INPUT_BOX_SIZE * 2 + DEBUG_INPUT_PADDING;
pub const INPUT_DEBUG_AREA_WIDTH: u32 = DPAD_AREA_WIDTH + PADDING + BUTTONS_AREA_WIDTH;

/// VRAM tile-sheet debug palette: plain grayscale, distinct from the
/// in-game green-tinted `PALETTE` so the two views are easy to tell apart.
pub const DEBUG_PALETTE: [Color; 4] = [
    Color::RGB(0xFF, 0xFF, 0xFF),
    Color::RGB(0xAA, 0xAA, 0xAA),
    Color::RGB(0x55, 0x55, 0x55),
    Color::RGB(0x00, 0x00, 0x00),
];

/// Computes the window size for the given screen scale, widening to fit the
/// VRAM tile viewer and input indicators when `--debug` is set.
pub fn window_dims(scale: u32, debug: bool) -> (u32, u32) {
    let gb_w = GB_WIDTH as u32 * scale;
    let gb_h = GB_HEIGHT as u32 * scale;
    if !debug {
        return (gb_w, gb_h);
    }
    let vram_w = VRAM_DEBUG_WIDTH as u32 * VRAM_DEBUG_SCALE;
    let vram_h = VRAM_DEBUG_HEIGHT as u32 * VRAM_DEBUG_SCALE;
    let side_col_width = vram_w.max(INPUT_DEBUG_AREA_WIDTH);
    let side_col_height = vram_h + PADDING + DPAD_AREA_HEIGHT;
    let width = gb_w + PADDING + side_col_width;
    let height = gb_h.max(side_col_height);
    (width, height)
}
