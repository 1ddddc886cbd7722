//! Canvas rendering for the main screen and the `--debug` side panes.

use crate::constants;
use crate::input::DebugKeyState;
use pebble_core::ppu::{GB_HEIGHT, GB_WIDTH, VRAM_DEBUG_HEIGHT, VRAM_DEBUG_WIDTH};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Draws the core's already-finished RGB frame buffer, scaled by `scale`.
pub fn draw_gb_screen(canvas: &mut Canvas<Window>, frame_buffer: &[u8], scale: u32, target_x: i32, target_y: i32) {
    for y in 0..GB_HEIGHT {
        for x in 0..GB_WIDTH {
            let index = (y * GB_WIDTH + x) * 3;
            let color = sdl2::pixels::Color::RGB(frame_buffer[index], frame_buffer[index + 1], frame_buffer[index + 2]);
            canvas.set_draw_color(color);
            let rect = Rect::new(
                target_x + (x as u32 * scale) as i32,
                target_y + (y as u32 * scale) as i32,
                scale,
                scale,
            );
            let _ = canvas.fill_rect(rect);
        }
    }
}

/// Draws the VRAM tile-sheet debug view. Unlike the main screen, this buffer
/// holds raw shade indices (0-3) rather than decoded RGB, so it still needs a
/// palette lookup.
pub fn draw_vram_debug(canvas: &mut Canvas<Window>, vram_buffer: &[u8], target_x: i32, target_y: i32) {
    for y in 0..VRAM_DEBUG_HEIGHT {
        for x in 0..VRAM_DEBUG_WIDTH {
            let index = y * VRAM_DEBUG_WIDTH + x;
            let shade_index = (vram_buffer[index] % 4) as usize;
            canvas.set_draw_color(constants::DEBUG_PALETTE[shade_index]);
            let rect = Rect::new(
                target_x + (x as u32 * constants::VRAM_DEBUG_SCALE) as i32,
                target_y + (y as u32 * constants::VRAM_DEBUG_SCALE) as i32,
                constants::VRAM_DEBUG_SCALE,
                constants::VRAM_DEBUG_SCALE,
            );
            let _ = canvas.fill_rect(rect);
        }
    }
}

/// Draws the d-pad and action-button held-state indicators.
pub fn draw_input_debug(canvas: &mut Canvas<Window>, state: &DebugKeyState, target_x: i32, target_y: i32) {
    let mut draw_indicator = |pressed: bool, x_offset: i32, y_offset: i32| {
        let color = if pressed {
            constants::DEBUG_INPUT_PRESSED_COLOR
        } else {
            constants::DEBUG_INPUT_RELEASED_COLOR
        };
        canvas.set_draw_color(color);
        let rect = Rect::new(
            target_x + x_offset,
            target_y + y_offset,
            constants::DEBUG_INPUT_BOX_SIZE,
            constants::DEBUG_INPUT_BOX_SIZE,
        );
        let _ = canvas.fill_rect(rect);
    };

    let pad_step = (constants::DEBUG_INPUT_BOX_SIZE + constants::DEBUG_INPUT_PADDING) as i32;

    draw_indicator(state.up, pad_step, 0);
    draw_indicator(state.down, pad_step, pad_step * 2);
    draw_indicator(state.left, 0, pad_step);
    draw_indicator(state.right, pad_step * 2, pad_step);

    let action_x = constants::DPAD_AREA_WIDTH as i32 + constants::PADDING as i32;
    draw_indicator(state.b, action_x, pad_step);
    draw_indicator(state.a, action_x + pad_step, 0);
    draw_indicator(state.select, action_x, pad_step * 2);
    draw_indicator(state.start, action_x + pad_step, pad_step * 2);
}
