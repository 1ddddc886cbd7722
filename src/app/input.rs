//! SDL keyboard-to-joypad mapping.
//!
//! The core only knows the spec's fixed key ids (0=Right .. 7=Start); this
//! module owns the SDL `Keycode` bindings and a local held-state snapshot for
//! the `--debug` input indicator pane, since the core's `Joypad` does not
//! expose per-key queries.

use pebble_core::joypad::{KEY_A, KEY_B, KEY_DOWN, KEY_LEFT, KEY_RIGHT, KEY_SELECT, KEY_START, KEY_UP};
use pebble_core::GameBoy;
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

#[derive(Default, Clone, Copy)]
pub struct DebugKeyState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub a: bool,
    pub b: bool,
    pub select: bool,
    pub start: bool,
}

fn map_key(keycode: Keycode) -> Option<u8> {
    match keycode {
        Keycode::Right => Some(KEY_RIGHT),
        Keycode::Left => Some(KEY_LEFT),
        Keycode::Up => Some(KEY_UP),
        Keycode::Down => Some(KEY_DOWN),
        Keycode::Z => Some(KEY_A),
        Keycode::X => Some(KEY_B),
        Keycode::RShift | Keycode::Backspace => Some(KEY_SELECT),
        Keycode::Return => Some(KEY_START),
        _ => None,
    }
}

fn set_debug_bit(state: &mut DebugKeyState, key: u8, pressed: bool) {
    match key {
        KEY_RIGHT => state.right = pressed,
        KEY_LEFT => state.left = pressed,
        KEY_UP => state.up = pressed,
        KEY_DOWN => state.down = pressed,
        KEY_A => state.a = pressed,
        KEY_B => state.b = pressed,
        KEY_SELECT => state.select = pressed,
        KEY_START => state.start = pressed,
        _ => {}
    }
}

/// Polls pending SDL events, forwarding key transitions to the emulator.
/// Returns `true` if the host should quit.
pub fn handle_input(event_pump: &mut EventPump, gb: &mut GameBoy, debug_state: &mut DebugKeyState) -> bool {
    for event in event_pump.poll_iter() {
        match event {
            Event::Quit { .. }
            | Event::KeyDown {
                keycode: Some(Keycode::Escape),
                ..
            } => return true,
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(k) = map_key(key) {
                    gb.key_pressed(k);
                    set_debug_bit(debug_state, k, true);
                }
            }
            Event::KeyUp {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(k) = map_key(key) {
                    gb.key_released(k);
                    set_debug_bit(debug_state, k, false);
                }
            }
            _ => {}
        }
    }
    false
}
