use super::constants::*;

/// Internal PPU timing state that isn't just a mirror of an I/O register.
#[derive(Debug, Clone)]
pub struct PpuState {
    pub(super) scanline_counter: i32,
    pub(super) stat_interrupt_line: bool,
}

impl PpuState {
    pub fn new() -> Self {
        PpuState {
            scanline_counter: DOTS_PER_SCANLINE,
            stat_interrupt_line: false,
        }
    }
}
