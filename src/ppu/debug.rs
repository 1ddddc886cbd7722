use super::constants::*;
use crate::memory_map;

/// Renders VRAM tile data (0x8000-0x97FF) into a debug view buffer, shade
/// index (0-3) per pixel. Used by the `--debug` frontend tile viewer.
pub(super) fn render_vram_debug(vram_debug_buffer: &mut [u8; VRAM_DEBUG_BUFFER_SIZE], mem: &[u8; 0x10000]) {
    for tile_idx in 0..NUM_TILES_TO_SHOW {
        let tile_addr = memory_map::VRAM_START as usize + tile_idx * 16;
        let tile_grid_x = tile_idx % TILES_PER_ROW_DEBUG;
        let tile_grid_y = tile_idx / TILES_PER_ROW_DEBUG;
        let base_pixel_x = tile_grid_x * 8;
        let base_pixel_y = tile_grid_y * 8;

        for y_in_tile in 0..8usize {
            let row_addr = tile_addr + y_in_tile * 2;
            if row_addr + 1 > memory_map::VRAM_END as usize {
                break;
            }
            let byte1 = mem[row_addr];
            let byte2 = mem[row_addr + 1];

            for x_in_tile in 0..8u8 {
                let bit_pos = 7 - x_in_tile;
                let bit1 = (byte1 >> bit_pos) & 1;
                let bit2 = (byte2 >> bit_pos) & 1;
                let color_index = (bit2 << 1) | bit1;

                let pixel_x = base_pixel_x + x_in_tile as usize;
                let pixel_y = base_pixel_y + y_in_tile;
                let buffer_index = pixel_y * VRAM_DEBUG_WIDTH + pixel_x;
                if buffer_index < vram_debug_buffer.len() {
                    vram_debug_buffer[buffer_index] = color_index;
                }
            }
        }
    }
}
