#![allow(dead_code)]

// --- Screen dimensions ---
pub const GB_WIDTH: usize = 160;
pub const GB_HEIGHT: usize = 144;
pub const FRAME_BUFFER_SIZE: usize = GB_WIDTH * GB_HEIGHT * 3;

// --- VRAM debug view ---
pub const TILES_PER_ROW_DEBUG: usize = 16;
pub const NUM_TILES_TO_SHOW: usize = 384;
const VRAM_DEBUG_TILE_HEIGHT: usize = NUM_TILES_TO_SHOW / TILES_PER_ROW_DEBUG;
pub const VRAM_DEBUG_WIDTH: usize = TILES_PER_ROW_DEBUG * 8;
pub const VRAM_DEBUG_HEIGHT: usize = VRAM_DEBUG_TILE_HEIGHT * 8;
pub const VRAM_DEBUG_BUFFER_SIZE: usize = VRAM_DEBUG_WIDTH * VRAM_DEBUG_HEIGHT;

// --- Scanline timing (counts down from DOTS_PER_SCANLINE to 0) ---
pub const DOTS_PER_SCANLINE: i32 = 456;
pub const MODE2_THRESHOLD: i32 = 376;
pub const MODE3_THRESHOLD: i32 = 204;
pub const SCANLINES_PER_FRAME: u8 = 154;

// --- PPU modes (STAT bits 0-1) ---
pub const HBLANK_MODE: u8 = 0;
pub const VBLANK_MODE: u8 = 1;
pub const OAM_SCAN_MODE: u8 = 2;
pub const VRAM_READ_MODE: u8 = 3;

// --- LCDC bit positions (0xFF40) ---
pub const LCDC_BG_WIN_ENABLE_PRIORITY: u8 = 0;
pub const LCDC_OBJ_ENABLE: u8 = 1;
pub const LCDC_OBJ_SIZE: u8 = 2;
pub const LCDC_BG_MAP_AREA: u8 = 3;
pub const LCDC_TILE_DATA_AREA: u8 = 4;
pub const LCDC_WINDOW_ENABLE: u8 = 5;
pub const LCDC_WINDOW_MAP_AREA: u8 = 6;
pub const LCDC_LCD_ENABLE: u8 = 7;

// --- STAT bit positions (0xFF41) ---
pub const STAT_LYC_EQ_LY_FLAG: u8 = 2;
pub const STAT_MODE_0_HBLANK_IE: u8 = 3;
pub const STAT_MODE_1_VBLANK_IE: u8 = 4;
pub const STAT_MODE_2_OAM_IE: u8 = 5;
pub const STAT_LYC_EQ_LY_IE: u8 = 6;

// --- OAM attribute byte bit positions ---
pub const OAM_PALETTE_NUM_DMG: u8 = 4;
pub const OAM_X_FLIP: u8 = 5;
pub const OAM_Y_FLIP: u8 = 6;
pub const OAM_BG_WIN_PRIORITY: u8 = 7;

pub const SHADES: [[u8; 3]; 4] = [
    [0xFF, 0xFF, 0xFF],
    [0xCC, 0xCC, 0xCC],
    [0x77, 0x77, 0x77],
    [0x00, 0x00, 0x00],
];
