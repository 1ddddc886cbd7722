use clap::Parser;
use std::path::PathBuf;

/// Command-line options for the desktop front end.
#[derive(Parser, Debug)]
#[command(name = "pebble", about = "A Game Boy (DMG) emulator core")]
pub struct Args {
    /// Path to a .gb ROM file.
    pub rom: PathBuf,

    /// Skip boot ROM execution and start directly at the post-boot register state.
    #[arg(long, default_value_t = true)]
    pub skip_boot_rom: bool,

    /// Integer scale factor applied to the 160x144 screen.
    #[arg(long, default_value_t = 3)]
    pub scale: u32,

    /// Show the VRAM tile viewer and CPU state pane alongside the screen.
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
