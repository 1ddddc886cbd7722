mod cli;
mod constants;
mod drawing;
mod input;
mod sdl_setup;

use clap::Parser;
use input::DebugKeyState;
use pebble_core::GameBoy;
use std::thread;
use std::time::Instant;

fn main() -> Result<(), String> {
    env_logger::init();
    let args = cli::Args::parse();

    if !args.skip_boot_rom {
        log::warn!("boot ROM execution is not implemented; starting from the post-boot register state regardless");
    }

    let rom_data = std::fs::read(&args.rom).map_err(|e| format!("failed to read ROM '{}': {e}", args.rom.display()))?;
    let mut gb = GameBoy::new(&rom_data).map_err(|e| e.to_string())?;
    log::info!("loaded ROM '{}' ({} bytes)", args.rom.display(), rom_data.len());

    let window_title = format!(
        "pebble - {}",
        args.rom.file_name().map(|n| n.to_string_lossy()).unwrap_or_default()
    );
    let mut sdl_context = sdl_setup::init_sdl(&window_title, args.scale, args.debug)?;

    let mut debug_keys = DebugKeyState::default();

    'main_loop: loop {
        let frame_start = Instant::now();

        if input::handle_input(&mut sdl_context.event_pump, &mut gb, &mut debug_keys) {
            break 'main_loop;
        }

        if let Err(e) = gb.run_frame() {
            log::error!("emulation halted: {e}");
            break 'main_loop;
        }

        sdl_context.canvas.set_draw_color(constants::DEBUG_BACKGROUND_COLOR);
        sdl_context.canvas.clear();

        drawing::draw_gb_screen(&mut sdl_context.canvas, gb.frame_buffer(), args.scale, 0, 0);

        if args.debug {
            let (gb_w, _) = constants::window_dims(args.scale, false);
            let side_x = gb_w as i32 + constants::PADDING as i32;

            drawing::draw_vram_debug(&mut sdl_context.canvas, gb.vram_debug_buffer(), side_x, 0);

            let vram_h = pebble_core::ppu::VRAM_DEBUG_HEIGHT as i32 * constants::VRAM_DEBUG_SCALE as i32;
            let input_y = vram_h + constants::PADDING as i32;
            drawing::draw_input_debug(&mut sdl_context.canvas, &debug_keys, side_x, input_y);

            log::trace!("{}", gb.disassemble_current());
        }

        sdl_context.canvas.present();

        let elapsed = frame_start.elapsed();
        if elapsed < constants::TARGET_FRAME_DURATION {
            thread::sleep(constants::TARGET_FRAME_DURATION - elapsed);
        }
    }

    Ok(())
}
