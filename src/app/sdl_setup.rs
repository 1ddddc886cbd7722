use crate::constants;
use sdl2::Sdl;
use sdl2::render::Canvas;
use sdl2::video::Window;

pub struct SdlContext {
    pub sdl: Sdl,
    pub canvas: Canvas<Window>,
    pub event_pump: sdl2::EventPump,
}

pub fn init_sdl(window_title: &str, scale: u32, debug: bool) -> Result<SdlContext, String> {
    log::info!("initializing SDL2 video subsystem");
    let sdl = sdl2::init()?;
    let video_subsystem = sdl.video()?;

    let (window_width, window_height) = constants::window_dims(scale, debug);
    let window = video_subsystem
        .window(window_title, window_width, window_height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    let canvas = window
        .into_canvas()
        .accelerated()
        .present_vsync()
        .build()
        .map_err(|e| e.to_string())?;
    let event_pump = sdl.event_pump()?;

    Ok(SdlContext {
        sdl,
        canvas,
        event_pump,
    })
}
