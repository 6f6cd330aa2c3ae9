use bitflags::bitflags;
use sdl2;
use sdl2::event::Event;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, TextureCreator, WindowCanvas};
use sdl2::video::WindowContext;

pub use sdl2::keyboard::Keycode;

use crate::pixels::PixelBuffer;

pub enum IoEvents {
    Quit,
    KeyDown(Keycode),
    KeyUp(Keycode),
}

bitflags! {
    /// SDL_RendererFlags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RendererFlags: u32 {
        const SOFTWARE = 0x0000_0001;
        const ACCELERATED = 0x0000_0002;
        const PRESENTVSYNC = 0x0000_0004;
        const TARGETTEXTURE = 0x0000_0008;
    }
}

#[derive(Debug, Clone)]
pub struct RendererInfo {
    pub name: String,
    pub flags: RendererFlags,
    pub texture_formats: usize,
    pub max_texture_width: u32,
    pub max_texture_height: u32,
}

pub struct System {
    pub w: usize,
    pub h: usize,
    pub sdl_context: sdl2::Sdl,
    pub video_subsystem: sdl2::VideoSubsystem,
    pub canvas: WindowCanvas,
    pub texture_creator: TextureCreator<WindowContext>,
    pub screen: Texture,
    pub event_pump: sdl2::EventPump,
    pub events: Vec<IoEvents>,
}

impl System {
    /// Opens a resizable window with a software renderer and a streaming
    /// RGBA8888 texture of `w` x `h` pixels.
    pub fn new(title: &str, w: usize, h: usize) -> Result<System, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = match video_subsystem
            .window(title, w as u32, h as u32)
            .resizable()
            .build()
        {
            Ok(w) => w,
            Err(e) => return Err(format!("Error while building window: {e}")),
        };

        let canvas = match window.into_canvas().software().build() {
            Ok(c) => c,
            Err(e) => return Err(format!("Error while creating software renderer: {e}")),
        };

        let texture_creator = canvas.texture_creator();
        let screen = match texture_creator.create_texture_streaming(
            PixelFormatEnum::RGBA8888,
            w as u32,
            h as u32,
        ) {
            Ok(t) => t,
            Err(e) => return Err(format!("Error while creating screen texture: {e}")),
        };

        let event_pump = sdl_context.event_pump()?;
        log::info!("window {w}x{h} ready, renderer: {}", canvas.info().name);

        Ok(System {
            w,
            h,
            sdl_context,
            video_subsystem,
            canvas,
            texture_creator,
            screen,
            event_pump,
            events: Vec::new(),
        })
    }

    pub fn renderer_info(&self) -> RendererInfo {
        let info = self.canvas.info();
        RendererInfo {
            name: info.name.to_string(),
            flags: RendererFlags::from_bits_truncate(info.flags),
            texture_formats: info.texture_formats.len(),
            max_texture_width: info.max_texture_width,
            max_texture_height: info.max_texture_height,
        }
    }

    /// Drains every pending event into `self.events`.
    pub fn process_io_events(&mut self) -> &[IoEvents] {
        self.events.clear();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => self.events.push(IoEvents::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => self.events.push(IoEvents::KeyDown(k)),
                Event::KeyUp {
                    keycode: Some(k), ..
                } => self.events.push(IoEvents::KeyUp(k)),
                _ => {}
            }
        }
        &self.events
    }

    /// Uploads the whole buffer into the screen texture and presents it.
    pub fn draw_to_screen(&mut self, frame: &PixelBuffer) -> Result<(), String> {
        debug_assert_eq!((frame.width(), frame.height()), (self.w, self.h));

        self.screen
            .update(None, frame.as_bytes(), frame.pitch())
            .map_err(|e| e.to_string())?;
        self.canvas.clear();
        self.canvas.copy(&self.screen, None, None)?;
        self.canvas.present();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_flags_decode_sdl_bits() {
        let flags = RendererFlags::from_bits_truncate(0x1 | 0x8 | 0x100);
        assert!(flags.contains(RendererFlags::SOFTWARE));
        assert!(flags.contains(RendererFlags::TARGETTEXTURE));
        assert!(!flags.contains(RendererFlags::ACCELERATED));
        assert!(!flags.contains(RendererFlags::PRESENTVSYNC));
    }
}
