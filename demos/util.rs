use std::error;

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::video;

pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 600;

/// What happened since the last frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct Input {
    /// The window was closed or Escape was pressed.
    pub quit: bool,

    /// Space was pressed.
    pub toggle: bool,

    /// The new drawable size, if the window was resized.
    pub resized: Option<(u32, u32)>,
}

/// A window with a current OpenGL 3.3 core context.
pub struct Window {
    events: sdl2::EventPump,
    // Dropped before the window it belongs to.
    _context: video::GLContext,
    window: video::Window,
    _video: sdl2::VideoSubsystem,
    _sdl: sdl2::Sdl,
}

impl Window {
    pub fn open(title: &str) -> Result<(Self, glprog::gl::Backend), Box<dyn error::Error>> {
        let sdl = sdl2::init()?;
        let video = sdl.video()?;
        {
            let attr = video.gl_attr();
            attr.set_context_profile(video::GLProfile::Core);
            attr.set_context_version(3, 3);
        }
        let window = video
            .window(title, WIDTH, HEIGHT)
            .position_centered()
            .resizable()
            .opengl()
            .build()?;
        let context = window.gl_create_context()?;
        window.gl_make_current(&context)?;
        if let Err(error) = video.gl_set_swap_interval(video::SwapInterval::VSync) {
            eprintln!("warning: vsync unavailable: {}", error);
        }
        let backend = glprog::init(|sym| video.gl_get_proc_address(sym) as *const _);
        let events = sdl.event_pump()?;
        let window = Window {
            events,
            _context: context,
            window,
            _video: video,
            _sdl: sdl,
        };
        Ok((window, backend))
    }

    pub fn poll(&mut self) -> Input {
        let mut input = Input::default();
        for event in self.events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown { keycode: Some(Keycode::ESCAPE), .. } => input.quit = true,
                Event::KeyDown { keycode: Some(Keycode::SPACE), repeat: false, .. } => {
                    input.toggle = true;
                }
                Event::Window { win_event: WindowEvent::Resized(..), .. } => {
                    input.resized = Some(self.window.drawable_size());
                }
                _ => {}
            }
        }
        input
    }

    pub fn swap_buffers(&self) {
        self.window.gl_swap_window();
    }
}
