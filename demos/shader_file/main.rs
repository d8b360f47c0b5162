//! An indexed quad whose shader stages are loaded from files. Brightness
//! pulses over time; Space inverts the colors.

extern crate env_logger;
extern crate glprog;
extern crate sdl2;

#[path = "../util.rs"]
mod util;

use std::{error, process, time};

use glprog::{pipeline, DrawCall, Program, VertexArray, Viewport};

const VERTEX_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shader_file/shader.vert");
const FRAGMENT_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/shader_file/shader.frag");

const QUAD: &[[f32; 3]] = &[
    [0.5, 0.5, 0.0],   // top right
    [0.5, -0.5, 0.0],  // bottom right
    [-0.5, -0.5, 0.0], // bottom left
    [-0.5, 0.5, 0.0],  // top left
];

const QUAD_INDICES: &[u32] = &[
    0, 1, 3,
    1, 2, 3,
];

const BACKGROUND: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

fn run() -> Result<(), Box<dyn error::Error>> {
    let (mut window, backend) = util::Window::open("Shader from file")?;
    let program = Program::from_files(&backend, VERTEX_PATH, FRAGMENT_PATH)?;
    for name in &["brightness", "inverted"] {
        if program.uniform_location(name).is_none() {
            eprintln!("warning: uniform `{}` is not active", name);
        }
    }

    let quad = VertexArray::new(&backend, QUAD, Some(QUAD_INDICES));
    let draw_call = DrawCall::elements(&quad);
    Viewport::max(util::WIDTH, util::HEIGHT).apply(&backend);

    let start = time::Instant::now();
    let mut inverted = false;
    loop {
        let input = window.poll();
        if input.quit {
            break;
        }
        if input.toggle {
            inverted = !inverted;
        }
        if let Some((w, h)) = input.resized {
            Viewport::max(w, h).apply(&backend);
        }

        let seconds = start.elapsed().as_secs_f32();
        pipeline::clear(&backend, BACKGROUND);
        program.bind();
        program.set_float("brightness", 0.5 + 0.5 * seconds.sin());
        program.set_bool("inverted", inverted);
        draw_call.submit(&program, &quad);
        window.swap_buffers();
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("error: {}", error);
        let mut source = error.source();
        while let Some(cause) = source {
            eprintln!("  caused by: {}", cause);
            source = cause.source();
        }
        process::exit(1);
    }
}
