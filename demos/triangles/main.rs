//! Two wireframe triangles drawn with two programs that share one compiled
//! vertex stage.

extern crate env_logger;
extern crate glprog;
extern crate sdl2;

#[path = "../util.rs"]
mod util;

use std::{error, process};

use glprog::shader::{self, Kind};
use glprog::{pipeline, DrawCall, PolygonMode, Program, VertexArray, Viewport};

const VERTEX_SOURCE: &str = "#version 330 core
layout (location = 0) in vec3 aPos;
void main()
{
   gl_Position = vec4(aPos.x, aPos.y, aPos.z, 1.0);
}";

const ORANGE_SOURCE: &str = "#version 330 core
out vec4 fragColor;

void main() {
    fragColor = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}";

const YELLOW_SOURCE: &str = "#version 330 core
out vec4 fragColor;

void main() {
    fragColor = vec4(1.0f, 1.0f, 0.0f, 1.0f);
}";

const FIRST_TRIANGLE: &[[f32; 3]] = &[
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.0, 0.5, 0.0],
];

const SECOND_TRIANGLE: &[[f32; 3]] = &[
    [0.0, 0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.9, 0.5, 0.0],
];

const BACKGROUND: [f32; 4] = [0.2, 0.3, 0.3, 1.0];

fn run() -> Result<(), Box<dyn error::Error>> {
    let (mut window, backend) = util::Window::open("Triangles")?;

    let (orange, yellow) = {
        let vertex = shader::Object::compile(&backend, Kind::Vertex, VERTEX_SOURCE)?;
        let orange = shader::Object::compile(&backend, Kind::Fragment, ORANGE_SOURCE)?;
        let yellow = shader::Object::compile(&backend, Kind::Fragment, YELLOW_SOURCE)?;
        (
            Program::link(&backend, &vertex, &orange)?,
            Program::link(&backend, &vertex, &yellow)?,
        )
    };

    let first = VertexArray::new(&backend, FIRST_TRIANGLE, None);
    let second = VertexArray::new(&backend, SECOND_TRIANGLE, None);

    PolygonMode::Line(1.0).apply(&backend);
    Viewport::max(util::WIDTH, util::HEIGHT).apply(&backend);

    loop {
        let input = window.poll();
        if input.quit {
            break;
        }
        if let Some((w, h)) = input.resized {
            Viewport::max(w, h).apply(&backend);
        }
        pipeline::clear(&backend, BACKGROUND);
        DrawCall::arrays(&first).submit(&orange, &first);
        DrawCall::arrays(&second).submit(&yellow, &second);
        window.swap_buffers();
    }
    Ok(())
}

fn main() {
    env_logger::init();
    if let Err(error) = run() {
        eprintln!("error: {}", error);
        process::exit(1);
    }
}
