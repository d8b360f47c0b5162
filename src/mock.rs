//! An instrumented in-memory driver for unit tests.
//!
//! Compilation fails on unbalanced brackets or a missing `main`, and linking
//! fails when a fragment `in` has no matching vertex `out`. Uniform locations
//! are assigned in declaration order across the linked stages. Deleting a
//! handle that is not live panics.

use std::{cell, collections, ffi, rc};

use crate::driver::Driver;
use crate::gl;

/// Kinds of driver resources tracked by the mock.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Resource {
    Shader,
    Program,
    Buffer,
    VertexArray,
}

/// A uniform value written through the driver.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i32),
    Float(f32),
}

/// Driver calls recorded for inspection.
#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Compile(u32),
    ShaderInfoLog(u32),
    Link(u32),
    UseProgram(u32),
    UniformLocation { program: u32, name: String },
    Uniform { program: u32, location: i32, value: Value },
    BufferData { ty: u32, len: usize, usage: u32 },
    VertexAttribPointer { index: u32, size: i32, stride: i32, offset: usize },
    DrawArrays { mode: u32, offset: usize, count: usize },
    DrawElements { mode: u32, offset: usize, count: usize },
    PolygonMode { face: u32, mode: u32 },
    Viewport { x: u32, y: u32, w: u32, h: u32 },
    Clear { color: [f32; 4], ops: u32 },
}

struct Shader {
    ty: u32,
    source: String,
}

#[derive(Default)]
struct Program {
    attached: Vec<u32>,
    uniforms: Vec<String>,
    values: collections::HashMap<i32, Value>,
    linked: bool,
}

#[derive(Default)]
struct State {
    next_id: u32,
    shaders: collections::HashMap<u32, Shader>,
    programs: collections::HashMap<u32, Program>,
    buffers: collections::HashSet<u32>,
    vertex_arrays: collections::HashSet<u32>,
    created: collections::HashMap<Resource, usize>,
    deleted: collections::HashMap<Resource, usize>,
    current_program: u32,
    bound_vertex_array: u32,
    element_buffers: collections::HashMap<u32, u32>,
    clear_color: [f32; 4],
    calls: Vec<Call>,
}

impl State {
    fn create(&mut self, resource: Resource) -> u32 {
        self.next_id += 1;
        *self.created.entry(resource).or_insert(0) += 1;
        self.next_id
    }

    fn delete(&mut self, resource: Resource, id: u32) {
        let live = match resource {
            Resource::Shader => self.shaders.remove(&id).is_some(),
            Resource::Program => self.programs.remove(&id).is_some(),
            Resource::Buffer => self.buffers.remove(&id),
            Resource::VertexArray => self.vertex_arrays.remove(&id),
        };
        assert!(live, "{:?} {} deleted while not live", resource, id);
        *self.deleted.entry(resource).or_insert(0) += 1;
    }
}

/// Instrumented driver. Clones share state.
#[derive(Clone, Default)]
pub struct Mock {
    state: rc::Rc<cell::RefCell<State>>,
}

impl Mock {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self::default()
    }

    /// Number of handles of the given kind currently alive.
    pub fn live(&self, resource: Resource) -> usize {
        let state = self.state.borrow();
        match resource {
            Resource::Shader => state.shaders.len(),
            Resource::Program => state.programs.len(),
            Resource::Buffer => state.buffers.len(),
            Resource::VertexArray => state.vertex_arrays.len(),
        }
    }

    /// Number of handles of the given kind ever created.
    pub fn created(&self, resource: Resource) -> usize {
        self.state.borrow().created.get(&resource).cloned().unwrap_or(0)
    }

    /// Number of handles of the given kind deleted.
    pub fn deletions(&self, resource: Resource) -> usize {
        self.state.borrow().deleted.get(&resource).cloned().unwrap_or(0)
    }

    /// Driver calls recorded so far.
    pub fn calls(&self) -> Vec<Call> {
        self.state.borrow().calls.clone()
    }

    /// The index buffer recorded by a vertex array, `0` being the default.
    pub fn element_buffer(&self, vertex_array: u32) -> u32 {
        self.state.borrow().element_buffers.get(&vertex_array).cloned().unwrap_or(0)
    }

    pub fn bound_vertex_array(&self) -> u32 {
        self.state.borrow().bound_vertex_array
    }

    pub fn current_program(&self) -> u32 {
        self.state.borrow().current_program
    }

    /// The value last written to the named uniform of `program`.
    pub fn uniform(&self, program: u32, name: &str) -> Option<Value> {
        let state = self.state.borrow();
        let program = state.programs.get(&program)?;
        let location = program.uniforms.iter().position(|n| n == name)?;
        program.values.get(&(location as i32)).cloned()
    }
}

/// Declarations of the form `[layout(...)] <qualifier> <type> <name>;`.
fn declarations<'a>(source: &'a str, qualifier: &str) -> Vec<&'a str> {
    source
        .lines()
        .map(str::trim)
        .filter_map(|line| line.strip_suffix(';'))
        .map(|line| match line.find(')') {
            Some(end) if line.starts_with("layout") => line[end + 1..].trim(),
            _ => line,
        })
        .filter_map(|line| {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            match tokens.as_slice() {
                [q, _ty, name] if *q == qualifier => Some(*name),
                _ => None,
            }
        })
        .collect()
}

fn stage<'a>(
    shaders: &'a collections::HashMap<u32, Shader>,
    attached: &[u32],
    ty: u32,
) -> Option<&'a str> {
    attached
        .iter()
        .filter_map(|id| shaders.get(id))
        .find(|shader| shader.ty == ty)
        .map(|shader| shader.source.as_str())
}

fn compile_log(source: &str) -> Option<String> {
    let mut depth = 0i32;
    for (line, text) in source.lines().enumerate() {
        for c in text.chars() {
            match c {
                '(' | '{' => depth += 1,
                ')' | '}' => depth -= 1,
                _ => {}
            }
            if depth < 0 {
                return Some(format!("0:{}(1): error: syntax error, unexpected '{}'", line + 1, c));
            }
        }
    }
    if depth != 0 {
        return Some("0:1(1): error: syntax error, unexpected end of file".to_owned());
    }
    if !source.contains("void main") {
        return Some("error: no definition of main()".to_owned());
    }
    None
}

impl Driver for Mock {
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        self.state.borrow_mut().clear_color = [r, g, b, a];
    }

    fn clear(&self, ops: u32) {
        let mut state = self.state.borrow_mut();
        let color = state.clear_color;
        state.calls.push(Call::Clear { color, ops });
    }

    fn viewport(&self, x: u32, y: u32, w: u32, h: u32) {
        self.state.borrow_mut().calls.push(Call::Viewport { x, y, w, h });
    }

    fn polygon_mode(&self, face: u32, mode: u32) {
        self.state.borrow_mut().calls.push(Call::PolygonMode { face, mode });
    }

    fn line_width(&self, _width: f32) {}

    fn point_size(&self, _size: f32) {}

    fn gen_buffer(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.create(Resource::Buffer);
        state.buffers.insert(id);
        id
    }

    fn bind_buffer(&self, ty: u32, id: u32) {
        let mut state = self.state.borrow_mut();
        assert!(id == 0 || state.buffers.contains(&id), "bound unknown buffer {}", id);
        if ty == gl::ELEMENT_ARRAY_BUFFER {
            let vertex_array = state.bound_vertex_array;
            state.element_buffers.insert(vertex_array, id);
        }
    }

    fn buffer_data(&self, ty: u32, data: &[u8], usage: u32) {
        self.state.borrow_mut().calls.push(Call::BufferData { ty, len: data.len(), usage });
    }

    fn delete_buffer(&self, id: u32) {
        self.state.borrow_mut().delete(Resource::Buffer, id);
    }

    fn gen_vertex_array(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.create(Resource::VertexArray);
        state.vertex_arrays.insert(id);
        id
    }

    fn bind_vertex_array(&self, id: u32) {
        let mut state = self.state.borrow_mut();
        assert!(id == 0 || state.vertex_arrays.contains(&id), "bound unknown vertex array {}", id);
        state.bound_vertex_array = id;
    }

    fn vertex_attrib_pointer(&self, index: u32, size: i32, stride: i32, offset: usize) {
        let mut state = self.state.borrow_mut();
        assert_ne!(state.bound_vertex_array, 0, "no vertex array bound");
        state.calls.push(Call::VertexAttribPointer { index, size, stride, offset });
    }

    fn enable_vertex_attrib_array(&self, _index: u32) {
        assert_ne!(self.state.borrow().bound_vertex_array, 0, "no vertex array bound");
    }

    fn delete_vertex_array(&self, id: u32) {
        let mut state = self.state.borrow_mut();
        state.delete(Resource::VertexArray, id);
        state.element_buffers.remove(&id);
    }

    fn create_shader(&self, ty: u32) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.create(Resource::Shader);
        state.shaders.insert(id, Shader { ty, source: String::new() });
        id
    }

    fn shader_source(&self, id: u32, source: &ffi::CStr) {
        let mut state = self.state.borrow_mut();
        let shader = state.shaders.get_mut(&id).expect("unknown shader");
        shader.source = source.to_string_lossy().into_owned();
    }

    fn compile_shader(&self, id: u32) -> bool {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Compile(id));
        compile_log(&state.shaders[&id].source).is_none()
    }

    fn shader_info_log(&self, id: u32) -> String {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::ShaderInfoLog(id));
        compile_log(&state.shaders[&id].source).unwrap_or_default()
    }

    fn delete_shader(&self, id: u32) {
        self.state.borrow_mut().delete(Resource::Shader, id);
    }

    fn create_program(&self) -> u32 {
        let mut state = self.state.borrow_mut();
        let id = state.create(Resource::Program);
        state.programs.insert(id, Program::default());
        id
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        let mut state = self.state.borrow_mut();
        assert!(state.shaders.contains_key(&shader), "attached unknown shader {}", shader);
        state.programs.get_mut(&program).expect("unknown program").attached.push(shader);
    }

    fn link_program(&self, id: u32) -> bool {
        let mut state = self.state.borrow_mut();
        state.calls.push(Call::Link(id));
        let state = &mut *state;
        let program = state.programs.get_mut(&id).expect("unknown program");
        let vertex = stage(&state.shaders, &program.attached, gl::VERTEX_SHADER);
        let fragment = stage(&state.shaders, &program.attached, gl::FRAGMENT_SHADER);
        let linked = match (vertex, fragment) {
            (Some(vertex), Some(fragment)) => {
                let outputs = declarations(vertex, "out");
                let matched = declarations(fragment, "in")
                    .iter()
                    .all(|input| outputs.contains(input));
                if matched {
                    let mut uniforms: Vec<String> = Vec::new();
                    for source in &[vertex, fragment] {
                        for name in declarations(source, "uniform") {
                            if !uniforms.iter().any(|n| n == name) {
                                uniforms.push(name.to_owned());
                            }
                        }
                    }
                    program.uniforms = uniforms;
                }
                matched
            }
            _ => false,
        };
        program.linked = linked;
        linked
    }

    fn program_info_log(&self, id: u32) -> String {
        let state = self.state.borrow();
        if state.programs[&id].linked {
            String::new()
        } else {
            "error: fragment shader input has no matching vertex shader output".to_owned()
        }
    }

    fn delete_program(&self, id: u32) {
        let mut state = self.state.borrow_mut();
        state.delete(Resource::Program, id);
        if state.current_program == id {
            state.current_program = 0;
        }
    }

    fn use_program(&self, id: u32) {
        let mut state = self.state.borrow_mut();
        assert!(id == 0 || state.programs[&id].linked, "used unlinked program {}", id);
        state.current_program = id;
        state.calls.push(Call::UseProgram(id));
    }

    fn get_uniform_location(&self, program: u32, name: &ffi::CStr) -> i32 {
        let mut state = self.state.borrow_mut();
        let name = name.to_string_lossy().into_owned();
        state.calls.push(Call::UniformLocation { program, name: name.clone() });
        state.programs[&program]
            .uniforms
            .iter()
            .position(|n| *n == name)
            .map(|location| location as i32)
            .unwrap_or(-1)
    }

    fn uniform_1i(&self, location: i32, value: i32) {
        write_uniform(&mut self.state.borrow_mut(), location, Value::Int(value));
    }

    fn uniform_1f(&self, location: i32, value: f32) {
        write_uniform(&mut self.state.borrow_mut(), location, Value::Float(value));
    }

    fn draw_arrays(&self, mode: u32, offset: usize, count: usize) {
        self.state.borrow_mut().calls.push(Call::DrawArrays { mode, offset, count });
    }

    fn draw_elements(&self, mode: u32, offset: usize, count: usize) {
        self.state.borrow_mut().calls.push(Call::DrawElements { mode, offset, count });
    }
}

fn write_uniform(state: &mut State, location: i32, value: Value) {
    let program = state.current_program;
    assert_ne!(program, 0, "uniform written with no current program");
    state.calls.push(Call::Uniform { program, location, value });
    if location != -1 {
        state.programs.get_mut(&program).expect("unknown program").values.insert(location, value);
    }
}
