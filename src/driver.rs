//! The graphics driver boundary.

use std::ffi;

/// The OpenGL calls made by this crate.
///
/// Every method corresponds to one (or a short fixed sequence of) OpenGL
/// entry points against a context that is already current on the calling
/// thread. Cloning a driver yields another handle to the same context.
///
/// Handles are plain OpenGL names; ownership is tracked by the types in
/// [`shader`], [`program`], [`buffer`] and [`vertex_array`], never here.
///
/// [`shader`]: ../shader/index.html
/// [`program`]: ../program/index.html
/// [`buffer`]: ../buffer/index.html
/// [`vertex_array`]: ../vertex_array/index.html
pub trait Driver: Clone {
    // Pipeline state operations

    /// Corresponds to `glClearColor`.
    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32);

    /// Corresponds to `glClear`.
    fn clear(&self, ops: u32);

    /// Corresponds to `glViewport`.
    fn viewport(&self, x: u32, y: u32, w: u32, h: u32);

    /// Corresponds to `glPolygonMode`.
    fn polygon_mode(&self, face: u32, mode: u32);

    /// Corresponds to `glLineWidth`.
    fn line_width(&self, width: f32);

    /// Corresponds to `glPointSize`.
    fn point_size(&self, size: f32);

    // Buffer operations

    /// Corresponds to `glGenBuffers(1)`.
    fn gen_buffer(&self) -> u32;

    /// Corresponds to `glBindBuffer`.
    fn bind_buffer(&self, ty: u32, id: u32);

    /// Corresponds to `glBufferData` on the buffer bound to `ty`.
    fn buffer_data(&self, ty: u32, data: &[u8], usage: u32);

    /// Corresponds to `glDeleteBuffers(1)`.
    fn delete_buffer(&self, id: u32);

    // Vertex array operations

    /// Corresponds to `glGenVertexArrays(1)`.
    fn gen_vertex_array(&self) -> u32;

    /// Corresponds to `glBindVertexArray`.
    fn bind_vertex_array(&self, id: u32);

    /// Corresponds to `glVertexAttribPointer` with `GL_FLOAT` components.
    fn vertex_attrib_pointer(&self, index: u32, size: i32, stride: i32, offset: usize);

    /// Corresponds to `glEnableVertexAttribArray`.
    fn enable_vertex_attrib_array(&self, index: u32);

    /// Corresponds to `glDeleteVertexArrays(1)`.
    fn delete_vertex_array(&self, id: u32);

    // Shader operations

    /// Corresponds to `glCreateShader`.
    fn create_shader(&self, ty: u32) -> u32;

    /// Corresponds to `glShaderSource` with a single NUL-terminated string.
    fn shader_source(&self, id: u32, source: &ffi::CStr);

    /// Corresponds to `glCompileShader` followed by a `GL_COMPILE_STATUS`
    /// query. Returns `true` on success.
    fn compile_shader(&self, id: u32) -> bool;

    /// Corresponds to `glGetShaderInfoLog`.
    fn shader_info_log(&self, id: u32) -> String;

    /// Corresponds to `glDeleteShader`.
    fn delete_shader(&self, id: u32);

    // Program operations

    /// Corresponds to `glCreateProgram`.
    fn create_program(&self) -> u32;

    /// Corresponds to `glAttachShader`.
    fn attach_shader(&self, program: u32, shader: u32);

    /// Corresponds to `glLinkProgram` followed by a `GL_LINK_STATUS`
    /// query. Returns `true` on success.
    fn link_program(&self, id: u32) -> bool;

    /// Corresponds to `glGetProgramInfoLog`.
    fn program_info_log(&self, id: u32) -> String;

    /// Corresponds to `glDeleteProgram`.
    fn delete_program(&self, id: u32);

    /// Corresponds to `glUseProgram`.
    fn use_program(&self, id: u32);

    /// Corresponds to `glGetUniformLocation`. Returns `-1` for names the
    /// program does not have.
    fn get_uniform_location(&self, program: u32, name: &ffi::CStr) -> i32;

    /// Corresponds to `glUniform1i`.
    fn uniform_1i(&self, location: i32, value: i32);

    /// Corresponds to `glUniform1f`.
    fn uniform_1f(&self, location: i32, value: f32);

    // Draw call operations

    /// Corresponds to `glDrawArrays`.
    fn draw_arrays(&self, mode: u32, offset: usize, count: usize);

    /// Corresponds to `glDrawElements` with `u32` indices.
    fn draw_elements(&self, mode: u32, offset: usize, count: usize);
}
