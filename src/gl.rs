use std::{ffi, os, ptr, rc};

use crate::driver::Driver;

// Import OpenGL bindings.
include!(concat!(env!("OUT_DIR"), "/gl.rs"));

/// The OpenGL backed [`Driver`].
///
/// [`Driver`]: ../driver/trait.Driver.html
#[derive(Clone)]
pub struct Backend {
    gl: rc::Rc<Gl>,
}

impl Backend {
    /// Constructor.
    pub fn load<F>(mut func: F) -> Self
        where F: FnMut(&str) -> *const ()
    {
        let gl = rc::Rc::new(Gl::load_with(|sym| func(sym) as *const _));
        Backend { gl }
    }

    // Error checking

    /// Corresponds to `glGetError` plus an error check.
    pub fn check_error(&self) {
        let error = unsafe { self.gl.GetError() };
        if error != 0 {
            error!(target: "gl", "0x{:x}", error);
        }
    }

    /// Reads an info log of `len` bytes, including the NUL terminator.
    fn read_info_log<F>(len: i32, read: F) -> String
        where F: FnOnce(i32, *mut i32, *mut types::GLchar)
    {
        if len <= 0 {
            return String::new();
        }
        let mut log = vec![0u8; len as usize];
        let mut written = 0i32;
        read(len, &mut written as *mut _, log.as_mut_ptr() as *mut _);
        log.truncate(written.max(0) as usize);
        String::from_utf8_lossy(&log).trim_end().to_owned()
    }
}

impl Driver for Backend {
    // Pipeline state operations

    fn clear_color(&self, r: f32, g: f32, b: f32, a: f32) {
        trace!(target: "gl", "glClearColor{:?}", (r, g, b, a));
        unsafe {
            self.gl.ClearColor(r, g, b, a);
        }
        self.check_error();
    }

    fn clear(&self, ops: u32) {
        trace!(target: "gl", "glClear{:?}", (ops,));
        unsafe {
            self.gl.Clear(ops);
        }
        self.check_error();
    }

    fn viewport(&self, x: u32, y: u32, w: u32, h: u32) {
        trace!(target: "gl", "glViewport{:?}", (x, y, w, h));
        unsafe {
            self.gl.Viewport(x as _, y as _, w as _, h as _);
        }
        self.check_error();
    }

    fn polygon_mode(&self, face: u32, mode: u32) {
        trace!(target: "gl", "glPolygonMode{:?}", (face, mode));
        unsafe {
            self.gl.PolygonMode(face, mode);
        }
        self.check_error();
    }

    fn line_width(&self, width: f32) {
        trace!(target: "gl", "glLineWidth{:?}", (width,));
        unsafe {
            self.gl.LineWidth(width);
        }
        self.check_error();
    }

    fn point_size(&self, size: f32) {
        trace!(target: "gl", "glPointSize{:?}", (size,));
        unsafe {
            self.gl.PointSize(size);
        }
        self.check_error();
    }

    // Buffer operations

    fn gen_buffer(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glGenBuffers(1) ");
            self.gl.GenBuffers(1, &mut id as *mut _)
        };
        trace!(target: "gl", " => {}", id);
        self.check_error();
        id
    }

    fn bind_buffer(&self, ty: u32, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindBuffer{:?}", (ty, id));
            self.gl.BindBuffer(ty, id);
        }
        self.check_error();
    }

    fn buffer_data(&self, ty: u32, data: &[u8], usage: u32) {
        unsafe {
            trace!(target: "gl", "glBufferData{:?}", (ty, data.len(), usage));
            self.gl.BufferData(
                ty,
                data.len() as _,
                data.as_ptr() as *const os::raw::c_void,
                usage,
            );
        }
        self.check_error();
    }

    fn delete_buffer(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteBuffers{:?}", (1, id));
            self.gl.DeleteBuffers(1, &id as *const _);
        }
        self.check_error();
    }

    // Vertex array operations

    fn gen_vertex_array(&self) -> u32 {
        let mut id: u32 = 0;
        unsafe {
            trace!(target: "gl", "glGenVertexArrays(1) ");
            self.gl.GenVertexArrays(1, &mut id as *mut _);
            trace!(target: "gl", "=> {}", id);
        }
        self.check_error();
        id
    }

    fn bind_vertex_array(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glBindVertexArray{:?}", (id,));
            self.gl.BindVertexArray(id);
        }
        self.check_error();
    }

    fn vertex_attrib_pointer(&self, index: u32, size: i32, stride: i32, offset: usize) {
        unsafe {
            trace!(
                target: "gl",
                "glVertexAttribPointer{:?}",
                (index, size, FLOAT, FALSE, stride, offset),
            );
            self.gl.VertexAttribPointer(
                index,
                size,
                FLOAT,
                FALSE,
                stride,
                offset as *const os::raw::c_void,
            );
        }
        self.check_error();
    }

    fn enable_vertex_attrib_array(&self, index: u32) {
        unsafe {
            trace!(target: "gl", "glEnableVertexAttribArray{:?}", (index,));
            self.gl.EnableVertexAttribArray(index);
        }
        self.check_error();
    }

    fn delete_vertex_array(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteVertexArrays{:?}", (1, id));
            self.gl.DeleteVertexArrays(1, &id as *const _);
        }
        self.check_error();
    }

    // Shader operations

    fn create_shader(&self, ty: u32) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateShader{:?} ", (ty,));
            self.gl.CreateShader(ty)
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    fn shader_source(&self, id: u32, source: &ffi::CStr) {
        unsafe {
            trace!(target: "gl", "glShaderSource{:?}", (id, source));
            let ptr = source.as_ptr();
            self.gl.ShaderSource(id, 1, &ptr as *const _, ptr::null());
        }
        self.check_error();
    }

    fn compile_shader(&self, id: u32) -> bool {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glCompileShader{:?}", (id,));
            self.gl.CompileShader(id);
            self.check_error();
            trace!(target: "gl", "glGetShaderiv{:?} ", (id, COMPILE_STATUS));
            self.gl.GetShaderiv(id, COMPILE_STATUS, &mut status as *mut _);
            trace!(target: "gl", "=> {}", status);
        }
        self.check_error();
        status != 0
    }

    fn shader_info_log(&self, id: u32) -> String {
        let mut len = 0i32;
        unsafe {
            trace!(target: "gl", "glGetShaderiv{:?} ", (id, INFO_LOG_LENGTH));
            self.gl.GetShaderiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
        }
        self.check_error();
        let log = Self::read_info_log(len, |len, written, buf| unsafe {
            trace!(target: "gl", "glGetShaderInfoLog{:?}", (id, len));
            self.gl.GetShaderInfoLog(id, len, written, buf);
        });
        self.check_error();
        log
    }

    fn delete_shader(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteShader{:?}", (id,));
            self.gl.DeleteShader(id);
        }
        self.check_error();
    }

    // Program operations

    fn create_program(&self) -> u32 {
        let id = unsafe {
            trace!(target: "gl", "glCreateProgram() ");
            self.gl.CreateProgram()
        };
        trace!(target: "gl", "=> {}", id);
        self.check_error();
        id
    }

    fn attach_shader(&self, program: u32, shader: u32) {
        unsafe {
            trace!(target: "gl", "glAttachShader{:?}", (program, shader));
            self.gl.AttachShader(program, shader);
        }
        self.check_error();
    }

    fn link_program(&self, id: u32) -> bool {
        let mut status = 0i32;
        unsafe {
            trace!(target: "gl", "glLinkProgram{:?}", (id,));
            self.gl.LinkProgram(id);
            self.check_error();
            trace!(target: "gl", "glGetProgramiv{:?} ", (id, LINK_STATUS));
            self.gl.GetProgramiv(id, LINK_STATUS, &mut status as *mut _);
            trace!(target: "gl", "=> {}", status);
        }
        self.check_error();
        status != 0
    }

    fn program_info_log(&self, id: u32) -> String {
        let mut len = 0i32;
        unsafe {
            trace!(target: "gl", "glGetProgramiv{:?} ", (id, INFO_LOG_LENGTH));
            self.gl.GetProgramiv(id, INFO_LOG_LENGTH, &mut len as *mut _);
        }
        self.check_error();
        let log = Self::read_info_log(len, |len, written, buf| unsafe {
            trace!(target: "gl", "glGetProgramInfoLog{:?}", (id, len));
            self.gl.GetProgramInfoLog(id, len, written, buf);
        });
        self.check_error();
        log
    }

    fn delete_program(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glDeleteProgram{:?}", (id,));
            self.gl.DeleteProgram(id);
        }
        self.check_error();
    }

    fn use_program(&self, id: u32) {
        unsafe {
            trace!(target: "gl", "glUseProgram{:?}", (id,));
            self.gl.UseProgram(id);
        }
        self.check_error();
    }

    fn get_uniform_location(&self, program: u32, name: &ffi::CStr) -> i32 {
        let location;
        unsafe {
            trace!(target: "gl", "glGetUniformLocation{:?} ", (program, name));
            location = self.gl.GetUniformLocation(program, name.as_ptr());
            trace!(target: "gl", "=> {}", location);
        }
        self.check_error();
        location
    }

    fn uniform_1i(&self, location: i32, value: i32) {
        unsafe {
            trace!(target: "gl", "glUniform1i{:?}", (location, value));
            self.gl.Uniform1i(location, value);
        }
        self.check_error();
    }

    fn uniform_1f(&self, location: i32, value: f32) {
        unsafe {
            trace!(target: "gl", "glUniform1f{:?}", (location, value));
            self.gl.Uniform1f(location, value);
        }
        self.check_error();
    }

    // Draw call operations

    fn draw_arrays(&self, mode: u32, offset: usize, count: usize) {
        unsafe {
            trace!(target: "gl", "glDrawArrays{:?}", (mode, offset, count));
            self.gl.DrawArrays(mode, offset as _, count as _);
        }
        self.check_error();
    }

    fn draw_elements(&self, mode: u32, offset: usize, count: usize) {
        unsafe {
            trace!(target: "gl", "glDrawElements{:?}", (mode, count, UNSIGNED_INT, offset));
            self.gl.DrawElements(
                mode,
                count as _,
                UNSIGNED_INT,
                offset as *const os::raw::c_void,
            );
        }
        self.check_error();
    }
}
