//! OpenGL shader programs with owned handles.
//!
//! Everything goes through a [`Driver`]; [`gl::Backend`] is the real one,
//! loaded from the current context with [`init`]. Handles are released when
//! the values owning them are dropped.
//!
//! ```no_run
//! # fn run(backend: glprog::gl::Backend) -> Result<(), glprog::Error> {
//! let program = glprog::Program::from_files(
//!     &backend,
//!     "shaders/basic.vert",
//!     "shaders/basic.frag",
//! )?;
//! program.bind();
//! program.set_float("brightness", 0.5);
//! # Ok(())
//! # }
//! ```
//!
//! [`Driver`]: driver/trait.Driver.html
//! [`gl::Backend`]: gl/struct.Backend.html
//! [`init`]: fn.init.html

#[macro_use] extern crate log;

#[cfg(test)]
mod mock;

pub mod gl;

pub mod buffer;
pub mod draw_call;
pub mod driver;
pub mod error;
pub mod pipeline;
pub mod program;
pub mod shader;
pub mod source;
pub mod vertex_array;

/// Load the OpenGL function pointers of the context current on this thread.
pub fn init<F>(query_proc_address: F) -> gl::Backend
    where F: FnMut(&str) -> *const ()
{
    gl::Backend::load(query_proc_address)
}

#[doc(inline)]
pub use buffer::Buffer;

#[doc(inline)]
pub use draw_call::DrawCall;

#[doc(inline)]
pub use draw_call::Primitive;

#[doc(inline)]
pub use driver::Driver;

#[doc(inline)]
pub use error::Error;

#[doc(inline)]
pub use pipeline::PolygonMode;

#[doc(inline)]
pub use pipeline::Viewport;

#[doc(inline)]
pub use program::Program;

#[doc(inline)]
pub use vertex_array::VertexArray;
