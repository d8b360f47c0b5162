//! GLSL shader stages.

use std::{cmp, ffi, fmt, hash, ops};

use crate::driver::Driver;
use crate::error::Error;
use crate::gl;

/// OpenGL shader ID type.
pub(crate) type Id = u32;

/// Specifies the pipeline stage a shader runs in.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    /// Corresponds to `GL_VERTEX_SHADER`.
    Vertex,

    /// Corresponds to `GL_FRAGMENT_SHADER`.
    Fragment,
}

impl Kind {
    /// Returns the equivalent OpenGL shader type constant.
    pub fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Vertex => gl::VERTEX_SHADER,
            Kind::Fragment => gl::FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Kind::Vertex => f.write_str("vertex"),
            Kind::Fragment => f.write_str("fragment"),
        }
    }
}

/// A compiled shader object.
///
/// Compiled objects are linked into a [`Program`] and may be shared by
/// several programs. The shader is deleted when the object is dropped;
/// programs it was linked into are unaffected.
///
/// [`Program`]: ../program/struct.Program.html
pub struct Object<D: Driver> {
    /// The OpenGL shader ID.
    id: Id,

    /// The stage the shader was compiled for.
    kind: Kind,

    /// Deletes the shader upon destruction.
    driver: D,
}

impl<D: Driver> Object<D> {
    /// Compile GLSL source text into a shader object.
    pub fn compile(driver: &D, kind: Kind, source: &str) -> Result<Self, Error> {
        let source = ffi::CString::new(source).map_err(|_| {
            error!(target: "shader", "{} shader source contains an interior NUL byte", kind);
            Error::Nul { kind }
        })?;
        Self::compile_cstr(driver, kind, &source)
    }

    /// Compile NUL-terminated GLSL source into a shader object.
    ///
    /// On failure the driver's info log is logged and returned in
    /// [`Error::Compile`]; the shader is deleted.
    ///
    /// [`Error::Compile`]: ../error/enum.Error.html#variant.Compile
    pub fn compile_cstr(driver: &D, kind: Kind, source: &ffi::CStr) -> Result<Self, Error> {
        let object = Object {
            id: driver.create_shader(kind.as_gl_enum()),
            kind,
            driver: driver.clone(),
        };
        driver.shader_source(object.id, source);
        if driver.compile_shader(object.id) {
            debug!(target: "shader", "{} shader {} compiled", kind, object.id);
            Ok(object)
        } else {
            let log = driver.shader_info_log(object.id);
            error!(target: "shader", "{} shader failed to compile:\n{}", kind, log);
            Err(Error::Compile { kind, log })
        }
    }

    /// Returns the OpenGL shader ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the stage the shader was compiled for.
    pub fn kind(&self) -> Kind {
        self.kind
    }
}

impl<D: Driver> ops::Drop for Object<D> {
    fn drop(&mut self) {
        self.driver.delete_shader(self.id);
    }
}

impl<D: Driver> cmp::Eq for Object<D> {}

impl<D: Driver> cmp::PartialEq<Self> for Object<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D: Driver> fmt::Debug for Object<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Object {
            id: Id,
            kind: Kind,
        }

        Object {
            id: self.id,
            kind: self.kind,
        }.fmt(f)
    }
}

impl<D: Driver> hash::Hash for Object<D> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}
