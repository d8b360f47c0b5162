//! GPU buffer management.

use std::{cmp, fmt, hash, mem, ops};

use crate::driver::Driver;
use crate::gl;

/// OpenGL buffer ID type.
pub(crate) type Id = u32;

/// Determines what the buffer may be used for.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Kind {
    /// Corresponds to `GL_ARRAY_BUFFER`.
    Array,

    /// Corresponds to `GL_ELEMENT_ARRAY_BUFFER`.
    Index,
}

impl Kind {
    /// Returns the equivalent OpenGL buffer target constant.
    pub fn as_gl_enum(self) -> u32 {
        match self {
            Kind::Array => gl::ARRAY_BUFFER,
            Kind::Index => gl::ELEMENT_ARRAY_BUFFER,
        }
    }
}

/// A buffer data usage hint.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Usage {
    /// Corresponds to `GL_STATIC_DRAW`.
    StaticDraw,

    /// Corresponds to `GL_DYNAMIC_DRAW`.
    DynamicDraw,
}

impl Usage {
    /// Returns the equivalent OpenGL usage enumeration constant.
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Usage::StaticDraw => gl::STATIC_DRAW,
            Usage::DynamicDraw => gl::DYNAMIC_DRAW,
        }
    }
}

/// A contiguous region of GPU memory.
pub struct Buffer<D: Driver> {
    /// The OpenGL buffer ID.
    id: Id,

    /// The type of buffer, e.g. a vertex buffer.
    kind: Kind,

    /// The number of bytes held by the buffer.
    size: usize,

    /// Data usage hint.
    usage: Usage,

    /// Deletes the buffer upon destruction.
    driver: D,
}

impl<D: Driver> Buffer<D> {
    /// Create a GPU buffer initialized with `data`.
    ///
    /// The buffer is unbound from its target before returning. Index
    /// buffers are uploaded with no vertex array bound, so the element
    /// binding of whichever vertex array was bound is left intact; that
    /// vertex array is no longer bound afterwards.
    pub fn new<T>(driver: &D, kind: Kind, usage: Usage, data: &[T]) -> Self
        where T: bytemuck::Pod
    {
        let id = driver.gen_buffer();
        let bytes: &[u8] = bytemuck::cast_slice(data);
        if kind == Kind::Index {
            // The element array binding is vertex array state.
            driver.bind_vertex_array(0);
        }
        driver.bind_buffer(kind.as_gl_enum(), id);
        driver.buffer_data(kind.as_gl_enum(), bytes, usage.as_gl_enum());
        driver.bind_buffer(kind.as_gl_enum(), 0);
        Self {
            id,
            kind,
            size: bytes.len(),
            usage,
            driver: driver.clone(),
        }
    }

    /// Returns the OpenGL buffer ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the buffer kind.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the number of bytes this buffer contains.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of `T` elements this buffer contains.
    pub fn len<T>(&self) -> usize {
        self.size / mem::size_of::<T>()
    }

    /// Returns the buffer data usage hint.
    pub fn usage(&self) -> Usage {
        self.usage
    }
}

impl<D: Driver> ops::Drop for Buffer<D> {
    fn drop(&mut self) {
        self.driver.delete_buffer(self.id);
    }
}

impl<D: Driver> cmp::PartialEq<Self> for Buffer<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D: Driver> cmp::Eq for Buffer<D> {}

impl<D: Driver> fmt::Debug for Buffer<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        #[derive(Debug)]
        struct Buffer {
            id: Id,
            kind: Kind,
            size: usize,
            usage: Usage,
        }

        Buffer {
            id: self.id,
            kind: self.kind,
            size: self.size,
            usage: self.usage,
        }.fmt(f)
    }
}

impl<D: Driver> hash::Hash for Buffer<D> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
