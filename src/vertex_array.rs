//! Vertex array objects.

use std::{cmp, fmt, hash, mem, ops};

use crate::buffer::{self, Buffer};
use crate::driver::Driver;
use crate::gl;

/// The OpenGL VAO ID type.
pub(crate) type Id = u32;

/// Vertex position type, bound to attribute location 0.
pub type Position = [f32; 3];

/// Attribute location of vertex positions.
pub const POSITION_ATTRIBUTE: u32 = 0;

/// Corresponds to an OpenGL vertex array object.
///
/// Owns the buffers it reads from; all are deleted on drop.
pub struct VertexArray<D: Driver> {
    /// The OpenGL VAO ID.
    id: Id,

    /// Tightly packed vertex positions.
    positions: Buffer<D>,

    /// Draw sequence indices bound as the element array buffer.
    indices: Option<Buffer<D>>,

    /// Deletes the VAO upon destruction.
    driver: D,
}

impl<D: Driver> VertexArray<D> {
    /// Upload vertex positions and optional `u32` indices and record their
    /// layout in a new vertex array object.
    pub fn new(driver: &D, positions: &[Position], indices: Option<&[u32]>) -> Self {
        let positions = Buffer::new(
            driver,
            buffer::Kind::Array,
            buffer::Usage::StaticDraw,
            positions,
        );
        let indices = indices.map(|data| {
            Buffer::new(driver, buffer::Kind::Index, buffer::Usage::StaticDraw, data)
        });

        let id = driver.gen_vertex_array();
        driver.bind_vertex_array(id);
        driver.bind_buffer(gl::ARRAY_BUFFER, positions.id());
        driver.vertex_attrib_pointer(
            POSITION_ATTRIBUTE,
            3,
            mem::size_of::<Position>() as i32,
            0,
        );
        driver.enable_vertex_attrib_array(POSITION_ATTRIBUTE);
        if let Some(ref buffer) = indices {
            driver.bind_buffer(gl::ELEMENT_ARRAY_BUFFER, buffer.id());
        }
        driver.bind_vertex_array(0);
        driver.bind_buffer(gl::ARRAY_BUFFER, 0);

        Self {
            id,
            positions,
            indices,
            driver: driver.clone(),
        }
    }

    /// Returns the OpenGL VAO ID.
    pub(crate) fn id(&self) -> Id {
        self.id
    }

    /// Returns the driver the VAO was created with.
    pub(crate) fn driver(&self) -> &D {
        &self.driver
    }

    /// Returns the number of vertex positions.
    pub fn vertex_count(&self) -> usize {
        self.positions.len::<Position>()
    }

    /// Returns the number of indices, if any were given.
    pub fn index_count(&self) -> Option<usize> {
        self.indices.as_ref().map(|buffer| buffer.len::<u32>())
    }
}

impl<D: Driver> ops::Drop for VertexArray<D> {
    fn drop(&mut self) {
        self.driver.delete_vertex_array(self.id);
    }
}

impl<D: Driver> cmp::Eq for VertexArray<D> {}

impl<D: Driver> cmp::PartialEq<Self> for VertexArray<D> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<D: Driver> fmt::Debug for VertexArray<D> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("VertexArray")
            .field("id", &self.id)
            .field("positions", &self.positions)
            .field("indices", &self.indices)
            .finish()
    }
}

impl<D: Driver> hash::Hash for VertexArray<D> {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state)
    }
}
