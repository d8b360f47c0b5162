//! Draw call dispatch.

use crate::driver::Driver;
use crate::gl;
use crate::program::Program;
use crate::vertex_array::VertexArray;

/// Primitive topology.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Primitive {
    /// List of triangle points.
    Triangles,

    /// List of line segments.
    Lines,
}

impl Primitive {
    pub(crate) fn as_gl_enum(self) -> u32 {
        match self {
            Primitive::Triangles => gl::TRIANGLES,
            Primitive::Lines => gl::LINES,
        }
    }
}

/// Draw call kind.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    /// Draw consecutive vertices.
    Arrays,

    /// Draw vertices in the order given by the index buffer.
    Elements,
}

/// A draw call command.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct DrawCall {
    /// Where the vertices/elements begin.
    pub offset: usize,

    /// Number of vertices/elements to draw.
    pub count: usize,

    /// The primitive topology.
    pub primitive: Primitive,

    /// Draw call kind.
    pub kind: Kind,
}

impl DrawCall {
    /// Draw every vertex of `vertex_array` as triangles.
    pub fn arrays<D: Driver>(vertex_array: &VertexArray<D>) -> Self {
        DrawCall {
            offset: 0,
            count: vertex_array.vertex_count(),
            primitive: Primitive::Triangles,
            kind: Kind::Arrays,
        }
    }

    /// Draw every index of `vertex_array` as triangles.
    ///
    /// Falls back to [`arrays`](#method.arrays) when there is no index
    /// buffer.
    pub fn elements<D: Driver>(vertex_array: &VertexArray<D>) -> Self {
        match vertex_array.index_count() {
            Some(count) => DrawCall {
                offset: 0,
                count,
                primitive: Primitive::Triangles,
                kind: Kind::Elements,
            },
            None => DrawCall::arrays(vertex_array),
        }
    }

    /// Bind `program` and `vertex_array` and draw, through the driver
    /// `vertex_array` was created with.
    ///
    /// For [`Kind::Elements`] the offset is counted in indices.
    ///
    /// [`Kind::Elements`]: enum.Kind.html#variant.Elements
    pub fn submit<D: Driver>(&self, program: &Program<D>, vertex_array: &VertexArray<D>) {
        let driver = vertex_array.driver();
        program.bind();
        driver.bind_vertex_array(vertex_array.id());
        let mode = self.primitive.as_gl_enum();
        match self.kind {
            Kind::Arrays => driver.draw_arrays(mode, self.offset, self.count),
            Kind::Elements => {
                let offset = self.offset * std::mem::size_of::<u32>();
                driver.draw_elements(mode, offset, self.count);
            }
        }
        driver.bind_vertex_array(0);
    }
}
