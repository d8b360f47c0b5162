//! Fixed-function pipeline state.

use crate::driver::Driver;
use crate::gl;

/// Specifies the polygon rasterization method.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PolygonMode {
    /// Vertices marked as the start of a boundary edge are drawn as points
    /// of the given size.
    Point(f32),

    /// Boundary edges of the polygon are drawn as line segments of the given
    /// width.
    Line(f32),

    /// The interior of the polygon is filled.
    Fill,
}

impl Default for PolygonMode {
    fn default() -> Self {
        PolygonMode::Fill
    }
}

impl PolygonMode {
    pub(crate) fn as_gl_enum(&self) -> u32 {
        match *self {
            PolygonMode::Point(_) => gl::POINT,
            PolygonMode::Line(_) => gl::LINE,
            PolygonMode::Fill => gl::FILL,
        }
    }

    /// Rasterize front and back faces with this mode.
    pub fn apply<D: Driver>(&self, driver: &D) {
        driver.polygon_mode(gl::FRONT_AND_BACK, self.as_gl_enum());
        match *self {
            PolygonMode::Point(size) => driver.point_size(size),
            PolygonMode::Line(width) => driver.line_width(width),
            PolygonMode::Fill => {}
        }
    }
}

/// Viewport region to render to.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Viewport {
    /// X offset.
    pub x: u32,

    /// Y offset.
    pub y: u32,

    /// Width.
    pub w: u32,

    /// Height.
    pub h: u32,
}

impl Viewport {
    /// A viewport covering a whole `w` by `h` framebuffer.
    pub fn max(w: u32, h: u32) -> Self {
        Viewport { x: 0, y: 0, w, h }
    }

    /// Corresponds to `glViewport`.
    pub fn apply<D: Driver>(&self, driver: &D) {
        driver.viewport(self.x, self.y, self.w, self.h);
    }
}

/// Clear the color buffer of the bound framebuffer to `color` (RGBA).
pub fn clear<D: Driver>(driver: &D, color: [f32; 4]) {
    let [r, g, b, a] = color;
    driver.clear_color(r, g, b, a);
    driver.clear(gl::COLOR_BUFFER_BIT);
}
