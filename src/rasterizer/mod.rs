//! Scan conversion of lines and triangles into pixel positions.
//!
//! Rasterizers are stateless values composed rather than layered: [`Triangles`] is parameterised over the
//! [`LineRasterizer`] it draws its edges with, and [`Fragments`] produces the interpolated fragments that
//! [`draw_shaded_triangles`](crate::pipeline::draw_shaded_triangles) hands to a shader.

mod fill;
mod lines;
mod triangles;

pub use self::{
    fill::{rasterize_triangle, Fragments},
    lines::{LineRasterizer, Lines},
    triangles::{is_triangle, Triangles},
};
