//! A small software rasterizer for 2D pixel canvases.
//!
//! `tinyraster` draws onto a [`Canvas`] (or anything implementing [`Target`]) on the CPU:
//!
//! - Lines, scan-converted with Bresenham's algorithm ([`Lines`])
//! - Wireframe triangles, from vertex lists or shared vertices plus an index list ([`Triangles`])
//! - Filled triangles whose vertex attributes are interpolated across every pixel and run through a programmable
//!   [`ShaderStage`] ([`draw_shaded_triangles`])
//!
//! Canvases can be saved to and loaded from binary PPM (`P6`) images. Every operation is synchronous and
//! deterministic: the same inputs always produce the same pixel writes in the same order.
//!
//! ```
//! use tinyraster::{Canvas, Color, Passthrough, Position, ShadedVertex, ShaderStage, Lines};
//!
//! let mut canvas = Canvas::new(64, 64);
//! Lines.draw_line(&mut canvas, Position::new(0, 0), Position::new(63, 20), Color::WHITE)?;
//!
//! let vertices = [
//!     ShadedVertex::new(4.0, 4.0, 255.0, 0.0, 0.0),
//!     ShadedVertex::new(60.0, 10.0, 0.0, 255.0, 0.0),
//!     ShadedVertex::new(20.0, 60.0, 0.0, 0.0, 255.0),
//! ];
//! Passthrough::default().render(&mut canvas, &vertices, &[0, 1, 2])?;
//! assert_eq!(canvas.get_pixel(Position::new(4, 4))?, Color::RED);
//! # Ok::<(), tinyraster::Error>(())
//! ```

#[cfg(feature = "image")]
extern crate image_ as image;

pub mod buffer;
pub mod color;
pub mod error;
pub mod index;
pub mod interpolate;
pub mod math;
pub mod pipeline;
pub mod position;
mod ppm;
pub mod primitives;
pub mod rasterizer;
pub mod rng;
pub mod texture;
pub mod vertex;

// Reexports
pub use self::{
    buffer::Canvas,
    color::Color,
    error::{Error, ErrorKind, Result},
    index::IndexedVertices,
    interpolate::{interpolate, Interpolate},
    pipeline::{draw_shaded_triangles, BoundsMode, Flat, FnShader, Passthrough, ShaderStage, Uniform},
    position::Position,
    primitives::Triangle,
    rasterizer::{is_triangle, rasterize_triangle, Fragments, LineRasterizer, Lines, Triangles},
    rng::Rng,
    texture::Target,
    vertex::ShadedVertex,
};
