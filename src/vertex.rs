use crate::{interpolate::Interpolate, Color, Position};
use vek::{Rgb, Vec2};

/// A vertex with a real-valued position and colour, as consumed and produced by shaders.
///
/// Both fields are interpolated across a triangle during rasterization and are only quantised to a [`Position`] and
/// [`Color`] when the final pixel is written.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShadedVertex {
    pub pos: Vec2<f64>,
    pub color: Rgb<f64>,
}

impl ShadedVertex {
    pub fn new(x: f64, y: f64, r: f64, g: f64, b: f64) -> Self {
        Self {
            pos: Vec2::new(x, y),
            color: Rgb::new(r, g, b),
        }
    }

    /// The pixel this vertex falls into, by truncating its coordinates toward zero.
    ///
    /// Returns `None` if a coordinate is non-finite or truncates to a negative value.
    pub fn position(&self) -> Option<Position> {
        let (x, y) = (self.pos.x.trunc(), self.pos.y.trunc());
        if x.is_finite() && y.is_finite() && x >= 0.0 && y >= 0.0 {
            Some(Position::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// The colour of this vertex, truncated and saturated to 8 bits per channel.
    pub fn to_color(&self) -> Color {
        Color::from_rgb_f64(self.color)
    }

    pub fn is_finite(&self) -> bool {
        self.pos.x.is_finite() && self.pos.y.is_finite()
    }
}

impl From<(Position, Color)> for ShadedVertex {
    fn from((pos, color): (Position, Color)) -> Self {
        Self {
            pos: pos.to_vec2(),
            color: color.into(),
        }
    }
}

impl Interpolate for ShadedVertex {
    #[inline(always)]
    fn lerp2(a: Self, b: Self, x: f64, y: f64) -> Self {
        Self {
            pos: Vec2::lerp2(a.pos, b.pos, x, y),
            color: Rgb::lerp2(a.color, b.color, x, y),
        }
    }
}
