use crate::rng::Rng;
use vek::Vec2;

/// An integer pixel coordinate. The origin is the top-left corner and `y` increases downward.
///
/// Positions order lexicographically by `x`, then `y`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Generate a position uniformly distributed within `[0, width) × [0, height)`.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero.
    pub fn random(width: usize, height: usize, rng: &mut Rng) -> Self {
        Self::new(rng.next_below(width), rng.next_below(height))
    }

    pub fn to_vec2(self) -> Vec2<f64> {
        Vec2::new(self.x as f64, self.y as f64)
    }
}

impl From<[usize; 2]> for Position {
    fn from([x, y]: [usize; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Position> for [usize; 2] {
    fn from(pos: Position) -> Self {
        [pos.x, pos.y]
    }
}
