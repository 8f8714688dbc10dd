use crate::{texture::Target, Color, Position, Result};

/// A trait implemented by algorithms that turn a line segment into discrete pixel positions.
pub trait LineRasterizer {
    /// Compute every pixel position on the line from `start` to `end`, including both endpoints, ordered from `start`
    /// to `end`.
    fn pixel_positions(&self, start: Position, end: Position) -> Vec<Position>;
}

/// A rasterizer that produces 8-connected lines with Bresenham's incremental integer-error algorithm.
///
/// The walk always runs from the lexicographically smaller endpoint and is reversed when needed, so a line and its
/// reverse cover exactly the same pixels.
#[derive(Copy, Clone, Debug, Default)]
pub struct Lines;

impl Lines {
    /// Paint the line from `start` to `end` onto the target.
    ///
    /// Both endpoints are checked before anything is written, so an out-of-bounds line leaves the target untouched.
    pub fn draw_line<T>(&self, target: &mut T, start: Position, end: Position, color: Color) -> Result<()>
    where
        T: Target<Texel = Color>,
    {
        target.check(start)?;
        target.check(end)?;
        self.pixel_positions(start, end)
            .into_iter()
            .try_for_each(|pos| target.write(pos, color))
    }
}

impl LineRasterizer for Lines {
    fn pixel_positions(&self, start: Position, end: Position) -> Vec<Position> {
        if end < start {
            let mut positions = walk(end, start);
            positions.reverse();
            positions
        } else {
            walk(start, end)
        }
    }
}

fn walk(start: Position, end: Position) -> Vec<Position> {
    // Wide enough to hold any `usize` coordinate and the deltas between them
    let (mut x0, mut y0) = (start.x as i128, start.y as i128);
    let (x1, y1) = (end.x as i128, end.y as i128);

    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut positions = Vec::with_capacity((dx.max(dy) as usize).saturating_add(1));
    // Walk the major axis, stepping the minor axis whenever the error crosses zero
    if dx > dy {
        let mut error = dx / 2;
        while x0 != x1 {
            positions.push(Position::new(x0 as usize, y0 as usize));
            x0 += sx;
            error -= dy;
            if error < 0 {
                y0 += sy;
                error += dx;
            }
        }
    } else {
        let mut error = dy / 2;
        while y0 != y1 {
            positions.push(Position::new(x0 as usize, y0 as usize));
            y0 += sy;
            error -= dx;
            if error < 0 {
                x0 += sx;
                error += dy;
            }
        }
    }
    positions.push(Position::new(x0 as usize, y0 as usize));

    positions
}
