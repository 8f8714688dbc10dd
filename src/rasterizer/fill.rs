use crate::{
    interpolate::{interpolate, Interpolate},
    math::{fraction, steps},
    Error, Result, ShadedVertex,
};
use core::cmp::Ordering;

/// Split a triangle into flat-topped and flat-bottomed halves and prepare to scan them.
///
/// The vertices are sorted by ascending `y` into `top`, `middle` and `bottom`. The point on the edge `top - bottom`
/// at the height of `middle` splits the triangle into two halves sharing the horizontal edge `(middle, split)`, one
/// with apex `top` and one with apex `bottom`. A triangle whose vertices all share the same `y` is scanned as a
/// single run from its leftmost to its rightmost vertex.
///
/// Fails with [`Error::NonFiniteVertex`] if any coordinate is `NaN` or infinite.
pub fn rasterize_triangle(v0: ShadedVertex, v1: ShadedVertex, v2: ShadedVertex) -> Result<Fragments> {
    let mut verts = [v0, v1, v2];
    if !verts.iter().all(ShadedVertex::is_finite) {
        return Err(Error::NonFiniteVertex);
    }
    // Stable, so vertices sharing a `y` keep their input order
    verts.sort_by(|a, b| a.pos.y.partial_cmp(&b.pos.y).unwrap_or(Ordering::Equal));
    let [top, middle, bottom] = verts;

    let halves = if top.pos.y == bottom.pos.y {
        let by_x = |a: &&ShadedVertex, b: &&ShadedVertex| {
            a.pos.x.partial_cmp(&b.pos.x).unwrap_or(Ordering::Equal)
        };
        let left = *verts.iter().min_by(by_x).unwrap_or(&top);
        let right = *verts.iter().max_by(by_x).unwrap_or(&bottom);
        [Some(FlatTriangle::new(left, right, left)), None]
    } else {
        let t = (middle.pos.y - top.pos.y).abs() / (top.pos.y - bottom.pos.y).abs();
        let split = interpolate(top, bottom, t)?;
        [
            Some(FlatTriangle::new(middle, split, top)),
            Some(FlatTriangle::new(middle, split, bottom)),
        ]
    };

    Ok(Fragments {
        halves,
        half: 0,
        next_row: 0,
        row: None,
    })
}

/// One half of a split triangle: a horizontal edge `(left, right)` converging on `apex`.
#[derive(Copy, Clone, Debug)]
struct FlatTriangle {
    left: ShadedVertex,
    right: ShadedVertex,
    apex: ShadedVertex,
    steps: usize,
}

impl FlatTriangle {
    fn new(left: ShadedVertex, right: ShadedVertex, apex: ShadedVertex) -> Self {
        Self {
            left,
            right,
            apex,
            steps: steps(left.pos.y, apex.pos.y),
        }
    }
}

/// A horizontal run of fragments between two interpolated edge points.
#[derive(Copy, Clone, Debug)]
struct Run {
    left: ShadedVertex,
    right: ShadedVertex,
    steps: usize,
    next: usize,
}

/// A lazy sequence of interpolated fragments covering a triangle, produced by [`rasterize_triangle`].
///
/// Each half is walked from its flat edge toward its apex in `steps + 1` rows (where `steps` is the truncated height
/// of the half), and each row from its left edge point to its right edge point in `steps + 1` fragments (where
/// `steps` is the truncated width of the row). A zero-height half yields its flat edge alone; a zero-width row yields
/// a single fragment. Every fragment has all of its attributes linearly interpolated.
#[derive(Clone, Debug)]
pub struct Fragments {
    halves: [Option<FlatTriangle>; 2],
    half: usize,
    next_row: usize,
    row: Option<Run>,
}

impl Iterator for Fragments {
    type Item = ShadedVertex;

    fn next(&mut self) -> Option<ShadedVertex> {
        loop {
            if let Some(run) = &mut self.row {
                if run.next <= run.steps {
                    let t = fraction(run.next, run.steps);
                    run.next += 1;
                    return Some(ShadedVertex::lerp_unchecked(run.left, run.right, t));
                }
                self.row = None;
            }

            let flat = (*self.halves.get(self.half)?)?;
            if self.next_row <= flat.steps {
                let t = fraction(self.next_row, flat.steps);
                let left = ShadedVertex::lerp_unchecked(flat.left, flat.apex, t);
                let right = ShadedVertex::lerp_unchecked(flat.right, flat.apex, t);
                self.row = Some(Run {
                    left,
                    right,
                    steps: steps(right.pos.x, left.pos.x),
                    next: 0,
                });
                self.next_row += 1;
            } else {
                self.half += 1;
                self.next_row = 0;
            }
        }
    }
}
