use crate::{math, Error, Position, Result};
use core::cmp::Ordering;

/// Three vertices forming a triangle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triangle<V> {
    pub vertices: [V; 3],
}

impl<V: Copy> Triangle<V> {
    pub fn new(a: V, b: V, c: V) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// The three edges of the triangle, in the order `(a, b)`, `(b, c)`, `(c, a)`.
    pub fn edges(&self) -> [(V, V); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}

impl Triangle<Position> {
    /// Determine whether the vertices satisfy the strict triangle inequality, i.e: they are neither collinear nor
    /// coincident.
    pub fn is_valid(&self) -> bool {
        let [a, b, c] = self.vertices;
        math::orientation(a, b, c) != Ordering::Equal
    }

    /// Check that the vertices form a proper triangle.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::DegenerateTriangle {
                vertices: self.vertices,
            })
        }
    }

    /// The inclusive bounding box of the triangle as `[min, max]`.
    pub fn bounds(&self) -> [Position; 2] {
        let [a, b, c] = self.vertices;
        [
            Position::new(a.x.min(b.x).min(c.x), a.y.min(b.y).min(c.y)),
            Position::new(a.x.max(b.x).max(c.x), a.y.max(b.y).max(c.y)),
        ]
    }
}

/// Split a flat vertex array into consecutive triangles.
///
/// Fails with [`Error::VertexCount`] if the number of vertices is not a multiple of 3.
pub fn triangle_list<V: Copy>(vertices: &[V]) -> Result<impl Iterator<Item = Triangle<V>> + '_> {
    if vertices.len() % 3 != 0 {
        return Err(Error::VertexCount {
            len: vertices.len(),
        });
    }
    Ok(vertices
        .chunks_exact(3)
        .map(|tri| Triangle::new(tri[0], tri[1], tri[2])))
}
