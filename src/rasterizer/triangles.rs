use super::{LineRasterizer, Lines};
use crate::{
    index::IndexedVertices,
    primitives::{triangle_list, Triangle},
    texture::Target,
    Color, Position, Result,
};

/// Determine whether three positions form a proper (non-degenerate) triangle.
pub fn is_triangle(v0: Position, v1: Position, v2: Position) -> bool {
    Triangle::new(v0, v1, v2).is_valid()
}

/// A rasterizer that produces wireframe triangles by drawing their three edges with a [`LineRasterizer`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Triangles<L = Lines> {
    lines: L,
}

impl<L: LineRasterizer> Triangles<L> {
    pub fn new(lines: L) -> Self {
        Self { lines }
    }

    /// Compute the outline of a triangle: the pixel positions of the edges `(v0, v1)`, `(v1, v2)` and `(v2, v0)`,
    /// concatenated in that order.
    ///
    /// Fails with [`Error::DegenerateTriangle`](crate::Error::DegenerateTriangle) if the vertices are collinear or
    /// coincident.
    pub fn pixel_positions(&self, v0: Position, v1: Position, v2: Position) -> Result<Vec<Position>> {
        let tri = Triangle::new(v0, v1, v2);
        tri.validate()?;
        Ok(self.outline(&tri))
    }

    /// Paint the outline of every consecutive triple of vertices.
    ///
    /// The whole batch is validated first (vertex count, degeneracy, bounds), so a failed call leaves the target
    /// untouched.
    pub fn draw_triangles<T>(&self, target: &mut T, vertices: &[Position], color: Color) -> Result<()>
    where
        T: Target<Texel = Color>,
    {
        let tris = triangle_list(vertices)?.collect::<Vec<_>>();
        self.draw_batch(target, &tris, color)
    }

    /// Paint the outline of every triangle described by an index triple into the shared vertex array.
    ///
    /// Fails with [`Error::IndexCount`](crate::Error::IndexCount) if the index count is not a multiple of 3 and with
    /// [`Error::IndexOutOfBounds`](crate::Error::IndexOutOfBounds) if an index does not refer to a vertex. As with
    /// [`Triangles::draw_triangles`], nothing is written unless the whole batch is valid.
    pub fn draw_indexed_triangles<T>(
        &self,
        target: &mut T,
        vertices: &[Position],
        indices: &[u16],
        color: Color,
    ) -> Result<()>
    where
        T: Target<Texel = Color>,
    {
        let tris = IndexedVertices::new(vertices, indices)?
            .triangles()
            .collect::<Vec<_>>();
        self.draw_batch(target, &tris, color)
    }

    fn draw_batch<T>(&self, target: &mut T, tris: &[Triangle<Position>], color: Color) -> Result<()>
    where
        T: Target<Texel = Color>,
    {
        for tri in tris {
            tri.validate()?;
            // Every edge pixel lies within the bounding box
            let [min, max] = tri.bounds();
            target.check(min)?;
            target.check(max)?;
        }

        for tri in tris {
            log::trace!("drawing wireframe triangle {:?}", tri.vertices);
            self.outline(tri)
                .into_iter()
                .try_for_each(|pos| target.write(pos, color))?;
        }
        log::debug!("drew {} wireframe triangles", tris.len());
        Ok(())
    }

    fn outline(&self, tri: &Triangle<Position>) -> Vec<Position> {
        tri.edges()
            .iter()
            .flat_map(|&(start, end)| self.lines.pixel_positions(start, end))
            .collect()
    }
}
