use crate::{primitives::Triangle, Error, Result};

/// A helper type that makes indexed vertex access easier.
///
/// Indices are validated once, on construction: the index count must be a multiple of 3 and every index must refer
/// to a vertex. Iteration afterwards cannot fail, so a batch of indexed triangles is either rejected as a whole or
/// drawn as a whole.
#[derive(Copy, Clone, Debug)]
pub struct IndexedVertices<'a, V> {
    vertices: &'a [V],
    indices: &'a [u16],
}

impl<'a, V: Copy> IndexedVertices<'a, V> {
    pub fn new(vertices: &'a [V], indices: &'a [u16]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::IndexCount { len: indices.len() });
        }
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
            return Err(Error::IndexOutOfBounds {
                index: index as usize,
                len: vertices.len(),
            });
        }
        Ok(Self { vertices, indices })
    }

    /// The number of triangles described by the indices.
    pub fn len(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Iterate over the triangles, looking up each index triple in the vertex array.
    pub fn triangles(&self) -> impl Iterator<Item = Triangle<V>> + 'a {
        let vertices = self.vertices;
        self.indices.chunks_exact(3).map(move |tri| {
            Triangle::new(
                vertices[tri[0] as usize],
                vertices[tri[1] as usize],
                vertices[tri[2] as usize],
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn shares_vertices_between_triangles() {
        let vertices = ['a', 'b', 'c', 'd'];
        let indexed = IndexedVertices::new(&vertices, &[0, 1, 2, 0, 1, 3]).unwrap();
        assert_eq!(indexed.len(), 2);
        let tris = indexed.triangles().map(|t| t.vertices).collect::<Vec<_>>();
        assert_eq!(tris, vec![['a', 'b', 'c'], ['a', 'b', 'd']]);
    }

    #[test]
    fn index_count_must_be_a_multiple_of_three() {
        let err = IndexedVertices::new(&[0u8; 3], &[0, 1, 2, 0]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn indices_must_refer_to_vertices() {
        let err = IndexedVertices::new(&[0u8; 3], &[0, 1, 3]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OutOfBounds);
        match err {
            Error::IndexOutOfBounds { index, len } => assert_eq!((index, len), (3, 3)),
            err => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn empty_indices_draw_nothing() {
        let indexed = IndexedVertices::<u8>::new(&[], &[]).unwrap();
        assert!(indexed.is_empty());
        assert_eq!(indexed.triangles().count(), 0);
    }
}
