use crate::{Error, Position, Result};

/// A trait implemented by 2-dimensional pixel surfaces that may be treated as render targets.
///
/// All rasterizers in this crate draw through this trait, so anything that can store a texel per position (a
/// [`Canvas`](crate::Canvas), a recording surface in a test, a window's back buffer) can be drawn to. Accesses are
/// bounds-checked: implementations must report [`Error::PixelOutOfBounds`] rather than panic for positions outside of
/// [`Target::size`].
pub trait Target {
    /// The type of target elements.
    type Texel: Clone;

    /// Get the dimensions of the target as `[width, height]`.
    fn size(&self) -> [usize; 2];

    /// Determine whether the given position lies within the target.
    #[inline]
    fn contains(&self, pos: Position) -> bool {
        let [width, height] = self.size();
        pos.x < width && pos.y < height
    }

    /// Check that the given position lies within the target.
    #[inline]
    fn check(&self, pos: Position) -> Result<()> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(Error::PixelOutOfBounds {
                position: pos,
                size: self.size(),
            })
        }
    }

    /// Read the texel at the given position.
    fn read(&self, pos: Position) -> Result<Self::Texel>;

    /// Write a texel at the given position.
    fn write(&mut self, pos: Position, texel: Self::Texel) -> Result<()>;

    /// Overwrite every texel of the target with the given texel.
    fn clear(&mut self, texel: Self::Texel);
}

impl<'a, T: Target> Target for &'a mut T {
    type Texel = T::Texel;
    #[inline(always)]
    fn size(&self) -> [usize; 2] {
        (**self).size()
    }
    #[inline(always)]
    fn read(&self, pos: Position) -> Result<Self::Texel> {
        (**self).read(pos)
    }
    #[inline(always)]
    fn write(&mut self, pos: Position, texel: Self::Texel) -> Result<()> {
        (**self).write(pos, texel)
    }
    #[inline(always)]
    fn clear(&mut self, texel: Self::Texel) {
        (**self).clear(texel)
    }
}
