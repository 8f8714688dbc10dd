use crate::{
    index::IndexedVertices, rasterizer::rasterize_triangle, texture::Target, Color, Error, Result,
    ShadedVertex,
};
use core::ops::{Index, IndexMut};

/// A block of seven real-valued shader parameters.
///
/// The meaning of each parameter is a convention between the caller and the shader (a zoom factor, a cursor
/// position, a colour, a radius, ...). The renderer never reads them.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Uniform(pub [f64; Uniform::LEN]);

impl Uniform {
    pub const LEN: usize = 7;

    pub fn new(params: [f64; Uniform::LEN]) -> Self {
        Self(params)
    }
}

impl From<[f64; Uniform::LEN]> for Uniform {
    fn from(params: [f64; Uniform::LEN]) -> Self {
        Self(params)
    }
}

impl Index<usize> for Uniform {
    type Output = f64;
    fn index(&self, idx: usize) -> &f64 {
        &self.0[idx]
    }
}

impl IndexMut<usize> for Uniform {
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        &mut self.0[idx]
    }
}

/// Defines what happens to fragments that do not land on the target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum BoundsMode {
    /// Abort the draw call with an out-of-bounds error. Fragments already written stay written.
    Strict,
    /// Silently discard the fragment.
    Clip,
}

impl Default for BoundsMode {
    fn default() -> Self {
        Self::Strict
    }
}

/// A programmable shader stage, invoked once per vertex before rasterization and once per fragment after it.
///
/// Shaders are called synchronously and in a deterministic order. Any state beyond what [`ShaderStage::set_uniforms`]
/// provides is the implementation's own business.
///
/// Additional methods such as [`ShaderStage::bounds_mode`] may be implemented to customize the behaviour of the draw
/// call.
pub trait ShaderStage {
    /// Accept a new block of parameters.
    ///
    /// The default implementation ignores them.
    #[inline]
    fn set_uniforms(&mut self, _uniform: &Uniform) {}

    /// Returns the [`BoundsMode`] of this shader.
    #[inline]
    fn bounds_mode(&self) -> BoundsMode {
        BoundsMode::default()
    }

    /// Transform a vertex before its triangle is rasterized.
    fn vertex_shader(&mut self, vertex: ShadedVertex) -> ShadedVertex;

    /// Compute the final colour of an interpolated fragment.
    fn fragment_shader(&mut self, fragment: &ShadedVertex) -> Color;

    /// Draw the indexed triangles onto the target with this shader.
    ///
    /// **Do not implement this method**; see [`draw_shaded_triangles`].
    fn render<T>(&mut self, target: &mut T, vertices: &[ShadedVertex], indices: &[u16]) -> Result<()>
    where
        Self: Sized,
        T: Target<Texel = Color>,
    {
        draw_shaded_triangles(target, vertices, indices, self)
    }
}

impl<'a, S: ShaderStage + ?Sized> ShaderStage for &'a mut S {
    #[inline]
    fn set_uniforms(&mut self, uniform: &Uniform) {
        (**self).set_uniforms(uniform)
    }
    #[inline]
    fn bounds_mode(&self) -> BoundsMode {
        (**self).bounds_mode()
    }
    #[inline]
    fn vertex_shader(&mut self, vertex: ShadedVertex) -> ShadedVertex {
        (**self).vertex_shader(vertex)
    }
    #[inline]
    fn fragment_shader(&mut self, fragment: &ShadedVertex) -> Color {
        (**self).fragment_shader(fragment)
    }
}

/// Fill every triangle described by an index triple with interpolated fragments coloured by the shader.
///
/// For each triangle the three vertices are looked up and passed through [`ShaderStage::vertex_shader`], the
/// transformed triangle is scan-converted with [`rasterize_triangle`], and every fragment is passed through
/// [`ShaderStage::fragment_shader`] before being written at its truncated position.
///
/// The index list is validated up front (see [`IndexedVertices`]). Fragments that miss the target are handled
/// according to [`ShaderStage::bounds_mode`].
pub fn draw_shaded_triangles<T, S>(
    target: &mut T,
    vertices: &[ShadedVertex],
    indices: &[u16],
    shader: &mut S,
) -> Result<()>
where
    T: Target<Texel = Color>,
    S: ShaderStage + ?Sized,
{
    let indexed = IndexedVertices::new(vertices, indices)?;
    let bounds_mode = shader.bounds_mode();
    let (mut written, mut clipped) = (0usize, 0usize);

    for tri in indexed.triangles() {
        let [a, b, c] = tri.vertices;
        let (a, b, c) = (
            shader.vertex_shader(a),
            shader.vertex_shader(b),
            shader.vertex_shader(c),
        );
        log::trace!("filling triangle {:?}", [a.pos, b.pos, c.pos]);

        for fragment in rasterize_triangle(a, b, c)? {
            let color = shader.fragment_shader(&fragment);
            match (fragment.position().filter(|pos| target.contains(*pos)), bounds_mode) {
                (Some(pos), _) => {
                    target.write(pos, color)?;
                    written += 1;
                }
                (None, BoundsMode::Clip) => clipped += 1,
                (None, BoundsMode::Strict) => {
                    return Err(match fragment.position() {
                        Some(position) => Error::PixelOutOfBounds {
                            position,
                            size: target.size(),
                        },
                        None => Error::FragmentOutOfBounds {
                            x: fragment.pos.x,
                            y: fragment.pos.y,
                        },
                    })
                }
            }
        }
    }

    log::debug!(
        "filled {} triangles: {} fragments written, {} clipped",
        indexed.len(),
        written,
        clipped
    );
    Ok(())
}

/// A shader that leaves vertices untouched and colours each fragment with its interpolated colour.
#[derive(Copy, Clone, Debug, Default)]
pub struct Passthrough {
    pub bounds_mode: BoundsMode,
}

impl ShaderStage for Passthrough {
    fn bounds_mode(&self) -> BoundsMode {
        self.bounds_mode
    }

    #[inline]
    fn vertex_shader(&mut self, vertex: ShadedVertex) -> ShadedVertex {
        vertex
    }

    #[inline]
    fn fragment_shader(&mut self, fragment: &ShadedVertex) -> Color {
        fragment.to_color()
    }
}

/// A shader that colours every fragment of every triangle with one colour.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Flat(pub Color);

impl ShaderStage for Flat {
    #[inline]
    fn vertex_shader(&mut self, vertex: ShadedVertex) -> ShadedVertex {
        vertex
    }

    #[inline]
    fn fragment_shader(&mut self, _fragment: &ShadedVertex) -> Color {
        self.0
    }
}

/// A shader built from a pair of closures.
///
/// The most recent uniforms are kept in [`FnShader::uniform`] and handed to both closures.
#[derive(Clone, Debug)]
pub struct FnShader<V, F> {
    pub uniform: Uniform,
    pub bounds_mode: BoundsMode,
    vertex: V,
    fragment: F,
}

impl<V, F> FnShader<V, F>
where
    V: FnMut(&Uniform, ShadedVertex) -> ShadedVertex,
    F: FnMut(&Uniform, &ShadedVertex) -> Color,
{
    pub fn new(vertex: V, fragment: F) -> Self {
        Self {
            uniform: Uniform::default(),
            bounds_mode: BoundsMode::default(),
            vertex,
            fragment,
        }
    }

    pub fn with_bounds_mode(self, bounds_mode: BoundsMode) -> Self {
        Self {
            bounds_mode,
            ..self
        }
    }
}

impl<V, F> ShaderStage for FnShader<V, F>
where
    V: FnMut(&Uniform, ShadedVertex) -> ShadedVertex,
    F: FnMut(&Uniform, &ShadedVertex) -> Color,
{
    fn set_uniforms(&mut self, uniform: &Uniform) {
        self.uniform = *uniform;
    }

    fn bounds_mode(&self) -> BoundsMode {
        self.bounds_mode
    }

    fn vertex_shader(&mut self, vertex: ShadedVertex) -> ShadedVertex {
        (self.vertex)(&self.uniform, vertex)
    }

    fn fragment_shader(&mut self, fragment: &ShadedVertex) -> Color {
        (self.fragment)(&self.uniform, fragment)
    }
}
