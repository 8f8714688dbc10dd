use crate::{ppm, texture::Target, Color, Position, Result};
use std::{
    fmt,
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

/// A 2-dimensional buffer of colours that may be drawn to, displayed, and persisted as a binary PPM image.
///
/// Pixels are stored row-major: the pixel at `(x, y)` lives at linear index `y * width + x`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Canvas {
    size: [usize; 2],
    pixels: Vec<Color>,
}

impl Canvas {
    /// Create a new canvas with the given dimensions, filled with black.
    ///
    /// # Panics
    ///
    /// This function will panic if either dimension is zero or if the pixel count overflows `usize`.
    pub fn new(width: usize, height: usize) -> Self {
        Self::fill([width, height], Color::BLACK)
    }

    /// Create a new canvas with the given size, filled with the given colour.
    ///
    /// # Panics
    ///
    /// This function will panic if either dimension is zero or if the pixel count overflows `usize`.
    pub fn fill([width, height]: [usize; 2], color: Color) -> Self {
        assert!(
            width > 0 && height > 0,
            "Attempted to create a canvas of size {}x{}",
            width,
            height
        );
        let len = match width.checked_mul(height) {
            Some(len) => len,
            None => panic!("Canvas of size {}x{} is too large", width, height),
        };
        Self {
            size: [width, height],
            pixels: vec![color; len],
        }
    }

    pub(crate) fn from_raw(size: [usize; 2], pixels: Vec<Color>) -> Self {
        debug_assert_eq!(size[0] * size[1], pixels.len());
        Self { size, pixels }
    }

    /// Get the dimensions of this canvas as `[width, height]`.
    #[inline]
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.size[0]
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.size[1]
    }

    /// Convert the given position into a linear index into the raw pixel data, if it is within bounds.
    #[inline]
    pub fn linear_index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.y * self.size[0] + pos.x)
        } else {
            None
        }
    }

    /// Write the colour of one pixel.
    #[inline]
    pub fn set_pixel(&mut self, pos: Position, color: Color) -> Result<()> {
        self.write(pos, color)
    }

    /// Read the colour of one pixel.
    #[inline]
    pub fn get_pixel(&self, pos: Position) -> Result<Color> {
        self.read(pos)
    }

    /// Overwrite every pixel with the given colour.
    pub fn clear(&mut self, color: Color) {
        self.pixels.iter_mut().for_each(|pixel| *pixel = color);
    }

    /// View this canvas as a row-major slice of pixels.
    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// View this canvas as a mutable row-major slice of pixels.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// View the pixels as raw bytes, three per pixel in R, G, B order with no row padding.
    ///
    /// This is the layout expected by RGB24 surfaces and by the body of a binary PPM image.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write this canvas as a binary PPM image to the given stream.
    pub fn write_ppm<W: Write>(&self, writer: W) -> Result<()> {
        ppm::write(writer, self.size, self.as_bytes())
    }

    /// Read a canvas from a binary PPM image in the given stream.
    pub fn read_ppm<R: Read>(reader: R) -> Result<Self> {
        ppm::read(reader)
    }

    /// Save this canvas as a binary PPM (`P6`) image file.
    pub fn save_image<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = BufWriter::new(File::create(path)?);
        self.write_ppm(&mut writer)?;
        writer.flush()?;
        log::debug!(
            "saved {}x{} canvas to {}",
            self.width(),
            self.height(),
            path.display()
        );
        Ok(())
    }

    /// Replace this canvas with the contents of a binary PPM (`P6`) image file, adopting the image's dimensions.
    ///
    /// On failure the canvas is left unchanged.
    pub fn load_image<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let loaded = Self::read_ppm(BufReader::new(File::open(path)?))?;
        log::debug!(
            "loaded {}x{} canvas from {}",
            loaded.width(),
            loaded.height(),
            path.display()
        );
        *self = loaded;
        Ok(())
    }
}

impl Target for Canvas {
    type Texel = Color;

    #[inline]
    fn size(&self) -> [usize; 2] {
        Canvas::size(self)
    }

    #[inline]
    fn read(&self, pos: Position) -> Result<Color> {
        self.check(pos)?;
        Ok(self.pixels[pos.y * self.size[0] + pos.x])
    }

    #[inline]
    fn write(&mut self, pos: Position, color: Color) -> Result<()> {
        self.check(pos)?;
        let idx = pos.y * self.size[0] + pos.x;
        self.pixels[idx] = color;
        Ok(())
    }

    #[inline]
    fn clear(&mut self, color: Color) {
        Canvas::clear(self, color)
    }
}

impl AsRef<[Color]> for Canvas {
    fn as_ref(&self) -> &[Color] {
        &self.pixels
    }
}

impl AsMut<[Color]> for Canvas {
    fn as_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }
}

impl fmt::Debug for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Canvas(dimensions: {:?})", self.size)
    }
}

#[cfg(feature = "image")]
impl From<&Canvas> for image::RgbImage {
    fn from(canvas: &Canvas) -> Self {
        let pixels = canvas.pixels();
        image::RgbImage::from_fn(canvas.width() as u32, canvas.height() as u32, |x, y| {
            let color = pixels[y as usize * canvas.width() + x as usize];
            image::Rgb(color.into_array())
        })
    }
}

#[cfg(feature = "image")]
impl From<&image::RgbImage> for Canvas {
    /// # Panics
    ///
    /// Panics if the image has no pixels.
    fn from(img: &image::RgbImage) -> Self {
        let size = [img.width() as usize, img.height() as usize];
        let mut canvas = Canvas::new(size[0], size[1]);
        canvas
            .pixels_mut()
            .iter_mut()
            .zip(img.pixels())
            .for_each(|(pixel, px)| *pixel = Color::from(px.0));
        canvas
    }
}
