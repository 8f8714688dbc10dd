use crate::rng::Rng;
use bytemuck::{Pod, Zeroable};
use vek::Rgb;

/// An 8-bit RGB colour, laid out exactly as one pixel of a binary PPM image.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(C)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Generate a colour with uniformly random channels.
    pub fn random(rng: &mut Rng) -> Self {
        Self::new(rng.next_u8(), rng.next_u8(), rng.next_u8())
    }

    /// Quantise real-valued channels by truncation, saturating to `[0, 255]`.
    ///
    /// `NaN` channels become 0.
    pub fn from_rgb_f64(rgb: Rgb<f64>) -> Self {
        Self::new(rgb.r as u8, rgb.g as u8, rgb.b as u8)
    }

    pub fn into_array(self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Rgb<u8>> for Color {
    fn from(rgb: Rgb<u8>) -> Self {
        Self::new(rgb.r, rgb.g, rgb.b)
    }
}

impl From<Color> for Rgb<u8> {
    fn from(color: Color) -> Self {
        Rgb::new(color.red, color.green, color.blue)
    }
}

impl From<Color> for Rgb<f64> {
    fn from(color: Color) -> Self {
        Rgb::new(color.red as f64, color.green as f64, color.blue as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }

    #[test]
    fn quantisation_truncates_and_saturates() {
        assert_eq!(
            Color::from_rgb_f64(Rgb::new(12.9, 255.0, 0.5)),
            Color::new(12, 255, 0)
        );
        assert_eq!(
            Color::from_rgb_f64(Rgb::new(-3.0, 300.0, f64::NAN)),
            Color::new(0, 255, 0)
        );
    }

    #[test]
    fn byte_layout_is_rgb() {
        let colors = [Color::RED, Color::new(1, 2, 3)];
        let bytes: &[u8] = bytemuck::cast_slice(&colors);
        assert_eq!(bytes, &[255, 0, 0, 1, 2, 3]);
    }

    #[test]
    fn random_is_seeded() {
        let a = Color::random(&mut Rng::new(3));
        let b = Color::random(&mut Rng::new(3));
        assert_eq!(a, b);
    }
}
