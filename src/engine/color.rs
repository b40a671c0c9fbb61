use std::fmt::{Display, Formatter};

use image::RgbaImage;

/// Mean RGB of a bitmap. Alpha never contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AverageColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl AverageColor {
    /// Reported for bitmaps without any pixels.
    pub const FALLBACK: AverageColor = AverageColor::new(10, 10, 10);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Default for AverageColor {
    fn default() -> Self {
        Self::FALLBACK
    }
}

impl Display for AverageColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

pub fn average_color(bitmap: &RgbaImage) -> AverageColor {
    let total_pixels = u64::from(bitmap.width()) * u64::from(bitmap.height());
    if total_pixels == 0 {
        return AverageColor::FALLBACK;
    }

    let (mut total_r, mut total_g, mut total_b) = (0_u64, 0_u64, 0_u64);
    for pixel in bitmap.pixels() {
        let [r, g, b, _alpha] = pixel.0;
        total_r += u64::from(r);
        total_g += u64::from(g);
        total_b += u64::from(b);
    }

    // Each mean is bounded by the largest channel value, so the casts are lossless.
    AverageColor::new(
        (total_r / total_pixels) as u8,
        (total_g / total_pixels) as u8,
        (total_b / total_pixels) as u8,
    )
}
