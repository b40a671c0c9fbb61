use image::RgbaImage;

use crate::engine::color::average_color;

/// Status line describing the most recently added or grouped image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InfoDisplay {
    text: Option<String>,
}

impl InfoDisplay {
    pub fn update(&mut self, bitmap: &RgbaImage) {
        self.text = Some(format!(
            "Size: {} x {}  Color: {}",
            bitmap.width(),
            bitmap.height(),
            average_color(bitmap)
        ));
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn starts_blank() {
        assert_eq!(InfoDisplay::default().text(), None);
    }

    #[test]
    fn update_overwrites_previous_text() {
        let mut info = InfoDisplay::default();
        info.update(&RgbaImage::from_pixel(72, 72, Rgba([0, 128, 255, 255])));
        assert_eq!(info.text(), Some("Size: 72 x 72  Color: rgb(0, 128, 255)"));

        info.update(&RgbaImage::new(0, 0));
        assert_eq!(info.text(), Some("Size: 0 x 0  Color: rgb(10, 10, 10)"));
    }
}
