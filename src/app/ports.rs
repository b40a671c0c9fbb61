use image::RgbaImage;

use crate::app::error::AppError;

/// Discovers downloadable image URLs from a remote listing page.
pub trait ImageLister {
    fn list_images(&self, listing_url: &str) -> Result<Vec<String>, AppError>;
}

pub trait ImageFetcher {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, AppError>;
}

/// Turns fetched bytes into an in-memory RGBA bitmap. `source_url` is only a
/// format hint.
pub trait ImageDecoder {
    fn decode(&self, bytes: &[u8], source_url: &str) -> Result<RgbaImage, AppError>;
}
