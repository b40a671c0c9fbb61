use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};
use log::debug;
use resvg::{tiny_skia, usvg};
use tempfile::{Builder, NamedTempFile};

use crate::app::error::AppError;
use crate::app::ports::ImageDecoder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Svg,
    Raster,
}

pub fn detect_image_kind(source_url: &str, bytes: &[u8]) -> ImageKind {
    if extension_of(source_url).is_some_and(|ext| ext.eq_ignore_ascii_case("svg")) {
        return ImageKind::Svg;
    }

    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    let head = head.trim_start_matches('\u{feff}').trim_start();
    if head.starts_with("<svg") || (head.starts_with("<?xml") && head.contains("<svg")) {
        ImageKind::Svg
    } else {
        ImageKind::Raster
    }
}

/// Stages fetched bytes in a temporary file and decodes from there. The file
/// is removed as soon as decoding finishes.
#[derive(Debug, Clone, Default)]
pub struct TempFileDecoder {
    staging_dir: Option<PathBuf>,
}

impl TempFileDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(staging_dir: impl Into<PathBuf>) -> Self {
        Self {
            staging_dir: Some(staging_dir.into()),
        }
    }

    fn stage(&self, bytes: &[u8], source_url: &str) -> Result<NamedTempFile, AppError> {
        let suffix = extension_of(source_url)
            .map(|ext| format!(".{ext}"))
            .unwrap_or_default();
        let mut builder = Builder::new();
        builder.prefix("icon-canvas-").suffix(&suffix);
        let mut file = match &self.staging_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;
        Ok(file)
    }
}

impl ImageDecoder for TempFileDecoder {
    fn decode(&self, bytes: &[u8], source_url: &str) -> Result<RgbaImage, AppError> {
        let staged = self.stage(bytes, source_url)?;
        debug!("staged {} bytes at {:?}", bytes.len(), staged.path());

        let decoded = match detect_image_kind(source_url, bytes) {
            ImageKind::Svg => decode_svg(staged.path()),
            ImageKind::Raster => decode_raster(staged.path()),
        };

        staged.close()?;
        decoded
    }
}

fn decode_raster(path: &Path) -> Result<RgbaImage, AppError> {
    let image = ImageReader::open(path)?
        .with_guessed_format()?
        .decode()
        .map_err(|error| AppError::Decode(format!("failed to decode {:?}: {error}", path)))?;
    Ok(image.to_rgba8())
}

fn decode_svg(path: &Path) -> Result<RgbaImage, AppError> {
    let data = fs::read(path)?;
    let tree = usvg::Tree::from_data(&data, &usvg::Options::default())
        .map_err(|error| AppError::Decode(format!("failed to parse SVG {:?}: {error}", path)))?;

    let size = tree.size().to_int_size();
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height()).ok_or_else(|| {
        AppError::Decode(format!(
            "SVG {:?} has unusable size {}x{}",
            path,
            size.width(),
            size.height()
        ))
    })?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    // tiny-skia stores premultiplied alpha; the rest of the app expects straight RGBA.
    let mut straight = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        straight.extend_from_slice(&[color.red(), color.green(), color.blue(), color.alpha()]);
    }

    RgbaImage::from_raw(pixmap.width(), pixmap.height(), straight)
        .ok_or_else(|| AppError::Decode(format!("SVG {:?} produced a short buffer", path)))
}

fn extension_of(source_url: &str) -> Option<&str> {
    let path = source_url.split(['?', '#']).next().unwrap_or_default();
    let file_name = path.rsplit('/').next()?;
    let (_, ext) = file_name.rsplit_once('.')?;
    if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        return None;
    }
    Some(ext)
}
