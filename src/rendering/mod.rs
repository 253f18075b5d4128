//! Glyph rendering: font rasterization, centering and color compositing

pub mod color;
pub mod layout;
pub mod paint;
pub mod raster;

pub use color::Rgba;
pub use raster::GlyphRasterizer;

use crate::Result;
use image::{ImageFormat, RgbaImage};
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::Path;

/// A finished icon: square RGBA canvas, transparent background, glyph
/// centered on its ink bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterResult {
    image: RgbaImage,
}

impl RasterResult {
    pub(crate) fn new(image: RgbaImage) -> Self {
        Self { image }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encode as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.image.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
        Ok(buf)
    }

    /// Write as a PNG file regardless of the path's extension.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }

    /// Hex SHA-256 over the dimensions and raw pixels.
    pub fn digest(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.width().to_le_bytes());
        hasher.update(self.height().to_le_bytes());
        hasher.update(self.image.as_raw());
        hex::encode(hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_png_produces_png_signature() {
        let r = RasterResult::new(RgbaImage::new(4, 4));
        let png = r.encode_png().unwrap();
        assert_eq!(&png[0..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn digest_depends_on_pixels() {
        let a = RasterResult::new(RgbaImage::new(4, 4));
        let mut img = RgbaImage::new(4, 4);
        img.put_pixel(1, 1, image::Rgba([0, 0, 0, 255]));
        let b = RasterResult::new(img);
        assert_eq!(a.digest(), RasterResult::new(RgbaImage::new(4, 4)).digest());
        assert_ne!(a.digest(), b.digest());
        assert_eq!(a.digest().len(), 64);
    }
}
