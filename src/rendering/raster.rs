//! Font rasterization and the centered-crop export geometry.
//!
//! The glyph is drawn once as a coverage mask with its measured text box
//! centered on the canvas. The mask's ink bounds are then cropped out of a
//! flat-colored canvas (mask as alpha) and pasted back, re-centered on a
//! fresh transparent square.

use crate::rendering::color::Rgba;
use crate::rendering::{layout, paint, RasterResult};
use crate::{Error, Result};
use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use image::{imageops, GrayImage, Luma, RgbaImage};
use log::debug;
use std::path::Path;

/// Renders code points from one font.
pub struct GlyphRasterizer {
    font: FontVec,
}

impl std::fmt::Debug for GlyphRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphRasterizer")
            .field("glyph_count", &self.font.glyph_count())
            .finish()
    }
}

impl GlyphRasterizer {
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let font = FontVec::try_from_vec(data).map_err(|e| Error::FontError(e.to_string()))?;
        Ok(Self { font })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| {
            Error::FontError(format!("Font file ({}) can't be opened: {}", path.display(), e))
        })?;
        let font = FontVec::try_from_vec(data)
            .map_err(|e| Error::FontError(format!("{}: {}", path.display(), e)))?;
        Ok(Self { font })
    }

    /// Whether the font maps `codepoint` to a real glyph.
    pub fn has_glyph(&self, codepoint: char) -> bool {
        self.font.glyph_id(codepoint) != GlyphId(0)
    }

    /// Render `codepoint` into a `size_px` square filled with `color`.
    ///
    /// The measured box is centered before cropping, so at very small sizes
    /// (1 or 2 px) the rounded-up line height can push the glyph entirely off
    /// the canvas. That case, a blank glyph and a color with zero alpha all
    /// return [`Error::RenderError`].
    pub fn render(&self, codepoint: char, size_px: u32, color: Rgba) -> Result<RasterResult> {
        if size_px == 0 {
            return Err(Error::ConfigError("icon size must be positive".to_string()));
        }
        if !self.has_glyph(codepoint) {
            return Err(Error::RenderError(format!(
                "font has no glyph for U+{:04X}",
                codepoint as u32
            )));
        }
        let mask = self.coverage_mask(codepoint, size_px)?;
        let result = compose(&mask, color).map_err(|e| match e {
            Error::RenderError(msg) => Error::RenderError(format!("U+{:04X}: {}", codepoint as u32, msg)),
            other => other,
        })?;
        debug!(
            "rendered U+{:04X} at {}px: {}",
            codepoint as u32,
            size_px,
            result.digest()
        );
        Ok(result)
    }

    /// Scale at which one em spans `size_px` pixels.
    fn em_scale(&self, size_px: u32) -> Result<PxScale> {
        let units_per_em = self
            .font
            .units_per_em()
            .ok_or_else(|| Error::FontError("font has no units-per-em".to_string()))?;
        Ok(PxScale::from(
            size_px as f32 * self.font.height_unscaled() / units_per_em,
        ))
    }

    /// Draw the glyph's coverage with its measured box centered on a
    /// `size_px` square.
    fn coverage_mask(&self, codepoint: char, size_px: u32) -> Result<GrayImage> {
        let scale = self.em_scale(size_px)?;
        let scaled = self.font.as_scaled(scale);
        let glyph_id = self.font.glyph_id(codepoint);

        let measured_w = scaled.h_advance(glyph_id).ceil() as i32;
        let measured_h = (scaled.ascent() - scaled.descent()).ceil() as i32;
        let x = layout::centered_offset(size_px, measured_w);
        let y = layout::centered_offset(size_px, measured_h);
        debug!(
            "U+{:04X}: measured {}x{}, offset ({}, {})",
            codepoint as u32, measured_w, measured_h, x, y
        );

        let mut mask = GrayImage::new(size_px, size_px);
        let glyph =
            glyph_id.with_scale_and_position(scale, point(x as f32, y as f32 + scaled.ascent()));
        if let Some(outlined) = self.font.outline_glyph(glyph) {
            let bounds = outlined.px_bounds();
            let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
            outlined.draw(|gx, gy, coverage| {
                let px = left + gx as i32;
                let py = top + gy as i32;
                if px < 0 || py < 0 || px as u32 >= size_px || py as u32 >= size_px {
                    return;
                }
                let alpha = (coverage.clamp(0.0, 1.0) * 255.0).round() as u8;
                mask.put_pixel(px as u32, py as u32, Luma([alpha]));
            });
        }
        Ok(mask)
    }
}

/// Turn a square coverage mask into the final icon: colorize, crop to the
/// ink bounds, re-center on a transparent canvas of the same size.
///
/// The bounds are taken from the colorized alpha, so a color whose alpha
/// hides every pixel fails like a blank glyph does.
pub fn compose(mask: &GrayImage, color: Rgba) -> Result<RasterResult> {
    let size = mask.width();
    let colored = paint::colorize(mask, color);
    let visible = paint::alpha_mask(&colored);
    let bbox = layout::ink_bounds(&visible)
        .ok_or_else(|| Error::RenderError("glyph has an empty bounding box".to_string()))?;
    let cropped = imageops::crop_imm(&colored, bbox.x, bbox.y, bbox.width, bbox.height).to_image();

    let (border_w, border_h) = layout::recenter(size, &bbox);
    let mut canvas = RgbaImage::new(size, mask.height());
    imageops::replace(&mut canvas, &cropped, border_w as i64, border_h as i64);
    Ok(RasterResult::new(canvas))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_recenters_off_center_ink() {
        let mut mask = GrayImage::new(10, 10);
        // 2x2 blob in the top-left corner
        for (x, y) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            mask.put_pixel(x, y, Luma([255]));
        }
        let out = compose(&mask, Rgba::opaque(255, 0, 0)).unwrap();
        assert_eq!((out.width(), out.height()), (10, 10));
        assert_eq!(out.pixel(0, 0), [0, 0, 0, 0]);
        for (x, y) in [(4, 4), (5, 4), (4, 5), (5, 5)] {
            assert_eq!(out.pixel(x, y), [255, 0, 0, 255]);
        }
        let inked = out.as_image().pixels().filter(|p| p.0[3] > 0).count();
        assert_eq!(inked, 4);
    }

    #[test]
    fn compose_odd_remainder_rounds_down() {
        let mut mask = GrayImage::new(8, 8);
        for x in 5..8 {
            mask.put_pixel(x, 7, Luma([200]));
        }
        let out = compose(&mask, Rgba::BLACK).unwrap();
        // 3 wide, 1 high: border (8-3)/2 = 2, (8-1)/2 = 3
        assert_eq!(out.pixel(2, 3), [0, 0, 0, 200]);
        assert_eq!(out.pixel(4, 3), [0, 0, 0, 200]);
        assert_eq!(out.pixel(5, 3), [0, 0, 0, 0]);
        assert_eq!(out.pixel(1, 3), [0, 0, 0, 0]);
    }

    #[test]
    fn compose_rejects_blank_mask() {
        let mask = GrayImage::new(16, 16);
        assert!(matches!(compose(&mask, Rgba::BLACK), Err(Error::RenderError(_))));
    }

    #[test]
    fn compose_rejects_fully_transparent_color() {
        let mut mask = GrayImage::new(16, 16);
        mask.put_pixel(8, 8, Luma([255]));
        let err = compose(&mask, Rgba::new(0, 0, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::RenderError(_)));
    }

    #[test]
    fn compose_centers_on_visible_ink_only() {
        let mut mask = GrayImage::new(10, 10);
        // faint pixel vanishes at alpha 1, the solid one survives
        mask.put_pixel(0, 0, Luma([100]));
        mask.put_pixel(7, 7, Luma([255]));
        let out = compose(&mask, Rgba::new(0, 0, 0, 1)).unwrap();
        assert_eq!(out.pixel(4, 4), [0, 0, 0, 1]);
        let inked = out.as_image().pixels().filter(|p| p.0[3] > 0).count();
        assert_eq!(inked, 1);
    }

    #[test]
    fn invalid_font_bytes_are_a_font_error() {
        let err = GlyphRasterizer::from_bytes(b"definitely not a font".to_vec()).unwrap_err();
        assert!(matches!(err, Error::FontError(_)));
    }

    #[test]
    fn missing_font_file_is_a_font_error() {
        let err = GlyphRasterizer::from_file("/nonexistent/fa2png/font.ttf").unwrap_err();
        assert!(matches!(err, Error::FontError(_)));
    }
}
