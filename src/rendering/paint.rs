/// Alpha-mask compositing: flat color + coverage mask → RGBA

use crate::rendering::color::Rgba;
use image::{GrayImage, Luma, RgbaImage};

/// Fill a canvas with `color` and use `mask` as its alpha channel.
///
/// Ink pixels carry exactly the requested RGB; only alpha is graded, scaled
/// by the color's own alpha. Pixels with zero alpha are fully zeroed so the
/// output has no stray color in transparent areas.
pub fn colorize(mask: &GrayImage, color: Rgba) -> RgbaImage {
    RgbaImage::from_fn(mask.width(), mask.height(), |x, y| {
        let coverage = mask.get_pixel(x, y).0[0] as u32;
        let alpha = ((coverage * color.a as u32 + 127) / 255) as u8;
        if alpha == 0 {
            image::Rgba([0, 0, 0, 0])
        } else {
            image::Rgba([color.r, color.g, color.b, alpha])
        }
    })
}

/// Alpha channel of `image` as a single-channel mask.
pub fn alpha_mask(image: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([image.get_pixel(x, y).0[3]])
    })
}
