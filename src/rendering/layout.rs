/// Geometry for glyph placement: ink bounds and centering offsets

use image::GrayImage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Offset that centers a `measured` extent on a `canvas` extent.
///
/// Floor division on signed values: a glyph larger than the canvas gets a
/// negative offset and is clipped on both sides.
pub fn centered_offset(canvas: u32, measured: i32) -> i32 {
    (canvas as i32 - measured).div_euclid(2)
}

/// Smallest rectangle enclosing every non-zero pixel of `mask`, or `None`
/// when nothing is inked.
pub fn ink_bounds(mask: &GrayImage) -> Option<Rect> {
    let mut min_x = u32::MAX;
    let mut min_y = u32::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    for (x, y, px) in mask.enumerate_pixels() {
        if px.0[0] == 0 {
            continue;
        }
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    if min_x == u32::MAX {
        return None;
    }
    Some(Rect {
        x: min_x,
        y: min_y,
        width: max_x - min_x + 1,
        height: max_y - min_y + 1,
    })
}

/// Top-left position that re-centers a cropped `bbox` in a square canvas.
pub fn recenter(size: u32, bbox: &Rect) -> (u32, u32) {
    (
        size.saturating_sub(bbox.width) / 2,
        size.saturating_sub(bbox.height) / 2,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn centered_offset_floors() {
        assert_eq!(centered_offset(32, 20), 6);
        assert_eq!(centered_offset(32, 21), 5);
        assert_eq!(centered_offset(16, 19), -2);
        assert_eq!(centered_offset(1, 2), -1);
    }

    #[test]
    fn ink_bounds_of_blank_mask_is_none() {
        let mask = GrayImage::new(8, 8);
        assert_eq!(ink_bounds(&mask), None);
    }

    #[test]
    fn ink_bounds_covers_all_inked_pixels() {
        let mut mask = GrayImage::new(10, 10);
        mask.put_pixel(2, 3, Luma([1]));
        mask.put_pixel(6, 8, Luma([255]));
        mask.put_pixel(4, 1, Luma([40]));
        let bbox = ink_bounds(&mask).unwrap();
        assert_eq!(bbox, Rect { x: 2, y: 1, width: 5, height: 8 });
        assert_eq!(bbox.right(), 7);
        assert_eq!(bbox.bottom(), 9);
    }

    #[test]
    fn recenter_uses_integer_division() {
        let bbox = Rect { x: 0, y: 0, width: 11, height: 8 };
        assert_eq!(recenter(32, &bbox), (10, 12));
        let full = Rect { x: 0, y: 0, width: 32, height: 32 };
        assert_eq!(recenter(32, &full), (0, 0));
    }
}
