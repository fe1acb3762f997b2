// src/report/crop.rs

use image::{Rgb, RgbImage, imageops};

/// Inclusive `(x0, y0, x1, y1)` box around every pixel that differs from `bg`.
pub fn content_bounds(img: &RgbImage, bg: Rgb<u8>) -> Option<(u32, u32, u32, u32)> {
    let mut bounds: Option<(u32, u32, u32, u32)> = None;
    for (x, y, px) in img.enumerate_pixels() {
        if *px == bg { continue; }
        bounds = Some(match bounds {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    bounds
}

/// Trim the background border down to the drawn content plus `pad` pixels.
/// A blank image is returned unchanged.
pub fn tight_crop(img: RgbImage, bg: Rgb<u8>, pad: u32) -> RgbImage {
    let Some((x0, y0, x1, y1)) = content_bounds(&img, bg) else { return img };
    let (w, h) = img.dimensions();
    let left = x0.saturating_sub(pad);
    let top = y0.saturating_sub(pad);
    let right = (x1 + pad).min(w - 1);
    let bottom = (y1 + pad).min(h - 1);
    imageops::crop_imm(&img, left, top, right - left + 1, bottom - top + 1).to_image()
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

    #[test]
    fn crops_to_content_with_pad() {
        let mut img = RgbImage::from_pixel(100, 50, WHITE);
        img.put_pixel(40, 20, Rgb([0, 0, 0]));
        img.put_pixel(60, 30, Rgb([0, 0, 0]));

        assert_eq!(content_bounds(&img, WHITE), Some((40, 20, 60, 30)));
        let out = tight_crop(img, WHITE, 5);
        assert_eq!(out.dimensions(), (31, 21));
        assert_eq!(*out.get_pixel(5, 5), Rgb([0, 0, 0]));
    }

    #[test]
    fn pad_is_clamped_at_edges() {
        let mut img = RgbImage::from_pixel(10, 10, WHITE);
        img.put_pixel(0, 9, Rgb([1, 2, 3]));
        assert_eq!(tight_crop(img, WHITE, 4).dimensions(), (5, 5));
    }

    #[test]
    fn blank_image_untouched() {
        let img = RgbImage::from_pixel(8, 6, WHITE);
        assert_eq!(tight_crop(img, WHITE, 2).dimensions(), (8, 6));
    }
}
