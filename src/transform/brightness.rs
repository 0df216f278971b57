use image::{Rgb, RgbImage};

use crate::raster::{hsv_to_rgb, rgb_to_hsv, to_channel};

/// Scales brightness by multiplying the HSV value channel by `factor`.
///
/// V is clamped to [0, 255] before converting back, so saturated colours
/// keep their hue and saturation instead of shifting towards white.
pub fn adjust_brightness(img: &RgbImage, factor: f32) -> RgbImage {
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b] = pixel.0;
        let (h, s, v) = rgb_to_hsv(r as f32, g as f32, b as f32);
        let v = (v * factor).clamp(0.0, 255.0);
        let (r, g, b) = hsv_to_rgb(h, s, v);
        *pixel = Rgb([to_channel(r), to_channel(g), to_channel(b)]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::adjust_brightness;
    use image::{Rgb, RgbImage};

    fn swatch() -> RgbImage {
        RgbImage::from_fn(3, 2, |x, y| Rgb([(x * 80) as u8, (y * 120 + 10) as u8, 60]))
    }

    #[test]
    fn unit_factor_is_identity() {
        let img = swatch();
        assert_eq!(adjust_brightness(&img, 1.0), img);
    }

    #[test]
    fn scales_value_and_keeps_hue() {
        let img = RgbImage::from_pixel(2, 2, Rgb([100, 50, 25]));
        let out = adjust_brightness(&img, 2.0);
        assert!(out.pixels().all(|p| *p == Rgb([200, 100, 50])));
    }

    #[test]
    fn clamps_at_white_and_black() {
        let img = RgbImage::from_pixel(2, 1, Rgb([200, 200, 200]));
        assert!(adjust_brightness(&img, 1.3).pixels().all(|p| *p == Rgb([255, 255, 255])));
        assert!(adjust_brightness(&img, 0.0).pixels().all(|p| *p == Rgb([0, 0, 0])));
    }
}
