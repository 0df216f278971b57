use image::{Rgb, RgbImage};

use crate::raster::to_channel;

/// Mean over every channel of every pixel.
pub fn mean_intensity(img: &RgbImage) -> f32 {
    let raw = img.as_raw();
    if raw.is_empty() {
        return 0.0;
    }
    let sum: u64 = raw.iter().map(|&c| c as u64).sum();
    (sum as f64 / raw.len() as f64) as f32
}

/// Stretches (`factor > 1`) or compresses (`factor < 1`) every channel value
/// around the image's mean intensity, then clamps.
pub fn adjust_contrast(img: &RgbImage, factor: f32) -> RgbImage {
    let mean = mean_intensity(img);
    let mut out = img.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b] = pixel.0.map(|c| to_channel((c as f32 - mean) * factor + mean));
        *pixel = Rgb([r, g, b]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_covers_all_channels() {
        let img = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([0, 0, 0]) } else { Rgb([30, 60, 90]) });
        assert!((mean_intensity(&img) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn stretches_around_mean() {
        let img = RgbImage::from_fn(2, 1, |x, _| {
            if x == 0 { Rgb([100, 100, 100]) } else { Rgb([200, 200, 200]) }
        });
        let out = adjust_contrast(&img, 2.0);
        assert_eq!(*out.get_pixel(0, 0), Rgb([50, 50, 50]));
        assert_eq!(*out.get_pixel(1, 0), Rgb([250, 250, 250]));
    }

    #[test]
    fn uniform_image_is_unchanged_and_extremes_clamp() {
        let flat = RgbImage::from_pixel(4, 4, Rgb([77, 77, 77]));
        assert_eq!(adjust_contrast(&flat, 1.2), flat);

        let img = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) });
        assert_eq!(adjust_contrast(&img, 1.5), img);
    }
}
