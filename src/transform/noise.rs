use image::RgbImage;
use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::raster::to_channel;

/// Adds an independent `N(mean, std)` sample to every channel of every
/// pixel, then clamps.
///
/// A negative or non-finite `std` leaves the image untouched.
pub fn add_gaussian_noise<R: Rng + ?Sized>(
    img: &RgbImage,
    mean: f32,
    std: f32,
    rng: &mut R,
) -> RgbImage {
    let normal = match Normal::new(mean, std) {
        Ok(normal) => normal,
        Err(_) => return img.clone(),
    };

    let mut out = img.clone();
    for channel in out.iter_mut() {
        let noisy = *channel as f32 + normal.sample(rng);
        *channel = to_channel(noisy);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::add_gaussian_noise;
    use image::{Rgb, RgbImage};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn grey(v: u8) -> RgbImage {
        RgbImage::from_pixel(16, 16, Rgb([v, v, v]))
    }

    #[test]
    fn zero_std_with_zero_mean_is_identity() {
        let img = grey(120);
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(add_gaussian_noise(&img, 0.0, 0.0, &mut rng), img);
    }

    #[test]
    fn same_seed_same_noise() {
        let img = grey(128);
        let a = add_gaussian_noise(&img, 0.0, 10.0, &mut ChaCha8Rng::seed_from_u64(42));
        let b = add_gaussian_noise(&img, 0.0, 10.0, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
        assert_ne!(a, img);
    }

    #[test]
    fn large_shift_saturates() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let out = add_gaussian_noise(&grey(10), 400.0, 5.0, &mut rng);
        assert!(out.iter().all(|&c| c == 255));
        let out = add_gaussian_noise(&grey(10), -400.0, 5.0, &mut rng);
        assert!(out.iter().all(|&c| c == 0));
    }

    #[test]
    fn noise_is_roughly_centred() {
        let img = RgbImage::from_pixel(64, 64, Rgb([128, 128, 128]));
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let out = add_gaussian_noise(&img, 0.0, 10.0, &mut rng);
        let mean = out.iter().map(|&c| c as f64).sum::<f64>() / out.len() as f64;
        assert!((mean - 128.0).abs() < 1.0, "mean drifted to {mean}");
    }
}
