use image::{imageops, RgbImage};

/// Mirrors the image left-right.
pub fn horizontal_flip(img: &RgbImage) -> RgbImage {
    imageops::flip_horizontal(img)
}
