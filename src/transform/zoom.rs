use image::imageops::{self, FilterType};
use image::RgbImage;

use crate::raster::reflect_index;

/// Rescales the content by `factor` while keeping the frame size.
///
/// The image is first resized to `floor(h * factor) × floor(w * factor)`
/// with a bilinear filter. A larger result is centre-cropped; a smaller one
/// is padded back out with reflected border pixels, the odd pixel of any
/// uneven padding going to the bottom/right edge.
pub fn zoom(img: &RgbImage, factor: f32) -> RgbImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img.clone();
    }

    let new_width = scaled_len(width, factor);
    let new_height = scaled_len(height, factor);
    let resized = imageops::resize(img, new_width, new_height, FilterType::Triangle);

    if factor > 1.0 {
        let x0 = new_width.saturating_sub(width) / 2;
        let y0 = new_height.saturating_sub(height) / 2;
        imageops::crop_imm(&resized, x0, y0, width, height).to_image()
    } else {
        let pad_x = (width - new_width) / 2;
        let pad_y = (height - new_height) / 2;
        RgbImage::from_fn(width, height, |x, y| {
            let sx = reflect_index(x as isize - pad_x as isize, new_width as usize);
            let sy = reflect_index(y as isize - pad_y as isize, new_height as usize);
            *resized.get_pixel(sx as u32, sy as u32)
        })
    }
}

/// Truncated scaled length, never below one pixel and, for shrinking
/// factors, never above the original.
fn scaled_len(len: u32, factor: f32) -> u32 {
    let scaled = ((len as f64 * factor as f64) as u32).max(1);
    if factor <= 1.0 {
        scaled.min(len)
    } else {
        scaled.max(len)
    }
}
