use image::RgbImage;

use super::border::reflect_index;

/// Bilinearly samples all three channels at a sub-pixel position.
///
/// Integer coordinates address pixel centres. Taps that fall outside the
/// image are reflected back in with [`reflect_index`]. The image must be
/// non-empty.
pub fn sample_bilinear(img: &RgbImage, x: f32, y: f32) -> [f32; 3] {
    let (width, height) = img.dimensions();

    let x0 = x.floor() as isize;
    let y0 = y.floor() as isize;
    let dx = x - x0 as f32;
    let dy = y - y0 as f32;

    let xa = reflect_index(x0, width as usize) as u32;
    let xb = reflect_index(x0 + 1, width as usize) as u32;
    let ya = reflect_index(y0, height as usize) as u32;
    let yb = reflect_index(y0 + 1, height as usize) as u32;

    let p00 = img.get_pixel(xa, ya);
    let p10 = img.get_pixel(xb, ya);
    let p01 = img.get_pixel(xa, yb);
    let p11 = img.get_pixel(xb, yb);

    let mut out = [0.0f32; 3];
    for (c, slot) in out.iter_mut().enumerate() {
        let top = p00[c] as f32 * (1.0 - dx) + p10[c] as f32 * dx;
        let bottom = p01[c] as f32 * (1.0 - dx) + p11[c] as f32 * dx;
        *slot = top * (1.0 - dy) + bottom * dy;
    }
    out
}
