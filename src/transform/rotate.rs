use image::{Rgb, RgbImage};

use crate::raster::{sample_bilinear, to_channel};

/// Rotates `img` by `angle_degrees` about `(width / 2, height / 2)`.
///
/// Positive angles turn the content counter-clockwise as displayed. Each
/// output pixel is inverse-mapped into the source and bilinearly sampled;
/// positions that leave the frame are reflected back in, so corners are
/// filled with mirrored content rather than black. Dimensions are kept.
pub fn rotate(img: &RgbImage, angle_degrees: f32) -> RgbImage {
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return img.clone();
    }

    let cx = (width / 2) as f32;
    let cy = (height / 2) as f32;
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();

    RgbImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;

        let src_x = cx + cos_a * dx - sin_a * dy;
        let src_y = cy + sin_a * dx + cos_a * dy;

        let [r, g, b] = sample_bilinear(img, src_x, src_y);
        Rgb([to_channel(r), to_channel(g), to_channel(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::rotate;
    use image::{Rgb, RgbImage};

    fn numbered(width: u32, height: u32) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            let i = (y * width + x) as u8;
            Rgb([i * 10, 255 - i * 10, i])
        })
    }

    #[test]
    fn zero_angle_is_identity() {
        let img = numbered(5, 4);
        assert_eq!(rotate(&img, 0.0), img);
    }

    #[test]
    fn quarter_turn_moves_top_right_to_top_left() {
        let img = numbered(3, 3);
        let out = rotate(&img, 90.0);

        // Counter-clockwise: column 2 becomes row 0, read top to bottom.
        assert_eq!(out.get_pixel(0, 0), img.get_pixel(2, 0));
        assert_eq!(out.get_pixel(1, 0), img.get_pixel(2, 1));
        assert_eq!(out.get_pixel(2, 0), img.get_pixel(2, 2));
        assert_eq!(out.get_pixel(1, 1), img.get_pixel(1, 1));
        assert_eq!(out.get_pixel(0, 2), img.get_pixel(0, 0));
    }

    #[test]
    fn keeps_dimensions_and_never_blacks_out_corners() {
        let img = RgbImage::from_pixel(17, 11, Rgb([200, 150, 100]));
        for angle in [-15.0, -7.3, 4.2, 15.0, 45.0] {
            let out = rotate(&img, angle);
            assert_eq!(out.dimensions(), (17, 11));
            // A uniform image stays uniform when borders are reflected.
            assert!(out.pixels().all(|p| *p == Rgb([200, 150, 100])), "angle {angle}");
        }
    }
}
