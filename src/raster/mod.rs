pub mod border;
pub mod color;
pub mod sample;

pub use border::reflect_index;
pub use color::{hsv_to_rgb, rgb_to_hsv};
pub use sample::sample_bilinear;

/// Rounds and clamps a floating-point channel value into `u8`.
///
/// Every transform funnels its final channel values through here, so the
/// whole crate shares one rounding rule: round half away from zero, then
/// saturate to [0, 255].
#[inline]
pub fn to_channel(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}
