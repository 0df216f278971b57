use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{AugmentError, Result};

/// A closed interval `[low, high]` a transform parameter is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParamRange {
    pub low: f32,
    pub high: f32,
}

impl ParamRange {
    pub const fn new(low: f32, high: f32) -> Self {
        ParamRange { low, high }
    }

    /// Draws a value uniformly from the interval. A degenerate interval
    /// (`low == high`) always yields `low`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        rng.gen_range(self.low..=self.high)
    }

    fn check(&self, name: &'static str) -> Result<()> {
        if !self.low.is_finite() || !self.high.is_finite() || self.low > self.high {
            return Err(AugmentError::InvalidRange { name, low: self.low, high: self.high });
        }
        Ok(())
    }
}

/// Parameter ranges for every randomized transform.
///
/// # Fields
/// - `angle`      — rotation angle in degrees
/// - `brightness` — multiplier for the HSV value channel
/// - `contrast`   — stretch factor around the mean intensity
/// - `noise_mean` — mean of the additive Gaussian noise
/// - `noise_std`  — standard deviation of the noise, drawn per invocation
/// - `zoom`       — scale factor; above 1 crops, below 1 pads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformParams {
    pub angle: ParamRange,
    pub brightness: ParamRange,
    pub contrast: ParamRange,
    pub noise_mean: f32,
    pub noise_std: ParamRange,
    pub zoom: ParamRange,
}

impl Default for TransformParams {
    fn default() -> Self {
        TransformParams {
            angle: ParamRange::new(-15.0, 15.0),
            brightness: ParamRange::new(0.7, 1.3),
            contrast: ParamRange::new(0.8, 1.2),
            noise_mean: 0.0,
            noise_std: ParamRange::new(5.0, 15.0),
            zoom: ParamRange::new(0.9, 1.1),
        }
    }
}

impl TransformParams {
    /// Rejects ranges that cannot be sampled or would produce meaningless
    /// transforms (negative noise deviation, non-positive zoom).
    pub fn validate(&self) -> Result<()> {
        self.angle.check("angle")?;
        self.brightness.check("brightness")?;
        self.contrast.check("contrast")?;
        self.noise_std.check("noise_std")?;
        self.zoom.check("zoom")?;

        if !self.noise_mean.is_finite() {
            return Err(AugmentError::InvalidConfig("noise_mean must be finite".into()));
        }
        if self.noise_std.low < 0.0 {
            return Err(AugmentError::InvalidRange {
                name: "noise_std",
                low: self.noise_std.low,
                high: self.noise_std.high,
            });
        }
        if self.zoom.low <= 0.0 {
            return Err(AugmentError::InvalidRange {
                name: "zoom",
                low: self.zoom.low,
                high: self.zoom.high,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn defaults_are_valid() {
        assert!(TransformParams::default().validate().is_ok());
    }

    #[test]
    fn inverted_and_non_finite_ranges_are_rejected() {
        let mut params = TransformParams::default();
        params.contrast = ParamRange::new(1.2, 0.8);
        assert!(matches!(
            params.validate(),
            Err(AugmentError::InvalidRange { name: "contrast", .. })
        ));

        let mut params = TransformParams::default();
        params.angle = ParamRange::new(f32::NEG_INFINITY, 0.0);
        assert!(params.validate().is_err());

        let mut params = TransformParams::default();
        params.zoom = ParamRange::new(0.0, 1.0);
        assert!(params.validate().is_err());

        let mut params = TransformParams::default();
        params.noise_std = ParamRange::new(-1.0, 1.0);
        assert!(params.validate().is_err());
    }

    #[test]
    fn samples_stay_inside_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let range = ParamRange::new(0.7, 1.3);
        for _ in 0..1000 {
            let v = range.sample(&mut rng);
            assert!((0.7..=1.3).contains(&v));
        }
        assert_eq!(ParamRange::new(2.5, 2.5).sample(&mut rng), 2.5);
    }
}
