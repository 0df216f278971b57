use image::RgbImage;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::augment::plan::AugmentationPlan;
use crate::error::Result;
use crate::transform::{
    add_gaussian_noise, adjust_brightness, adjust_contrast, horizontal_flip, rotate, zoom,
    TransformKind, TransformParams,
};

/// ChaCha stream carrying the Gaussian noise samples; stream 0 carries
/// everything else.
const NOISE_STREAM: u64 = 1;

/// Applies randomized transforms to in-memory images.
///
/// The augmenter owns two generators seeded from the same value on
/// separate ChaCha streams: `rng` draws transform parameters, plan
/// selections and flip coins, while `noise_rng` feeds the per-channel Gaussian samples, so image size never
/// affects which transforms later copies select. Identical seed, inputs and
/// call order reproduce identical output.
#[derive(Debug, Clone)]
pub struct Augmenter {
    params: TransformParams,
    rng: ChaCha8Rng,
    noise_rng: ChaCha8Rng,
}

impl Augmenter {
    /// Creates an augmenter with the default parameter ranges.
    pub fn new(seed: u64) -> Self {
        let mut noise_rng = ChaCha8Rng::seed_from_u64(seed);
        noise_rng.set_stream(NOISE_STREAM);
        Augmenter {
            params: TransformParams::default(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            noise_rng,
        }
    }

    /// Creates an augmenter with custom ranges, rejecting invalid ones.
    pub fn with_params(seed: u64, params: TransformParams) -> Result<Self> {
        params.validate()?;
        Ok(Augmenter { params, ..Augmenter::new(seed) })
    }

    pub fn params(&self) -> &TransformParams {
        &self.params
    }

    // -----------------------------------------------------------------------
    // Single transforms
    // -----------------------------------------------------------------------

    pub fn rotate(&mut self, img: &RgbImage) -> RgbImage {
        let angle = self.params.angle.sample(&mut self.rng);
        debug!(angle, "rotate");
        rotate(img, angle)
    }

    pub fn adjust_brightness(&mut self, img: &RgbImage) -> RgbImage {
        let factor = self.params.brightness.sample(&mut self.rng);
        debug!(factor, "brightness");
        adjust_brightness(img, factor)
    }

    pub fn adjust_contrast(&mut self, img: &RgbImage) -> RgbImage {
        let factor = self.params.contrast.sample(&mut self.rng);
        debug!(factor, "contrast");
        adjust_contrast(img, factor)
    }

    pub fn horizontal_flip(&self, img: &RgbImage) -> RgbImage {
        horizontal_flip(img)
    }

    pub fn add_gaussian_noise(&mut self, img: &RgbImage) -> RgbImage {
        let std = self.params.noise_std.sample(&mut self.rng);
        let mean = self.params.noise_mean;
        debug!(mean, std, "noise");
        add_gaussian_noise(img, mean, std, &mut self.noise_rng)
    }

    pub fn zoom(&mut self, img: &RgbImage) -> RgbImage {
        let factor = self.params.zoom.sample(&mut self.rng);
        debug!(factor, "zoom");
        zoom(img, factor)
    }

    /// Applies the transform identified by `kind`.
    pub fn apply(&mut self, img: &RgbImage, kind: TransformKind) -> RgbImage {
        match kind {
            TransformKind::Rotate => self.rotate(img),
            TransformKind::Brightness => self.adjust_brightness(img),
            TransformKind::Contrast => self.adjust_contrast(img),
            TransformKind::Flip => self.horizontal_flip(img),
            TransformKind::Noise => self.add_gaussian_noise(img),
            TransformKind::Zoom => self.zoom(img),
        }
    }

    /// Applies exactly one transform: `kind` if given, otherwise one picked
    /// uniformly from all six.
    pub fn augment(&mut self, img: &RgbImage, kind: Option<TransformKind>) -> RgbImage {
        let kind = match kind {
            Some(kind) => kind,
            None => TransformKind::ALL[self.rng.gen_range(0..TransformKind::ALL.len())],
        };
        self.apply(img, kind)
    }

    // -----------------------------------------------------------------------
    // Composite augmentation
    // -----------------------------------------------------------------------

    /// Draws a plan of `min(num_transforms, 5)` distinct non-flip transforms
    /// in random order, plus a fair coin for the trailing flip.
    pub fn plan(&mut self, num_transforms: usize) -> AugmentationPlan {
        let count = num_transforms.min(TransformKind::COMPOSABLE.len());
        let mut pool = TransformKind::COMPOSABLE;
        let (chosen, _) = pool.partial_shuffle(&mut self.rng, count);
        let transforms = chosen.to_vec();
        let flip = self.rng.gen_bool(0.5);
        AugmentationPlan { transforms, flip }
    }

    /// Runs every step of `plan` over a copy of `img`.
    pub fn apply_plan(&mut self, img: &RgbImage, plan: &AugmentationPlan) -> RgbImage {
        let mut out = img.clone();
        for kind in plan.steps() {
            out = self.apply(&out, kind);
        }
        out
    }

    /// Draws a plan for `num_transforms` transforms and applies it, returning
    /// the plan alongside the augmented image.
    pub fn augment_multiple(
        &mut self,
        img: &RgbImage,
        num_transforms: usize,
    ) -> (RgbImage, AugmentationPlan) {
        let plan = self.plan(num_transforms);
        let out = self.apply_plan(img, &plan);
        (out, plan)
    }
}
