use std::path::PathBuf;

use crate::error::Result;
use crate::transform::TransformParams;

/// Configuration for a `process_directory` run.
///
/// # Fields
/// - `augmentations_per_image`     — augmented copies written per input image
/// - `transforms_per_augmentation` — transforms in each composite plan;
///                                   values above 5 behave as 5
/// - `seed`                        — seeds both of the augmenter's generators
/// - `params`                      — parameter ranges for the transforms
/// - `manifest_path`               — when set, a JSON record of every
///                                   generated file and its plan is written here
#[derive(Debug, Clone)]
pub struct ProcessConfig {
    pub augmentations_per_image: usize,
    pub transforms_per_augmentation: usize,
    pub seed: u64,
    pub params: TransformParams,
    pub manifest_path: Option<PathBuf>,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            augmentations_per_image: 5,
            transforms_per_augmentation: 2,
            seed: 42,
            params: TransformParams::default(),
            manifest_path: None,
        }
    }
}

impl ProcessConfig {
    /// Creates a config with default parameter ranges and no manifest.
    pub fn new(augmentations_per_image: usize, transforms_per_augmentation: usize, seed: u64) -> Self {
        ProcessConfig {
            augmentations_per_image,
            transforms_per_augmentation,
            seed,
            ..ProcessConfig::default()
        }
    }

    pub fn with_manifest(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    /// Checks the transform parameter ranges. A transform count of zero is
    /// accepted: each copy then only gets the independent flip.
    pub fn validate(&self) -> Result<()> {
        self.params.validate()
    }
}
