use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::augment::AugmentationPlan;
use crate::error::{AugmentError, Result};
use crate::process::summary::RunSummary;
use crate::transform::TransformParams;

/// One augmented file and how it was produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name of the source image.
    pub source: String,
    /// File name of the augmented copy inside the output directory.
    pub output: String,
    #[serde(flatten)]
    pub plan: AugmentationPlan,
}

/// Provenance record for a whole run: seed, ranges, summary and every
/// generated file. Only written when a manifest path is configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub seed: u64,
    pub transforms_per_augmentation: usize,
    pub params: TransformParams,
    pub summary: RunSummary,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    /// Serializes the manifest to a pretty-printed JSON file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let file = File::create(path).map_err(|e| AugmentError::io(path, e))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|source| AugmentError::Manifest { path: path.to_path_buf(), source })?;
        writer.flush().map_err(|e| AugmentError::io(path, e))
    }

    /// Reads a manifest previously written by `save_json`.
    pub fn load_json(path: &Path) -> Result<Manifest> {
        let file = File::open(path).map_err(|e| AugmentError::io(path, e))?;
        serde_json::from_reader(std::io::BufReader::new(file))
            .map_err(|source| AugmentError::Manifest { path: path.to_path_buf(), source })
    }
}
