use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the augmentation library.
///
/// `Decode` and `EmptyImage` describe input files the directory processor
/// skips: it logs them as warnings and moves on, so they never end a run.
#[derive(Error, Debug)]
pub enum AugmentError {
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image '{path}': {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to write image '{path}': {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image '{0}' has zero area")]
    EmptyImage(PathBuf),

    /// A parameter range with `low > high` or a non-finite bound.
    #[error("Invalid range for {name}: [{low}, {high}]")]
    InvalidRange {
        name: &'static str,
        low: f32,
        high: f32,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write manifest '{path}': {source}")]
    Manifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, AugmentError>;

impl AugmentError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AugmentError::Io { path: path.into(), source }
    }
}
