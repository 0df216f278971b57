pub mod raster;
pub mod transform;
pub mod augment;
pub mod process;
pub mod error;

// Convenience re-exports
pub use augment::augmenter::Augmenter;
pub use augment::plan::AugmentationPlan;
pub use error::{AugmentError, Result};
pub use process::directory::process_directory;
pub use process::process_config::ProcessConfig;
pub use process::summary::RunSummary;
pub use transform::transform_kind::TransformKind;
pub use transform::transform_params::{ParamRange, TransformParams};
