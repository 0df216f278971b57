pub mod augmenter;
pub mod plan;

pub use augmenter::Augmenter;
pub use plan::AugmentationPlan;
