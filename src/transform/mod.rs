pub mod brightness;
pub mod contrast;
pub mod flip;
pub mod noise;
pub mod rotate;
pub mod transform_kind;
pub mod transform_params;
pub mod zoom;

pub use brightness::adjust_brightness;
pub use contrast::adjust_contrast;
pub use flip::horizontal_flip;
pub use noise::add_gaussian_noise;
pub use rotate::rotate;
pub use transform_kind::TransformKind;
pub use transform_params::{ParamRange, TransformParams};
pub use zoom::zoom;
