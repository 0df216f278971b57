pub mod directory;
pub mod manifest;
pub mod process_config;
pub mod scan;
pub mod summary;

pub use directory::{augmented_file_name, process_directory};
pub use manifest::{Manifest, ManifestEntry};
pub use process_config::ProcessConfig;
pub use scan::{is_supported_image, list_images, SUPPORTED_EXTENSIONS};
pub use summary::RunSummary;
