use serde::{Deserialize, Serialize};

/// Counts reported at the end of a `process_directory` run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Files in the input directory with a supported extension.
    pub images_found: usize,
    /// Images that decoded and had their original written to the output.
    pub images_processed: usize,
    /// Images skipped because they could not be decoded.
    pub images_skipped: usize,
    /// Augmented copies written.
    pub augmented_generated: usize,
    /// Originals plus augmented copies written by this run.
    pub total_written: usize,
}
