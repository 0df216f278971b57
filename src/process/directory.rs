use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::JpegEncoder;
use image::io::Reader as ImageReader;
use image::{ColorType, ImageFormat, RgbImage};
use tracing::{debug, info, warn};

use crate::augment::Augmenter;
use crate::error::{AugmentError, Result};
use crate::process::manifest::{Manifest, ManifestEntry};
use crate::process::process_config::ProcessConfig;
use crate::process::scan::list_images;
use crate::process::summary::RunSummary;

/// JPEG quality used when re-encoding originals and augmented copies.
const JPEG_QUALITY: u8 = 95;

// ---------------------------------------------------------------------------
// Public entry point
// ---------------------------------------------------------------------------

/// Augments every supported image in `input_dir` into `output_dir`.
///
/// For each image that decodes, the original is written under its own
/// file name, followed by `config.augmentations_per_image` composite
/// augmentations of that original named `<stem>_aug_<i><ext>` (i from 1).
/// Files are visited in name order through a single augmenter seeded with
/// `config.seed`, so a rerun with the same inputs reproduces the same bytes.
///
/// # Soft failures
/// An input directory without supported images, or an individual file that
/// cannot be decoded, is logged as a warning; the run carries on.
///
/// # Errors
/// An unreadable input directory, an output path that cannot be created
/// or written, and manifest write failures abort the run. Files written
/// before the failure stay in place.
pub fn process_directory(
    input_dir: &Path,
    output_dir: &Path,
    config: &ProcessConfig,
) -> Result<RunSummary> {
    config.validate()?;

    fs::create_dir_all(output_dir).map_err(|e| AugmentError::io(output_dir, e))?;

    let images = list_images(input_dir)?;
    let mut summary = RunSummary { images_found: images.len(), ..RunSummary::default() };
    let mut entries = Vec::new();

    if images.is_empty() {
        warn!(input_dir = %input_dir.display(), "no images found");
    } else {
        info!(
            count = images.len(),
            input_dir = %input_dir.display(),
            per_image = config.augmentations_per_image,
            "found images"
        );

        let mut augmenter = Augmenter::with_params(config.seed, config.params)?;

        for path in &images {
            // ── Decode (soft failure) ──────────────────────────────────────
            let image = match load_rgb(path) {
                Ok(image) => image,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "could not read image, skipping");
                    summary.images_skipped += 1;
                    continue;
                }
            };

            let file_name = path.file_name().unwrap_or_default();
            let display_name = file_name.to_string_lossy();

            // ── Original ──────────────────────────────────────────────────
            write_image(&output_dir.join(file_name), &image)?;
            summary.images_processed += 1;
            summary.total_written += 1;

            // ── Augmented copies, each drawn from the original ────────────
            for index in 1..=config.augmentations_per_image {
                let (augmented, plan) =
                    augmenter.augment_multiple(&image, config.transforms_per_augmentation);

                let output_name = augmented_file_name(path, index);
                write_image(&output_dir.join(&output_name), &augmented)?;
                debug!(
                    output = %output_name.to_string_lossy(),
                    transforms = ?plan.transforms,
                    flip = plan.flip,
                    "wrote copy"
                );

                summary.augmented_generated += 1;
                summary.total_written += 1;

                if config.manifest_path.is_some() {
                    entries.push(ManifestEntry {
                        source: display_name.to_string(),
                        output: output_name.to_string_lossy().into_owned(),
                        plan,
                    });
                }
            }

            info!(
                file = %display_name,
                generated = config.augmentations_per_image,
                "processed image"
            );
        }
    }

    if let Some(manifest_path) = &config.manifest_path {
        let manifest = Manifest {
            seed: config.seed,
            transforms_per_augmentation: config.transforms_per_augmentation,
            params: config.params,
            summary,
            entries,
        };
        manifest.save_json(manifest_path)?;
        info!(path = %manifest_path.display(), "wrote manifest");
    }

    Ok(summary)
}

/// Output name for the `index`-th augmented copy of `source`:
/// `<stem>_aug_<index><ext>`, with stem and extension kept byte-for-byte,
/// so names that are not valid UTF-8 survive unchanged.
pub fn augmented_file_name(source: &Path, index: usize) -> OsString {
    let mut name = source.file_stem().unwrap_or_default().to_os_string();
    name.push(format!("_aug_{index}"));
    if let Some(ext) = source.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Decodes `path` as an 8-bit RGB image, sniffing the format from content.
/// Alpha and extra precision are dropped; zero-area images are rejected.
fn load_rgb(path: &Path) -> Result<RgbImage> {
    let reader = ImageReader::open(path)
        .map_err(|e| AugmentError::io(path, e))?
        .with_guessed_format()
        .map_err(|e| AugmentError::io(path, e))?;
    let image = reader
        .decode()
        .map_err(|source| AugmentError::Decode { path: path.to_path_buf(), source })?
        .to_rgb8();

    if image.width() == 0 || image.height() == 0 {
        return Err(AugmentError::EmptyImage(path.to_path_buf()));
    }
    Ok(image)
}

/// Encodes `image` in the format implied by the extension of `path`.
fn write_image(path: &Path, image: &RgbImage) -> Result<()> {
    let encode_err = |source| AugmentError::Encode { path: path.to_path_buf(), source };

    match ImageFormat::from_path(path) {
        Ok(ImageFormat::Jpeg) => {
            let file = File::create(path).map_err(|e| AugmentError::io(path, e))?;
            let mut writer = BufWriter::new(file);
            JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY)
                .encode(image.as_raw(), image.width(), image.height(), ColorType::Rgb8)
                .map_err(encode_err)?;
            writer.flush().map_err(|e| AugmentError::io(path, e))
        }
        Ok(format) => image.save_with_format(path, format).map_err(encode_err),
        Err(e) => Err(encode_err(e)),
    }
}
