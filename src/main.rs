//! face-augment: expands a folder of face images with randomized variants.
//!
//! Usage:
//!   face-augment --input_dir ./faces --output_dir ./augmented_faces --augmentations_per_image 5
//!
//! Logging goes to stderr and honours `RUST_LOG` (default `info`).

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use face_augment::{process_directory, ProcessConfig};

#[derive(Parser, Debug)]
#[command(name = "face-augment")]
#[command(about = "Augment face images for improved face recognition training")]
struct Args {
    /// Directory containing input face images
    #[arg(short, long = "input_dir", visible_alias = "input-dir")]
    input_dir: PathBuf,

    /// Directory to save augmented images (created if missing)
    #[arg(short, long = "output_dir", visible_alias = "output-dir")]
    output_dir: PathBuf,

    /// Number of augmented versions to create per image
    #[arg(
        short = 'n',
        long = "augmentations_per_image",
        visible_alias = "augmentations-per-image",
        default_value_t = 5
    )]
    augmentations_per_image: usize,

    /// Number of transformations to apply per augmentation (at most 5 are used)
    #[arg(
        short = 't',
        long = "num_transforms",
        visible_alias = "transforms-per-augmentation",
        default_value_t = 2
    )]
    num_transforms: usize,

    /// Random seed for reproducibility
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Write a JSON manifest describing every generated file to this path
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let mut config = ProcessConfig::new(args.augmentations_per_image, args.num_transforms, args.seed);
    if let Some(path) = args.manifest {
        config = config.with_manifest(path);
    }

    let summary = process_directory(&args.input_dir, &args.output_dir, &config)
        .with_context(|| format!("augmenting {}", args.input_dir.display()))?;

    if summary.images_found == 0 {
        println!("No images found in {}", args.input_dir.display());
        return Ok(());
    }

    let output_dir = std::fs::canonicalize(&args.output_dir).unwrap_or(args.output_dir);

    println!();
    println!("Augmentation complete!");
    println!("Original images:  {}", summary.images_found);
    if summary.images_skipped > 0 {
        println!("Skipped (unreadable): {}", summary.images_skipped);
    }
    println!("Augmented images: {}", summary.augmented_generated);
    println!("Total images:     {}", summary.total_written);
    println!("Output directory: {}", output_dir.display());

    Ok(())
}
