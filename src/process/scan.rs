use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AugmentError, Result};

/// Extensions accepted as input images, compared case-insensitively.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.iter().any(|s| s.eq_ignore_ascii_case(ext)))
        .unwrap_or(false)
}

/// Lists regular files in `dir` with a supported extension, sorted by file
/// name so that runs visit files (and draw random numbers) in a stable order.
///
/// Subdirectories and other file types are skipped; the scan does not recurse.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| AugmentError::io(dir, e))?;

    let mut images = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| AugmentError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| AugmentError::io(&path, e))?;
        let is_file = file_type.is_file() || (file_type.is_symlink() && path.is_file());
        if is_file && is_supported_image(&path) {
            images.push(path);
        }
    }

    images.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_match_ignores_case() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("b.JPEG")));
        assert!(is_supported_image(Path::new("dir/c.Png")));
        assert!(is_supported_image(Path::new("d.bmp")));
        assert!(!is_supported_image(Path::new("e.gif")));
        assert!(!is_supported_image(Path::new("jpg")));
        assert!(!is_supported_image(Path::new("f.jpg.txt")));
    }

    #[test]
    fn lists_only_supported_files_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.png", "a.JPG", "c.gif", "notes.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested.png")).unwrap();

        let names: Vec<_> = list_images(dir.path())
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.JPG", "b.png"]);
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(list_images(&missing), Err(AugmentError::Io { .. })));
    }
}
