use crate::config::ImageConfig;
use crate::error::{AppError, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Check that `path` names a readable image file the identifier accepts.
///
/// Only the file name and metadata are inspected; the image is not decoded.
pub fn validate_image(path: &Path, images: &ImageConfig) -> Result<PathBuf> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| AppError::Image(format!("'{}' is not a file", path.display())))?;

    if !images.matches_file(file_name) {
        return Err(AppError::Image(format!(
            "'{}' is not a supported image (expected {})",
            file_name,
            images.patterns.join(" ")
        )));
    }

    let metadata = std::fs::metadata(path)
        .map_err(|e| AppError::Image(format!("{}: {}", path.display(), e)))?;

    if !metadata.is_file() {
        return Err(AppError::Image(format!("'{}' is not a file", path.display())));
    }

    debug!("Accepted image {} ({} bytes)", path.display(), metadata.len());
    Ok(path.to_path_buf())
}
