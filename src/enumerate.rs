use crate::error::{AtlasError, Result};
use std::path::{Path, PathBuf};

/// Lowercased extensions picked up from the input directory.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "webp", "webm"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    /// Format implied by the extension. `None` for extensions the codec has no
    /// mapping for (`.webm`); decoding then relies on content sniffing.
    pub format: Option<image::ImageFormat>,
}

impl ImageFile {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map_or(false, |ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Lists the entries directly inside `dir` with a supported extension, sorted by path.
///
/// Only the name is checked: a subdirectory or dangling link called `x.png` is
/// listed too, takes its grid cell, and is later skipped when it fails to decode.
/// An existing directory without any matching entry yields an empty list.
pub fn enumerate_images(dir: &Path) -> Result<Vec<ImageFile>> {
    if !dir.exists() {
        return Err(AtlasError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| AtlasError::io(dir, e))? {
        let path = entry.map_err(|e| AtlasError::io(dir, e))?.path();

        if !is_supported(&path) {
            log::debug!("Ignoring {}", path.display());
            continue;
        }

        let format = image::ImageFormat::from_path(&path).ok();
        files.push(ImageFile { path, format });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}
