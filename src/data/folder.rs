//! Program file discovery

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RepairError;

/// List the program files directly inside `folder`, sorted by path.
///
/// Only regular files whose extension equals `extension` (case-sensitive,
/// without the leading dot) are returned. Subfolders are not searched.
pub fn scan_folder(folder: &Path, extension: &str) -> Result<Vec<PathBuf>, RepairError> {
    if !folder.is_dir() {
        return Err(RepairError::NotAFolder(folder.to_path_buf()));
    }

    let extension = extension.trim_start_matches('.');
    let entries = fs::read_dir(folder).map_err(|e| RepairError::io("list", folder, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| RepairError::io("list", folder, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if path.extension().and_then(|ext| ext.to_str()) == Some(extension) {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!(folder = %folder.display(), count = files.len(), "Scanned folder");
    Ok(files)
}
