//! Loading, backing up and rewriting program files

use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::RepairError;

/// A program document loaded from disk
///
/// Holds the original text alongside the parsed tree so a backup always
/// reflects the file as it was before any fix.
#[derive(Debug, Clone)]
pub struct ProgramFile {
    path: PathBuf,
    original: String,
    document: Value,
}

impl ProgramFile {
    /// Read and parse a program file.
    pub fn load(path: &Path) -> Result<Self, RepairError> {
        let content = fs::read_to_string(path).map_err(|e| RepairError::io("read", path, e))?;
        let file = Self::from_content(path, content)?;
        tracing::debug!(
            path = %path.display(),
            bytes = file.original.len(),
            "Loaded program file"
        );
        Ok(file)
    }

    /// Parse program text that claims to come from `path`.
    pub fn from_content(path: &Path, content: String) -> Result<Self, RepairError> {
        let document: Value =
            serde_json::from_str(&content).map_err(|source| RepairError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        if !document.is_object() {
            return Err(RepairError::InvalidDocument {
                path: path.to_path_buf(),
                reason: "top-level value is not an object".to_string(),
            });
        }

        Ok(Self {
            path: path.to_path_buf(),
            original: content,
            document,
        })
    }

    pub fn document_mut(&mut self) -> &mut Value {
        &mut self.document
    }

    /// Path of the backup for this file, e.g. `plan.json.bak`.
    pub fn backup_path(&self, suffix: &str) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(suffix);
        PathBuf::from(name)
    }

    /// Write the original text to the backup path unless a backup already
    /// exists.
    ///
    /// Returns the backup path when one was written, `None` when an existing
    /// backup was kept.
    pub fn backup(&self, suffix: &str) -> Result<Option<PathBuf>, RepairError> {
        let backup_path = self.backup_path(suffix);
        let mut file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&backup_path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                tracing::debug!(
                    backup = %backup_path.display(),
                    "Backup already exists, keeping it"
                );
                return Ok(None);
            }
            Err(e) => return Err(RepairError::io("create backup", &backup_path, e)),
        };

        file.write_all(self.original.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| RepairError::io("write backup", &backup_path, e))?;

        tracing::info!(backup = %backup_path.display(), "Wrote backup");
        Ok(Some(backup_path))
    }

    /// Serialize the document: two-space indent, original key order,
    /// trailing newline.
    pub fn render(&self) -> Result<String, RepairError> {
        let mut out =
            serde_json::to_string_pretty(&self.document).map_err(|source| {
                RepairError::Serialize {
                    path: self.path.clone(),
                    source,
                }
            })?;
        out.push('\n');
        Ok(out)
    }

    /// Atomically replace the file on disk with the current document.
    ///
    /// A symlinked file is written through to its target, and the target
    /// keeps its permissions.
    pub fn save(&self) -> Result<(), RepairError> {
        let rendered = self.render()?;
        let target =
            fs::canonicalize(&self.path).map_err(|e| RepairError::io("resolve", &self.path, e))?;
        let permissions = fs::metadata(&target)
            .map_err(|e| RepairError::io("inspect", &target, e))?
            .permissions();
        let dir = target.parent().unwrap_or_else(|| Path::new("."));

        let mut tmp =
            NamedTempFile::new_in(dir).map_err(|e| RepairError::io("create temp file in", dir, e))?;
        tmp.write_all(rendered.as_bytes())
            .and_then(|_| tmp.flush())
            .and_then(|_| tmp.as_file().set_permissions(permissions))
            .map_err(|e| RepairError::io("write", tmp.path().to_path_buf(), e))?;
        tmp.persist(&target)
            .map_err(|e| RepairError::io("replace", &target, e.error))?;

        tracing::info!(
            path = %self.path.display(),
            bytes = rendered.len(),
            "Rewrote program file"
        );
        Ok(())
    }
}
