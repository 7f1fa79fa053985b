//! Fixing program files and folders of them
//!
//! Files are processed one at a time in sorted order. A file is only
//! touched on disk when it has at least one fix: the original is backed up
//! first (once, never overwritten) and the fixed document is written over it.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Config;
use crate::data::{scan_folder, Change, ProgramFile};
use crate::error::RepairError;
use crate::repair::repair_document;

/// Outcome of fixing one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path of the program file
    pub file: PathBuf,
    /// Fixes applied, in document order
    pub changes: Vec<Change>,
    /// Backup written during this run, if any
    #[serde(skip)]
    pub backup: Option<PathBuf>,
}

impl FileReport {
    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        self.file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.file.display().to_string())
    }
}

/// Outcome of a whole run
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Files that received fixes, in processing order
    pub files: Vec<FileReport>,
    /// Total number of fixes across all files
    pub total_fixes: usize,
    /// Whether writes were skipped
    pub dry_run: bool,
}

/// Fix a single program file.
pub fn fix_file(path: &Path, config: &Config) -> Result<FileReport, RepairError> {
    let mut program = ProgramFile::load(path)?;
    let changes = repair_document(program.document_mut(), &config.repair_options());

    let mut report = FileReport {
        file: path.to_path_buf(),
        changes,
        backup: None,
    };

    if report.changes.is_empty() {
        tracing::debug!(path = %path.display(), "No fixes needed");
        return Ok(report);
    }

    if config.dry_run {
        tracing::info!(
            path = %path.display(),
            fixes = report.changes.len(),
            "Dry run, not writing"
        );
        return Ok(report);
    }

    report.backup = program.backup(&config.backup_suffix)?;
    program.save()?;
    Ok(report)
}

/// Fix every program file in `folder`.
///
/// `on_file` is called after each file that received fixes, so callers can
/// report progress as it happens. The first failing file stops the run.
pub fn fix_folder<F>(
    folder: &Path,
    config: &Config,
    mut on_file: F,
) -> Result<RunSummary, RepairError>
where
    F: FnMut(&FileReport),
{
    let files = scan_folder(folder, &config.extension)?;
    tracing::info!(folder = %folder.display(), files = files.len(), "Fixing program files");

    let mut summary = RunSummary {
        dry_run: config.dry_run,
        ..RunSummary::default()
    };

    for path in files {
        let report = fix_file(&path, config)?;
        if report.changes.is_empty() {
            continue;
        }
        on_file(&report);
        summary.total_fixes += report.changes.len();
        summary.files.push(report);
    }

    Ok(summary)
}
