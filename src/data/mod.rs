//! Program documents on disk
//!
//! Loading, backing up and rewriting the JSON files the repair rules run over.

mod folder;
mod models;
mod program_file;

pub use folder::scan_folder;
pub use models::{coerce_text, session_name, Change, WorkoutRecord};
pub use program_file::ProgramFile;
