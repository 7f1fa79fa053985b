pub mod batch;
pub mod config;
pub mod data;
pub mod error;
pub mod repair;
pub mod report;
pub mod util;

pub use batch::{fix_file, fix_folder, FileReport, RunSummary};
pub use config::{Config, ReportFormat};
pub use data::{scan_folder, Change, ProgramFile, WorkoutRecord};
pub use error::RepairError;
pub use repair::{
    canonical_title, diagnose_workout, extract_reps_from_notes, normalize_reps, repair_document,
    RepairOptions,
};
