//! Reps repair rules
//!
//! Pure functions that recognise a workout whose `reps` field holds a copy of
//! the exercise name and recover the intended scheme from its notes.

pub mod detector;
pub mod notes;
pub mod reps;
pub mod title;

pub use detector::{diagnose_workout, is_defective, repair_document, Correction, RepairOptions};
pub use notes::{extract_reps_from_notes, join_notes, match_reps_in_notes, NotesMatch, NotesRule};
pub use reps::normalize_reps;
pub use title::{canonical_title, canonical_title_for_program};
