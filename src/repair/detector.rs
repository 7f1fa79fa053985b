//! Detect and correct workouts whose reps duplicate the exercise name

use serde_json::Value;

use crate::data::{coerce_text, session_name, Change, WorkoutRecord};

use super::notes::{match_reps_in_notes, NotesRule};
use super::title::canonical_title_for_program;

/// Options for a repair pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RepairOptions {
    /// Also strip a `" - <program>"` qualifier from titles, using the
    /// document's top-level `program` name.
    pub strip_program_name: bool,
}

/// A correction for a single defective workout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correction {
    /// Stored reps, trimmed
    pub old_reps: String,
    /// Reps recovered from the notes
    pub new_reps: String,
    /// Notes rule that recovered them
    pub rule: NotesRule,
}

/// Whether stored reps are just a copy of the canonical exercise name.
pub fn is_defective(canonical_title: &str, reps: &str) -> bool {
    let reps = reps.trim();
    !reps.is_empty()
        && !canonical_title.is_empty()
        && reps.to_lowercase() == canonical_title.to_lowercase()
}

/// Work out the correction for a workout, if it is defective and its notes
/// name a different reps scheme.
pub fn diagnose_workout(record: &WorkoutRecord, program: Option<&str>) -> Option<Correction> {
    let canonical = canonical_title_for_program(record.title.as_deref(), program);
    let reps = record.reps.trim();
    if !is_defective(&canonical, reps) {
        return None;
    }

    let Some(found) = match_reps_in_notes(record.notes.as_deref()) else {
        tracing::debug!(title = %canonical, "Defective reps but nothing recoverable in notes");
        return None;
    };

    if found.reps == reps {
        return None;
    }

    Some(Correction {
        old_reps: reps.to_string(),
        new_reps: found.reps,
        rule: found.rule,
    })
}

/// Run a repair pass over a whole program document.
///
/// Only the `reps` value of corrected workouts is replaced; everything else
/// in the document is left as is. Changes are returned in document order.
pub fn repair_document(document: &mut Value, options: &RepairOptions) -> Vec<Change> {
    let program = if options.strip_program_name {
        document.get("program").and_then(coerce_text)
    } else {
        None
    };

    let mut changes = Vec::new();
    let Some(sessions) = document.get_mut("sessions").and_then(Value::as_array_mut) else {
        return changes;
    };

    for (index, session) in sessions.iter_mut().enumerate() {
        let Some(session) = session.as_object_mut() else {
            continue;
        };
        let name = session_name(session, index);
        let Some(workouts) = session.get_mut("workouts").and_then(Value::as_array_mut) else {
            continue;
        };

        for workout in workouts.iter_mut().filter_map(Value::as_object_mut) {
            let record = WorkoutRecord::from_json(workout);
            let Some(correction) = diagnose_workout(&record, program.as_deref()) else {
                continue;
            };

            tracing::debug!(
                session = %name,
                title = record.trimmed_title(),
                old = %correction.old_reps,
                new = %correction.new_reps,
                rule = correction.rule.label(),
                "Correcting reps"
            );

            workout.insert(
                "reps".to_string(),
                Value::String(correction.new_reps.clone()),
            );
            changes.push(Change {
                session: name.clone(),
                title: record.trimmed_title().to_string(),
                old_reps: correction.old_reps,
                new_reps: correction.new_reps,
            });
        }
    }

    changes
}
