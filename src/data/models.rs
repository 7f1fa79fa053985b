//! Views over program documents
//!
//! Program files are kept as a generic JSON tree so unknown fields and key
//! order survive a rewrite. The types here are best-effort snapshots of the
//! parts the repair rules read.

use serde::Serialize;
use serde_json::{Map, Value};

/// Coerce a JSON scalar to text.
///
/// Strings map to themselves, numbers and booleans to their JSON text.
/// `null`, arrays and objects have no text form.
pub fn coerce_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Snapshot of a workout entry inside a session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutRecord {
    /// Workout title as stored, if any
    pub title: Option<String>,
    /// Stored reps, coerced to text (empty when missing)
    pub reps: String,
    /// Note fragments in order; `None` entries are fragments with no text
    pub notes: Option<Vec<Option<String>>>,
}

impl WorkoutRecord {
    /// Read a workout from its JSON object. Never fails.
    pub fn from_json(workout: &Map<String, Value>) -> Self {
        let title = workout.get("title").and_then(coerce_text);
        let reps = workout
            .get("reps")
            .and_then(coerce_text)
            .unwrap_or_default();
        let notes = match workout.get("notes") {
            Some(Value::Array(items)) => Some(items.iter().map(coerce_text).collect()),
            Some(Value::String(s)) => Some(vec![Some(s.clone())]),
            _ => None,
        };

        Self { title, reps, notes }
    }

    /// Title with surrounding whitespace removed, empty when absent.
    pub fn trimmed_title(&self) -> &str {
        self.title.as_deref().map(str::trim).unwrap_or_default()
    }
}

/// Display name of a session, falling back to its 1-based position.
pub fn session_name(session: &Map<String, Value>, index: usize) -> String {
    session
        .get("session")
        .and_then(coerce_text)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format!("Session {}", index + 1))
}

/// A reps correction applied to one workout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    /// Name of the session holding the workout
    pub session: String,
    /// Workout title as stored (trimmed)
    pub title: String,
    /// Reps value before the fix
    pub old_reps: String,
    /// Reps value after the fix
    pub new_reps: String,
}
