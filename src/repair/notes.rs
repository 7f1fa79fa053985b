//! Recover a reps expression from free-text workout notes
//!
//! Notes written by coaches usually mention the scheme somewhere, e.g.
//! `"4 sets of 6-8"`, `"3x5"` or `"AMRAP, about 10 reps"`. The rules below
//! are tried in a fixed priority order and the first digit-bearing capture
//! wins. Multi-token cues come before the bare `reps` suffix so that a longer
//! phrase is not cut down to a misleading number.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::reps::{has_digit, normalize_reps};

/// A single count or a range, hyphen or en-dash separated.
const REPS: &str = r"[0-9]+(?:\s*[-–]\s*[0-9]+)?";

/// Which extraction rule produced a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NotesRule {
    /// `"5 sets of 5"`, `"3 sets of 8-12"`
    SetsOf,
    /// `"3x5"`, `"4 * 8-12"`
    Multiply,
    /// `"ascending sets of 3"`
    BareSetsOf,
    /// `"8 reps"`, `"1 rep"`
    RepsSuffix,
}

impl NotesRule {
    pub fn label(&self) -> &'static str {
        match self {
            NotesRule::SetsOf => "sets-of",
            NotesRule::Multiply => "multiply",
            NotesRule::BareSetsOf => "bare-sets-of",
            NotesRule::RepsSuffix => "reps-suffix",
        }
    }
}

/// Reps expression recovered from notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesMatch {
    /// Canonical reps expression
    pub reps: String,
    /// Rule that matched
    pub rule: NotesRule,
}

static RULES: LazyLock<Vec<(NotesRule, Regex)>> = LazyLock::new(|| {
    [
        (NotesRule::SetsOf, format!(r"(?i)(\d+)\s*sets?\s*of\s*({REPS})")),
        (NotesRule::Multiply, format!(r"(?i)(\d+)\s*(?:x|\*)\s*({REPS})")),
        (NotesRule::BareSetsOf, format!(r"(?i)sets?\s+of\s+({REPS})")),
        (NotesRule::RepsSuffix, format!(r"(?i)({REPS})\s*reps?\b")),
    ]
    .into_iter()
    .map(|(rule, pattern)| {
        let re = Regex::new(&pattern).expect("notes rule pattern is valid");
        (rule, re)
    })
    .collect()
});

/// Join note fragments into one search text, skipping absent fragments.
pub fn join_notes<S: AsRef<str>>(notes: &[Option<S>]) -> String {
    notes
        .iter()
        .flatten()
        .map(|n| n.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Search notes for a reps scheme and report the rule that found it.
///
/// Returns `None` when notes are absent or empty, or when no rule yields a
/// digit-bearing expression.
pub fn match_reps_in_notes<S: AsRef<str>>(notes: Option<&[Option<S>]>) -> Option<NotesMatch> {
    let notes = notes.filter(|n| !n.is_empty())?;
    let text = join_notes(notes);

    for (rule, re) in RULES.iter() {
        let Some(caps) = re.captures(&text) else {
            continue;
        };
        // The reps group is always the last one.
        let captured = caps.iter().skip(1).flatten().last().map(|m| m.as_str());
        let reps = normalize_reps(captured);
        if has_digit(&reps) {
            return Some(NotesMatch { reps, rule: *rule });
        }
    }

    None
}

/// Search notes for a reps scheme, returning its canonical form.
pub fn extract_reps_from_notes<S: AsRef<str>>(notes: Option<&[Option<S>]>) -> Option<String> {
    match_reps_in_notes(notes).map(|m| m.reps)
}
