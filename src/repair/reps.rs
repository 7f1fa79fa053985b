//! Repetition expression normalization

use std::sync::LazyLock;

use regex::Regex;

static PADDED_HYPHEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*-\s*").expect("hyphen pattern is valid"));

/// Canonicalize a reps expression such as `"8 – 12"` into `"8-12"`.
///
/// En-dashes become hyphens, whitespace around hyphens is dropped and the
/// result is trimmed. Absent input yields an empty string.
pub fn normalize_reps(raw: Option<&str>) -> String {
    let dashed = raw.unwrap_or_default().replace('\u{2013}', "-");
    PADDED_HYPHEN
        .replace_all(&dashed, "-")
        .trim()
        .to_string()
}

/// Whether a reps expression carries at least one digit.
pub(crate) fn has_digit(expr: &str) -> bool {
    expr.chars().any(|c| c.is_ascii_digit())
}
