//! Canonical exercise names
//!
//! Workout titles in program files carry trailing qualifiers such as
//! `" - Hypertrophy - Week 7"` or `" - Session 2"`. The canonical title is the
//! exercise name with those qualifiers removed.

use std::sync::LazyLock;

use regex::Regex;

/// Trailing qualifier rules, applied in order. Each one removes its first
/// match and everything after it.
static QUALIFIER_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\s*-\s*Hypertrophy\b.*$",
        r"(?i)\s*-\s*Week\s*\d+\b.*$",
        r"(?i)\s*-\s*WEEK\s*\d+\b.*$",
        r"(?i)\s*-\s*Session\s*\d+\b.*$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("qualifier pattern is valid"))
    .collect()
});

/// Return the canonical exercise name for a workout title.
///
/// An absent title is treated as empty. The result is trimmed.
pub fn canonical_title(title: Option<&str>) -> String {
    strip_rules(title.unwrap_or_default().trim(), &QUALIFIER_RULES)
}

/// Like [`canonical_title`], but first strips a `" - <program>"` qualifier
/// when a program name is given.
///
/// The program name is matched literally and case-insensitively.
pub fn canonical_title_for_program(title: Option<&str>, program: Option<&str>) -> String {
    let title = title.unwrap_or_default().trim();
    let program = program.map(str::trim).filter(|p| !p.is_empty());

    let Some(program) = program else {
        return strip_rules(title, &QUALIFIER_RULES);
    };

    match program_rule(program) {
        Some(rule) => {
            let stripped = strip_first(title, &rule);
            strip_rules(stripped.trim(), &QUALIFIER_RULES)
        }
        None => strip_rules(title, &QUALIFIER_RULES),
    }
}

fn program_rule(program: &str) -> Option<Regex> {
    let pattern = format!(r"(?i)\s*-\s*{}\b.*$", regex::escape(program));
    match Regex::new(&pattern) {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::debug!(program, error = %e, "Skipping program name qualifier rule");
            None
        }
    }
}

fn strip_rules(title: &str, rules: &[Regex]) -> String {
    let mut out = title.to_string();
    for rule in rules {
        out = strip_first(&out, rule);
    }
    out.trim().to_string()
}

fn strip_first(input: &str, rule: &Regex) -> String {
    rule.replace(input, "").into_owned()
}
