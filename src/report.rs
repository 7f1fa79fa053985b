//! Printing what a run changed

use std::io::{self, Write};

use crate::batch::{FileReport, RunSummary};

/// Write the text block for one fixed file.
///
/// ```text
///
/// == plan.json ==
/// - Day 1 | Squat - Week 1: reps 'Squat' -> '5'
/// ```
pub fn write_file_text<W: Write>(out: &mut W, report: &FileReport) -> io::Result<()> {
    if report.changes.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n== {} ==", report.display_name())?;
    for change in &report.changes {
        writeln!(
            out,
            "- {} | {}: reps '{}' -> '{}'",
            change.session, change.title, change.old_reps, change.new_reps
        )?;
    }
    Ok(())
}

/// Write the closing summary line.
pub fn write_summary_text<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    if summary.dry_run {
        writeln!(
            out,
            "\nDone. Total fixes: {} (dry run, nothing written)",
            summary.total_fixes
        )
    } else {
        writeln!(out, "\nDone. Total fixes: {}", summary.total_fixes)
    }
}

/// Write the whole run as one pretty JSON object.
pub fn write_json<W: Write>(out: &mut W, summary: &RunSummary) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary)?;
    writeln!(out)
}
