//! Integration tests for repairing folders of program files
//!
//! Runs sample programs through `fix_folder` and checks the files on disk.

use super::common::program_fixtures::{TestFolder, BROKEN_PROGRAM, CLEAN_PROGRAM};
use repfix::{fix_folder, Change, Config, RepairError};

fn fix(folder: &TestFolder, config: &Config) -> repfix::RunSummary {
    fix_folder(&folder.path, config, |_| {}).expect("fix_folder failed")
}

/// Test that defective workouts are fixed and everything else is kept
#[test]
fn test_fixes_defective_workouts_only() {
    let folder = TestFolder::with_sample_programs();
    let summary = fix(&folder, &Config::default());

    assert_eq!(summary.total_fixes, 2);
    assert_eq!(summary.files.len(), 1);
    assert_eq!(
        summary.files[0].changes,
        vec![
            Change {
                session: "Upper A".into(),
                title: "Bench Press - Hypertrophy - Week 7".into(),
                old_reps: "Bench Press".into(),
                new_reps: "6-8".into(),
            },
            Change {
                session: "Lower A".into(),
                title: "Squat".into(),
                old_reps: "Squat".into(),
                new_reps: "3".into(),
            },
        ]
    );

    let mut expected: serde_json::Value = serde_json::from_str(BROKEN_PROGRAM).unwrap();
    expected["sessions"][0]["workouts"][0]["reps"] = "6-8".into();
    expected["sessions"][1]["workouts"][0]["reps"] = "3".into();
    assert_eq!(folder.read_json("block-a.json"), expected);

    // Row has no notes, Deadlift already has numeric reps
    let fixed = folder.read_json("block-a.json");
    assert_eq!(fixed["sessions"][0]["workouts"][1]["reps"], "Row");
    assert_eq!(fixed["sessions"][1]["workouts"][1]["reps"], "5");

    assert_eq!(folder.read("block-b.json"), CLEAN_PROGRAM);
}

/// Test that the rewritten file keeps key order and pretty formatting
#[test]
fn test_rewrite_keeps_key_order() {
    let folder = TestFolder::with_sample_programs();
    fix(&folder, &Config::default());

    let text = folder.read("block-a.json");
    assert!(text.starts_with("{\n  \"program\": \"Strength Block\",\n  \"sessions\": ["));
    let title = text.find("\"title\": \"Bench Press").unwrap();
    let sets = text.find("\"sets\": 4").unwrap();
    let reps = text.find("\"reps\": \"6-8\"").unwrap();
    let notes = text.find("\"notes\": [").unwrap();
    assert!(title < sets && sets < reps && reps < notes);
}

/// Test that the backup holds the untouched original and is only written once
#[test]
fn test_backup_is_pre_fix_original() {
    let folder = TestFolder::with_sample_programs();
    fix(&folder, &Config::default());

    assert_eq!(folder.read("block-a.json.bak"), BROKEN_PROGRAM);
    assert!(!folder.exists("block-b.json.bak"));

    // Break the file again; the first backup must survive the second fix.
    folder.write("block-a.json", BROKEN_PROGRAM.replace("Strength Block", "Round Two").as_str());
    let summary = fix(&folder, &Config::default());
    assert_eq!(summary.total_fixes, 2);
    assert_eq!(summary.files[0].backup, None);
    assert_eq!(folder.read("block-a.json.bak"), BROKEN_PROGRAM);
}

/// Test that a second run over fixed files changes nothing
#[test]
fn test_second_run_is_a_no_op() {
    let folder = TestFolder::with_sample_programs();
    fix(&folder, &Config::default());
    let after_first = folder.snapshot();

    let summary = fix(&folder, &Config::default());
    assert_eq!(summary.total_fixes, 0);
    assert!(summary.files.is_empty());
    assert_eq!(folder.snapshot(), after_first);
}

/// Test that a dry run leaves the folder byte-identical
#[test]
fn test_dry_run_leaves_folder_untouched() {
    let folder = TestFolder::with_sample_programs();
    let before = folder.snapshot();

    let summary = fix(&folder, &Config::default().with_dry_run(true));
    assert!(summary.dry_run);
    assert_eq!(summary.total_fixes, 2);
    assert_eq!(folder.snapshot(), before);
}

/// Test the configurable backup suffix and extension
#[test]
fn test_custom_suffix_and_extension() {
    let folder = TestFolder::new();
    folder.write("plan.program", BROKEN_PROGRAM);
    folder.write("plan.json", BROKEN_PROGRAM);

    let config = Config {
        extension: "program".into(),
        backup_suffix: ".orig".into(),
        ..Config::default()
    };
    let summary = fix(&folder, &config);

    assert_eq!(summary.total_fixes, 2);
    assert_eq!(folder.read("plan.program.orig"), BROKEN_PROGRAM);
    assert_eq!(folder.read("plan.json"), BROKEN_PROGRAM);
}

/// Test that program name qualifiers are only stripped when enabled
#[test]
fn test_strip_program_name_option() {
    let folder = TestFolder::new();
    let program = r#"{
  "program": "PHUL",
  "sessions": [
    {"session": "Power Upper", "workouts": [
      {"title": "Bench - PHUL", "reps": "Bench", "notes": ["3 x 5"]}
    ]}
  ]
}"#;
    folder.write("phul.json", program);

    let dry = Config::default().with_dry_run(true);
    assert_eq!(fix(&folder, &dry).total_fixes, 0);

    let config = Config {
        strip_program_name: true,
        ..Config::default()
    };
    let summary = fix(&folder, &config);
    assert_eq!(summary.total_fixes, 1);
    assert_eq!(folder.read_json("phul.json")["sessions"][0]["workouts"][0]["reps"], "5");
}

/// Test that an invalid document stops the run with an error
#[test]
fn test_invalid_document_is_an_error() {
    let folder = TestFolder::new();
    folder.write("a.json", "[\"not\", \"an\", \"object\"]");

    let err = fix_folder(&folder.path, &Config::default(), |_| {}).unwrap_err();
    assert!(matches!(err, RepairError::InvalidDocument { .. }));
}

/// Test that a missing folder is reported as such
#[test]
fn test_missing_folder() {
    let folder = TestFolder::new();
    let missing = folder.path.join("nope");
    let err = fix_folder(&missing, &Config::default(), |_| {}).unwrap_err();
    assert!(matches!(err, RepairError::NotAFolder(_)));
}
