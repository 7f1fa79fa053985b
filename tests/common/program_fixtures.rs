//! Program folder test fixtures
//!
//! Provides temporary folders of program files in various states.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A program with defective workouts, hand-formatted the way exports look.
pub const BROKEN_PROGRAM: &str = r#"{
  "program": "Strength Block",
  "sessions": [
    {
      "session": "Upper A",
      "workouts": [
        {
          "title": "Bench Press - Hypertrophy - Week 7",
          "sets": 4,
          "reps": "Bench Press",
          "notes": ["4 sets of 6-8", "rest 90s"]
        },
        {
          "title": "Row",
          "sets": 3,
          "reps": "Row",
          "notes": []
        }
      ]
    },
    {
      "session": "Lower A",
      "workouts": [
        {
          "title": "Squat",
          "sets": 5,
          "reps": "Squat",
          "notes": ["ascending sets of 3"]
        },
        {
          "title": "Deadlift - Session 2",
          "sets": 1,
          "reps": "5",
          "notes": ["3 sets of 8"]
        }
      ]
    }
  ]
}"#;

/// A program with nothing to fix.
pub const CLEAN_PROGRAM: &str = r#"{
  "program": "Strength Block",
  "sessions": [
    {
      "session": "Upper B",
      "workouts": [
        {"title": "Overhead Press", "sets": 3, "reps": "8-10", "notes": ["3 sets of 8-10"]}
      ]
    }
  ]
}"#;

/// A temporary folder of program files
///
/// The folder is removed when the `TestFolder` is dropped.
pub struct TestFolder {
    /// TempDir handle (keeps directory alive until dropped)
    _dir: TempDir,
    /// Path to the folder
    pub path: PathBuf,
}

impl TestFolder {
    /// Create an empty folder
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().to_path_buf();
        Self { _dir: dir, path }
    }

    /// Create a folder holding one broken and one clean program
    pub fn with_sample_programs() -> Self {
        let folder = Self::new();
        folder.write("block-a.json", BROKEN_PROGRAM);
        folder.write("block-b.json", CLEAN_PROGRAM);
        folder
    }

    /// Write a file into the folder and return its path
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path.join(name);
        fs::write(&path, content).expect("Failed to write fixture");
        path
    }

    /// Read a file from the folder
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.path.join(name)).expect("Failed to read fixture")
    }

    /// Parse a file from the folder as JSON
    pub fn read_json(&self, name: &str) -> serde_json::Value {
        serde_json::from_str(&self.read(name)).expect("Fixture is not valid JSON")
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path.join(name).exists()
    }

    /// Snapshot every file in the folder, sorted by name
    pub fn snapshot(&self) -> Vec<(String, String)> {
        let mut files: Vec<(String, String)> = fs::read_dir(&self.path)
            .expect("Failed to list fixture folder")
            .map(|entry| entry.expect("Failed to read entry").path())
            .filter(|p| p.is_file())
            .map(|p| (file_name(&p), fs::read_to_string(&p).unwrap_or_default()))
            .collect();
        files.sort();
        files
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
