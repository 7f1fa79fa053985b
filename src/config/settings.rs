use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::RepairError;
use crate::repair::RepairOptions;
use crate::util::paths::config_path;

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// How the change report is printed
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ReportFormat {
    /// One line per fix, grouped by file
    #[default]
    Text,
    /// A single JSON object
    Json,
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Strip `" - <program>"` title qualifiers
    pub strip_program_name: bool,
    /// Extension of program files to scan, without the dot
    pub extension: String,
    /// Suffix appended to a file name to form its backup
    pub backup_suffix: String,
    /// Report output format
    pub report_format: ReportFormat,
    /// Detect and report only, write nothing
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            strip_program_name: false,
            extension: "json".to_string(),
            backup_suffix: ".bak".to_string(),
            report_format: ReportFormat::Text,
            dry_run: false,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlRepairConfig {
    pub strip_program_name: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlFilesConfig {
    pub extension: Option<String>,
    pub backup_suffix: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlReportConfig {
    pub format: Option<ReportFormat>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Repair rule configuration
    pub repair: Option<TomlRepairConfig>,
    /// File discovery and backup configuration
    pub files: Option<TomlFilesConfig>,
    /// Report configuration
    pub report: Option<TomlReportConfig>,
}

impl Config {
    /// Load configuration from the default location, merging with defaults.
    ///
    /// A missing file is normal. An unreadable or invalid one is logged and
    /// ignored.
    pub fn load() -> Self {
        let config_file = config_path();
        if !config_file.exists() {
            return Config::default();
        }

        match Self::load_from_file(&config_file) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring config file");
                Config::default()
            }
        }
    }

    /// Load configuration from an explicit file.
    pub fn load_from_file(path: &Path) -> Result<Self, RepairError> {
        let contents = fs::read_to_string(path).map_err(|e| RepairError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::load_from_str(&contents).map_err(|e| RepairError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    /// Parse configuration from TOML text, merging with defaults.
    pub fn load_from_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Config::default();
        config.apply(toml_config);
        Ok(config)
    }

    fn apply(&mut self, toml_config: TomlConfig) {
        if let Some(repair) = toml_config.repair {
            if let Some(strip) = repair.strip_program_name {
                self.strip_program_name = strip;
            }
        }

        if let Some(files) = toml_config.files {
            if let Some(extension) = files.extension {
                self.extension = extension;
            }
            if let Some(suffix) = files.backup_suffix {
                self.backup_suffix = suffix;
            }
        }

        if let Some(format) = toml_config.report.and_then(|r| r.format) {
            self.report_format = format;
        }
    }

    /// Options for the repair rules
    pub fn repair_options(&self) -> RepairOptions {
        RepairOptions {
            strip_program_name: self.strip_program_name,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
