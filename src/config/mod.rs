mod settings;

pub use settings::{Config, ReportFormat, TomlConfig, EXAMPLE_CONFIG};
