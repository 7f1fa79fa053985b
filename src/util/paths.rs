//! Path utilities for repfix configuration

use std::path::PathBuf;

/// Get the repfix configuration directory (`<config dir>/repfix`)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("repfix"))
        .unwrap_or_else(|| PathBuf::from(".repfix"))
}

/// Get the default config file path (`<config dir>/repfix/config.toml`)
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}
