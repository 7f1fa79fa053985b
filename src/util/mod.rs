//! Utility modules

pub mod paths;

pub use paths::{config_dir, config_path};
