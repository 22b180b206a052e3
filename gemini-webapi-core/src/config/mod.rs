//! Configuration for inspecting saved responses
//!
//! Settings are read from `gemini-webapi.toml`; every field has a default so
//! a partial file (or no file at all) is valid.

pub mod constants;
pub mod loader;

pub use loader::ConfigManager;

use constants::defaults;
use serde::{Deserialize, Serialize};

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeminiWebConfig {
    /// What to print when rendering a response
    #[serde(default)]
    pub display: DisplayConfig,

    /// Log filtering
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rendering options for a [`crate::types::ModelOutput`]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Print the reasoning text when the candidate has one
    #[serde(default = "default_show_thoughts")]
    pub show_thoughts: bool,

    /// List images attached to the candidate
    #[serde(default = "default_show_images")]
    pub show_images: bool,

    /// Print the `[cid, rid, rcid]` continuation tokens
    #[serde(default = "default_show_metadata")]
    pub show_metadata: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_thoughts: default_show_thoughts(),
            show_images: default_show_images(),
            show_metadata: default_show_metadata(),
        }
    }
}

fn default_show_thoughts() -> bool {
    defaults::SHOW_THOUGHTS
}
fn default_show_images() -> bool {
    defaults::SHOW_IMAGES
}
fn default_show_metadata() -> bool {
    defaults::SHOW_METADATA
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    defaults::LOG_LEVEL.to_string()
}
