//! Command-line interface module
//!
//! Argument parsing and the handlers for each subcommand.

pub mod args;
pub mod candidates;
pub mod init_config;
pub mod inspect;

pub use args::*;
pub use candidates::handle_candidates_command;
pub use init_config::handle_init_config_command;
pub use inspect::handle_inspect_command;

use anyhow::{Context, Result};
use gemini_webapi_core::ModelOutput;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Read a saved response from `path`, or stdin when `path` is `-`
pub fn load_output(path: &Path) -> Result<ModelOutput> {
    let json = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read response from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read response file: {}", path.display()))?
    };

    debug!(path = %path.display(), bytes = json.len(), "loading saved response");
    ModelOutput::from_json(&json)
        .with_context(|| format!("Invalid response document: {}", path.display()))
}
