//! CLI argument parsing

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Main CLI structure for gemini-webapi
#[derive(Parser, Debug)]
#[command(
    name = "gemini-webapi",
    version,
    about = "Inspect saved gemini.google.com responses"
)]
pub struct Cli {
    /// Workspace root used to find gemini-webapi.toml; defaults to current directory
    #[arg(long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace); overrides the config file
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Disable color output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the chosen candidate of a saved response
    Inspect {
        /// JSON file holding the response, `-` for stdin
        file: PathBuf,

        /// Select a different candidate
        #[arg(long)]
        chosen: Option<usize>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List every candidate of a saved response
    Candidates {
        /// JSON file holding the response, `-` for stdin
        file: PathBuf,
    },

    /// Write a configuration file with default settings
    InitConfig {
        /// Destination; defaults to ./gemini-webapi.toml
        #[arg(long)]
        output: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable rendering
    Text,
    /// Chosen candidate and continuation metadata as JSON
    Json,
    /// Full debug representation of the envelope
    Debug,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inspect_defaults() {
        let cli = Cli::try_parse_from(["gemini-webapi", "inspect", "out.json"]).unwrap();
        match cli.command {
            Commands::Inspect {
                file,
                chosen,
                format,
            } => {
                assert_eq!(file, PathBuf::from("out.json"));
                assert_eq!(chosen, None);
                assert_eq!(format, OutputFormat::Text);
            }
            other => panic!("unexpected command: {other:?}"),
        }
        assert!(cli.log_level.is_none());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "gemini-webapi",
            "candidates",
            "-",
            "--log-level",
            "debug",
            "--no-color",
        ])
        .unwrap();
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(cli.no_color);
    }

    #[test]
    fn test_rejects_unknown_format() {
        let result =
            Cli::try_parse_from(["gemini-webapi", "inspect", "a.json", "--format", "yaml"]);
        assert!(result.is_err());
    }
}
