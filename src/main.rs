//! gemini-webapi: inspect saved gemini.google.com responses

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use gemini_webapi_core::ConfigManager;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Cli::parse();

    if args.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let config = match &args.config {
        Some(path) => ConfigManager::load_from_file(path)?,
        None => {
            let workspace = match &args.workspace {
                Some(dir) => dir.clone(),
                None => std::env::current_dir().context("cannot determine current dir")?,
            };
            ConfigManager::load_from_workspace(workspace)?
        }
    };

    let level = args
        .log_level
        .as_deref()
        .unwrap_or(&config.config().logging.level);
    init_tracing(level, args.no_color)?;

    if let Some(path) = config.config_path() {
        tracing::debug!(path = %path.display(), "using config file");
    }

    match args.command {
        Commands::Inspect {
            file,
            chosen,
            format,
        } => cli::handle_inspect_command(&file, chosen, format, &config.config().display),
        Commands::Candidates { file } => cli::handle_candidates_command(&file),
        Commands::InitConfig { output, force } => {
            cli::handle_init_config_command(output.as_deref(), force).map(|_| ())
        }
    }
}

/// Install the stderr log subscriber; `RUST_LOG` wins over `level`
fn init_tracing(level: &str, no_color: bool) -> Result<()> {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (filter, rejected_env) = resolve_filter(env.as_deref(), level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("Failed to initialize logging: {err}"))?;

    if let Some(err) = rejected_env {
        tracing::warn!(
            env = EnvFilter::DEFAULT_ENV,
            error = %err,
            fallback = level,
            "ignoring invalid log filter from environment"
        );
    }
    Ok(())
}

/// Pick the log filter, returning the parse error of an ignored env filter
fn resolve_filter(env: Option<&str>, level: &str) -> Result<(EnvFilter, Option<String>)> {
    let rejected_env = match env.filter(|directives| !directives.trim().is_empty()) {
        Some(directives) => match EnvFilter::try_new(directives) {
            Ok(filter) => return Ok((filter, None)),
            Err(err) => Some(err.to_string()),
        },
        None => None,
    };

    let filter =
        EnvFilter::try_new(level).with_context(|| format!("Invalid log level: {level}"))?;
    Ok((filter, rejected_env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn test_env_filter_wins_when_valid() {
        let (filter, rejected) = resolve_filter(Some("debug"), "warn").unwrap();
        assert!(rejected.is_none());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_invalid_env_filter_is_reported() {
        let (filter, rejected) = resolve_filter(Some("gemini=notalevel"), "warn").unwrap();
        assert!(rejected.is_some());
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn test_invalid_level_is_an_error() {
        let err = resolve_filter(None, "gemini=notalevel").unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }
}
