use super::GeminiWebConfig;
use super::constants::files::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loaded configuration together with the file it came from
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: GeminiWebConfig,
    config_path: Option<PathBuf>,
}

impl ConfigManager {
    /// Load configuration from the default locations
    pub fn load() -> Result<Self> {
        Self::load_from_workspace(std::env::current_dir()?)
    }

    /// Get the user's home directory path
    fn get_home_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            return Some(PathBuf::from(home));
        }

        // Windows
        if let Ok(userprofile) = std::env::var("USERPROFILE") {
            return Some(PathBuf::from(userprofile));
        }

        dirs::home_dir()
    }

    /// Load configuration from a specific workspace
    ///
    /// Looks in `<workspace>/gemini-webapi.toml`, then
    /// `<workspace>/.gemini-webapi/gemini-webapi.toml`, then the same path
    /// under the home directory. Falls back to defaults.
    pub fn load_from_workspace(workspace: impl AsRef<Path>) -> Result<Self> {
        let workspace = workspace.as_ref();

        let mut candidates = vec![
            workspace.join(CONFIG_FILE_NAME),
            workspace.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME),
        ];
        if let Some(home_dir) = Self::get_home_dir() {
            candidates.push(home_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        }

        for path in candidates {
            if path.exists() {
                return Self::load_from_file(&path);
            }
        }

        debug!(workspace = %workspace.display(), "no config file found, using defaults");
        Ok(Self {
            config: GeminiWebConfig::default(),
            config_path: None,
        })
    }

    /// Load configuration from a specific file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: GeminiWebConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!(path = %path.display(), "loaded config file");
        Ok(Self {
            config,
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Write the default configuration to `output`
    pub fn create_sample_config(output: impl AsRef<Path>) -> Result<()> {
        let output = output.as_ref();
        let content = Self::sample_config()?;

        if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(output, content)
            .with_context(|| format!("Failed to write config file: {}", output.display()))?;
        Ok(())
    }

    /// Default configuration rendered as TOML
    pub fn sample_config() -> Result<String> {
        let body = toml::to_string_pretty(&GeminiWebConfig::default())
            .context("Failed to serialize default config")?;
        Ok(format!("# gemini-webapi configuration\n\n{body}"))
    }

    /// Get the loaded configuration
    pub fn config(&self) -> &GeminiWebConfig {
        &self.config
    }

    /// Path of the file the configuration was read from, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_workspace_file_takes_priority() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join(CONFIG_DIR_NAME);
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            nested.join(CONFIG_FILE_NAME),
            "[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            "[logging]\nlevel = \"trace\"\n",
        )
        .unwrap();

        let manager = ConfigManager::load_from_workspace(temp_dir.path()).unwrap();
        assert_eq!(manager.config().logging.level, "trace");
        assert_eq!(
            manager.config_path(),
            Some(temp_dir.path().join(CONFIG_FILE_NAME).as_path())
        );
    }

    #[test]
    fn test_dot_dir_fallback() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join(CONFIG_DIR_NAME);
        fs::create_dir_all(&nested).unwrap();
        fs::write(nested.join(CONFIG_FILE_NAME), "[display]\nshow_images = false\n").unwrap();

        let manager = ConfigManager::load_from_workspace(temp_dir.path()).unwrap();
        assert!(!manager.config().display.show_images);
        assert!(manager.config().display.show_thoughts);
    }

    #[test]
    fn test_invalid_toml_reports_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "[display\n").unwrap();

        let err = ConfigManager::load_from_file(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
