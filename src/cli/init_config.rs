use anyhow::{Result, bail};
use console::style;
use gemini_webapi_core::ConfigManager;
use gemini_webapi_core::config::constants::files::CONFIG_FILE_NAME;
use std::path::{Path, PathBuf};

/// Handle the init-config command
pub fn handle_init_config_command(output: Option<&Path>, force: bool) -> Result<PathBuf> {
    let path = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

    if path.exists() && !force {
        bail!(
            "{} already exists; pass --force to overwrite",
            path.display()
        );
    }

    ConfigManager::create_sample_config(&path)?;
    println!(
        "{} {}",
        style("Configuration written to").green(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_refuses_to_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(handle_init_config_command(Some(&path), false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        handle_init_config_command(Some(&path), true).unwrap();
        assert!(ConfigManager::load_from_file(&path).is_ok());
    }
}
