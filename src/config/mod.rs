use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::rating::{validate_configuration, Configuration};

/// Get the config directory path (~/.config/five-star/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("five-star"))
}

/// Get the default config file path (~/.config/five-star/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load rating bounds from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/five-star/config.yaml) and falls back to
///   `Configuration::default()` when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
/// - The bounds fail validation (all problems are reported together)
pub fn load_configuration(path: Option<PathBuf>) -> Result<Configuration> {
    let config_path = match path {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found at {}", path.display());
            }
            path
        }
        None => match get_config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("no config file found, using default bounds");
                return Ok(Configuration::default());
            }
        },
    };

    let configuration = read_configuration(&config_path)?;

    if let Err(errors) = validate_configuration(&configuration) {
        anyhow::bail!(
            "Invalid configuration in {}:\n  - {}",
            config_path.display(),
            errors.join("\n  - ")
        );
    }

    tracing::debug!(path = %config_path.display(), ?configuration, "loaded configuration");
    Ok(configuration)
}

fn read_configuration(path: &Path) -> Result<Configuration> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file at {}", path.display()))?;

    serde_saphyr::from_str(&content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", path.display()))
}
