use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::CliError;
use crate::ui::FormatPreference;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct PassfieldConfig {
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub ascii: bool,
    pub format: Option<FormatPreference>,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            color: default_color(),
            ascii: false,
            format: None,
        }
    }
}

fn default_color() -> bool {
    true
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

/// Load the config.
///
/// An explicit path (flag or `PASSFIELD_CONFIG`) must exist. The default
/// location is optional and falls back to built-in defaults when absent.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<PassfieldConfig> {
    if let Some(value) = explicit.filter(|v| !v.trim().is_empty()) {
        let path = PathBuf::from(value);
        if !path.exists() {
            return Err(CliError::config(
                format!("Config not found: {}", path.display()),
                "Hint: Check --config or PASSFIELD_CONFIG, or remove it to use defaults.",
            )
            .into());
        }
        return read_config(&path);
    }

    let path = match default_config_path() {
        Ok(path) => path,
        Err(err) => {
            tracing::debug!(error = %err, "no default config location");
            return Ok(PassfieldConfig::default());
        }
    };
    if path.exists() {
        read_config(&path)
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        Ok(PassfieldConfig::default())
    }
}

pub fn read_config(path: &Path) -> anyhow::Result<PassfieldConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        CliError::config(
            format!("Failed to read config {}: {}", path.display(), e),
            "Hint: Make sure the file is readable.",
        )
    })?;
    let config: PassfieldConfig = toml::from_str(&contents).map_err(|e| {
        CliError::config(
            format!("Failed to parse config {}: {}", path.display(), e),
            "Hint: Expected a [ui] table with color, ascii and format keys.",
        )
    })?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("passfield"));
        }
    }
    Ok(home_dir()?.join(".config").join("passfield"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
