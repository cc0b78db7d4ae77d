use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Device bridge executable: a name resolved on PATH or a full path
    pub adb: String,
    /// Mirroring executable
    pub scrcpy: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            adb: "adb".to_string(),
            scrcpy: "scrcpy".to_string(),
        }
    }
}

impl Config {
    /// Return the path to the configuration file.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "phonixcast", "phonixcast")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."))
            .join("config.toml")
    }

    /// Load config. An explicit `--config` path must exist and parse; the
    /// default location falls back to defaults when missing, or with a
    /// warning when corrupt.
    pub fn load(path_override: Option<&Path>) -> Result<Self> {
        match path_override {
            Some(path) => Self::read(path),
            None => {
                let path = Self::config_path();
                if !path.exists() {
                    return Ok(Self::default());
                }
                match Self::read(&path) {
                    Ok(config) => Ok(config),
                    Err(e) => {
                        eprintln!("Warning: {e:#}");
                        eprintln!("Using default configuration.");
                        Ok(Self::default())
                    }
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&data)
            .with_context(|| format!("failed to parse config at {}", path.display()))
    }

    /// Device bridge executable, with ~ expanded.
    pub fn adb(&self) -> PathBuf {
        expand_tilde(&self.tools.adb)
    }

    /// Mirroring executable, with ~ expanded.
    pub fn scrcpy(&self) -> PathBuf {
        expand_tilde(&self.tools.scrcpy)
    }
}

/// Expand tilde (~) in a tool path
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
