//! Configuration primitives for ReplyBase.
//!
//! Stored in a machine-readable TOML file located at:
//!   %APPDATA%/ReplyBase/config.toml on Windows
//!   $XDG_DATA_HOME/ReplyBase/config.toml on Linux
//!   ~/Library/Application Support/ReplyBase/config.toml on macOS
//!
//! The config tracks the tone preselected by the form and the shell's
//! clipboard preferences. Nothing else is persisted; generated responses
//! are never written to disk.

use serde::{Deserialize, Serialize};

use crate::composer::Tone;

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Tone preselected when the form opens.
    #[serde(default)]
    pub default_tone: Tone,
    /// Clipboard preferences for the copy affordance.
    #[serde(default)]
    pub clipboard: ClipboardSettings,
    /// Presentation shell knobs (notice timing).
    #[serde(default)]
    pub shell: ShellSettings,
}

/// Clipboard-related preferences tied to the local install.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardSettings {
    /// Whether the shell offers the copy action at all.
    #[serde(default = "default_clipboard_enabled")]
    pub enabled: bool,
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            enabled: default_clipboard_enabled(),
        }
    }
}

const fn default_clipboard_enabled() -> bool {
    true
}

/// Presentation shell defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellSettings {
    /// How long the "Copied!" acknowledgment stays visible, in milliseconds.
    #[serde(default = "default_copied_notice_ms")]
    pub copied_notice_ms: u64,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            copied_notice_ms: default_copied_notice_ms(),
        }
    }
}

const fn default_copied_notice_ms() -> u64 {
    2_000
}

/// Standard relative path to the config file (resolved per OS at runtime).
pub const CONFIG_FILE_NAME: &str = "config.toml";

use anyhow::{Context, Result};
use directories::BaseDirs;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Returns the root directory where ReplyBase stores its config.
///
/// Order of precedence:
/// 1. `REPLYBASE_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var("REPLYBASE_HOME") {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("ReplyBase"))
}

/// Returns the config directory under the workspace root.
pub fn config_dir() -> Result<PathBuf> {
    let root = workspace_root()?;
    Ok(root.join("config"))
}

/// Path to the config file.
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    let path = config_file_path()?;
    if path.exists() {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;
        Ok(cfg)
    } else {
        Ok(AppConfig::default())
    }
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    let dir = config_dir()?;
    fs::create_dir_all(&dir)?;
    let path = config_file_path()?;
    let data = toml::to_string_pretty(config)?;
    fs::write(&path, data)?;
    Ok(())
}
