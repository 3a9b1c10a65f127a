// ABOUTME: Configuration file loading, validation, and hierarchical merging for gato
// ABOUTME: Supports TOML config files with XDG Base Directory specification compliance

use crate::constants::app::{
    APP_NAME, CONFIG_FILE_NAME, EMOJI_SUBDIR, LOCAL_CONFIG_FILE_NAME,
};
use crate::constants::emoji::{DEFAULT_COLUMNS, DEFAULT_ROWS};
use crate::error::GatoError;
use crate::image_protocols::Placement;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory holding `<name>.png` glyphs
    #[serde(default)]
    pub emoji_dir: Option<PathBuf>,
    #[serde(default)]
    pub emoji: Option<EmojiConfig>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct EmojiConfig {
    #[serde(default)]
    pub rows: Option<u32>,
    #[serde(default)]
    pub columns: Option<u32>,
}

impl Config {
    /// Load configuration from standard XDG-compliant locations
    pub fn load() -> Result<Self> {
        Self::load_from_paths(&Self::get_config_paths())
    }

    /// Load configuration from file paths in increasing order of precedence.
    /// Paths that do not exist are skipped.
    pub fn load_from_paths<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut config = Config::default();

        for path in paths {
            let path = path.as_ref();
            if !path.is_file() {
                continue;
            }
            log::debug!("Loading config from {}", path.display());
            config = config.merge(Self::load_from_file(path)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content).with_context(|| {
            format!(
                "Failed to parse TOML config file: {}",
                path.as_ref().display()
            )
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Standard config file paths, lowest precedence first
    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. User config directory fallback
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(
                home_dir
                    .join(".config")
                    .join(APP_NAME)
                    .join(CONFIG_FILE_NAME),
            );
        }

        // 2. XDG config home
        if let Some(config_home) = std::env::var_os("XDG_CONFIG_HOME") {
            paths.push(
                PathBuf::from(config_home)
                    .join(APP_NAME)
                    .join(CONFIG_FILE_NAME),
            );
        }

        // 3. Project-specific config (highest precedence)
        if let Ok(current_dir) = std::env::current_dir() {
            paths.push(current_dir.join(LOCAL_CONFIG_FILE_NAME));
        }

        paths.dedup();
        paths
    }

    /// Merge this config with another, giving precedence to the other config
    pub fn merge(self, other: Config) -> Config {
        Config {
            emoji_dir: other.emoji_dir.or(self.emoji_dir),
            emoji: match (self.emoji, other.emoji) {
                (Some(base), Some(other)) => Some(base.merge(other)),
                (base, other) => other.or(base),
            },
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), GatoError> {
        if let Some(ref dir) = self.emoji_dir {
            if dir.as_os_str().is_empty() {
                return Err(GatoError::InvalidConfig(
                    "emoji_dir must not be empty".to_string(),
                ));
            }
        }
        Ok(())
    }

    /// Pick the glyph directory: command line, then environment, then config,
    /// then `<data dir>/gato/emoji`
    pub fn resolve_emoji_dir(
        &self,
        flag: Option<PathBuf>,
        env: Option<OsString>,
    ) -> Result<PathBuf, GatoError> {
        if let Some(dir) = flag {
            return Ok(dir);
        }
        if let Some(dir) = env.filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(ref dir) = self.emoji_dir {
            return Ok(dir.clone());
        }
        default_emoji_dir()
    }

    /// Cell placement for emoji glyphs
    pub fn emoji_placement(&self) -> Placement {
        let emoji = self.emoji.unwrap_or_default();
        Placement::new(
            emoji.rows.unwrap_or(DEFAULT_ROWS),
            emoji.columns.unwrap_or(DEFAULT_COLUMNS),
        )
    }
}

impl EmojiConfig {
    pub fn merge(self, other: EmojiConfig) -> EmojiConfig {
        EmojiConfig {
            rows: other.rows.or(self.rows),
            columns: other.columns.or(self.columns),
        }
    }
}

/// `<platform data dir>/gato/emoji`
pub fn default_emoji_dir() -> Result<PathBuf, GatoError> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_NAME).join(EMOJI_SUBDIR))
        .ok_or(GatoError::NoDataDir)
}
