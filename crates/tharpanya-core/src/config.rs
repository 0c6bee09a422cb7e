//! TharPanya configuration system.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Result, TharPanyaError};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TharPanyaConfig {
    #[serde(default)]
    pub lore: LoreConfig,
}

impl TharPanyaConfig {
    /// Load config from the default path (~/.tharpanya/config.toml).
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| TharPanyaError::Config(format!("Failed to read config: {e}")))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| TharPanyaError::Config(format!("Failed to parse config: {e}")))?;
        tracing::debug!("⚙️ Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to the default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::default_path())
    }

    /// Save config to a specific path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| TharPanyaError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default config path.
    pub fn default_path() -> PathBuf {
        Self::home_dir().join("config.toml")
    }

    /// Get the TharPanya home directory.
    pub fn home_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".tharpanya")
    }
}

/// On-disk layout of a lore file. Exactly one is used per corpus.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoreFormat {
    /// `[ENTRY]` blocks with `QUESTION:` / `ANSWER:` fields.
    #[default]
    Segmented,
    /// One knowledge unit per non-blank line.
    Lines,
}

impl std::fmt::Display for LoreFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Segmented => write!(f, "segmented"),
            Self::Lines => write!(f, "lines"),
        }
    }
}

impl std::str::FromStr for LoreFormat {
    type Err = TharPanyaError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "segmented" => Ok(Self::Segmented),
            "lines" => Ok(Self::Lines),
            other => Err(TharPanyaError::Config(format!("Unknown lore format: {other}"))),
        }
    }
}

/// Lorekeeper configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoreConfig {
    #[serde(default = "default_lore_path")]
    pub path: String,
    #[serde(default)]
    pub format: LoreFormat,
    /// Per-keyword similarity must exceed this (0-100) to score.
    #[serde(default = "default_match_threshold")]
    pub match_threshold: u8,
    /// Added on top of the built-in Thai stop words.
    #[serde(default)]
    pub extra_stop_words: Vec<String>,
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_lore_path() -> String { "kby_lore.txt".into() }
fn default_match_threshold() -> u8 { 90 }
fn default_top_k() -> usize { 3 }

impl Default for LoreConfig {
    fn default() -> Self {
        Self {
            path: default_lore_path(),
            format: LoreFormat::default(),
            match_threshold: default_match_threshold(),
            extra_stop_words: Vec::new(),
            top_k: default_top_k(),
        }
    }
}
