//! Error types for TharPanya.

use std::path::PathBuf;

/// Errors surfaced by the TharPanya crates.
///
/// Matching itself never fails; every variant here belongs to loading
/// configuration or lore files.
#[derive(Debug, thiserror::Error)]
pub enum TharPanyaError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Lore file not found: {}", .0.display())]
    LoreNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, TharPanyaError>;
