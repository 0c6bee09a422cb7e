//! # TharPanya Core
//!
//! Configuration and error types shared by the lorekeeper crates and the
//! `tharpanya` host binary.

pub mod config;
pub mod error;

pub use config::{LoreConfig, LoreFormat, TharPanyaConfig};
pub use error::{Result, TharPanyaError};
