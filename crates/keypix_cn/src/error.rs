//! Configuration error types

use std::io;
use thiserror::Error;

/// Errors raised while loading or applying a [`KeypixConfig`](crate::config::KeypixConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error when reading the file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// TOML parsing error
    #[error("config parsing error: {0}")]
    Parse(#[from] toml::de::Error),

    /// A process-wide class cache was already installed
    #[error("class name cache already installed")]
    CacheAlreadyInstalled,

    /// A bounded cache was configured with zero capacity
    #[error("class cache capacity must be greater than zero")]
    InvalidCapacity,
}
