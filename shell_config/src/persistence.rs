//! Config persistence layer
//!
//! Loading and saving the shell configuration as versioned JSON. All
//! operations are deterministic and safe against corrupt input.

use crate::ShellConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur loading, saving, or validating configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to serialize the configuration
    #[error("Failed to serialize config: {0}")]
    Serialize(String),

    /// Failed to deserialize the configuration
    #[error("Failed to deserialize config: {0}")]
    Deserialize(String),

    /// The on-disk format version is not supported
    #[error("Unsupported config version: {0}")]
    UnsupportedVersion(u32),

    /// The configuration contains values the shell cannot run with
    #[error("Invalid config: {0}")]
    Invalid(String),

    /// A filesystem operation failed
    #[error("Config I/O failed: {0}")]
    Io(String),
}

/// Serializable container for the shell configuration
///
/// Carries the format version alongside the config so migrations have
/// somewhere to hook in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellConfigData {
    /// Version of the config format
    pub version: u32,
    /// The configuration itself
    pub config: ShellConfig,
}

impl ShellConfigData {
    /// Current version of the config format
    pub const CURRENT_VERSION: u32 = 1;

    /// Wraps a configuration in the current format version
    pub fn new(config: ShellConfig) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            config,
        }
    }
}

impl Default for ShellConfigData {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

/// Serializes a configuration to JSON bytes
pub fn serialize_config(data: &ShellConfigData) -> Result<Vec<u8>, ConfigError> {
    serde_json::to_vec_pretty(data).map_err(|e| ConfigError::Serialize(e.to_string()))
}

/// Deserializes a configuration from JSON bytes
pub fn deserialize_config(bytes: &[u8]) -> Result<ShellConfigData, ConfigError> {
    let data: ShellConfigData =
        serde_json::from_slice(bytes).map_err(|e| ConfigError::Deserialize(e.to_string()))?;

    if data.version != ShellConfigData::CURRENT_VERSION {
        return Err(ConfigError::UnsupportedVersion(data.version));
    }

    Ok(data)
}

/// Attempts to load a configuration from bytes, falling back to defaults
/// on any error
pub fn load_config_safe(bytes: &[u8]) -> ShellConfig {
    deserialize_config(bytes)
        .map(|data| data.config)
        .unwrap_or_default()
}

/// Writes a configuration to a file
pub fn save_config_to_path(path: &Path, data: &ShellConfigData) -> Result<(), ConfigError> {
    let bytes = serialize_config(data)?;
    fs::write(path, bytes).map_err(|e| ConfigError::Io(e.to_string()))
}

/// Reads a configuration from a file
pub fn load_config_from_path(path: &Path) -> Result<ShellConfigData, ConfigError> {
    let bytes = fs::read(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    deserialize_config(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_carries_current_version() {
        let data = ShellConfigData::new(ShellConfig::default());
        assert_eq!(data.version, ShellConfigData::CURRENT_VERSION);
    }

    #[test]
    fn test_serialize_deserialize_round_trip() {
        let data = ShellConfigData::default();

        let bytes = serialize_config(&data).unwrap();
        let loaded = deserialize_config(&bytes).unwrap();

        assert_eq!(loaded, data);
    }

    #[test]
    fn test_deserialize_invalid_json() {
        let result = deserialize_config(b"{ not json }");

        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    fn test_deserialize_unsupported_version() {
        let mut data = ShellConfigData::default();
        data.version = 999;
        let bytes = serialize_config(&data).unwrap();

        let result = deserialize_config(&bytes);

        assert_eq!(result, Err(ConfigError::UnsupportedVersion(999)));
    }

    #[test]
    fn test_load_safe_with_valid_bytes() {
        let mut config = ShellConfig::default();
        config.app.name = "Quiz".to_string();
        let bytes = serialize_config(&ShellConfigData::new(config.clone())).unwrap();

        let loaded = load_config_safe(&bytes);

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_safe_falls_back_on_garbage() {
        let loaded = load_config_safe(b"\x00\x01garbage");

        assert_eq!(loaded, ShellConfig::default());
    }

    #[test]
    fn test_load_safe_falls_back_on_version_mismatch() {
        let mut data = ShellConfigData::default();
        data.version = 2;
        data.config.app.name = "Future".to_string();
        let bytes = serialize_config(&data).unwrap();

        let loaded = load_config_safe(&bytes);

        assert_eq!(loaded, ShellConfig::default());
    }

    #[test]
    fn test_save_and_load_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shell.json");

        let mut data = ShellConfigData::default();
        data.config.app.name = "Persisted".to_string();
        save_config_to_path(&path, &data).unwrap();

        let loaded = load_config_from_path(&path).unwrap();
        assert_eq!(loaded, data);
    }

    #[test]
    fn test_load_missing_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");

        let result = load_config_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_deterministic_serialization() {
        let data = ShellConfigData::default();

        let first = serialize_config(&data).unwrap();
        let second = serialize_config(&data).unwrap();

        assert_eq!(first, second);
    }
}
