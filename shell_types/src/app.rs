//! Application identity values
//!
//! The shell carries two identity values for the application it hosts: the
//! reverse-DNS application ID and the push-notification application key.
//! Both are validated when constructed so downstream code can rely on them.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Errors from application ID validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppIdError {
    #[error("Application ID is empty")]
    Empty,

    #[error("Application ID has no dot-separated segments: {0}")]
    NotReverseDns(String),
}

/// Reverse-DNS application identity (e.g. `com.example.shell`)
///
/// Identifies the hosted application to the platform. At least two
/// dot-separated, non-empty segments are required.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppId(String);

impl AppId {
    /// Parses and validates an application ID
    pub fn parse(id: impl Into<String>) -> Result<Self, AppIdError> {
        let id = id.into();
        if id.is_empty() {
            return Err(AppIdError::Empty);
        }
        let segments: Vec<&str> = id.split('.').collect();
        if segments.len() < 2 || segments.iter().any(|s| s.is_empty()) {
            return Err(AppIdError::NotReverseDns(id));
        }
        Ok(Self(id))
    }

    /// Returns the ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors from application key validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppKeyError {
    #[error("Application key is empty")]
    Empty,

    #[error("Application key is not UUID-formatted")]
    NotUuidFormatted,
}

/// Push-notification application key
///
/// An opaque UUID-formatted string identifying the application to the push
/// service. The key is public client-side configuration, not a secret, but
/// it is validated so a misconfigured shell fails at init rather than at
/// delivery time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppKey(String);

impl AppKey {
    /// Parses and validates an application key
    pub fn parse(key: impl Into<String>) -> Result<Self, AppKeyError> {
        let key = key.into();
        if key.is_empty() {
            return Err(AppKeyError::Empty);
        }
        if Uuid::parse_str(&key).is_err() {
            return Err(AppKeyError::NotUuidFormatted);
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AppKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
