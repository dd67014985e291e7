//! Surface error types

use thiserror::Error;

/// Errors that can occur when interacting with a render surface
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface has not been created or has been torn down
    #[error("Surface is not ready")]
    NotReady,

    /// History navigation requested with no backward entry
    #[error("No backward history to navigate")]
    NoBackHistory,

    /// The URL could not be accepted by the surface
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(SurfaceError::NotReady.to_string(), "Surface is not ready");
        assert_eq!(
            SurfaceError::NoBackHistory.to_string(),
            "No backward history to navigate"
        );
        assert_eq!(
            SurfaceError::InvalidUrl("not a url".to_string()).to_string(),
            "Invalid URL: not a url"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(SurfaceError::NotReady, SurfaceError::NotReady);
        assert_ne!(SurfaceError::NotReady, SurfaceError::NoBackHistory);
    }
}
