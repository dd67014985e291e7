//! Navigation requests and dispositions
//!
//! A surface raises a navigation request whenever page content wants to
//! move somewhere: a tapped link, a redirect, a script-driven location
//! change. The host shell answers each request with a disposition. The
//! platform delivers requests in two shapes — a typed form carrying
//! initiator metadata and a legacy bare-string form — and the shell must
//! answer both.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What triggered a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationInitiator {
    /// The user activated a link
    LinkActivation,
    /// A server or meta redirect
    Redirect,
    /// Page script changed the location
    ScriptInitiated,
}

impl fmt::Display for NavigationInitiator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkActivation => write!(f, "link"),
            Self::Redirect => write!(f, "redirect"),
            Self::ScriptInitiated => write!(f, "script"),
        }
    }
}

/// A navigation request raised inside the surface
///
/// Both shapes carry a destination URL; only the typed shape knows what
/// initiated it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationRequest {
    /// Typed request with initiator metadata
    Typed {
        /// Destination URL
        url: String,
        /// What triggered the request
        initiator: NavigationInitiator,
    },
    /// Legacy bare-string request (older platform callback shape)
    Legacy(String),
}

impl NavigationRequest {
    /// Creates a typed navigation request
    pub fn typed(url: impl Into<String>, initiator: NavigationInitiator) -> Self {
        Self::Typed {
            url: url.into(),
            initiator,
        }
    }

    /// Creates a legacy string-URL navigation request
    pub fn legacy(url: impl Into<String>) -> Self {
        Self::Legacy(url.into())
    }

    /// Returns the destination URL
    pub fn url(&self) -> &str {
        match self {
            Self::Typed { url, .. } => url,
            Self::Legacy(url) => url,
        }
    }

    /// Returns the initiator, if the request shape carries one
    pub fn initiator(&self) -> Option<NavigationInitiator> {
        match self {
            Self::Typed { initiator, .. } => Some(*initiator),
            Self::Legacy(_) => None,
        }
    }
}

/// The host shell's answer to a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavigationDisposition {
    /// Load the destination in the same surface
    LoadInSurface,
    /// Hand the destination to the platform's external handling
    DelegateToPlatform,
}

impl NavigationDisposition {
    /// Returns true if the navigation stays inside the surface
    pub fn is_in_surface(&self) -> bool {
        *self == NavigationDisposition::LoadInSurface
    }
}

impl fmt::Display for NavigationDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoadInSurface => write!(f, "load-in-surface"),
            Self::DelegateToPlatform => write!(f, "delegate-to-platform"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_request_url() {
        let request =
            NavigationRequest::typed("https://app.example/quiz", NavigationInitiator::LinkActivation);

        assert_eq!(request.url(), "https://app.example/quiz");
        assert_eq!(request.initiator(), Some(NavigationInitiator::LinkActivation));
    }

    #[test]
    fn test_legacy_request_url() {
        let request = NavigationRequest::legacy("https://app.example/results");

        assert_eq!(request.url(), "https://app.example/results");
        assert_eq!(request.initiator(), None);
    }

    #[test]
    fn test_disposition_in_surface() {
        assert!(NavigationDisposition::LoadInSurface.is_in_surface());
        assert!(!NavigationDisposition::DelegateToPlatform.is_in_surface());
    }

    #[test]
    fn test_initiator_display() {
        assert_eq!(NavigationInitiator::LinkActivation.to_string(), "link");
        assert_eq!(NavigationInitiator::Redirect.to_string(), "redirect");
        assert_eq!(NavigationInitiator::ScriptInitiated.to_string(), "script");
    }

    #[test]
    fn test_request_serialization() {
        let request = NavigationRequest::typed("https://app.example/", NavigationInitiator::Redirect);
        let json = serde_json::to_string(&request).unwrap();
        let deserialized: NavigationRequest = serde_json::from_str(&json).unwrap();

        assert_eq!(request, deserialized);
    }
}
