//! Surface configuration options
//!
//! The host shell applies exactly one settings value to its surface at
//! startup. Options the surface does not recognize do not exist here:
//! this struct is the closed set of recognized knobs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Mixed-content policy for pages loaded over a secure scheme
///
/// Controls whether a secure page may load insecure subresources. The
/// numeric codes follow the host platform's constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MixedContentPolicy {
    /// Insecure subresources always load (platform code 0)
    AlwaysAllow,
    /// Insecure subresources never load (platform code 1)
    NeverAllow,
    /// Platform heuristics decide per resource type (platform code 2)
    CompatibilityMode,
}

impl MixedContentPolicy {
    /// Returns the platform constant for this policy
    pub fn as_code(&self) -> u8 {
        match self {
            MixedContentPolicy::AlwaysAllow => 0,
            MixedContentPolicy::NeverAllow => 1,
            MixedContentPolicy::CompatibilityMode => 2,
        }
    }

    /// Translates a platform constant into a policy
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MixedContentPolicy::AlwaysAllow),
            1 => Some(MixedContentPolicy::NeverAllow),
            2 => Some(MixedContentPolicy::CompatibilityMode),
            _ => None,
        }
    }
}

impl fmt::Display for MixedContentPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlwaysAllow => write!(f, "always-allow"),
            Self::NeverAllow => write!(f, "never-allow"),
            Self::CompatibilityMode => write!(f, "compatibility"),
        }
    }
}

/// The recognized surface options
///
/// Defaults are the host shell's startup configuration: everything
/// enabled, mixed content always allowed. A hybrid shell serves its own
/// bundled content, so the usual lockdowns are deliberately open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceSettings {
    /// Page-local storage (DOM storage)
    pub local_storage: bool,
    /// In-page script execution
    pub script_execution: bool,
    /// Access to local files from page content
    pub local_file_access: bool,
    /// Access to local content providers from page content
    pub local_content_access: bool,
    /// Automatic image loading
    pub auto_load_images: bool,
    /// Mixed-content policy
    pub mixed_content: MixedContentPolicy,
}

impl SurfaceSettings {
    /// Settings with every option disabled and mixed content blocked
    ///
    /// Not what the shell ships with; useful for exercising that a
    /// surface stores what it is given rather than its own defaults.
    pub fn restricted() -> Self {
        Self {
            local_storage: false,
            script_execution: false,
            local_file_access: false,
            local_content_access: false,
            auto_load_images: false,
            mixed_content: MixedContentPolicy::NeverAllow,
        }
    }
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Self {
            local_storage: true,
            script_execution: true,
            local_file_access: true,
            local_content_access: true,
            auto_load_images: true,
            mixed_content: MixedContentPolicy::AlwaysAllow,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_enable_everything() {
        let settings = SurfaceSettings::default();

        assert!(settings.local_storage);
        assert!(settings.script_execution);
        assert!(settings.local_file_access);
        assert!(settings.local_content_access);
        assert!(settings.auto_load_images);
        assert_eq!(settings.mixed_content, MixedContentPolicy::AlwaysAllow);
    }

    #[test]
    fn test_restricted_settings_disable_everything() {
        let settings = SurfaceSettings::restricted();

        assert!(!settings.local_storage);
        assert!(!settings.script_execution);
        assert!(!settings.local_file_access);
        assert!(!settings.local_content_access);
        assert!(!settings.auto_load_images);
        assert_eq!(settings.mixed_content, MixedContentPolicy::NeverAllow);
    }

    #[test]
    fn test_mixed_content_platform_codes() {
        assert_eq!(MixedContentPolicy::AlwaysAllow.as_code(), 0);
        assert_eq!(MixedContentPolicy::NeverAllow.as_code(), 1);
        assert_eq!(MixedContentPolicy::CompatibilityMode.as_code(), 2);
    }

    #[test]
    fn test_mixed_content_from_code_round_trip() {
        for code in 0..=2 {
            let policy = MixedContentPolicy::from_code(code).unwrap();
            assert_eq!(policy.as_code(), code);
        }
        assert_eq!(MixedContentPolicy::from_code(3), None);
    }

    #[test]
    fn test_mixed_content_display() {
        assert_eq!(MixedContentPolicy::AlwaysAllow.to_string(), "always-allow");
        assert_eq!(MixedContentPolicy::NeverAllow.to_string(), "never-allow");
        assert_eq!(
            MixedContentPolicy::CompatibilityMode.to_string(),
            "compatibility"
        );
    }

    #[test]
    fn test_settings_serialization() {
        let settings = SurfaceSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: SurfaceSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings, deserialized);
    }
}
