//! # Shell Config
//!
//! Typed configuration for the Caddis host shell: application identity,
//! server location, surface settings, splash screen, and push session.
//!
//! ## Philosophy
//!
//! - **An explicit value, not ambient state**: The config is constructed
//!   or loaded and handed to the shell; nothing reads environment
//!   variables or global files behind the caller's back
//! - **Versioned on disk**: The JSON format carries a format version so
//!   stale configs fail loudly instead of misparsing
//! - **Safe loading**: Malformed bytes fall back to defaults; the shell
//!   always has something to boot with
//! - **Validated once**: `validate` runs before the shell starts, so
//!   downstream code never re-checks identity values

pub mod persistence;

pub use persistence::{
    deserialize_config, load_config_from_path, load_config_safe, save_config_to_path,
    serialize_config, ConfigError, ShellConfigData,
};

use serde::{Deserialize, Serialize};
use shell_types::{AppId, AppKey};
use surface_api::SurfaceSettings;

/// Application identity section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Reverse-DNS application ID
    pub id: AppId,
    /// Display name
    pub name: String,
}

/// Server section: where the hosted application lives
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// URL the shell loads at startup
    pub start_url: String,
    /// Scheme the surface serves bundled content under
    pub scheme: String,
}

/// Splash screen section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplashConfig {
    /// How long the splash stays up, in milliseconds
    pub duration_ms: u64,
    /// Background color, `#rrggbb`
    pub background_color: String,
    /// Whether a spinner is drawn on the splash
    pub show_spinner: bool,
    /// Whether the splash covers the whole screen
    pub fullscreen: bool,
}

impl SplashConfig {
    /// Splash duration in logical nanoseconds
    pub fn duration_ns(&self) -> u64 {
        self.duration_ms.saturating_mul(1_000_000)
    }
}

/// Push session section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushConfig {
    /// Application key for push session init
    pub app_key: AppKey,
}

/// The complete shell configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Application identity
    pub app: AppConfig,
    /// Server location
    pub server: ServerConfig,
    /// Surface settings applied at startup
    pub surface: SurfaceSettings,
    /// Splash screen behavior
    pub splash: SplashConfig,
    /// Push session settings
    pub push: PushConfig,
}

impl ShellConfig {
    /// Checks the configuration for values the shell cannot run with
    ///
    /// Deserialization does not re-validate identity newtypes, so loaded
    /// configs go through here before the shell boots.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if AppId::parse(self.app.id.as_str()).is_err() {
            return Err(ConfigError::Invalid(format!(
                "app id is not reverse-DNS: {}",
                self.app.id
            )));
        }
        if self.app.name.is_empty() {
            return Err(ConfigError::Invalid("app name is empty".to_string()));
        }
        if self.server.start_url.is_empty() {
            return Err(ConfigError::Invalid("start URL is empty".to_string()));
        }
        if !self.server.start_url.contains("://") {
            return Err(ConfigError::Invalid(format!(
                "start URL has no scheme: {}",
                self.server.start_url
            )));
        }
        if self.server.scheme.is_empty() {
            return Err(ConfigError::Invalid("surface scheme is empty".to_string()));
        }
        if !self.splash.background_color.starts_with('#') {
            return Err(ConfigError::Invalid(format!(
                "splash background is not a #rrggbb color: {}",
                self.splash.background_color
            )));
        }
        if AppKey::parse(self.push.app_key.as_str()).is_err() {
            return Err(ConfigError::Invalid(
                "push application key is not UUID-formatted".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app: AppConfig {
                id: AppId::parse("com.example.app").expect("literal app id is reverse-DNS"),
                name: "Example App".to_string(),
            },
            server: ServerConfig {
                start_url: "https://app.example/".to_string(),
                scheme: "https".to_string(),
            },
            surface: SurfaceSettings::default(),
            splash: SplashConfig {
                duration_ms: 2000,
                background_color: "#ffffff".to_string(),
                show_spinner: false,
                fullscreen: true,
            },
            push: PushConfig {
                app_key: AppKey::parse("00000000-0000-0000-0000-000000000000")
                    .expect("nil UUID is a valid key"),
            },
        }
    }
}
