//! # Push Session
//!
//! Process-wide push-notification session state: explicit initialization
//! with an application key, notification permission, and the device
//! subscription record.
//!
//! ## Philosophy
//!
//! - **Explicit init, not ambient**: The session exists only after
//!   `init` with a concrete application key; nothing initializes lazily
//! - **Once per process**: A ready session rejects re-initialization
//! - **Typed state**: Permission and session state are enums, not
//!   booleans scattered across callers
//! - **Testable**: No network; the delivery backend is out of scope and
//!   the session is pure state
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A delivery pipeline (no transport, no retries, no payloads)
//! - A permission prompt UI (callers resolve the prompt and report back)
//! - Credential storage (the application key is client configuration,
//!   not a secret)

use serde::{Deserialize, Serialize};
use shell_types::{AppKey, SubscriptionId};
use std::fmt;
use thiserror::Error;

/// Errors that can occur driving the push session
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PushError {
    /// The application key is empty or not UUID-formatted
    #[error("Invalid application key: {0}")]
    InvalidAppKey(String),

    /// The session is ready and cannot be initialized again
    #[error("Push session is already initialized")]
    AlreadyInitialized,

    /// The operation requires an initialized session
    #[error("Push session is not initialized")]
    NotInitialized,

    /// The operation requires granted notification permission
    #[error("Notification permission is not granted")]
    PermissionNotGranted,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    /// `init` has not been called
    Uninitialized,
    /// Initialized with a valid application key
    Ready,
    /// The last `init` attempt was rejected
    Failed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Ready => write!(f, "ready"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

/// Notification permission state
///
/// Starts undetermined; an explicit prompt resolution moves it to
/// granted or denied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PermissionState {
    /// The user has not been asked yet
    NotDetermined,
    /// The user granted notification permission
    Granted,
    /// The user denied notification permission
    Denied,
}

impl fmt::Display for PermissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotDetermined => write!(f, "not-determined"),
            Self::Granted => write!(f, "granted"),
            Self::Denied => write!(f, "denied"),
        }
    }
}

/// A device's push subscription record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscription identifier assigned at registration
    pub id: SubscriptionId,
    /// Opaque push delivery token
    pub push_token: String,
    /// Whether the device currently accepts pushes
    pub opted_in: bool,
}

/// Snapshot of the session's device-visible state
///
/// The shape page code sees when it asks about the device: identifiers
/// when subscribed, permission either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceState {
    /// Subscription ID, if a subscription is registered
    pub subscription_id: Option<SubscriptionId>,
    /// Push token, if a subscription is registered
    pub push_token: Option<String>,
    /// Whether the device is subscribed and opted in
    pub subscribed: bool,
    /// Current notification permission
    pub permission: PermissionState,
}

/// The push-notification session
///
/// One per process. Drives `Uninitialized` → `Ready` (valid key) or
/// `Failed` (rejected key); permission and subscription hang off a ready
/// session.
pub struct PushSession {
    state: SessionState,
    app_key: Option<AppKey>,
    permission: PermissionState,
    subscription: Option<Subscription>,
}

impl PushSession {
    /// Creates an uninitialized session
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            app_key: None,
            permission: PermissionState::NotDetermined,
            subscription: None,
        }
    }

    /// Initializes the session with an application key
    ///
    /// The key must be a non-empty UUID-formatted string. A ready
    /// session rejects re-initialization; a failed one may retry.
    pub fn init(&mut self, key: &str) -> Result<(), PushError> {
        if self.state == SessionState::Ready {
            return Err(PushError::AlreadyInitialized);
        }
        match AppKey::parse(key) {
            Ok(app_key) => {
                self.app_key = Some(app_key);
                self.state = SessionState::Ready;
                Ok(())
            }
            Err(_) => {
                self.state = SessionState::Failed;
                Err(PushError::InvalidAppKey(key.to_string()))
            }
        }
    }

    /// Returns the session state
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns true if the session initialized successfully
    pub fn is_ready(&self) -> bool {
        self.state == SessionState::Ready
    }

    /// Returns the application key the session was initialized with
    pub fn app_key(&self) -> Option<&AppKey> {
        self.app_key.as_ref()
    }

    /// Returns the current permission state
    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    /// Records the user's resolution of the permission prompt
    ///
    /// Requires a ready session. The session never prompts by itself;
    /// the host resolves the prompt and reports the outcome here.
    pub fn request_permission(&mut self, granted: bool) -> Result<PermissionState, PushError> {
        if !self.is_ready() {
            return Err(PushError::NotInitialized);
        }
        self.permission = if granted {
            PermissionState::Granted
        } else {
            PermissionState::Denied
        };
        Ok(self.permission)
    }

    /// Registers the device subscription
    ///
    /// Requires a ready session with granted permission. Registering
    /// again replaces the previous record.
    pub fn register_subscription(
        &mut self,
        push_token: impl Into<String>,
    ) -> Result<&Subscription, PushError> {
        if !self.is_ready() {
            return Err(PushError::NotInitialized);
        }
        if self.permission != PermissionState::Granted {
            return Err(PushError::PermissionNotGranted);
        }
        self.subscription = Some(Subscription {
            id: SubscriptionId::new(),
            push_token: push_token.into(),
            opted_in: true,
        });
        Ok(self.subscription.as_ref().expect("subscription just set"))
    }

    /// Returns the registered subscription, if any
    pub fn subscription(&self) -> Option<&Subscription> {
        self.subscription.as_ref()
    }

    /// Flips the registered subscription's opt-in flag
    ///
    /// Opting out keeps the record; the token stays valid for a later
    /// opt back in.
    pub fn set_opted_in(&mut self, opted_in: bool) -> Result<(), PushError> {
        match self.subscription.as_mut() {
            Some(subscription) => {
                subscription.opted_in = opted_in;
                Ok(())
            }
            None => Err(PushError::NotInitialized),
        }
    }

    /// Returns the device-visible state snapshot
    pub fn device_state(&self) -> DeviceState {
        DeviceState {
            subscription_id: self.subscription.as_ref().map(|s| s.id),
            push_token: self.subscription.as_ref().map(|s| s.push_token.clone()),
            subscribed: self.subscription.as_ref().is_some_and(|s| s.opted_in),
            permission: self.permission,
        }
    }
}

impl Default for PushSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "6ba7b810-9dad-11d1-80b4-00c04fd430c8";

    #[test]
    fn test_new_session_is_uninitialized() {
        let session = PushSession::new();

        assert_eq!(session.state(), SessionState::Uninitialized);
        assert_eq!(session.permission(), PermissionState::NotDetermined);
        assert!(session.app_key().is_none());
        assert!(session.subscription().is_none());
    }

    #[test]
    fn test_init_with_valid_key() {
        let mut session = PushSession::new();

        session.init(KEY).unwrap();

        assert!(session.is_ready());
        assert_eq!(session.app_key().unwrap().as_str(), KEY);
    }

    #[test]
    fn test_init_with_malformed_key_fails() {
        let mut session = PushSession::new();

        let result = session.init("not-a-key");

        assert_eq!(
            result,
            Err(PushError::InvalidAppKey("not-a-key".to_string()))
        );
        assert_eq!(session.state(), SessionState::Failed);
    }

    #[test]
    fn test_init_with_empty_key_fails() {
        let mut session = PushSession::new();

        assert_eq!(session.init(""), Err(PushError::InvalidAppKey("".to_string())));
        assert_eq!(session.state(), SessionState::Failed);
    }

    #[test]
    fn test_reinit_of_ready_session_rejected() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();

        assert_eq!(session.init(KEY), Err(PushError::AlreadyInitialized));
        assert!(session.is_ready());
    }

    #[test]
    fn test_failed_session_may_retry() {
        let mut session = PushSession::new();
        let _ = session.init("bad");
        assert_eq!(session.state(), SessionState::Failed);

        session.init(KEY).unwrap();
        assert!(session.is_ready());
    }

    #[test]
    fn test_permission_requires_init() {
        let mut session = PushSession::new();

        assert_eq!(
            session.request_permission(true),
            Err(PushError::NotInitialized)
        );
    }

    #[test]
    fn test_permission_granted() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();

        let state = session.request_permission(true).unwrap();

        assert_eq!(state, PermissionState::Granted);
        assert_eq!(session.permission(), PermissionState::Granted);
    }

    #[test]
    fn test_permission_denied() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();

        let state = session.request_permission(false).unwrap();

        assert_eq!(state, PermissionState::Denied);
    }

    #[test]
    fn test_register_subscription() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();
        session.request_permission(true).unwrap();

        let subscription = session.register_subscription("token-1").unwrap();

        assert_eq!(subscription.push_token, "token-1");
        assert!(subscription.opted_in);
        assert!(session.subscription().is_some());
    }

    #[test]
    fn test_register_subscription_requires_init() {
        let mut session = PushSession::new();

        assert_eq!(
            session.register_subscription("token"),
            Err(PushError::NotInitialized)
        );
    }

    #[test]
    fn test_register_subscription_requires_granted_permission() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();

        // Not determined yet
        assert_eq!(
            session.register_subscription("token"),
            Err(PushError::PermissionNotGranted)
        );

        // Explicitly denied
        session.request_permission(false).unwrap();
        assert_eq!(
            session.register_subscription("token"),
            Err(PushError::PermissionNotGranted)
        );
    }

    #[test]
    fn test_reregistration_replaces_subscription() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();
        session.request_permission(true).unwrap();

        let first_id = session.register_subscription("token-1").unwrap().id;
        let second = session.register_subscription("token-2").unwrap();

        assert_ne!(second.id, first_id);
        assert_eq!(second.push_token, "token-2");
    }

    #[test]
    fn test_opt_out_keeps_record() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();
        session.request_permission(true).unwrap();
        session.register_subscription("token").unwrap();

        session.set_opted_in(false).unwrap();

        let subscription = session.subscription().unwrap();
        assert!(!subscription.opted_in);
        assert_eq!(subscription.push_token, "token");
    }

    #[test]
    fn test_opt_in_without_subscription_fails() {
        let mut session = PushSession::new();

        assert_eq!(session.set_opted_in(true), Err(PushError::NotInitialized));
    }

    #[test]
    fn test_device_state_unsubscribed() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();

        let state = session.device_state();

        assert_eq!(state.subscription_id, None);
        assert_eq!(state.push_token, None);
        assert!(!state.subscribed);
        assert_eq!(state.permission, PermissionState::NotDetermined);
    }

    #[test]
    fn test_device_state_subscribed() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();
        session.request_permission(true).unwrap();
        let id = session.register_subscription("token").unwrap().id;

        let state = session.device_state();

        assert_eq!(state.subscription_id, Some(id));
        assert_eq!(state.push_token, Some("token".to_string()));
        assert!(state.subscribed);
        assert_eq!(state.permission, PermissionState::Granted);
    }

    #[test]
    fn test_device_state_opted_out_is_not_subscribed() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();
        session.request_permission(true).unwrap();
        session.register_subscription("token").unwrap();
        session.set_opted_in(false).unwrap();

        assert!(!session.device_state().subscribed);
    }

    #[test]
    fn test_session_state_display() {
        assert_eq!(SessionState::Uninitialized.to_string(), "uninitialized");
        assert_eq!(SessionState::Ready.to_string(), "ready");
        assert_eq!(SessionState::Failed.to_string(), "failed");
    }

    #[test]
    fn test_device_state_serialization() {
        let mut session = PushSession::new();
        session.init(KEY).unwrap();

        let state = session.device_state();
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: DeviceState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
