#![no_std]

//! # Input Types
//!
//! This crate defines the hardware key event types for the Caddis host
//! shell.
//!
//! ## Philosophy
//!
//! - **Events, not scan codes**: Input is structured events; raw platform
//!   key codes are translated once at the edge
//! - **Explicit consumption**: Every key hook reports whether it consumed
//!   the event, so default platform handling is never ambient
//! - **Testable**: Events are serializable and can be injected for testing
//!
//! ## Non-Goals
//!
//! This is NOT:
//! - A full keyboard model (no letters, no modifiers, no IME)
//! - Pointer or touch input (the surface owns those)
//! - A key routing subsystem (the shell consumes keys in place)

extern crate alloc;

use core::fmt;
use serde::{Deserialize, Serialize};

/// Key code
///
/// Logical codes for the hardware buttons a handheld shell receives.
/// Everything else the platform can deliver maps to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    /// Hardware back button
    Back,
    /// Home button
    Home,
    /// Recent-apps / app-switch button
    AppSwitch,
    /// Menu button
    Menu,
    /// Volume up
    VolumeUp,
    /// Volume down
    VolumeDown,
    /// Power button
    Power,
    /// Unmapped platform key
    Unknown,
}

impl KeyCode {
    /// Translates a platform key code into a logical key code
    ///
    /// Codes follow the host platform's numbering; anything unmapped
    /// becomes `Unknown`.
    pub fn from_platform_code(code: u16) -> Self {
        match code {
            3 => KeyCode::Home,
            4 => KeyCode::Back,
            24 => KeyCode::VolumeUp,
            25 => KeyCode::VolumeDown,
            26 => KeyCode::Power,
            82 => KeyCode::Menu,
            187 => KeyCode::AppSwitch,
            _ => KeyCode::Unknown,
        }
    }

    /// Returns the platform key code, if the key has one
    pub fn platform_code(&self) -> Option<u16> {
        match self {
            KeyCode::Home => Some(3),
            KeyCode::Back => Some(4),
            KeyCode::VolumeUp => Some(24),
            KeyCode::VolumeDown => Some(25),
            KeyCode::Power => Some(26),
            KeyCode::Menu => Some(82),
            KeyCode::AppSwitch => Some(187),
            KeyCode::Unknown => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Key state
///
/// Represents whether a key was pressed, released, or is repeating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyState {
    /// Key was pressed down
    Pressed,
    /// Key was released
    Released,
    /// Key is auto-repeating
    Repeat,
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pressed => write!(f, "pressed"),
            Self::Released => write!(f, "released"),
            Self::Repeat => write!(f, "repeat"),
        }
    }
}

/// Keyboard event
///
/// Represents a single hardware key state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    /// The key that changed state
    pub code: KeyCode,
    /// Event state (pressed, released, repeat)
    pub state: KeyState,
}

impl KeyEvent {
    /// Creates a new key event
    pub fn new(code: KeyCode, state: KeyState) -> Self {
        Self { code, state }
    }

    /// Creates a key-down event
    pub fn down(code: KeyCode) -> Self {
        Self::new(code, KeyState::Pressed)
    }

    /// Creates a key-up event
    pub fn up(code: KeyCode) -> Self {
        Self::new(code, KeyState::Released)
    }

    /// Creates an auto-repeat event
    pub fn repeat(code: KeyCode) -> Self {
        Self::new(code, KeyState::Repeat)
    }

    /// Returns true for press and auto-repeat events
    ///
    /// The platform delivers key-down callbacks for auto-repeats too, so
    /// both states count as "down".
    pub fn is_down(&self) -> bool {
        matches!(self.state, KeyState::Pressed | KeyState::Repeat)
    }

    /// Returns true if this is a release event
    pub fn is_up(&self) -> bool {
        self.state == KeyState::Released
    }
}

/// Result of a host key hook
///
/// Reported back to the platform: a consumed event never reaches the
/// platform's default handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyDisposition {
    /// The host handled the event; default platform handling must not run
    Consumed,
    /// The host did not handle the event
    Unhandled,
}

impl KeyDisposition {
    /// Returns true if the event was consumed
    pub fn is_consumed(&self) -> bool {
        *self == KeyDisposition::Consumed
    }
}

impl fmt::Display for KeyDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Consumed => write!(f, "consumed"),
            Self::Unhandled => write!(f, "unhandled"),
        }
    }
}
