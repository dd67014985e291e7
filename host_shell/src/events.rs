//! Host event log
//!
//! An append-only audit trail of what the shell did: push init outcome,
//! surface configuration, bridge installation, back-probe dispatches,
//! navigation re-issues, splash transitions, and finish. Every event
//! carries the logical time it was recorded at. Tests and the demo
//! daemon read the log; nothing in the shell does.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why the shell finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    /// Page script invoked the exit operation
    BridgeExit,
    /// Page script asked to go back with no history left
    BridgeBackExhausted,
    /// The platform destroyed the shell
    Destroyed,
}

impl fmt::Display for FinishReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BridgeExit => write!(f, "bridge-exit"),
            Self::BridgeBackExhausted => write!(f, "bridge-back-exhausted"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// A single recorded host shell event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostEvent {
    /// The push session initialized
    PushInitSucceeded {
        /// Logical time of the event
        timestamp_ns: u64,
    },
    /// Push session init was rejected; startup continued anyway
    PushInitFailed {
        timestamp_ns: u64,
        /// The rejection, stringified
        error: String,
    },
    /// Surface settings were applied
    SettingsApplied { timestamp_ns: u64 },
    /// The native bridge was installed into the page context
    BridgeInstalled {
        timestamp_ns: u64,
        /// Namespace the bridge appears under
        namespace: String,
        /// Operation names, in registration order
        operations: Vec<String>,
    },
    /// The splash screen came up
    SplashShown { timestamp_ns: u64 },
    /// The splash screen went away (deadline or explicit dismissal)
    SplashHidden { timestamp_ns: u64 },
    /// The configured start URL was loaded
    StartUrlLoaded { timestamp_ns: u64, url: String },
    /// Hardware back was consumed and the probe evaluated
    BackProbeDispatched { timestamp_ns: u64 },
    /// Hardware back was consumed but the probe evaluation failed
    BackProbeFailed { timestamp_ns: u64, error: String },
    /// A page navigation request was re-issued to the same surface
    NavigationReissued { timestamp_ns: u64, url: String },
    /// A page navigation request could not be re-issued
    NavigationRejected {
        timestamp_ns: u64,
        url: String,
        error: String,
    },
    /// The shell finished
    Finished {
        timestamp_ns: u64,
        reason: FinishReason,
    },
    /// The platform tore the shell down
    Destroyed { timestamp_ns: u64 },
}

impl HostEvent {
    /// Returns the logical time this event was recorded at
    pub fn timestamp_ns(&self) -> u64 {
        match self {
            HostEvent::PushInitSucceeded { timestamp_ns }
            | HostEvent::PushInitFailed { timestamp_ns, .. }
            | HostEvent::SettingsApplied { timestamp_ns }
            | HostEvent::BridgeInstalled { timestamp_ns, .. }
            | HostEvent::SplashShown { timestamp_ns }
            | HostEvent::SplashHidden { timestamp_ns }
            | HostEvent::StartUrlLoaded { timestamp_ns, .. }
            | HostEvent::BackProbeDispatched { timestamp_ns }
            | HostEvent::BackProbeFailed { timestamp_ns, .. }
            | HostEvent::NavigationReissued { timestamp_ns, .. }
            | HostEvent::NavigationRejected { timestamp_ns, .. }
            | HostEvent::Finished { timestamp_ns, .. }
            | HostEvent::Destroyed { timestamp_ns } => *timestamp_ns,
        }
    }
}

impl fmt::Display for HostEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PushInitSucceeded { .. } => write!(f, "push session ready"),
            Self::PushInitFailed { error, .. } => {
                write!(f, "push session init failed: {}", error)
            }
            Self::SettingsApplied { .. } => write!(f, "surface settings applied"),
            Self::BridgeInstalled {
                namespace,
                operations,
                ..
            } => write!(f, "bridge {} installed: {}", namespace, operations.join(", ")),
            Self::SplashShown { .. } => write!(f, "splash shown"),
            Self::SplashHidden { .. } => write!(f, "splash hidden"),
            Self::StartUrlLoaded { url, .. } => write!(f, "start url loaded: {}", url),
            Self::BackProbeDispatched { .. } => write!(f, "back probe dispatched"),
            Self::BackProbeFailed { error, .. } => write!(f, "back probe failed: {}", error),
            Self::NavigationReissued { url, .. } => write!(f, "navigation reissued: {}", url),
            Self::NavigationRejected { url, error, .. } => {
                write!(f, "navigation rejected: {}: {}", url, error)
            }
            Self::Finished { reason, .. } => write!(f, "finished: {}", reason),
            Self::Destroyed { .. } => write!(f, "destroyed"),
        }
    }
}

/// Append-only host event log
pub struct HostEventLog {
    events: Vec<HostEvent>,
}

impl HostEventLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Appends an event
    pub fn record(&mut self, event: HostEvent) {
        self.events.push(event);
    }

    /// Returns all recorded events, oldest first
    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Returns the most recent event
    pub fn last(&self) -> Option<&HostEvent> {
        self.events.last()
    }

    /// Returns the number of recorded events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Default for HostEventLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_preserves_order() {
        let mut log = HostEventLog::new();
        log.record(HostEvent::SplashShown { timestamp_ns: 1 });
        log.record(HostEvent::SplashHidden { timestamp_ns: 2 });

        assert_eq!(log.len(), 2);
        assert_eq!(log.events()[0].timestamp_ns(), 1);
        assert_eq!(log.last().unwrap().timestamp_ns(), 2);
    }

    #[test]
    fn test_empty_log() {
        let log = HostEventLog::new();

        assert!(log.is_empty());
        assert_eq!(log.last(), None);
    }

    #[test]
    fn test_timestamp_accessor_covers_payload_variants() {
        let event = HostEvent::BridgeInstalled {
            timestamp_ns: 42,
            namespace: "Android".to_string(),
            operations: vec!["exitApp".to_string()],
        };
        assert_eq!(event.timestamp_ns(), 42);

        let event = HostEvent::Finished {
            timestamp_ns: 7,
            reason: FinishReason::BridgeExit,
        };
        assert_eq!(event.timestamp_ns(), 7);
    }

    #[test]
    fn test_finish_reason_display() {
        assert_eq!(FinishReason::BridgeExit.to_string(), "bridge-exit");
        assert_eq!(
            FinishReason::BridgeBackExhausted.to_string(),
            "bridge-back-exhausted"
        );
        assert_eq!(FinishReason::Destroyed.to_string(), "destroyed");
    }

    #[test]
    fn test_event_display() {
        let event = HostEvent::BridgeInstalled {
            timestamp_ns: 0,
            namespace: "Android".to_string(),
            operations: vec!["exitApp".to_string(), "goBack".to_string()],
        };
        assert_eq!(event.to_string(), "bridge Android installed: exitApp, goBack");

        let event = HostEvent::Finished {
            timestamp_ns: 0,
            reason: FinishReason::BridgeBackExhausted,
        };
        assert_eq!(event.to_string(), "finished: bridge-back-exhausted");
    }

    #[test]
    fn test_event_serialization() {
        let event = HostEvent::NavigationReissued {
            timestamp_ns: 3,
            url: "https://app.example/".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: HostEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(event, deserialized);
    }
}
