//! # Session Script Parser
//!
//! Provides a simple scripted session format for deterministic demos and
//! tests of the host shell.
//!
//! ## Format
//!
//! Scripts are line-based, with each line representing one session step:
//! - `back` — press the hardware back button
//! - `nav <URL>` — page raises a link navigation
//! - `nav-legacy <URL>` — page raises a legacy string-form navigation
//! - `handler on` / `handler off` — page installs or removes its back handler
//! - `bridge <OPERATION>` — page invokes a bridge operation (e.g. `exitApp`)
//! - `wait <DURATION>` — advance logical time (`500ms`, `2s`)
//! - `destroy` — platform tears the shell down
//! - Comments: `# This is a comment`
//!
//! ## Example
//!
//! ```text
//! # Browse in, then back out through the bridge
//! handler on
//! nav https://app.example/quiz
//! back
//! handler off
//! back
//! bridge goBack
//! ```

use std::collections::VecDeque;
use thiserror::Error;

/// Session script error types
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionScriptError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing argument for: {0}")]
    MissingArgument(String),

    #[error("Parse error at line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("Empty script")]
    EmptyScript,

    #[error("Invalid delay format: {0}")]
    InvalidDelay(String),
}

/// A single scripted session step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStep {
    /// Hardware back button press
    BackPress,
    /// Page raises a link navigation to this URL
    Navigate(String),
    /// Page raises a legacy string-form navigation to this URL
    NavigateLegacy(String),
    /// Page installs its back handler
    HandlerOn,
    /// Page removes its back handler
    HandlerOff,
    /// Page invokes a bridge operation by name
    Bridge(String),
    /// Advance logical time by this many milliseconds
    Wait(u64),
    /// Platform tears the shell down
    Destroy,
}

/// Session script
///
/// Parses and provides scripted session steps for deterministic runs.
#[derive(Debug, Clone)]
pub struct SessionScript {
    steps: VecDeque<SessionStep>,
}

impl SessionScript {
    /// Creates a new empty session script
    pub fn new() -> Self {
        Self {
            steps: VecDeque::new(),
        }
    }

    /// Parses a script from text
    pub fn from_text(text: &str) -> Result<Self, SessionScriptError> {
        let mut steps = VecDeque::new();

        for (line_num, line) in text.lines().enumerate() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            steps.push_back(Self::parse_line(line, line_num + 1)?);
        }

        if steps.is_empty() {
            return Err(SessionScriptError::EmptyScript);
        }

        Ok(Self { steps })
    }

    /// Parses a single line of script
    fn parse_line(line: &str, line_num: usize) -> Result<SessionStep, SessionScriptError> {
        let mut parts = line.splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or_default();
        let argument = parts.next().map(str::trim).unwrap_or("");

        match command {
            "back" => Self::expect_no_argument(argument, line_num, SessionStep::BackPress),
            "destroy" => Self::expect_no_argument(argument, line_num, SessionStep::Destroy),
            "nav" => {
                Self::expect_argument(command, argument).map(|a| SessionStep::Navigate(a.to_string()))
            }
            "nav-legacy" => Self::expect_argument(command, argument)
                .map(|a| SessionStep::NavigateLegacy(a.to_string())),
            "bridge" => {
                Self::expect_argument(command, argument).map(|a| SessionStep::Bridge(a.to_string()))
            }
            "handler" => match argument {
                "on" => Ok(SessionStep::HandlerOn),
                "off" => Ok(SessionStep::HandlerOff),
                other => Err(SessionScriptError::ParseError {
                    line: line_num,
                    message: format!("handler takes on|off, got '{}'", other),
                }),
            },
            "wait" => {
                let millis =
                    Self::parse_duration(argument).map_err(|e| SessionScriptError::ParseError {
                        line: line_num,
                        message: e.to_string(),
                    })?;
                Ok(SessionStep::Wait(millis))
            }
            other => Err(SessionScriptError::UnknownCommand(other.to_string())),
        }
    }

    fn expect_argument<'a>(
        command: &str,
        argument: &'a str,
    ) -> Result<&'a str, SessionScriptError> {
        if argument.is_empty() {
            return Err(SessionScriptError::MissingArgument(command.to_string()));
        }
        Ok(argument)
    }

    fn expect_no_argument(
        argument: &str,
        line_num: usize,
        step: SessionStep,
    ) -> Result<SessionStep, SessionScriptError> {
        if !argument.is_empty() {
            return Err(SessionScriptError::ParseError {
                line: line_num,
                message: format!("unexpected argument '{}'", argument),
            });
        }
        Ok(step)
    }

    /// Parses a duration string (e.g., "100ms", "1s")
    fn parse_duration(s: &str) -> Result<u64, SessionScriptError> {
        let s = s.trim().to_lowercase();

        if let Some(ms_str) = s.strip_suffix("ms") {
            ms_str
                .trim()
                .parse::<u64>()
                .map_err(|_| SessionScriptError::InvalidDelay(s.to_string()))
        } else if let Some(s_str) = s.strip_suffix('s') {
            s_str
                .trim()
                .parse::<u64>()
                .map(|secs| secs * 1000)
                .map_err(|_| SessionScriptError::InvalidDelay(s.to_string()))
        } else {
            Err(SessionScriptError::InvalidDelay(s.to_string()))
        }
    }

    /// Returns the next session step, if any
    pub fn next_step(&mut self) -> Option<SessionStep> {
        self.steps.pop_front()
    }

    /// Returns true if the script has more steps
    pub fn has_more(&self) -> bool {
        !self.steps.is_empty()
    }

    /// Returns the number of remaining steps
    pub fn remaining(&self) -> usize {
        self.steps.len()
    }
}

impl Default for SessionScript {
    fn default() -> Self {
        Self::new()
    }
}
