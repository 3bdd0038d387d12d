//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and records every call as
//! an ordered [`UiEvent`], so tests can assert both what was shown and in
//! which order.
//!
//! # Example
//!
//! ```
//! use cinderbuild::ui::{MockUI, UiEvent, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.message("Removing build directory: build");
//! ui.success("Clean complete.");
//!
//! assert!(ui.has_message("Removing build directory"));
//! assert_eq!(ui.events()[1], UiEvent::Success("Clean complete.".into()));
//! ```

use super::{OutputMode, UserInterface};

/// One recorded UI call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Message(String),
    Success(String),
    Warning(String),
    Error(String),
    Command(String),
}

impl UiEvent {
    fn text(&self) -> &str {
        match self {
            Self::Message(s)
            | Self::Success(s)
            | Self::Warning(s)
            | Self::Error(s)
            | Self::Command(s) => s,
        }
    }
}

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    events: Vec<UiEvent>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Every call, in order.
    pub fn events(&self) -> &[UiEvent] {
        &self.events
    }

    fn select(&self, kind: fn(&UiEvent) -> bool) -> Vec<&str> {
        self.events
            .iter()
            .filter(|e| kind(e))
            .map(UiEvent::text)
            .collect()
    }

    pub fn messages(&self) -> Vec<&str> {
        self.select(|e| matches!(e, UiEvent::Message(_)))
    }

    pub fn successes(&self) -> Vec<&str> {
        self.select(|e| matches!(e, UiEvent::Success(_)))
    }

    pub fn warnings(&self) -> Vec<&str> {
        self.select(|e| matches!(e, UiEvent::Warning(_)))
    }

    pub fn errors(&self) -> Vec<&str> {
        self.select(|e| matches!(e, UiEvent::Error(_)))
    }

    /// Echoed command lines.
    pub fn commands(&self) -> Vec<&str> {
        self.select(|e| matches!(e, UiEvent::Command(_)))
    }

    /// Whether any message contains `text`.
    pub fn has_message(&self, text: &str) -> bool {
        self.messages().iter().any(|m| m.contains(text))
    }

    /// Whether any success contains `text`.
    pub fn has_success(&self, text: &str) -> bool {
        self.successes().iter().any(|m| m.contains(text))
    }

    /// Whether any warning contains `text`.
    pub fn has_warning(&self, text: &str) -> bool {
        self.warnings().iter().any(|m| m.contains(text))
    }

    /// Whether any error contains `text`.
    pub fn has_error(&self, text: &str) -> bool {
        self.errors().iter().any(|m| m.contains(text))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.events.push(UiEvent::Message(msg.to_string()));
    }

    fn success(&mut self, msg: &str) {
        self.events.push(UiEvent::Success(msg.to_string()));
    }

    fn warning(&mut self, msg: &str) {
        self.events.push(UiEvent::Warning(msg.to_string()));
    }

    fn error(&mut self, msg: &str) {
        self.events.push(UiEvent::Error(msg.to_string()));
    }

    fn command(&mut self, command_line: &str) {
        self.events.push(UiEvent::Command(command_line.to_string()));
    }
}
