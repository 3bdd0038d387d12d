//! Error types for cinderbuild operations.
//!
//! This module defines [`CinderError`], the error type returned by every
//! command handler, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal conditions are raised where they are detected and never recovered
//!   locally; `main` is the only place that formats them for the user
//! - Non-fatal filesystem conditions are not errors; handlers report them as
//!   [`CommandResult::Warning`](crate::cli::CommandResult::Warning)
//! - Use `anyhow::Error` (via `CinderError::Other`) for unexpected errors

use thiserror::Error;

/// Core error type for cinderbuild operations.
#[derive(Debug, Error)]
pub enum CinderError {
    /// A required external executable could not be located.
    #[error("{}", tool_not_found_message(.name, .hint.as_deref()))]
    ToolNotFound { name: String, hint: Option<String> },

    /// A required prior state or option is missing.
    #[error("{message}")]
    Precondition { message: String },

    /// An external tool exited with a non-zero status.
    #[error("{}", command_failed_message(.command, .code.as_ref(), .context.as_deref()))]
    CommandFailed {
        command: String,
        code: Option<i32>,
        context: Option<String>,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CinderError {
    /// Shorthand for a [`CinderError::Precondition`].
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition {
            message: message.into(),
        }
    }
}

fn tool_not_found_message(name: &str, hint: Option<&str>) -> String {
    match hint {
        Some(hint) => format!("{hint} ('{name}' not found in PATH)"),
        None => format!("Command '{name}' not found in PATH"),
    }
}

fn command_failed_message(command: &str, code: Option<&i32>, context: Option<&str>) -> String {
    let code = match code {
        Some(code) => code.to_string(),
        None => "none (terminated by signal or failed to start)".to_string(),
    };
    let mut msg = format!("failed to run: {command}\nexit with code: {code}");
    if let Some(context) = context {
        msg.push_str(&format!("\nerror message: {context}"));
    }
    msg
}

/// Result type alias for cinderbuild operations.
pub type Result<T> = std::result::Result<T, CinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_not_found_displays_name() {
        let err = CinderError::ToolNotFound {
            name: "cmake".into(),
            hint: None,
        };
        assert_eq!(err.to_string(), "Command 'cmake' not found in PATH");
    }

    #[test]
    fn tool_not_found_displays_hint_and_name() {
        let err = CinderError::ToolNotFound {
            name: "cmake".into(),
            hint: Some("CMake is required".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("CMake is required"));
        assert!(msg.contains("cmake"));
    }

    #[test]
    fn precondition_displays_message() {
        let err = CinderError::precondition("Build directory 'build' not found.");
        assert_eq!(err.to_string(), "Build directory 'build' not found.");
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = CinderError::CommandFailed {
            command: "cmake --build build".into(),
            code: Some(2),
            context: None,
        };
        let msg = err.to_string();
        assert!(msg.contains("failed to run: cmake --build build"));
        assert!(msg.contains("exit with code: 2"));
        assert!(!msg.contains("error message"));
    }

    #[test]
    fn command_failed_includes_context() {
        let err = CinderError::CommandFailed {
            command: "git archive".into(),
            code: Some(128),
            context: Some("archive creation failed".into()),
        };
        assert!(err
            .to_string()
            .contains("error message: archive creation failed"));
    }

    #[test]
    fn command_failed_without_code() {
        let err = CinderError::CommandFailed {
            command: "ctest".into(),
            code: None,
            context: None,
        };
        assert!(err.to_string().contains("terminated by signal"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: CinderError = io_err.into();
        assert!(matches!(err, CinderError::Io(_)));
    }
}
