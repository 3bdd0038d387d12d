//! External tool lookup and execution.

pub mod resolve;
pub mod runner;

pub use resolve::{is_executable, parse_system_path, ToolHandle, ToolResolver};
pub use runner::{Invocation, ProcessRunner, RecordingRunner, SystemRunner};
