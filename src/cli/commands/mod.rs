//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with nested subcommands (`cinderbuild check tidy`)
//! - One [`Context`](crate::context::Context) shared by every handler
//! - A single place where warnings are printed and exit codes decided

pub mod build;
pub mod check;
pub mod clean;
pub mod completions;
pub mod configure;
pub mod dispatcher;
pub mod format;
pub mod package;
pub mod prepare;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatcher::{usage, Command, CommandDispatcher, CommandResult};
