//! Command-line interface for cinderbuild.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    BuildArgs, CheckArgs, CleanArgs, Cli, Commands, ConfigureArgs, FormatArgs, PackageArgs,
    TestArgs, TidyArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult};
