//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use clap::CommandFactory;

use crate::cli::args::{CheckSubcommand, Cli, Commands, PackageSubcommand};
use crate::context::Context;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
/// Fatal conditions are returned as `Err`; best-effort conditions that should
/// still exit successfully are returned as [`CommandResult::Warning`].
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Project, tool resolver and process runner for this invocation
    /// * `ui` - User interface for displaying output
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Completed normally.
    Success,
    /// Completed without doing the work, for a non-fatal reason.
    Warning(String),
    /// Completed without a fatal error but the process should still fail.
    Failure(i32),
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self::Success
    }

    /// Create a warning result.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning(message.into())
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self::Failure(exit_code)
    }

    /// Process exit code for this result.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Success | Self::Warning(_) => 0,
            Self::Failure(code) => *code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: Context,
}

impl CommandDispatcher {
    /// Create a new dispatcher over the given context.
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    /// Dispatch and execute a command.
    ///
    /// A missing subcommand (at any nesting level) prints that level's usage
    /// and fails with exit code 1. Warnings are printed here.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(command) = &cli.command else {
            return Ok(print_usage(ui, None));
        };
        tracing::debug!("Dispatching '{}'", command.name());

        let result = match command {
            Commands::Configure(args) => {
                super::configure::ConfigureCommand::new(args.clone()).execute(&self.context, ui)
            }
            Commands::Build(args) => {
                super::build::BuildCommand::new(args.clone()).execute(&self.context, ui)
            }
            Commands::Test(args) => {
                super::test::TestCommand::new(args.clone()).execute(&self.context, ui)
            }
            Commands::Clean(args) => {
                super::clean::CleanCommand::new(args.clone()).execute(&self.context, ui)
            }
            Commands::Format(args) => {
                super::format::FormatCommand::new(&args.clang_format_path, args.fix)
                    .execute(&self.context, ui)
            }
            Commands::Check(args) => match &args.command {
                Some(CheckSubcommand::Format(args)) => {
                    super::format::FormatCommand::new(&args.clang_format_path, false)
                        .execute(&self.context, ui)
                }
                Some(CheckSubcommand::Tidy(args)) => {
                    super::check::TidyCommand::new(args.clone()).execute(&self.context, ui)
                }
                None => Ok(print_usage(ui, Some("check"))),
            },
            Commands::Prepare => super::prepare::PrepareCommand::new().execute(&self.context, ui),
            Commands::Package(args) => match &args.command {
                Some(PackageSubcommand::Source(args)) => {
                    super::package::SourcePackageCommand::new(args.clone())
                        .execute(&self.context, ui)
                }
                None => Ok(print_usage(ui, Some("package"))),
            },
            Commands::Completions(args) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(&self.context, ui)
            }
        }?;

        if let CommandResult::Warning(message) = &result {
            ui.warning(message);
        }
        Ok(result)
    }
}

fn print_usage(ui: &mut dyn UserInterface, subcommand: Option<&str>) -> CommandResult {
    ui.message(&usage(subcommand));
    CommandResult::failure(1)
}

/// Rendered help for the top-level command or one of its subcommands.
pub fn usage(subcommand: Option<&str>) -> String {
    let mut cli = Cli::command();
    cli.build();
    let mut target = match subcommand.and_then(|name| cli.find_subcommand(name)) {
        Some(sub) => sub.clone(),
        None => cli.clone(),
    };
    target.render_help().to_string()
}
