//! Configure command implementation.
//!
//! The `cinderbuild configure` command creates the out-of-source build
//! directory and runs the CMake configure step inside it.

use std::fs;

use crate::cli::args::ConfigureArgs;
use crate::compose::configure_args;
use crate::context::Context;
use crate::error::{CinderError, Result};
use crate::process::Invocation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The configure command implementation.
pub struct ConfigureCommand {
    args: ConfigureArgs,
}

impl ConfigureCommand {
    /// Create a new configure command.
    pub fn new(args: ConfigureArgs) -> Self {
        Self { args }
    }
}

impl Command for ConfigureCommand {
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let cmake = ctx.resolve(ui, &self.args.cmake_path, Some("CMake is required"))?;

        fs::create_dir_all(&self.args.build_dir).map_err(|e| {
            CinderError::precondition(format!(
                "Cannot create build directory '{}': {e}",
                self.args.build_dir.display()
            ))
        })?;

        let invocation = Invocation::new(cmake.path())
            .arg(ctx.project().root().display().to_string())
            .args(configure_args(&self.args))
            .current_dir(&self.args.build_dir)
            .context("CMake configuration failed");
        ctx.run(ui, &invocation)?;

        ui.success(&format!(
            "Configuration complete. Build directory: {}",
            self.args.build_dir.display()
        ));
        Ok(CommandResult::success())
    }
}
