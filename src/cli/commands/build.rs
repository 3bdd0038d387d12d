//! Build command implementation.

use crate::cli::args::BuildArgs;
use crate::compose::build_args;
use crate::context::Context;
use crate::error::{CinderError, Result};
use crate::process::Invocation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The build command implementation.
pub struct BuildCommand {
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(args: BuildArgs) -> Self {
        Self { args }
    }
}

impl Command for BuildCommand {
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.skip_build {
            ui.message("Skipping build as requested.");
            return Ok(CommandResult::success());
        }

        if !self.args.build_dir.is_dir() {
            return Err(CinderError::precondition(format!(
                "Build directory '{}' not found. Run configure first.",
                self.args.build_dir.display()
            )));
        }

        let cmake = ctx.resolve(ui, &self.args.cmake_path, Some("CMake is required"))?;

        ctx.run(
            ui,
            &Invocation::new(cmake.path())
                .args(build_args(&self.args))
                .context("Build failed"),
        )?;

        ui.success("Build complete.");
        Ok(CommandResult::success())
    }
}
