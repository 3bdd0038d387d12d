//! Clean command implementation.

use std::fs;

use crate::cli::args::CleanArgs;
use crate::context::Context;
use crate::error::{CinderError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The clean command implementation.
pub struct CleanCommand {
    args: CleanArgs,
}

impl CleanCommand {
    /// Create a new clean command.
    pub fn new(args: CleanArgs) -> Self {
        Self { args }
    }
}

impl Command for CleanCommand {
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let build_dir = &self.args.build_dir;
        if !build_dir.exists() {
            ui.message(&format!(
                "Build directory '{}' does not exist.",
                build_dir.display()
            ));
            return Ok(CommandResult::success());
        }

        // Never remove the project itself or anything containing it.
        let target = fs::canonicalize(build_dir)?;
        let root = fs::canonicalize(ctx.project().root())
            .unwrap_or_else(|_| ctx.project().root().to_path_buf());
        if root.starts_with(&target) {
            return Err(CinderError::precondition(format!(
                "Refusing to remove '{}': it contains the project root",
                build_dir.display()
            )));
        }

        ui.message(&format!("Removing build directory: {}", build_dir.display()));
        if build_dir.is_dir() {
            fs::remove_dir_all(build_dir)?;
        } else {
            fs::remove_file(build_dir)?;
        }
        tracing::debug!("Removed {}", target.display());

        ui.success("Clean complete.");
        Ok(CommandResult::success())
    }
}
