//! Check command implementation.
//!
//! `check format` is served by [`FormatCommand`](super::format::FormatCommand);
//! this module implements `check tidy`.

use crate::cli::args::TidyArgs;
use crate::compose::{tidy_direct_args, tidy_wrapper_args};
use crate::context::Context;
use crate::error::{CinderError, Result};
use crate::process::Invocation;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Compile database clang-tidy reads from the build directory.
pub const COMPILE_COMMANDS: &str = "compile_commands.json";

/// The `check tidy` command implementation.
pub struct TidyCommand {
    args: TidyArgs,
}

impl TidyCommand {
    /// Create a new tidy command.
    pub fn new(args: TidyArgs) -> Self {
        Self { args }
    }
}

impl Command for TidyCommand {
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let clang_tidy =
            ctx.resolve(ui, &self.args.clang_tidy_path, Some("clang-tidy is required"))?;

        if !self.args.build_dir.join(COMPILE_COMMANDS).is_file() {
            return Err(CinderError::precondition(format!(
                "{} not found in {}",
                COMPILE_COMMANDS,
                self.args.build_dir.display()
            )));
        }

        let invocation = match ctx.resolver().find(&self.args.run_clang_tidy_path) {
            Some(wrapper) => {
                // The wrapper runs from the project root, so hand it an
                // absolute compile database location.
                let args = TidyArgs {
                    build_dir: std::path::absolute(&self.args.build_dir)?,
                    ..self.args.clone()
                };
                Invocation::new(wrapper.path())
                    .args(tidy_wrapper_args(&args, clang_tidy.path()))
                    .current_dir(ctx.project().root())
            }
            None => {
                ui.warning(&format!(
                    "{} not found; running clang-tidy directly",
                    self.args.run_clang_tidy_path
                ));
                let sources = ctx.project().sources(&["src"], &["cpp"]);
                if sources.is_empty() {
                    return Ok(CommandResult::warning("No source files found."));
                }
                Invocation::new(clang_tidy.path()).args(tidy_direct_args(&self.args, &sources))
            }
        };

        ctx.run(ui, &invocation.context("clang-tidy reported problems"))?;

        ui.success("Tidy check complete.");
        Ok(CommandResult::success())
    }
}
