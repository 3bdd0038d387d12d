//! Format command implementation.
//!
//! Serves both `cinderbuild format` and `cinderbuild check format`; the
//! latter is the former without `--fix`.

use crate::compose::format_args;
use crate::context::Context;
use crate::error::Result;
use crate::process::Invocation;
use crate::project::{SOURCE_DIRS, SOURCE_EXTENSIONS};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The format command implementation.
pub struct FormatCommand {
    clang_format_path: String,
    fix: bool,
}

impl FormatCommand {
    /// Create a new format command.
    pub fn new(clang_format_path: &str, fix: bool) -> Self {
        Self {
            clang_format_path: clang_format_path.to_string(),
            fix,
        }
    }
}

impl Command for FormatCommand {
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let clang_format =
            ctx.resolve(ui, &self.clang_format_path, Some("clang-format is required"))?;

        let sources = ctx.project().sources(SOURCE_DIRS, SOURCE_EXTENSIONS);
        if sources.is_empty() {
            return Ok(CommandResult::warning("No source files found."));
        }
        tracing::debug!("Formatting {} source files", sources.len());

        let context = if self.fix {
            "clang-format failed"
        } else {
            "Formatting check failed; run `cinderbuild format --fix`"
        };
        ctx.run(
            ui,
            &Invocation::new(clang_format.path())
                .args(format_args(self.fix, &sources))
                .current_dir(ctx.project().root())
                .context(context),
        )?;

        ui.success(if self.fix {
            "Format complete."
        } else {
            "Format check complete."
        });
        Ok(CommandResult::success())
    }
}
