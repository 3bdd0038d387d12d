//! Prepare command implementation.
//!
//! The `cinderbuild prepare` command installs the repository's local git
//! hooks. Missing hook directories degrade to a warning; the command never
//! fails because hooks could not be installed.

use crate::context::Context;
use crate::error::Result;
use crate::hooks::{HookInstaller, HookStatus, InstallOutcome, HOOKS_DEST_DIR, HOOKS_SOURCE_DIR};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The prepare command implementation.
#[derive(Debug, Default)]
pub struct PrepareCommand;

impl PrepareCommand {
    /// Create a new prepare command.
    pub fn new() -> Self {
        Self
    }
}

impl Command for PrepareCommand {
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let root = ctx.project().root();
        let installer = HookInstaller::new(
            root.join(HOOKS_SOURCE_DIR),
            root.join(HOOKS_DEST_DIR),
            ctx.linker(),
        );

        let reports = match installer.install()? {
            InstallOutcome::Skipped(reason) => return Ok(CommandResult::warning(reason)),
            InstallOutcome::Completed(reports) => reports,
        };

        for report in &reports {
            match report.status {
                HookStatus::Installed => ui.success(&format!(
                    "{} installed at {}.",
                    report.name,
                    report.destination.display()
                )),
                HookStatus::AlreadyInstalled => {
                    ui.message(&format!("{} already installed.", report.name))
                }
                HookStatus::Modified => ui.warning(&format!(
                    "{} differs from the repository copy; left untouched.",
                    report.destination.display()
                )),
            }
        }

        ui.success("Development environment prepared.");
        Ok(CommandResult::success())
    }
}
