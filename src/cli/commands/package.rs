//! Package command implementation.

use crate::cli::args::SourcePackageArgs;
use crate::context::Context;
use crate::error::Result;
use crate::package::{create_source_archive, ArchiveSpec};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The `package source` command implementation.
pub struct SourcePackageCommand {
    args: SourcePackageArgs,
}

impl SourcePackageCommand {
    /// Create a new source package command.
    pub fn new(args: SourcePackageArgs) -> Self {
        Self { args }
    }
}

impl Command for SourcePackageCommand {
    fn execute(&self, ctx: &Context, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        // Validated before git is even looked up.
        let spec = ArchiveSpec::new(ctx.project().name(), self.args.release_version.as_deref())?;

        let tarball = create_source_archive(ctx, ui, &spec)?;

        ui.success(&format!("Source package created: {}", tarball.display()));
        Ok(CommandResult::success())
    }
}
