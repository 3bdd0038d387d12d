//! Per-invocation execution context shared by command handlers.

use crate::error::Result;
use crate::hooks::{detect_linker, FileLinker};
use crate::process::{Invocation, ProcessRunner, SystemRunner, ToolHandle, ToolResolver};
use crate::project::Project;
use crate::ui::UserInterface;

/// Everything a handler needs to reach the outside world.
pub struct Context {
    project: Project,
    resolver: ToolResolver,
    runner: Box<dyn ProcessRunner>,
    linker: Box<dyn FileLinker>,
}

impl Context {
    pub fn new(
        project: Project,
        resolver: ToolResolver,
        runner: Box<dyn ProcessRunner>,
        linker: Box<dyn FileLinker>,
    ) -> Self {
        Self {
            project,
            resolver,
            runner,
            linker,
        }
    }

    /// Context backed by the real `PATH`, real processes and the platform
    /// linker.
    pub fn system(project: Project) -> Self {
        Self::new(
            project,
            ToolResolver::from_env(),
            Box::new(SystemRunner),
            detect_linker(),
        )
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn resolver(&self) -> &ToolResolver {
        &self.resolver
    }

    pub fn linker(&self) -> &dyn FileLinker {
        self.linker.as_ref()
    }

    /// Resolve a required tool, reporting where it was found in verbose mode.
    pub fn resolve(
        &self,
        ui: &mut dyn UserInterface,
        name: &str,
        hint: Option<&str>,
    ) -> Result<ToolHandle> {
        let handle = self.resolver.resolve(name, hint)?;
        if ui.output_mode().shows_details() {
            ui.message(&format!(
                "Using {}: {}",
                handle.name(),
                handle.path().display()
            ));
        }
        Ok(handle)
    }

    /// Echo and run `invocation` with output streaming to the terminal.
    pub fn run(&self, ui: &mut dyn UserInterface, invocation: &Invocation) -> Result<()> {
        ui.command(&invocation.command_line());
        if ui.output_mode().shows_details() {
            if let Some(cwd) = invocation.cwd() {
                ui.message(&format!("  in {}", cwd.display()));
            }
        }
        self.runner.run(invocation)
    }

    /// Run `invocation` and return its standard output.
    pub fn capture(&self, invocation: &Invocation) -> Result<String> {
        self.runner.run_captured(invocation)
    }
}
