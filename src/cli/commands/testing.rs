//! Shared fixture for handler tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use tempfile::TempDir;

use crate::context::Context;
use crate::hooks::CopyLinker;
use crate::process::{RecordingRunner, ToolResolver};
use crate::project::{Project, DEFAULT_PROJECT_NAME};

/// Tools present on the fixture's search path unless removed.
const DEFAULT_TOOLS: &[&str] = &["cmake", "ctest", "git", "clang-format", "clang-tidy"];

/// A temporary project root with a private tool directory and a recording
/// runner shared with every context it builds.
pub(crate) struct Fixture {
    temp: TempDir,
    tools: PathBuf,
    runner: Rc<RecordingRunner>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_runner(RecordingRunner::new())
    }

    pub fn with_runner(runner: RecordingRunner) -> Self {
        let temp = TempDir::new().unwrap();
        let tools = temp.path().join(".tools");
        fs::create_dir_all(&tools).unwrap();
        let fx = Self {
            temp,
            tools,
            runner: Rc::new(runner),
        };
        for tool in DEFAULT_TOOLS {
            fx.add_tool(tool);
        }
        fx
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }

    pub fn runner(&self) -> &RecordingRunner {
        &self.runner
    }

    /// Path a tool resolves to.
    pub fn tool(&self, name: &str) -> PathBuf {
        self.tools.join(name)
    }

    /// Put an executable named `name` on the search path.
    pub fn add_tool(&self, name: &str) {
        let path = self.tool(name);
        fs::write(&path, "#!/bin/sh\nexit 0\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    pub fn remove_tool(&self, name: &str) {
        fs::remove_file(self.tool(name)).unwrap();
    }

    /// Create `relative` (and parents) under the project root.
    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let dir = self.root().join(relative);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Write `contents` to `relative` under the project root.
    pub fn write(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }

    pub fn context(&self) -> Context {
        Context::new(
            Project::new(self.root(), DEFAULT_PROJECT_NAME),
            ToolResolver::new(vec![self.tools.clone()]),
            Box::new(Rc::clone(&self.runner)),
            Box::new(CopyLinker),
        )
    }
}
