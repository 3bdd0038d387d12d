//! Synchronous external command execution.
//!
//! Commands run directly (no shell) with the orchestrator's standard streams
//! inherited, so the tool's own output reaches the user as it is produced.
//! A non-zero exit becomes [`CinderError::CommandFailed`]; nothing is retried.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{CinderError, Result};

/// A fully formed command line: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    args: Vec<String>,
    cwd: Option<PathBuf>,
    context: Option<String>,
}

impl Invocation {
    /// Start an invocation of `program` with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            context: None,
        }
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments, in order.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run in `dir` instead of the current directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Message attached to the failure if the command exits non-zero.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }

    /// The command line as shown to the user and carried in failures.
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.display().to_string())
            .chain(self.args.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn failure(&self, code: Option<i32>, context: Option<String>) -> CinderError {
        CinderError::CommandFailed {
            command: self.command_line(),
            code,
            context: context.or_else(|| self.context.clone()),
        }
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }
        cmd
    }
}

/// Executes invocations to completion.
pub trait ProcessRunner {
    /// Run with inherited output streams; fail on non-zero exit.
    fn run(&self, invocation: &Invocation) -> Result<()>;

    /// Run capturing standard output (standard error stays inherited).
    fn run_captured(&self, invocation: &Invocation) -> Result<String>;
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for std::rc::Rc<T> {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        (**self).run(invocation)
    }

    fn run_captured(&self, invocation: &Invocation) -> Result<String> {
        (**self).run_captured(invocation)
    }
}

/// Runs invocations as real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        // Keep our own buffered output ahead of the child's.
        let _ = std::io::stdout().flush();
        tracing::debug!("Running: {}", invocation.command_line());

        let status = invocation
            .to_command()
            .status()
            .map_err(|e| invocation.failure(None, Some(e.to_string())))?;

        if status.success() {
            Ok(())
        } else {
            Err(invocation.failure(status.code(), None))
        }
    }

    fn run_captured(&self, invocation: &Invocation) -> Result<String> {
        let _ = std::io::stdout().flush();
        tracing::debug!("Running (captured): {}", invocation.command_line());

        let output = invocation
            .to_command()
            .stdin(Stdio::inherit())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| invocation.failure(None, Some(e.to_string())))?;

        if output.status.success() {
            Ok(String::from_utf8_lossy(&output.stdout).into_owned())
        } else {
            Err(invocation.failure(output.status.code(), None))
        }
    }
}

/// Test double that records invocations instead of spawning them.
///
/// Programs can be configured to fail with a given exit code or to return
/// canned output from [`ProcessRunner::run_captured`]. Programs are matched
/// by file name, so `/usr/bin/cmake` matches `"cmake"`.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: RefCell<Vec<Invocation>>,
    failures: HashMap<String, i32>,
    outputs: HashMap<String, String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every invocation of `program` exit with `code`.
    pub fn fail_with(mut self, program: &str, code: i32) -> Self {
        self.failures.insert(program.to_string(), code);
        self
    }

    /// Return `stdout` from captured invocations of `program`.
    pub fn with_output(mut self, program: &str, stdout: &str) -> Self {
        self.outputs.insert(program.to_string(), stdout.to_string());
        self
    }

    /// All invocations seen so far, in order.
    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.borrow().clone()
    }

    /// Whether nothing has been run.
    pub fn is_empty(&self) -> bool {
        self.invocations.borrow().is_empty()
    }

    fn record(&self, invocation: &Invocation) -> Result<String> {
        self.invocations.borrow_mut().push(invocation.clone());
        let name = invocation
            .program()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if let Some(code) = self.failures.get(&name) {
            return Err(invocation.failure(Some(*code), None));
        }
        Ok(self.outputs.get(&name).cloned().unwrap_or_default())
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<()> {
        self.record(invocation).map(|_| ())
    }

    fn run_captured(&self, invocation: &Invocation) -> Result<String> {
        self.record(invocation)
    }
}
