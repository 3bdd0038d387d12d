//! Source distribution archives.
//!
//! Archives are produced by `git archive` from the committed `HEAD`, rooted
//! under a folder named `<project>-<release>-src/` and written to
//! `<project>-<release>-src.tar.gz` in the repository root.

use std::path::PathBuf;

use crate::context::Context;
use crate::error::{CinderError, Result};
use crate::process::Invocation;
use crate::ui::UserInterface;

/// Names for one source release.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveSpec {
    project: String,
    release: String,
}

impl ArchiveSpec {
    /// Fails with a precondition error if `release` is missing or blank.
    pub fn new(project: &str, release: Option<&str>) -> Result<Self> {
        match release.map(str::trim) {
            Some(release) if !release.is_empty() => Ok(Self {
                project: project.to_string(),
                release: release.to_string(),
            }),
            _ => Err(CinderError::precondition("--release-version is required")),
        }
    }

    /// `<project>-<release>-src`
    pub fn folder_name(&self) -> String {
        format!("{}-{}-src", self.project, self.release)
    }

    /// `<project>-<release>-src.tar.gz`
    pub fn tarball_name(&self) -> String {
        format!("{}.tar.gz", self.folder_name())
    }

    /// Path prefix for every entry in the archive.
    pub fn prefix(&self) -> String {
        format!("{}/", self.folder_name())
    }

    /// Arguments for `git`.
    pub fn archive_args(&self) -> Vec<String> {
        vec![
            "archive".to_string(),
            "--format=tar.gz".to_string(),
            format!("--output={}", self.tarball_name()),
            format!("--prefix={}", self.prefix()),
            "HEAD".to_string(),
        ]
    }
}

/// Create the archive described by `spec`, returning the tarball path.
pub fn create_source_archive(
    ctx: &Context,
    ui: &mut dyn UserInterface,
    spec: &ArchiveSpec,
) -> Result<PathBuf> {
    let git = ctx.resolve(ui, "git", Some("git is required"))?;

    let toplevel = ctx.capture(
        &Invocation::new(git.path())
            .args(["rev-parse", "--show-toplevel"])
            .current_dir(ctx.project().root())
            .context("not a git repository"),
    )?;
    let repo_root = match toplevel.trim() {
        "" => ctx.project().root().to_path_buf(),
        path => PathBuf::from(path),
    };

    ui.message(&format!("Creating source tarball: {}", spec.tarball_name()));
    ctx.run(
        ui,
        &Invocation::new(git.path())
            .args(spec.archive_args())
            .current_dir(&repo_root)
            .context("git archive failed"),
    )?;

    Ok(repo_root.join(spec.tarball_name()))
}
