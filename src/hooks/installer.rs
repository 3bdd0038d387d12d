//! Idempotent installation of hook files.
//!
//! For each regular file in the source directory:
//! - destination absent: link it and report [`HookStatus::Installed`]
//! - destination byte-identical: touch nothing, report
//!   [`HookStatus::AlreadyInstalled`]
//! - destination present but different: touch nothing, report
//!   [`HookStatus::Modified`]
//!
//! Nothing is ever overwritten or deleted.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::linker::FileLinker;

/// What happened to one hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookStatus {
    /// Newly linked or copied into place.
    Installed,
    /// Destination already matches the source.
    AlreadyInstalled,
    /// Destination exists with different contents and was left alone.
    Modified,
}

/// Result for a single hook file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HookReport {
    pub name: String,
    pub destination: PathBuf,
    pub status: HookStatus,
}

/// Result of an installation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// Every source file was examined.
    Completed(Vec<HookReport>),
    /// A prerequisite directory is missing; nothing was done.
    Skipped(String),
}

/// Installs hooks from `source_dir` into `dest_dir`.
pub struct HookInstaller<'a> {
    source_dir: PathBuf,
    dest_dir: PathBuf,
    linker: &'a dyn FileLinker,
}

impl<'a> HookInstaller<'a> {
    pub fn new(
        source_dir: impl Into<PathBuf>,
        dest_dir: impl Into<PathBuf>,
        linker: &'a dyn FileLinker,
    ) -> Self {
        Self {
            source_dir: source_dir.into(),
            dest_dir: dest_dir.into(),
            linker,
        }
    }

    /// Run one installation pass.
    pub fn install(&self) -> Result<InstallOutcome> {
        if !self.dest_dir.is_dir() {
            return Ok(InstallOutcome::Skipped(format!(
                "{} not found.",
                self.dest_dir.display()
            )));
        }
        if !self.source_dir.is_dir() {
            return Ok(InstallOutcome::Skipped(format!(
                "No hooks found in {}",
                self.source_dir.display()
            )));
        }

        let mut sources: Vec<PathBuf> = fs::read_dir(&self.source_dir)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<std::io::Result<_>>()?;
        sources.retain(|p| p.is_file());
        sources.sort();

        let mut reports = Vec::with_capacity(sources.len());
        for source in sources {
            reports.push(self.install_one(&source)?);
        }
        Ok(InstallOutcome::Completed(reports))
    }

    fn install_one(&self, source: &Path) -> Result<HookReport> {
        let name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let destination = self.dest_dir.join(&name);

        // symlink_metadata so a dangling link still counts as present.
        let status = if fs::symlink_metadata(&destination).is_ok() {
            if same_contents(source, &destination) {
                HookStatus::AlreadyInstalled
            } else {
                tracing::warn!(
                    "Hook {} differs from {}; leaving it untouched",
                    destination.display(),
                    source.display()
                );
                HookStatus::Modified
            }
        } else {
            let absolute = std::path::absolute(source)?;
            self.linker.link(&absolute, &destination)?;
            tracing::debug!(
                "Installed hook {} -> {} ({:?})",
                destination.display(),
                absolute.display(),
                self.linker.kind()
            );
            HookStatus::Installed
        };

        Ok(HookReport {
            name,
            destination,
            status,
        })
    }
}

/// Byte-for-byte comparison; unreadable files never compare equal.
fn same_contents(a: &Path, b: &Path) -> bool {
    match (fs::read(a), fs::read(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
