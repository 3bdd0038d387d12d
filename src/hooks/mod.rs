//! Local git hook installation.
//!
//! Hook scripts live in the repository under [`HOOKS_SOURCE_DIR`] and are
//! installed into git's hook directory. The install mechanism is chosen once
//! per process by [`detect_linker`].

pub mod installer;
pub mod linker;

pub use installer::{HookInstaller, HookReport, HookStatus, InstallOutcome};
pub use linker::{detect_linker, CopyLinker, FileLinker, LinkKind, SymlinkLinker};

/// Hook sources, relative to the project root.
pub const HOOKS_SOURCE_DIR: &str = "dev/hooks";

/// Hook destination, relative to the project root.
pub const HOOKS_DEST_DIR: &str = ".git/hooks";
