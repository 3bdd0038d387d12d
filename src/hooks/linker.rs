//! Platform capability for placing a hook file at its destination.

use std::fs;
use std::io;
use std::path::Path;

/// How a hook is placed at its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkKind {
    /// A symbolic link back to the source file.
    Symlink,
    /// An independent copy of the source file.
    Copy,
}

/// Installs a reference to `source` at `dest`.
pub trait FileLinker {
    /// The mechanism this linker uses.
    fn kind(&self) -> LinkKind;

    /// Create `dest`. `dest` must not already exist.
    fn link(&self, source: &Path, dest: &Path) -> io::Result<()>;
}

/// Links by symbolic reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymlinkLinker;

impl FileLinker for SymlinkLinker {
    fn kind(&self) -> LinkKind {
        LinkKind::Symlink
    }

    #[cfg(unix)]
    fn link(&self, source: &Path, dest: &Path) -> io::Result<()> {
        std::os::unix::fs::symlink(source, dest)
    }

    #[cfg(windows)]
    fn link(&self, source: &Path, dest: &Path) -> io::Result<()> {
        std::os::windows::fs::symlink_file(source, dest)
    }

    #[cfg(not(any(unix, windows)))]
    fn link(&self, _source: &Path, _dest: &Path) -> io::Result<()> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "symbolic links are not supported on this platform",
        ))
    }
}

/// Links by copying contents and permissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyLinker;

impl FileLinker for CopyLinker {
    fn kind(&self) -> LinkKind {
        LinkKind::Copy
    }

    fn link(&self, source: &Path, dest: &Path) -> io::Result<()> {
        fs::copy(source, dest).map(|_| ())
    }
}

/// Pick the linker for this platform.
///
/// Symbolic links need elevated privileges on Windows, so hooks are copied
/// there and linked everywhere else.
pub fn detect_linker() -> Box<dyn FileLinker> {
    let linker: Box<dyn FileLinker> = if cfg!(unix) {
        Box::new(SymlinkLinker)
    } else {
        Box::new(CopyLinker)
    };
    tracing::debug!("Hook link mechanism: {:?}", linker.kind());
    linker
}
