//! Executable lookup on the search path.
//!
//! Resolution never runs the tool. A [`ToolHandle`] is only produced after the
//! executable has been confirmed to exist, so callers never attempt to spawn a
//! tool that is known to be absent.

use std::path::{Path, PathBuf};

use crate::error::{CinderError, Result};

/// A located executable and the name it was requested by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolHandle {
    name: String,
    path: PathBuf,
}

impl ToolHandle {
    /// The logical name or path the tool was requested as.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Absolute path to the executable.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Resolves tool names against a list of search directories.
#[derive(Debug, Clone, Default)]
pub struct ToolResolver {
    search_path: Vec<PathBuf>,
}

impl ToolResolver {
    /// Create a resolver over explicit search directories.
    pub fn new(search_path: Vec<PathBuf>) -> Self {
        Self { search_path }
    }

    /// Create a resolver over the process `PATH`.
    pub fn from_env() -> Self {
        Self::new(parse_system_path())
    }

    /// Locate `name`, failing with [`CinderError::ToolNotFound`] if absent.
    ///
    /// `name` may be a bare executable name, searched on the path, or a
    /// relative/absolute path, checked directly.
    pub fn resolve(&self, name: &str, hint: Option<&str>) -> Result<ToolHandle> {
        self.find(name).ok_or_else(|| CinderError::ToolNotFound {
            name: name.to_string(),
            hint: hint.map(str::to_string),
        })
    }

    /// Locate `name`, returning `None` if absent.
    pub fn find(&self, name: &str) -> Option<ToolHandle> {
        let found = if is_path_like(name) {
            executable_candidate(Path::new(name))
        } else {
            self.search_path
                .iter()
                .find_map(|dir| executable_candidate(&dir.join(name)))
        };

        match found {
            Some(path) => {
                let path = std::path::absolute(&path).unwrap_or(path);
                tracing::debug!("Resolved tool '{}' to {}", name, path.display());
                Some(ToolHandle {
                    name: name.to_string(),
                    path,
                })
            }
            None => {
                tracing::debug!("Tool '{}' not found", name);
                None
            }
        }
    }
}

fn is_path_like(name: &str) -> bool {
    let path = Path::new(name);
    path.is_absolute() || path.components().count() > 1
}

#[cfg(not(windows))]
fn executable_candidate(candidate: &Path) -> Option<PathBuf> {
    (candidate.is_file() && is_executable(candidate)).then(|| candidate.to_path_buf())
}

#[cfg(windows)]
fn executable_candidate(candidate: &Path) -> Option<PathBuf> {
    if candidate.is_file() {
        return Some(candidate.to_path_buf());
    }
    let pathext = std::env::var("PATHEXT").unwrap_or_else(|_| ".COM;.EXE;.BAT;.CMD".to_string());
    pathext
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(|ext| {
            let mut name = candidate.as_os_str().to_os_string();
            name.push(ext);
            PathBuf::from(name)
        })
        .find(|path| path.is_file())
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}
