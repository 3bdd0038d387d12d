//! Project discovery.
//!
//! A [`Project`] is the repository the orchestrator works on: its root
//! directory (the CMake source dir and archive input) and the name used for
//! release artifacts.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use walkdir::WalkDir;

/// Name used for artifacts when none can be discovered.
pub const DEFAULT_PROJECT_NAME: &str = "cinderpeak";

/// Top-level directories holding C++ sources.
pub const SOURCE_DIRS: &[&str] = &["src", "tests", "examples"];

/// Extensions of C++ sources and headers.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "hpp", "h", "cc", "cxx"];

static CMAKE_PROJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?im)^\s*project\s*\(\s*([A-Za-z0-9_.+-]+)")
        .expect("CMAKE_PROJECT must compile")
});

/// The project being orchestrated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    root: PathBuf,
    name: String,
}

impl Project {
    /// Create a project from an explicit root and name.
    pub fn new(root: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            name: name.into(),
        }
    }

    /// Discover the project from `start`, honoring explicit overrides.
    ///
    /// The root is `root_override` if given, else the result of
    /// [`find_project_root`], else `start`. The name is `name_override` if
    /// given, else the `project()` name in the root `CMakeLists.txt`, else
    /// [`DEFAULT_PROJECT_NAME`].
    pub fn discover(start: &Path, root_override: Option<&Path>, name_override: Option<&str>) -> Self {
        let root = root_override
            .map(Path::to_path_buf)
            .or_else(|| find_project_root(start))
            .unwrap_or_else(|| start.to_path_buf());
        let root = std::path::absolute(&root).unwrap_or(root);

        let name = name_override
            .map(str::to_string)
            .or_else(|| read_cmake_project_name(&root))
            .unwrap_or_else(|| DEFAULT_PROJECT_NAME.to_string());

        tracing::debug!("Project '{}' at {}", name, root.display());
        Self { root, name }
    }

    /// Project root directory (absolute).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Project name for release artifacts.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Files under `dirs` (relative to the root) whose extension is one of
    /// `extensions`, sorted by path. Missing directories are skipped.
    pub fn sources(&self, dirs: &[&str], extensions: &[&str]) -> Vec<PathBuf> {
        let mut files: Vec<PathBuf> = dirs
            .iter()
            .map(|dir| self.root.join(dir))
            .filter(|dir| dir.is_dir())
            .flat_map(|dir| {
                WalkDir::new(dir)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .map(|e| e.into_path())
                    .collect::<Vec<_>>()
            })
            .filter(|path| {
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| extensions.contains(&ext))
            })
            .collect();
        files.sort();
        files
    }
}

/// Find the project root by walking up from `start`.
///
/// The first directory holding either a `CMakeLists.txt` or a `.git` entry
/// wins, so a CMake subproject inside a larger repository is its own root.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join("CMakeLists.txt").is_file() {
            return Some(current);
        }
        if current.join(".git").exists() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Read the lowercased `project(<name>)` from `<root>/CMakeLists.txt`.
pub fn read_cmake_project_name(root: &Path) -> Option<String> {
    let content = fs::read_to_string(root.join("CMakeLists.txt")).ok()?;
    parse_cmake_project_name(&content)
}

fn parse_cmake_project_name(content: &str) -> Option<String> {
    CMAKE_PROJECT
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_lowercase())
}
