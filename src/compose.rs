//! Translation of parsed options into tool argument vectors.
//!
//! Every function here is pure: identical options always produce an
//! identical, identically ordered argument vector. For `configure` the
//! order is fixed as build type and table-driven flags, then generator and
//! toolchain, then free-form `-D` overrides, so an override can always win
//! a conflict under CMake's last-definition-wins rule.

use std::path::{Path, PathBuf};

use crate::cli::args::{BuildArgs, ConfigureArgs, TestArgs, TidyArgs};

/// Build type used when `--build-type` is not given.
pub const DEFAULT_BUILD_TYPE: &str = "RelWithDebInfo";

/// Header filter passed to the clang-tidy wrapper.
pub const TIDY_HEADER_FILTER: &str = "src/|tests/|examples/";

/// Boolean `configure` flags that map to fixed CMake tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureFlag {
    WithTests,
    WithExamples,
    Sanitize,
    Coverage,
}

/// Flag to token table, in emission order.
pub const FLAG_TABLE: &[(ConfigureFlag, &[&str])] = &[
    (ConfigureFlag::WithTests, &["-DBUILD_TESTS=ON"]),
    (ConfigureFlag::WithExamples, &["-DBUILD_EXAMPLES=ON"]),
    (ConfigureFlag::Sanitize, &["-DSANITIZE=ON"]),
    (ConfigureFlag::Coverage, &["-DBUILD_COVERAGE=ON"]),
];

impl ConfigureFlag {
    fn is_set(self, args: &ConfigureArgs) -> bool {
        match self {
            Self::WithTests => args.with_tests,
            Self::WithExamples => args.with_examples,
            Self::Sanitize => args.sanitize,
            Self::Coverage => args.coverage,
        }
    }
}

/// Options for the CMake configure step (everything after the source dir).
pub fn configure_args(args: &ConfigureArgs) -> Vec<String> {
    let build_type = args.build_type.as_deref().unwrap_or(DEFAULT_BUILD_TYPE);
    let mut options = vec![format!("-DCMAKE_BUILD_TYPE={build_type}")];

    for (flag, tokens) in FLAG_TABLE {
        if flag.is_set(args) {
            options.extend(tokens.iter().map(|t| t.to_string()));
        }
    }

    // --ninja is shorthand and beats a free-form --generator.
    if args.ninja {
        options.push("-GNinja".to_string());
    } else if let Some(generator) = &args.generator {
        options.push(format!("-G{generator}"));
    }

    if let Some(toolchain) = &args.toolchain {
        options.push(format!("-DCMAKE_TOOLCHAIN_FILE={toolchain}"));
    }

    options.extend(args.defines.iter().map(|d| format!("-D{d}")));
    options
}

/// Arguments for `cmake --build`.
pub fn build_args(args: &BuildArgs) -> Vec<String> {
    let mut options = vec!["--build".to_string(), display(&args.build_dir)];
    if let Some(jobs) = args.jobs {
        options.push("-j".to_string());
        options.push(jobs.to_string());
    }
    if let Some(target) = &args.target {
        options.push("--target".to_string());
        options.push(target.clone());
    }
    options
}

/// Arguments for `ctest`; passthrough arguments go last.
pub fn test_args(args: &TestArgs) -> Vec<String> {
    let mut options = vec![
        "--test-dir".to_string(),
        display(&args.build_dir),
        "--output-on-failure".to_string(),
    ];
    options.extend(args.rest.iter().cloned());
    options
}

/// Arguments for clang-format: in-place with `fix`, else a failing dry run.
pub fn format_args(fix: bool, sources: &[PathBuf]) -> Vec<String> {
    let mut options: Vec<String> = if fix {
        vec!["-i".to_string()]
    } else {
        vec!["--dry-run".to_string(), "--Werror".to_string()]
    };
    options.extend(sources.iter().map(|s| display(s)));
    options
}

/// Arguments for the parallel `run-clang-tidy` wrapper.
pub fn tidy_wrapper_args(args: &TidyArgs, clang_tidy: &Path) -> Vec<String> {
    let mut options = vec![
        "-p".to_string(),
        display(&args.build_dir),
        "-clang-tidy-binary".to_string(),
        display(clang_tidy),
    ];
    if let Some(jobs) = args.jobs {
        options.push(format!("-j{jobs}"));
    }
    if args.fix {
        options.push("-fix".to_string());
    }
    options.push(format!("-header-filter={TIDY_HEADER_FILTER}"));
    options.push("src/".to_string());
    options
}

/// Arguments for invoking clang-tidy directly on each source.
pub fn tidy_direct_args(args: &TidyArgs, sources: &[PathBuf]) -> Vec<String> {
    let mut options = vec![format!("-p={}", display(&args.build_dir))];
    if args.fix {
        options.push("-fix".to_string());
    }
    options.extend(sources.iter().map(|s| display(s)));
    options
}

fn display(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
