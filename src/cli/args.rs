//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct. Each subcommand owns one
//! args struct, validated once at parse time and handed to its handler.
//!
//! Option values resolve as: explicit flag, then environment variable (where
//! one is declared), then the default shown in `--help`.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Default out-of-source build directory.
pub const DEFAULT_BUILD_DIR: &str = "build";

/// Cinderbuild - build, test, lint and package a CMake project.
#[derive(Debug, Parser)]
#[command(name = "cinderbuild")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides discovery from the current directory)
    #[arg(short, long, global = true, env = "CINDERBUILD_PROJECT")]
    pub project: Option<PathBuf>,

    /// Project name used for release artifacts (overrides CMakeLists.txt)
    #[arg(long, global = true, env = "CINDERBUILD_PROJECT_NAME")]
    pub project_name: Option<String>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Configure the build system
    Configure(ConfigureArgs),

    /// Build the project
    Build(BuildArgs),

    /// Run tests
    Test(TestArgs),

    /// Remove the build directory
    Clean(CleanArgs),

    /// Format sources with clang-format
    Format(FormatArgs),

    /// Check formatting or run static analysis
    Check(CheckArgs),

    /// Install local git hooks
    Prepare,

    /// Produce distribution archives
    Package(PackageArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

impl Commands {
    /// Name of the subcommand as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Configure(_) => "configure",
            Self::Build(_) => "build",
            Self::Test(_) => "test",
            Self::Clean(_) => "clean",
            Self::Format(_) => "format",
            Self::Check(_) => "check",
            Self::Prepare => "prepare",
            Self::Package(_) => "package",
            Self::Completions(_) => "completions",
        }
    }
}

/// Arguments for the `configure` command.
#[derive(Debug, Clone, clap::Args)]
pub struct ConfigureArgs {
    /// Build directory
    #[arg(default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// CMAKE_BUILD_TYPE [default: RelWithDebInfo]
    #[arg(long)]
    pub build_type: Option<String>,

    /// Build the test suite
    #[arg(long)]
    pub with_tests: bool,

    /// Build the examples
    #[arg(long)]
    pub with_examples: bool,

    /// Enable sanitizers
    #[arg(long)]
    pub sanitize: bool,

    /// Enable coverage instrumentation
    #[arg(long)]
    pub coverage: bool,

    /// CMake generator name
    #[arg(long)]
    pub generator: Option<String>,

    /// CMake toolchain file
    #[arg(long)]
    pub toolchain: Option<String>,

    /// CMake executable
    #[arg(long, env = "CINDERBUILD_CMAKE", default_value = "cmake")]
    pub cmake_path: String,

    /// Use the Ninja generator (takes precedence over --generator)
    #[arg(long)]
    pub ninja: bool,

    /// Extra CMake definition, passed through as -D<KEY=VALUE>
    #[arg(short = 'D', value_name = "KEY=VALUE")]
    pub defines: Vec<String>,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, clap::Args)]
pub struct BuildArgs {
    /// Build directory
    #[arg(default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Number of parallel build jobs
    #[arg(short, long)]
    pub jobs: Option<u32>,

    /// Build only this target
    #[arg(long)]
    pub target: Option<String>,

    /// CMake executable
    #[arg(long, env = "CINDERBUILD_CMAKE", default_value = "cmake")]
    pub cmake_path: String,

    /// Do nothing and report success
    #[arg(long)]
    pub skip_build: bool,
}

/// Arguments for the `test` command.
#[derive(Debug, Clone, clap::Args)]
pub struct TestArgs {
    /// Build directory
    #[arg(default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Run the C++ test suite
    #[arg(long)]
    pub cpp: bool,

    /// Run every test suite
    #[arg(long)]
    pub all: bool,

    /// Extra arguments passed to ctest
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,
}

/// Arguments for the `clean` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CleanArgs {
    /// Build directory
    #[arg(default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,
}

/// Arguments for the `format` command.
#[derive(Debug, Clone, clap::Args)]
pub struct FormatArgs {
    /// clang-format executable
    #[arg(long, env = "CINDERBUILD_CLANG_FORMAT", default_value = "clang-format")]
    pub clang_format_path: String,

    /// Rewrite files in place instead of reporting
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckArgs {
    #[command(subcommand)]
    pub command: Option<CheckSubcommand>,
}

/// Check subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum CheckSubcommand {
    /// Verify formatting without modifying files
    Format(CheckFormatArgs),

    /// Run clang-tidy against the compile database
    Tidy(TidyArgs),
}

/// Arguments for `check format`.
#[derive(Debug, Clone, clap::Args)]
pub struct CheckFormatArgs {
    /// clang-format executable
    #[arg(long, env = "CINDERBUILD_CLANG_FORMAT", default_value = "clang-format")]
    pub clang_format_path: String,
}

/// Arguments for `check tidy`.
#[derive(Debug, Clone, clap::Args)]
pub struct TidyArgs {
    /// Build directory containing compile_commands.json
    #[arg(default_value = DEFAULT_BUILD_DIR)]
    pub build_dir: PathBuf,

    /// Number of parallel clang-tidy jobs
    #[arg(short, long)]
    pub jobs: Option<u32>,

    /// clang-tidy executable
    #[arg(long, env = "CINDERBUILD_CLANG_TIDY", default_value = "clang-tidy")]
    pub clang_tidy_path: String,

    /// run-clang-tidy wrapper executable
    #[arg(
        long,
        env = "CINDERBUILD_RUN_CLANG_TIDY",
        default_value = "run-clang-tidy"
    )]
    pub run_clang_tidy_path: String,

    /// Apply suggested fixes
    #[arg(long)]
    pub fix: bool,
}

/// Arguments for the `package` command.
#[derive(Debug, Clone, clap::Args)]
pub struct PackageArgs {
    #[command(subcommand)]
    pub command: Option<PackageSubcommand>,
}

/// Package subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum PackageSubcommand {
    /// Create a source tarball from the committed tree
    Source(SourcePackageArgs),
}

/// Arguments for `package source`.
#[derive(Debug, Clone, clap::Args)]
pub struct SourcePackageArgs {
    /// Release identifier embedded in the archive name (required)
    #[arg(long)]
    pub release_version: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
