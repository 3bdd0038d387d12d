//! Cinderbuild - one CLI over a CMake project's build lifecycle.
//!
//! Cinderbuild configures an out-of-source build, builds, runs tests,
//! formats and lint-checks sources, installs local git hooks and produces
//! source archives. It owns no build logic itself: every step is a composed
//! invocation of an external tool.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface, argument parsing and dispatch
//! - [`compose`] - Translation of parsed options into tool arguments
//! - [`context`] - Per-invocation handler context
//! - [`error`] - Error types and result aliases
//! - [`hooks`] - Idempotent local hook installation
//! - [`package`] - Source archive naming and creation
//! - [`process`] - Tool resolution and subprocess execution
//! - [`project`] - Project root, name and source discovery
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cinderbuild::cli::Cli;
//! use cinderbuild::compose::configure_args;
//! use cinderbuild::cli::Commands;
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["cinderbuild", "configure", "--ninja", "-D", "FOO=1"]);
//! let Some(Commands::Configure(args)) = cli.command else { unreachable!() };
//! assert_eq!(
//!     configure_args(&args),
//!     ["-DCMAKE_BUILD_TYPE=RelWithDebInfo", "-GNinja", "-DFOO=1"]
//! );
//! ```

pub mod cli;
pub mod compose;
pub mod context;
pub mod error;
pub mod hooks;
pub mod package;
pub mod process;
pub mod project;
pub mod ui;

pub use error::{CinderError, Result};
