//! # swiftgate_core
//!
//! Lint-result acquisition and reporting pipeline for swiftgate.
//!
//! This crate provides:
//! - The `lint` pipeline orchestrator and its configuration
//! - The changeset model and file-selection policies
//! - SwiftLint invocation (one process launch per run, files batched
//!   through `SCRIPT_INPUT_FILE_*` environment variables)
//! - Tolerant decoding of SwiftLint's JSON report
//! - Inline and markdown reporting with deterministic formatting
//!
//! ## Example
//!
//! ```rust,ignore
//! use swiftgate_core::{Changeset, Collaborators, LintConfig, ReportSinks, lint};
//!
//! let config = LintConfig::new("swiftlint");
//! let changeset = Changeset::from_git(&mut runner, "origin/main")?;
//! let violations = lint(&config, &changeset, &mut collaborators, &mut sinks)?;
//! ```

mod changeset;
mod error;
pub mod exec;
mod invoker;
mod lint;
mod report;
mod severity;
mod style;
mod violation;

pub use changeset::{Changeset, FileDiff};
pub use error::LintError;
pub use exec::{Collaborators, CommandRunner, Cwd, FileDeleter, FileReader, Fs, PathProvider, Shell};
pub use invoker::{swiftlint_args, swiftlint_env};
pub use lint::{DEFAULT_REPORT_FILE, LintConfig, lint};
pub use report::{ReportSinks, render_markdown};
pub use severity::{Classification, classify};
pub use style::{LintStyle, select_files};
pub use violation::{RawSeverity, Violation, decode_report};
