//! The end-to-end lint pipeline.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::LintError;
use crate::changeset::Changeset;
use crate::exec::Collaborators;
use crate::invoker;
use crate::report::{ReportSinks, report};
use crate::style::{LintStyle, select_files};
use crate::violation::{Violation, decode_report};

/// Default report filename, shared between runs so stale cleanup works.
pub const DEFAULT_REPORT_FILE: &str = "swiftlint_report.json";

/// Configuration for one lint run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintConfig {
    /// File-selection policy.
    #[serde(default)]
    pub lint_style: LintStyle,

    /// SwiftLint configuration file, passed through verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,

    /// Escalate every violation to a failure.
    #[serde(default)]
    pub strict: bool,

    /// Pass `--quiet` to SwiftLint.
    #[serde(default)]
    pub quiet: bool,

    /// Report violations as inline annotations where they anchor.
    #[serde(default)]
    pub inline: bool,

    /// Path to the SwiftLint executable.
    pub swiftlint_path: String,

    /// Where SwiftLint writes its JSON report.
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

fn default_output_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

impl LintConfig {
    /// Creates a configuration with defaults for the given executable.
    pub fn new(swiftlint_path: impl Into<String>) -> Self {
        Self {
            lint_style: LintStyle::default(),
            config_file: None,
            strict: false,
            quiet: false,
            inline: false,
            swiftlint_path: swiftlint_path.into(),
            output_file: default_output_file(),
        }
    }

    /// Loads configuration from a JSONC file (comments allowed).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| LintError::config(format!("Failed to read config: {}", e)))?;
        Self::from_jsonc(&content)
    }

    /// Parses configuration from a JSONC string.
    pub fn from_jsonc(content: &str) -> Result<Self, LintError> {
        let value = jsonc_parser::parse_to_serde_value(content, &Default::default())
            .map_err(|e| LintError::config(format!("Invalid config: {}", e)))?
            .ok_or_else(|| LintError::config("Empty config file"))?;
        serde_json::from_value(value)
            .map_err(|e| LintError::config(format!("Invalid config: {}", e)))
    }
}

/// Runs the whole pipeline: select, invoke, decode, classify, report.
///
/// Reporting is a side effect; the returned list is always the complete
/// decoded set, whatever the reporting mode. A missing report file means
/// linting produced nothing and yields an empty list; only malformed
/// report content is fatal.
pub fn lint(
    config: &LintConfig,
    changeset: &Changeset,
    collaborators: &mut Collaborators<'_>,
    sinks: &mut ReportSinks<'_>,
) -> Result<Vec<Violation>, LintError> {
    // A stale report from a previous run must never be mistaken for this
    // run's output when SwiftLint fails to write a new one.
    if let Err(e) = collaborators.deleter.delete(&config.output_file) {
        debug!("Stale report cleanup skipped: {}", e);
    }

    let files = select_files(changeset, &config.lint_style);
    if config.lint_style.enumerates_files() && files.is_empty() {
        info!("No files to lint, skipping SwiftLint invocation");
        return Ok(Vec::new());
    }

    if let Err(e) = invoker::invoke(
        collaborators.runner,
        &config.swiftlint_path,
        &files,
        &config.lint_style,
        config.config_file.as_deref(),
        config.quiet,
        &config.output_file,
    ) {
        warn!("SwiftLint invocation failed: {}", e);
    }

    let report_json = match collaborators.reader.read(&config.output_file) {
        Ok(content) => content,
        Err(e) => {
            warn!("No SwiftLint report at {}: {}", config.output_file, e);
            return Ok(Vec::new());
        }
    };

    let violations = decode_report(&report_json)?;
    debug!("Decoded {} violation(s)", violations.len());

    report(
        &violations,
        changeset,
        &collaborators.paths.current_path(),
        config.strict,
        config.inline,
        sinks,
    );

    Ok(violations)
}
