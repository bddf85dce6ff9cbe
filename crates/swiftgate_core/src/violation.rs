//! SwiftLint violation model and report decoding.

use serde::{Deserialize, Serialize};

use crate::LintError;

/// Severity exactly as SwiftLint emits it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RawSeverity {
    Warning,
    Error,
}

/// One parsed SwiftLint finding.
///
/// Optional fields mirror the tool's report: `file` may be absent or
/// null, `line` may be absent or null. The `character` field of the
/// report is irrelevant here and ignored. Violations are immutable once
/// decoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    pub rule_id: String,
    pub reason: String,
    #[serde(default)]
    pub file: Option<String>,
    pub severity: RawSeverity,
    #[serde(default)]
    line: Option<u64>,
}

impl Violation {
    pub fn new(
        rule_id: impl Into<String>,
        reason: impl Into<String>,
        file: Option<String>,
        severity: RawSeverity,
        line: u64,
    ) -> Self {
        Self {
            rule_id: rule_id.into(),
            reason: reason.into(),
            file,
            severity,
            line: Some(line),
        }
    }

    /// Line number of the finding; 0 when the report had none.
    pub fn line(&self) -> u64 {
        self.line.unwrap_or(0)
    }

    /// The violation's path relativized against `current_path`, for
    /// comparison with changeset-relative paths. Empty when the report
    /// carried no file.
    pub fn file_as_path(&self, current_path: &str) -> String {
        let file = self.file.as_deref().unwrap_or("");
        match file.strip_prefix(current_path) {
            Some(rest) if !current_path.is_empty() => {
                rest.trim_start_matches('/').to_string()
            }
            _ => file.to_string(),
        }
    }

    /// Base name of the violation's file; empty when absent.
    pub fn file_name(&self) -> &str {
        self.file
            .as_deref()
            .unwrap_or("")
            .rsplit('/')
            .next()
            .unwrap_or("")
    }

    /// The rendered message: reason followed by the rule id in backticks.
    pub fn message(&self) -> String {
        format!("{} (`{}`)", self.reason, self.rule_id)
    }
}

/// Decodes a SwiftLint JSON report into violations, preserving array
/// order. Malformed input is fatal; `"[]"` is an empty list.
pub fn decode_report(json: &str) -> Result<Vec<Violation>, LintError> {
    serde_json::from_str(json).map_err(|e| LintError::decode(e.to_string()))
}
