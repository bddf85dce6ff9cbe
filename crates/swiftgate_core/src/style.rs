//! File-selection policy for a lint run.

use serde::{Deserialize, Serialize};

use crate::changeset::Changeset;

/// How the set of files to lint is chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum LintStyle {
    /// Lint the union of created and modified files, optionally scoped
    /// to a directory. This is the default.
    ModifiedAndCreatedFiles {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        directory: Option<String>,
    },
    /// Ignore the changeset and let SwiftLint scan a directory (or its
    /// own configured scope) directly.
    AllFiles {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        directory: Option<String>,
    },
    /// An explicit file list, still intersected with the changeset.
    Files { paths: Vec<String> },
}

impl Default for LintStyle {
    fn default() -> Self {
        LintStyle::ModifiedAndCreatedFiles { directory: None }
    }
}

impl LintStyle {
    /// Whether this style enumerates files itself (as opposed to letting
    /// SwiftLint discover them).
    pub fn enumerates_files(&self) -> bool {
        !matches!(self, LintStyle::AllFiles { .. })
    }
}

/// Computes the ordered list of files to hand to SwiftLint.
///
/// Only `.swift` paths survive, in the changeset's relative order. For
/// [`LintStyle::AllFiles`] the selection is empty by design: the invoker
/// is told to scan a directory instead of enumerating files.
pub fn select_files(changeset: &Changeset, style: &LintStyle) -> Vec<String> {
    match style {
        LintStyle::ModifiedAndCreatedFiles { directory } => changeset
            .touched_files()
            .filter(|p| is_swift(p))
            .filter(|p| in_directory(p, directory.as_deref()))
            .cloned()
            .collect(),
        LintStyle::Files { paths } => paths
            .iter()
            .filter(|p| is_swift(p))
            // Entries outside the changeset are dropped silently.
            .filter(|p| changeset.touches(p))
            .cloned()
            .collect(),
        LintStyle::AllFiles { .. } => Vec::new(),
    }
}

fn is_swift(path: &str) -> bool {
    path.ends_with(".swift")
}

/// Trailing-slash-insensitive directory prefix check.
fn in_directory(path: &str, directory: Option<&str>) -> bool {
    match directory {
        None => true,
        Some(dir) => {
            let dir = dir.trim_end_matches('/');
            path.strip_prefix(dir)
                .is_some_and(|rest| rest.starts_with('/'))
        }
    }
}
