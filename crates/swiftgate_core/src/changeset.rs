//! Changeset model: the files changed in a review and their line diffs.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::LintError;
use crate::exec::CommandRunner;

/// Line-level diff for one file: the set of line numbers touched on the
/// new side of the diff.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    #[serde(default)]
    pub changed_lines: BTreeSet<u64>,
}

impl FileDiff {
    /// Returns whether line `n` (1-based) is flagged as changed.
    pub fn contains_line(&self, n: u64) -> bool {
        self.changed_lines.contains(&n)
    }
}

/// Immutable description of a code review's file changes.
///
/// Paths are repo-relative. The three sequences are disjoint and keep the
/// order the review surface reported them in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Changeset {
    #[serde(default)]
    pub created: Vec<String>,
    #[serde(default)]
    pub modified: Vec<String>,
    #[serde(default)]
    pub deleted: Vec<String>,
    /// Per-file line diffs, used to decide whether an inline annotation
    /// can anchor to the current diff.
    #[serde(default)]
    pub diffs: HashMap<String, FileDiff>,
}

impl Changeset {
    /// Created then modified files, in changeset order.
    pub fn touched_files(&self) -> impl Iterator<Item = &String> {
        self.created.iter().chain(self.modified.iter())
    }

    /// Returns whether `path` is among the created or modified files.
    pub fn touches(&self, path: &str) -> bool {
        self.touched_files().any(|p| p == path)
    }

    /// Parses a changeset JSON document, as handed over by a hosting
    /// review-automation process.
    pub fn from_json(json: &str) -> Result<Self, LintError> {
        serde_json::from_str(json)
            .map_err(|e| LintError::config(format!("Invalid changeset JSON: {}", e)))
    }

    /// Builds a changeset by diffing the working tree against `base`.
    ///
    /// Runs `git diff --name-status` for the file lists and
    /// `git diff --unified=0` for per-file changed lines, both through
    /// the injected runner.
    pub fn from_git(runner: &mut dyn CommandRunner, base: &str) -> Result<Self, LintError> {
        let env = HashMap::new();
        let name_status = runner
            .run(
                "git",
                &[
                    "diff".to_string(),
                    "--name-status".to_string(),
                    base.to_string(),
                ],
                &env,
                None,
            )
            .map_err(|e| LintError::git(format!("git diff --name-status failed: {}", e)))?;

        let mut changeset = Changeset::default();
        for line in name_status.lines() {
            let mut parts = line.split('\t');
            let status = parts.next().unwrap_or("");
            let path = match parts.next_back() {
                Some(p) if !p.is_empty() => p.to_string(),
                _ => continue,
            };
            match status.chars().next() {
                Some('A') => changeset.created.push(path),
                Some('D') => changeset.deleted.push(path),
                // Modifications, renames and copies all count as modified.
                Some('M') | Some('R') | Some('C') | Some('T') => changeset.modified.push(path),
                _ => debug!("Ignoring diff status line: {}", line),
            }
        }

        let unified = runner
            .run(
                "git",
                &[
                    "diff".to_string(),
                    "--unified=0".to_string(),
                    base.to_string(),
                ],
                &env,
                None,
            )
            .map_err(|e| LintError::git(format!("git diff --unified=0 failed: {}", e)))?;
        changeset.diffs = parse_unified_diff(&unified);

        Ok(changeset)
    }
}

/// Extracts per-file changed-line sets from a zero-context unified diff.
fn parse_unified_diff(diff: &str) -> HashMap<String, FileDiff> {
    let mut diffs: HashMap<String, FileDiff> = HashMap::new();
    let mut current: Option<String> = None;

    for line in diff.lines() {
        if let Some(path) = line.strip_prefix("+++ b/") {
            current = Some(path.to_string());
        } else if line.starts_with("+++ ") {
            // Deleted file (`+++ /dev/null`): nothing to anchor to.
            current = None;
        } else if let Some(header) = line.strip_prefix("@@ ") {
            let Some(path) = current.as_ref() else {
                continue;
            };
            if let Some((start, count)) = parse_hunk_header(header) {
                let entry = diffs.entry(path.clone()).or_default();
                for n in start..start + count.max(1) {
                    entry.changed_lines.insert(n);
                }
            }
        }
    }

    diffs
}

/// Parses the new-side range out of `-a,b +c,d @@`-style hunk headers.
/// Returns `(start, count)`; a missing count means a single line.
fn parse_hunk_header(header: &str) -> Option<(u64, u64)> {
    let plus = header.split_whitespace().find(|t| t.starts_with('+'))?;
    let range = &plus[1..];
    match range.split_once(',') {
        Some((start, count)) => Some((start.parse().ok()?, count.parse().ok()?)),
        None => Some((range.parse().ok()?, 1)),
    }
}
