//! Violation reporting: inline annotations and the markdown summary.

use crate::changeset::Changeset;
use crate::severity::{Classification, classify};
use crate::violation::Violation;

/// Introductory line preceding the markdown table.
const MARKDOWN_INTRO: &str = "SwiftLint found issues";

/// Output callbacks supplied by the review surface.
///
/// `warn` and `fail` receive `(message, file, line)` for inline
/// annotations; `markdown` receives the consolidated table.
pub struct ReportSinks<'a> {
    pub warn: &'a mut dyn FnMut(&str, &str, u64),
    pub fail: &'a mut dyn FnMut(&str, &str, u64),
    pub markdown: &'a mut dyn FnMut(&str),
}

/// Renders the consolidated markdown table, rows in decode order.
/// Returns `None` for an empty violation list: no table is ever emitted
/// without rows.
pub fn render_markdown(violations: &[Violation], strict: bool) -> Option<String> {
    if violations.is_empty() {
        return None;
    }

    let mut out = String::new();
    out.push_str(MARKDOWN_INTRO);
    out.push_str("\n\n");
    out.push_str("Severity | File | Reason |\n");
    out.push_str("--- | --- | --- |\n");
    for violation in violations {
        let label = classify(violation.severity, strict).label();
        let file_cell = if violation.file_name().is_empty() {
            String::new()
        } else {
            format!("{}:{}", violation.file_name(), violation.line())
        };
        out.push_str(&format!(
            "{} | {} | {} |\n",
            label,
            file_cell,
            violation.message()
        ));
    }
    Some(out)
}

/// Reports every violation through the configured sinks.
///
/// In inline mode a violation is anchored to its file and line when the
/// relativized path has a diff entry covering that line; anything that
/// cannot anchor degrades to the markdown table instead of being
/// dropped. In markdown mode the whole list goes to the table.
pub fn report(
    violations: &[Violation],
    changeset: &Changeset,
    current_path: &str,
    strict: bool,
    inline: bool,
    sinks: &mut ReportSinks<'_>,
) {
    if !inline {
        if let Some(markdown) = render_markdown(violations, strict) {
            (sinks.markdown)(&markdown);
        }
        return;
    }

    let mut fallback: Vec<Violation> = Vec::new();
    for violation in violations {
        let path = violation.file_as_path(current_path);
        let anchorable = changeset
            .diffs
            .get(&path)
            .is_some_and(|diff| diff.contains_line(violation.line()));
        if !anchorable {
            fallback.push(violation.clone());
            continue;
        }

        let message = violation.message();
        match classify(violation.severity, strict) {
            Classification::Warn => (sinks.warn)(&message, &path, violation.line()),
            Classification::Fail => (sinks.fail)(&message, &path, violation.line()),
        }
    }

    if let Some(markdown) = render_markdown(&fallback, strict) {
        (sinks.markdown)(&markdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::changeset::FileDiff;
    use crate::violation::RawSeverity;
    use pretty_assertions::assert_eq;

    fn warning_at(file: &str, line: u64) -> Violation {
        Violation::new(
            "opening_brace",
            "Opening braces should be preceded by a single space",
            Some(file.to_string()),
            RawSeverity::Warning,
            line,
        )
    }

    fn error_at(file: &str, line: u64) -> Violation {
        Violation::new(
            "line_length",
            "Line should be 120 characters or less",
            Some(file.to_string()),
            RawSeverity::Error,
            line,
        )
    }

    #[test]
    fn markdown_is_none_for_no_violations() {
        assert_eq!(render_markdown(&[], false), None);
        assert_eq!(render_markdown(&[], true), None);
    }

    #[test]
    fn markdown_rows_follow_decode_order() {
        let violations = vec![error_at("/ci/B.swift", 10), warning_at("/ci/A.swift", 8)];
        let markdown = render_markdown(&violations, false).unwrap();

        assert!(markdown.starts_with("SwiftLint found issues\n"));
        let b = markdown.find("B.swift:10").unwrap();
        let a = markdown.find("A.swift:8").unwrap();
        assert!(b < a);
    }

    #[test]
    fn markdown_renders_classified_labels() {
        let violations = vec![warning_at("/ci/A.swift", 8)];
        let relaxed = render_markdown(&violations, false).unwrap();
        let strict = render_markdown(&violations, true).unwrap();

        assert!(
            relaxed.contains("Warning | A.swift:8 | Opening braces should be preceded by a single space (`opening_brace`) |")
        );
        assert!(
            strict.contains("Error | A.swift:8 | Opening braces should be preceded by a single space (`opening_brace`) |")
        );
    }

    #[test]
    fn markdown_with_empty_file_has_empty_file_cell() {
        let violations = vec![Violation::new(
            "custom_rule",
            "Something went wrong",
            None,
            RawSeverity::Error,
            0,
        )];
        let markdown = render_markdown(&violations, false).unwrap();
        let row = markdown.lines().last().unwrap();
        assert_eq!(row, "Error |  | Something went wrong (`custom_rule`) |");
        assert!(!markdown.contains(":0"));
    }

    #[test]
    fn inline_mode_anchors_to_changed_lines() {
        let mut changeset = Changeset {
            modified: vec!["A.swift".to_string()],
            ..Default::default()
        };
        changeset.diffs.insert(
            "A.swift".to_string(),
            FileDiff {
                changed_lines: [8].into(),
            },
        );

        let violations = vec![warning_at("/ci/A.swift", 8)];
        let mut warned: Vec<(String, String, u64)> = Vec::new();
        let mut failed = 0usize;
        let mut markdowns: Vec<String> = Vec::new();
        let mut sinks = ReportSinks {
            warn: &mut |m, f, l| warned.push((m.to_string(), f.to_string(), l)),
            fail: &mut |_, _, _| failed += 1,
            markdown: &mut |m| markdowns.push(m.to_string()),
        };

        report(&violations, &changeset, "/ci", false, true, &mut sinks);

        assert_eq!(
            warned,
            [(
                "Opening braces should be preceded by a single space (`opening_brace`)"
                    .to_string(),
                "A.swift".to_string(),
                8
            )]
        );
        assert_eq!(failed, 0);
        assert!(markdowns.is_empty());
    }

    #[test]
    fn inline_mode_falls_back_to_markdown_when_line_not_in_diff() {
        let mut changeset = Changeset {
            modified: vec!["A.swift".to_string()],
            ..Default::default()
        };
        changeset.diffs.insert(
            "A.swift".to_string(),
            FileDiff {
                changed_lines: [3].into(),
            },
        );

        let violations = vec![error_at("/ci/A.swift", 10)];
        let inline_calls = std::cell::Cell::new(0usize);
        let mut markdowns: Vec<String> = Vec::new();
        let mut sinks = ReportSinks {
            warn: &mut |_, _, _| inline_calls.set(inline_calls.get() + 1),
            fail: &mut |_, _, _| inline_calls.set(inline_calls.get() + 1),
            markdown: &mut |m| markdowns.push(m.to_string()),
        };

        report(&violations, &changeset, "/ci", false, true, &mut sinks);

        assert_eq!(inline_calls.get(), 0);
        assert_eq!(markdowns.len(), 1);
        assert!(markdowns[0].contains("A.swift:10"));
    }

    #[test]
    fn inline_mode_falls_back_for_files_outside_the_diff() {
        let violations = vec![error_at("/ci/Elsewhere.swift", 1)];
        let mut markdowns: Vec<String> = Vec::new();
        let mut sinks = ReportSinks {
            warn: &mut |_, _, _| panic!("no inline warn expected"),
            fail: &mut |_, _, _| panic!("no inline fail expected"),
            markdown: &mut |m| markdowns.push(m.to_string()),
        };

        report(
            &violations,
            &Changeset::default(),
            "/ci",
            false,
            true,
            &mut sinks,
        );

        // Never silently dropped.
        assert_eq!(markdowns.len(), 1);
    }
}
