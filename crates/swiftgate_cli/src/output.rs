//! Terminal rendering of lint results.

use swiftgate_core::{Classification, LintConfig, Violation, classify};

/// Prints an inline annotation in `file:line` form.
pub fn print_annotation(kind: Classification, message: &str, file: &str, line: u64) {
    let label = match kind {
        Classification::Warn => "warning",
        Classification::Fail => "error",
    };
    println!("{}:{}: {}: {}", file, line, label, message);
}

/// Prints the consolidated markdown report.
pub fn print_markdown(markdown: &str) {
    println!("{}", markdown);
}

/// Prints the run summary and returns whether any violation gates the
/// review (classifies as a failure under the active strictness).
pub fn summarize(violations: &[Violation], config: &LintConfig) -> bool {
    let failures = violations
        .iter()
        .filter(|v| classify(v.severity, config.strict) == Classification::Fail)
        .count();
    let warnings = violations.len() - failures;

    println!();
    println!(
        "SwiftLint reported {} violation(s): {} failing, {} warning(s)",
        violations.len(),
        failures,
        warnings
    );

    failures > 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use swiftgate_core::RawSeverity;

    fn violation(severity: RawSeverity) -> Violation {
        Violation::new("line_length", "Too long", None, severity, 1)
    }

    #[test]
    fn summary_gates_only_on_failures() {
        let config = LintConfig::new("swiftlint");
        assert!(!summarize(&[violation(RawSeverity::Warning)], &config));
        assert!(summarize(
            &[violation(RawSeverity::Warning), violation(RawSeverity::Error)],
            &config
        ));
    }

    #[test]
    fn strict_summary_gates_on_warnings_too() {
        let mut config = LintConfig::new("swiftlint");
        config.strict = true;
        assert!(summarize(&[violation(RawSeverity::Warning)], &config));
    }

    #[test]
    fn empty_run_never_gates() {
        let config = LintConfig::new("swiftlint");
        assert!(!summarize(&[], &config));
    }
}
