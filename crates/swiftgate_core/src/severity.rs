//! Severity classification.
//!
//! Classification is derived at the point of use rather than stored on
//! the violation, so the inline and markdown paths can never disagree
//! about the same finding.

use crate::violation::RawSeverity;

/// Two-level gating classification for a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Warn,
    Fail,
}

impl Classification {
    /// The label rendered in reports.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::Warn => "Warning",
            Classification::Fail => "Error",
        }
    }
}

/// Maps a raw severity to its classification. Strict mode escalates
/// everything to [`Classification::Fail`].
pub fn classify(severity: RawSeverity, strict: bool) -> Classification {
    if strict {
        return Classification::Fail;
    }
    match severity {
        RawSeverity::Warning => Classification::Warn,
        RawSeverity::Error => Classification::Fail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(RawSeverity::Warning, false, Classification::Warn)]
    #[case(RawSeverity::Error, false, Classification::Fail)]
    #[case(RawSeverity::Warning, true, Classification::Fail)]
    #[case(RawSeverity::Error, true, Classification::Fail)]
    fn classification_table(
        #[case] severity: RawSeverity,
        #[case] strict: bool,
        #[case] expected: Classification,
    ) {
        assert_eq!(classify(severity, strict), expected);
    }

    #[test]
    fn labels_render_the_classified_view() {
        assert_eq!(Classification::Warn.label(), "Warning");
        assert_eq!(Classification::Fail.label(), "Error");
    }
}
