//! Social security number redaction.
//!
//! Masks the first five digits of every `DDD-DD-DDDD` substring, keeping the
//! last four: `123-45-2588` becomes `xxx-xx-2588`. Redaction can run over
//! the whole raw document before parsing, or over the `socialSecurity` field
//! of each parsed record; both paths go through [`redact_text`] and produce
//! the same value for any SSN-shaped substring.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static SSN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d{3}-\d{2}-(\d{4})").expect("SSN pattern is valid"));

/// A complete social security value, plain or already redacted. ASCII
/// digits only, unlike the Unicode-aware `\d` in [`SSN_PATTERN`].
static SSN_FIELD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[0-9]{3}-[0-9]{2}|xxx-xx)-[0-9]{4}$").expect("SSN field pattern is valid")
});

const MASK_PREFIX: &str = "xxx-xx-";

/// Where the redaction step runs in the pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedactionMode {
    /// Redact the raw input text before it is parsed.
    #[default]
    Document,
    /// Parse first, then redact the `socialSecurity` field of each record.
    Field,
}

/// Redacts every SSN-shaped substring of `text`.
///
/// Replacement repeats until no SSN-shaped substring is left, so the result
/// is a fixed point: `redact_text(&redact_text(x)) == redact_text(x)` holds
/// even for chained inputs like `123-45-6789-12-3456`. Text without a match
/// is returned borrowed.
///
/// # Examples
///
/// ```
/// use salary_reporter::pipeline::redact_text;
///
/// let raw = r#"{"socialSecurity": "123-45-2588"}"#;
/// assert_eq!(redact_text(raw), r#"{"socialSecurity": "xxx-xx-2588"}"#);
/// assert_eq!(redact_text("no digits here"), "no digits here");
/// ```
pub fn redact_text(text: &str) -> Cow<'_, str> {
    if !SSN_PATTERN.is_match(text) {
        return Cow::Borrowed(text);
    }

    let mut redacted = mask_once(text);
    // Each pass strictly reduces the digit count, so this terminates.
    while SSN_PATTERN.is_match(&redacted) {
        redacted = mask_once(&redacted);
    }
    Cow::Owned(redacted)
}

/// Redacts a single social security value.
///
/// Field-level entry point used by [`crate::models::EmployeeRecord::redacted`]
/// and the table builder.
pub fn redact_ssn(value: &str) -> String {
    redact_text(value).into_owned()
}

/// Returns true if `value` is a whole social security number, either plain
/// (`DDD-DD-DDDD`) or redacted (`xxx-xx-DDDD`).
pub fn is_valid_ssn(value: &str) -> bool {
    SSN_FIELD.is_match(value)
}

fn mask_once(text: &str) -> String {
    SSN_PATTERN
        .replace_all(text, |caps: &regex::Captures<'_>| {
            format!("{MASK_PREFIX}{}", &caps[1])
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacts_single_ssn() {
        assert_eq!(redact_text("123-45-2588"), "xxx-xx-2588");
    }

    #[test]
    fn test_redacts_every_ssn_in_document() {
        let raw = r#"[{"socialSecurity":"123-45-2588"},{"socialSecurity":"987-65-6322"}]"#;
        assert_eq!(
            redact_text(raw),
            r#"[{"socialSecurity":"xxx-xx-2588"},{"socialSecurity":"xxx-xx-6322"}]"#
        );
    }

    #[test]
    fn test_text_without_ssn_is_borrowed() {
        let text = "Doe, John, 97234.76";
        assert!(matches!(redact_text(text), Cow::Borrowed(_)));
    }

    #[test]
    fn test_non_ssn_digit_sequences_are_untouched() {
        assert_eq!(redact_text("555-1234"), "555-1234");
        assert_eq!(redact_text("12-345-6789"), "12-345-6789");
        assert_eq!(redact_text("2024-01-15"), "2024-01-15");
    }

    #[test]
    fn test_already_redacted_is_unchanged() {
        assert_eq!(redact_text("xxx-xx-2588"), "xxx-xx-2588");
    }

    #[test]
    fn test_chained_ssn_reaches_fixed_point() {
        let once = redact_text("123-45-6789-12-3456").into_owned();
        assert!(!SSN_PATTERN.is_match(&once));
        assert_eq!(redact_text(&once), once);
        assert!(once.ends_with("3456"));
    }

    #[test]
    fn test_ssn_embedded_in_longer_digits() {
        // The match starts at the last three digits before the first dash.
        assert_eq!(redact_text("9123-45-6789"), "9xxx-xx-6789");
    }

    #[test]
    fn test_redact_ssn_matches_document_redaction() {
        let ssn = "321-54-9876";
        let doc = format!(r#"{{"socialSecurity":"{ssn}"}}"#);
        let redacted_doc = redact_text(&doc).into_owned();
        assert!(redacted_doc.contains(&redact_ssn(ssn)));
    }

    #[test]
    fn test_is_valid_ssn_accepts_plain_and_redacted() {
        assert!(is_valid_ssn("123-45-2588"));
        assert!(is_valid_ssn("xxx-xx-2588"));
    }

    #[test]
    fn test_is_valid_ssn_rejects_other_shapes() {
        assert!(!is_valid_ssn("123452588"));
        assert!(!is_valid_ssn("123-45-258"));
        assert!(!is_valid_ssn(" 123-45-2588"));
        assert!(!is_valid_ssn("xxx-45-2588"));
        assert!(!is_valid_ssn(""));
    }

    #[test]
    fn test_is_valid_ssn_rejects_non_ascii_digits() {
        // Arabic-Indic digits.
        assert!(!is_valid_ssn("\u{661}\u{662}\u{663}-\u{664}\u{665}-\u{666}\u{667}\u{668}\u{669}"));
        assert!(!is_valid_ssn("xxx-xx-\u{666}\u{667}\u{668}\u{669}"));
    }

    #[test]
    fn test_redaction_mode_defaults_to_document() {
        assert_eq!(RedactionMode::default(), RedactionMode::Document);
    }

    #[test]
    fn test_redaction_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&RedactionMode::Field).unwrap(),
            "\"field\""
        );
        assert_eq!(
            serde_json::from_str::<RedactionMode>("\"document\"").unwrap(),
            RedactionMode::Document
        );
    }
}
