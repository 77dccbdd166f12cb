//! Password predicates.
//!
//! `validate` maps a password to four independent facts. It is total and pure:
//! the same input always yields the same result, and a missing character class
//! is reported as `false`, never as an error.

use serde::Serialize;

use crate::classify::{is_decimal_digit, is_special, is_uppercase_letter};
use crate::rule::Rule;

/// Minimum number of characters (Unicode scalar values) for the length rule.
pub const MIN_LENGTH: usize = 8;

/// Outcome of the four password predicates.
///
/// Fields are computed independently from the same input. A fresh value is
/// produced for every change to the password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ValidationResult {
    pub length_valid: bool,
    pub has_upper_case: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl ValidationResult {
    /// True when every rule passes.
    pub fn all_valid(&self) -> bool {
        self.length_valid && self.has_upper_case && self.has_number && self.has_special_char
    }

    /// Whether a single rule passes.
    pub fn passes(&self, rule: Rule) -> bool {
        match rule {
            Rule::Length => self.length_valid,
            Rule::UpperCase => self.has_upper_case,
            Rule::Number => self.has_number,
            Rule::SpecialChar => self.has_special_char,
        }
    }

    /// Failing rules in display order.
    pub fn failed_rules(&self) -> Vec<Rule> {
        Rule::ALL
            .into_iter()
            .filter(|rule| !self.passes(*rule))
            .collect()
    }
}

/// Evaluate all four predicates against `password`.
pub fn validate(password: &str) -> ValidationResult {
    ValidationResult {
        length_valid: password.chars().count() >= MIN_LENGTH,
        has_upper_case: password.chars().any(is_uppercase_letter),
        has_number: password.chars().any(is_decimal_digit),
        has_special_char: password.chars().any(is_special),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facts(r: ValidationResult) -> [bool; 4] {
        [
            r.length_valid,
            r.has_upper_case,
            r.has_number,
            r.has_special_char,
        ]
    }

    #[test]
    fn test_empty_is_all_false() {
        assert_eq!(facts(validate("")), [false, false, false, false]);
        assert!(!validate("").all_valid());
    }

    #[test]
    fn test_length_boundary() {
        assert!(!validate("abcdefg").length_valid);
        assert!(validate("abcdefgh").length_valid);
        assert!(validate("abcdefghijklmnop").length_valid);
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let seven = "\u{e9}".repeat(7);
        assert_eq!(seven.len(), 14);
        assert!(!validate(&seven).length_valid);
        assert!(validate(&"\u{e9}".repeat(8)).length_valid);
    }

    #[test]
    fn test_serializes_rule_facts() {
        let json = serde_json::to_value(validate("abc")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "length_valid": false,
                "has_upper_case": false,
                "has_number": false,
                "has_special_char": false,
            })
        );
    }

    #[test]
    fn test_astral_char_counts_once() {
        let four = "\u{1F600}".repeat(4);
        // Eight UTF-16 units, sixteen bytes, four chars
        assert_eq!(four.encode_utf16().count(), 8);
        assert!(!validate(&four).length_valid);
        assert!(validate(&"\u{1F600}".repeat(8)).length_valid);
    }

    #[test]
    fn test_reference_scenarios() {
        assert_eq!(facts(validate("password")), [true, false, false, false]);
        assert_eq!(facts(validate("Password1")), [true, true, true, false]);
        assert_eq!(facts(validate("Password1!")), [true, true, true, true]);
        assert_eq!(facts(validate("P1!")), [false, true, true, true]);
    }

    #[test]
    fn test_letters_and_digits_only_have_no_special() {
        assert!(!validate("Abcdef123456").has_special_char);
        let greek = "\u{03A9}\u{03BC}\u{03AD}\u{03B3}\u{03B1}2024";
        assert!(!validate(greek).has_special_char);
    }

    #[test]
    fn test_whitespace_counts_as_special() {
        let result = validate("Pass word1");
        assert!(result.has_special_char);
        assert!(result.all_valid());
    }

    #[test]
    fn test_non_ascii_classes() {
        let result = validate("\u{C4}\u{D6}\u{DC}\u{0663}");
        assert!(result.has_upper_case);
        assert!(result.has_number);
        assert!(!result.has_special_char);
        assert!(!result.length_valid);
    }

    #[test]
    fn test_idempotent() {
        for input in ["", "a", "Password1!", "  ", "漢字漢字漢字漢字"] {
            assert_eq!(validate(input), validate(input));
        }
    }

    #[test]
    fn test_failed_rules_order() {
        assert_eq!(
            validate("").failed_rules(),
            vec![Rule::Length, Rule::UpperCase, Rule::Number, Rule::SpecialChar]
        );
        assert_eq!(
            validate("password").failed_rules(),
            vec![Rule::UpperCase, Rule::Number, Rule::SpecialChar]
        );
        assert!(validate("Password1!").failed_rules().is_empty());
    }

    #[test]
    fn test_passes_matches_fields() {
        let result = validate("P1!");
        assert!(!result.passes(Rule::Length));
        assert!(result.passes(Rule::UpperCase));
        assert!(result.passes(Rule::Number));
        assert!(result.passes(Rule::SpecialChar));
    }
}
