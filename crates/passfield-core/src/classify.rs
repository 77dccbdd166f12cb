//! Character classification shared by every password predicate.
//!
//! All tests go through the Unicode General Category of the character, so the
//! letter, uppercase and digit notions never disagree with each other on
//! non-ASCII input.

use unicode_general_category::{get_general_category, GeneralCategory};

/// Letter: any of Lu, Ll, Lt, Lm, Lo.
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Uppercase letter: Lu only.
pub fn is_uppercase_letter(c: char) -> bool {
    get_general_category(c) == GeneralCategory::UppercaseLetter
}

/// Decimal digit: Nd only. Letter-like numbers (Nl) and other numbers (No)
/// such as `½` or `²` are not digits.
pub fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

/// Special: anything that is neither a letter nor a decimal digit.
///
/// Defined by exclusion, so whitespace, punctuation, symbols, combining marks
/// and control characters all count.
pub fn is_special(c: char) -> bool {
    !is_letter(c) && !is_decimal_digit(c)
}
