//! The fixed password rule catalogue.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::PassfieldError;

/// A single password rule.
///
/// Variant order is the display order of hint lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// At least `MIN_LENGTH` characters
    Length,
    /// At least one uppercase letter
    #[serde(rename = "uppercase")]
    UpperCase,
    /// At least one decimal digit
    Number,
    /// At least one character that is neither letter nor digit
    #[serde(rename = "special")]
    SpecialChar,
}

impl Rule {
    /// Every rule, in hint display order.
    pub const ALL: [Rule; 4] = [
        Rule::Length,
        Rule::UpperCase,
        Rule::Number,
        Rule::SpecialChar,
    ];

    /// Hint line shown while this rule fails.
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Length => "At least 8 characters",
            Self::UpperCase => "One uppercase letter",
            Self::Number => "One number",
            Self::SpecialChar => "One special character",
        }
    }

    /// Stable machine identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Length => "length",
            Self::UpperCase => "uppercase",
            Self::Number => "number",
            Self::SpecialChar => "special",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Rule {
    type Err = PassfieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Rule::ALL
            .into_iter()
            .find(|rule| rule.id() == normalized)
            .ok_or_else(|| PassfieldError::UnknownRule(s.to_string()))
    }
}
