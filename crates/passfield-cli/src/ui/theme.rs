//! Theme definitions for colors, symbols, and badges.

use owo_colors::{OwoColorize, Style};
use passfield_core::FieldTone;

/// Symbol pair for ASCII and Unicode variants.
#[derive(Debug, Clone)]
pub struct SymbolPair {
    pub ascii: &'static str,
    pub unicode: &'static str,
}

impl SymbolPair {
    pub const fn new(ascii: &'static str, unicode: &'static str) -> Self {
        Self { ascii, unicode }
    }

    /// Get the appropriate symbol based on unicode flag.
    pub fn get(&self, unicode: bool) -> &'static str {
        if unicode {
            self.unicode
        } else {
            self.ascii
        }
    }
}

/// Symbols used to draw the field.
pub mod symbols {
    use super::SymbolPair;

    /// Rule hint bullet and masked character
    pub const BULLET: SymbolPair = SymbolPair::new("*", "\u{2022}");
    /// Leading marker when the masked value is clipped
    pub const CLIPPED: SymbolPair = SymbolPair::new("<", "\u{2026}");
    pub const TOP_LEFT: SymbolPair = SymbolPair::new("+", "\u{256D}");
    pub const TOP_RIGHT: SymbolPair = SymbolPair::new("+", "\u{256E}");
    pub const BOTTOM_LEFT: SymbolPair = SymbolPair::new("+", "\u{2570}");
    pub const BOTTOM_RIGHT: SymbolPair = SymbolPair::new("+", "\u{256F}");
    pub const HORIZONTAL: SymbolPair = SymbolPair::new("-", "\u{2500}");
    pub const VERTICAL: SymbolPair = SymbolPair::new("|", "\u{2502}");
}

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Badge for a field tone.
    pub fn for_tone(tone: FieldTone) -> Self {
        match tone {
            FieldTone::Normal => Self::Ok,
            FieldTone::Error => Self::Err,
        }
    }

    /// Get badge text (e.g., "[OK]")
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Err => "[ERR]",
        }
    }

    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]", // [✓]
            (Self::Err, true) => "[\u{2717}]", // [✗]
            _ => self.text(),
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Err => styles::danger(),
        }
    }
}

/// Style tokens.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    /// Labels, metadata, placeholder text
    pub fn dim() -> Style {
        Style::new().dimmed()
    }

    pub fn success() -> Style {
        Style::new().green()
    }

    /// Error label and outline
    pub fn danger() -> Style {
        Style::new().red().bold()
    }

    /// Rule hint lines
    pub fn warning() -> Style {
        Style::new().yellow()
    }
}

/// Label and outline style for a field tone.
pub fn tone_style(tone: FieldTone) -> Style {
    match tone {
        FieldTone::Normal => styles::bold(),
        FieldTone::Error => styles::danger(),
    }
}

/// Apply `style` to `text` when color is enabled.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
