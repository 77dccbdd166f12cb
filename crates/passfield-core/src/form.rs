//! Form-state derivation.
//!
//! `derive_form_state` is the whole state machine of the field: it takes the
//! current text and returns everything the presentation layer needs to render
//! it. Nothing here is mutated after construction; a new `FormState` is derived
//! for every change. The text itself is held in a buffer that is wiped on drop.

use std::fmt;

use serde::Serialize;
use zeroize::Zeroizing;

use crate::rule::Rule;
use crate::validation::{validate, ValidationResult};

/// Status text shown while the field is not in error.
pub const STATUS_ENABLED: &str = "Enabled state";
/// Status text shown while the field is in error.
pub const STATUS_ERROR: &str = "Error state";

/// UI-relevant state of the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldPhase {
    /// Empty input: no error styling, no hints
    Clean,
    /// Non-empty and every rule passes
    Valid,
    /// Non-empty and at least one rule fails
    Invalid,
}

impl FieldPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Valid => "valid",
            Self::Invalid => "invalid",
        }
    }
}

impl fmt::Display for FieldPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-valued selector for label and outline colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTone {
    Normal,
    Error,
}

impl FieldTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Error => "error",
        }
    }
}

/// Derived state of the password field for one value of its text.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct FormState {
    #[serde(skip)]
    password: Zeroizing<String>,
    pub has_started_typing: bool,
    pub validation: ValidationResult,
    pub is_error: bool,
}

/// Derive the full form state for `password`.
pub fn derive_form_state(password: &str) -> FormState {
    let has_started_typing = !password.is_empty();
    let validation = validate(password);
    FormState {
        password: Zeroizing::new(password.to_string()),
        has_started_typing,
        validation,
        is_error: has_started_typing && !validation.all_valid(),
    }
}

impl FormState {
    /// The text this state was derived from.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    pub fn all_valid(&self) -> bool {
        self.validation.all_valid()
    }

    pub fn phase(&self) -> FieldPhase {
        if !self.has_started_typing {
            FieldPhase::Clean
        } else if self.is_error {
            FieldPhase::Invalid
        } else {
            FieldPhase::Valid
        }
    }

    pub fn tone(&self) -> FieldTone {
        if self.is_error {
            FieldTone::Error
        } else {
            FieldTone::Normal
        }
    }

    pub fn status_text(&self) -> &'static str {
        if self.is_error {
            STATUS_ERROR
        } else {
            STATUS_ENABLED
        }
    }

    /// Rules to render as hint lines. Empty unless the field is in error.
    pub fn visible_rules(&self) -> Vec<Rule> {
        if self.is_error {
            self.validation.failed_rules()
        } else {
            Vec::new()
        }
    }

    /// Hint lines to render, in fixed rule order.
    pub fn hints(&self) -> Vec<&'static str> {
        self.visible_rules().iter().map(Rule::hint).collect()
    }
}

impl Default for FormState {
    fn default() -> Self {
        derive_form_state("")
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("password", &"<redacted>")
            .field("has_started_typing", &self.has_started_typing)
            .field("validation", &self.validation)
            .field("is_error", &self.is_error)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_clean() {
        let state = derive_form_state("");
        assert!(!state.has_started_typing);
        assert!(!state.is_error);
        assert_eq!(state.phase(), FieldPhase::Clean);
        assert_eq!(state.tone(), FieldTone::Normal);
        assert_eq!(state.status_text(), STATUS_ENABLED);
        assert!(state.hints().is_empty());
    }

    #[test]
    fn test_clean_ignores_failed_rules() {
        let state = derive_form_state("");
        assert_eq!(state.validation.failed_rules().len(), 4);
        assert!(state.visible_rules().is_empty());
    }

    #[test]
    fn test_lowercase_word() {
        let state = derive_form_state("password");
        assert_eq!(state.phase(), FieldPhase::Invalid);
        assert_eq!(state.tone(), FieldTone::Error);
        assert_eq!(state.status_text(), STATUS_ERROR);
        assert_eq!(
            state.hints(),
            vec!["One uppercase letter", "One number", "One special character"]
        );
    }

    #[test]
    fn test_missing_special_only() {
        let state = derive_form_state("Password1");
        assert_eq!(state.phase(), FieldPhase::Invalid);
        assert_eq!(state.hints(), vec!["One special character"]);
    }

    #[test]
    fn test_valid() {
        let state = derive_form_state("Password1!");
        assert_eq!(state.phase(), FieldPhase::Valid);
        assert_eq!(state.tone(), FieldTone::Normal);
        assert_eq!(state.status_text(), "Enabled state");
        assert!(state.hints().is_empty());
        assert!(state.all_valid());
    }

    #[test]
    fn test_too_short_only() {
        let state = derive_form_state("P1!");
        assert_eq!(state.visible_rules(), vec![Rule::Length]);
        assert_eq!(state.hints(), vec!["At least 8 characters"]);
    }

    #[test]
    fn test_debug_redacts_password() {
        let state = derive_form_state("Hunter2!secret");
        let debug = format!("{:?}", state);
        assert!(!debug.contains("Hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_serialize_skips_password() {
        let state = derive_form_state("Hunter2!secret");
        let json = serde_json::to_value(&state).unwrap();
        assert!(json.get("password").is_none());
        assert_eq!(json["is_error"], false);
        assert_eq!(json["validation"]["has_special_char"], true);
    }

    #[test]
    fn test_default_is_clean() {
        assert_eq!(FormState::default().phase(), FieldPhase::Clean);
    }
}
