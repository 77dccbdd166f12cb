//! The field session: owner of the single mutable password buffer.
//!
//! The presentation layer feeds edits in and renders whatever state comes
//! back. Each edit is handled to completion before the next one: the text is
//! updated, then validation and form state are derived again from scratch.

use zeroize::Zeroizing;

use crate::form::{derive_form_state, FieldPhase, FormState};

/// A change to the field text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Replace the whole text (text-change callback with the full value)
    Replace(String),
    /// Append one character at the end
    Insert(char),
    /// Remove the last character
    Backspace,
    /// Remove everything
    Clear,
}

/// Phase change produced by applying one edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: FieldPhase,
    pub to: FieldPhase,
    /// Whether the text actually changed
    pub changed: bool,
}

impl Transition {
    /// True when the edit moved the field into a different phase.
    pub fn phase_changed(&self) -> bool {
        self.from != self.to
    }
}

/// Holds the current text and the state derived from it.
#[derive(Debug, Default)]
pub struct FieldSession {
    state: FormState,
}

impl FieldSession {
    /// Start an empty (Clean) session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing text.
    pub fn with_text(text: &str) -> Self {
        Self {
            state: derive_form_state(text),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn password(&self) -> &str {
        self.state.password()
    }

    pub fn phase(&self) -> FieldPhase {
        self.state.phase()
    }

    /// Apply an edit and re-derive the state when the text changed.
    pub fn apply(&mut self, edit: Edit) -> Transition {
        let from = self.state.phase();
        let next = match edit {
            Edit::Replace(text) => Some(Zeroizing::new(text)),
            Edit::Insert(c) => {
                let mut text = Zeroizing::new(self.password().to_string());
                text.push(c);
                Some(text)
            }
            Edit::Backspace => {
                let mut text = Zeroizing::new(self.password().to_string());
                text.pop().map(|_| text)
            }
            Edit::Clear => Some(Zeroizing::new(String::new())),
        };

        let changed = match next {
            Some(text) if text.as_str() != self.password() => {
                self.state = derive_form_state(&text);
                true
            }
            _ => false,
        };

        let to = self.state.phase();
        if changed {
            tracing::debug!(
                from = %from,
                to = %to,
                chars = self.password().chars().count(),
                failed = self.state.validation.failed_rules().len(),
                "field state derived"
            );
        } else {
            tracing::trace!(phase = %to, "edit left text unchanged");
        }

        Transition { from, to, changed }
    }
}
