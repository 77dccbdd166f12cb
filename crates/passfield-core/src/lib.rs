//! # Passfield Core
//!
//! Core library for Passfield - a password input field with live validation feedback.
//!
//! This crate holds everything that is not presentation: the password predicate,
//! the rule catalogue, and the derivation of form state from the current text.
//! Rendering lives in the CLI crate.
//!
//! ## Architecture
//!
//! - **classify**: Unicode general-category character classes
//! - **validation**: The four independent password predicates
//! - **rule**: Rule catalogue with fixed order and hint text
//! - **form**: Pure derivation of UI affordances from a password
//! - **session**: The single mutable password buffer and its edits
//!
//! ## Example
//!
//! ```
//! use passfield_core::{derive_form_state, FieldPhase};
//!
//! let state = derive_form_state("Password1");
//! assert_eq!(state.phase(), FieldPhase::Invalid);
//! assert_eq!(state.hints(), vec!["One special character"]);
//! ```

pub mod classify;
pub mod error;
pub mod form;
pub mod rule;
pub mod session;
pub mod validation;

pub use error::PassfieldError;
pub use form::{derive_form_state, FieldPhase, FieldTone, FormState};
pub use rule::Rule;
pub use session::{Edit, FieldSession, Transition};
pub use validation::{validate, ValidationResult, MIN_LENGTH};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
