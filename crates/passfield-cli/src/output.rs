//! JSON output helpers for the CLI.
//!
//! The password itself is never part of any JSON document.

use passfield_core::{FormState, Rule};

/// Convert a form state to JSON for output.
pub fn form_json(state: &FormState) -> serde_json::Value {
    let v = &state.validation;
    serde_json::json!({
        "status": state.status_text(),
        "tone": state.tone(),
        "phase": state.phase(),
        "has_started_typing": state.has_started_typing,
        "is_error": state.is_error,
        "validation": {
            "length_valid": v.length_valid,
            "has_upper_case": v.has_upper_case,
            "has_number": v.has_number,
            "has_special_char": v.has_special_char,
            "all_valid": v.all_valid(),
        },
        "hints": state.hints(),
    })
}

/// Convert a rule to JSON for output.
pub fn rule_json(rule: Rule) -> serde_json::Value {
    serde_json::json!({
        "id": rule,
        "hint": rule.hint(),
    })
}

/// Convert multiple rules to a JSON array for output.
pub fn rules_json(rules: &[Rule]) -> Vec<serde_json::Value> {
    rules.iter().copied().map(rule_json).collect()
}
