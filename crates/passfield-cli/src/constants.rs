//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success (field not in error state)
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (clap usage errors)
/// - 3+: Application-specific outcomes
pub mod exit_codes {
    /// The evaluated password left the field in error state.
    pub const REJECTED: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Config file missing or unreadable.
    pub const CONFIG: i32 = 5;

    /// Live editing aborted with Ctrl-C.
    pub const INTERRUPTED: i32 = 130;
}

/// Title line above the field.
pub const FIELD_TITLE: &str = "Text input";

/// Label shown above the input box.
pub const FIELD_LABEL: &str = "Input";

/// Secondary label next to the field label.
pub const FIELD_OPTIONAL: &str = "Optional";

/// Placeholder shown in an empty input box.
pub const FIELD_PLACEHOLDER: &str = "Placeholder";

/// Widest the input box will grow, in columns.
pub const FIELD_MAX_WIDTH: usize = 48;
