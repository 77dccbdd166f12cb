//! UI primitives for the Passfield CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens, field palette, symbols
//! - **Render**: Badges, hints, tables, error lines
//! - **Field**: The password field itself (status, label, box, rule hints)
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::{render_field, UiContext};
//!
//! let ctx = UiContext::from_env(args.json, args.format, cli.no_color, cli.ascii, &config.ui);
//! let state = derive_form_state(&password);
//!
//! if ctx.mode.is_json() {
//!     // Handle JSON output separately
//!     return Ok(());
//! }
//!
//! println!("{}", render_field(&ctx, &state));
//! ```

mod context;
pub mod field;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use mode::{FormatPreference, OutputMode};

// Re-export commonly used render functions
pub use field::{frame_height, render_field};
pub use render::{divider, hint, print, print_error, table};
