//! Line-level pieces shared by the field, the rule listing and error output.
//!
//! Everything here returns a `String`; the caller decides where it goes.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table};

use super::context::UiContext;
use super::theme::{styled, styles, symbols, Badge};
use crate::constants::FIELD_MAX_WIDTH;

/// Separator between appended frames. Plain output keeps a fixed `---`
/// so line-oriented consumers can split on it.
pub fn divider(ctx: &UiContext) -> String {
    if ctx.mode.is_pretty() {
        symbols::HORIZONTAL
            .get(ctx.unicode)
            .repeat(ctx.width.min(FIELD_MAX_WIDTH))
    } else {
        "---".to_string()
    }
}

/// Status badge followed by `message`.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let mark = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    format!("{} {}", mark, message)
}

/// `key=value` in plain mode, `Key: value` with a dim key otherwise.
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled(&format!("{}:", key), styles::dim(), ctx.color), value)
    } else {
        format!("{}={}", key.to_lowercase(), value)
    }
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
    } else {
        format!("hint={}", text)
    }
}

/// Bordered table in pretty mode; one space-joined row per line otherwise.
pub fn table(ctx: &UiContext, headers: &[&str], rows: &[[&str; 2]]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| row.join(" "))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    if ctx.unicode {
        table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX))
        .set_header(headers.iter().copied());
    for row in rows {
        table.add_row(row.iter().copied());
    }
    table.to_string()
}

/// Print to stdout unless the output is JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Report an error on stderr, with the hint on its own line.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    let head = if ctx.mode.is_pretty() {
        badge(ctx, Badge::Err, message)
    } else {
        format!("error={}", message)
    };
    match error_hint {
        Some(h) => eprintln!("{}\n{}", head, hint(ctx, h)),
        None => eprintln!("{}", head),
    }
}
