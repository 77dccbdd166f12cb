//! Rendering of the password field.
//!
//! The field is drawn from a `FormState` alone; nothing here looks at the
//! rules directly. Pretty mode draws the title, the status badge, the label row, an
//! outlined box with the masked value and, in error state, one bullet per
//! failing rule. Plain mode emits the same facts as `key=value` lines.

use passfield_core::FormState;

use super::context::UiContext;
use super::render::{badge, hint, kv};
use super::theme::{styled, styles, symbols, tone_style, Badge};
use crate::constants::{
    FIELD_LABEL, FIELD_MAX_WIDTH, FIELD_OPTIONAL, FIELD_PLACEHOLDER, FIELD_TITLE,
};

/// Narrowest box we draw, in columns.
const FIELD_MIN_WIDTH: usize = 16;

/// Render the field for the current state. Empty in JSON mode.
pub fn render_field(ctx: &UiContext, state: &FormState) -> String {
    if ctx.mode.is_json() {
        String::new()
    } else if ctx.mode.is_pretty() {
        render_pretty(ctx, state)
    } else {
        render_plain(ctx, state)
    }
}

/// Number of terminal rows a rendered frame occupies at `width` columns,
/// counting lines that wrap.
pub fn frame_height(frame: &str, width: usize) -> usize {
    let width = width.max(1);
    frame
        .lines()
        .map(|line| visible_width(line).max(1).div_ceil(width))
        .sum()
}

/// Printed columns of a line, skipping ANSI escape sequences.
fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        if c == '\u{1b}' {
            // CSI: ESC [ params final-byte
            if chars.next() == Some('[') {
                for c in chars.by_ref() {
                    if ('\u{40}'..='\u{7e}').contains(&c) {
                        break;
                    }
                }
            }
        } else {
            width += 1;
        }
    }
    width
}

fn render_plain(ctx: &UiContext, state: &FormState) -> String {
    let mut lines = vec![
        kv(ctx, "Status", state.status_text()),
        kv(ctx, "Tone", state.tone().as_str()),
        kv(ctx, "Phase", state.phase().as_str()),
    ];
    lines.extend(state.hints().into_iter().map(|text| hint(ctx, text)));
    lines.join("\n")
}

fn render_pretty(ctx: &UiContext, state: &FormState) -> String {
    let tone = tone_style(state.tone());
    let width = ctx.width.clamp(FIELD_MIN_WIDTH, FIELD_MAX_WIDTH);
    let inner = width - 4;

    let mut lines = vec![styled(FIELD_TITLE, styles::bold(), ctx.color)];

    let status = styled(state.status_text(), styles::bold(), ctx.color);
    lines.push(badge(ctx, Badge::for_tone(state.tone()), &status));

    lines.push(format!(
        "{}  {}",
        styled(FIELD_LABEL, tone, ctx.color),
        styled(FIELD_OPTIONAL, styles::dim(), ctx.color)
    ));

    let horizontal = symbols::HORIZONTAL.get(ctx.unicode).repeat(width - 2);
    let vertical = styled(symbols::VERTICAL.get(ctx.unicode), tone, ctx.color);
    lines.push(styled(
        &format!(
            "{}{}{}",
            symbols::TOP_LEFT.get(ctx.unicode),
            horizontal,
            symbols::TOP_RIGHT.get(ctx.unicode)
        ),
        tone,
        ctx.color,
    ));

    let (content, content_width) = if state.has_started_typing {
        let masked = mask(state.password().chars().count(), inner, ctx.unicode);
        let masked_width = masked.chars().count();
        (masked, masked_width)
    } else {
        (
            styled(FIELD_PLACEHOLDER, styles::dim(), ctx.color),
            FIELD_PLACEHOLDER.chars().count(),
        )
    };
    let padding = " ".repeat(inner.saturating_sub(content_width));
    lines.push(format!("{} {}{} {}", vertical, content, padding, vertical));

    lines.push(styled(
        &format!(
            "{}{}{}",
            symbols::BOTTOM_LEFT.get(ctx.unicode),
            horizontal,
            symbols::BOTTOM_RIGHT.get(ctx.unicode)
        ),
        tone,
        ctx.color,
    ));

    let bullet = symbols::BULLET.get(ctx.unicode);
    for text in state.hints() {
        lines.push(styled(
            &format!("{} {}", bullet, text),
            styles::warning(),
            ctx.color,
        ));
    }

    lines.join("\n")
}

/// One bullet per character, keeping the tail visible when it overflows.
fn mask(chars: usize, inner: usize, unicode: bool) -> String {
    let bullet = symbols::BULLET.get(unicode);
    if chars <= inner {
        bullet.repeat(chars)
    } else {
        format!(
            "{}{}",
            symbols::CLIPPED.get(unicode),
            bullet.repeat(inner.saturating_sub(1))
        )
    }
}
