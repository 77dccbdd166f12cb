//! Live field editing.
//!
//! On an interactive terminal every keystroke becomes an `Edit`; otherwise
//! each stdin line is taken as the full field text. Either way the session
//! re-derives the state and the field is rendered again after each change.

use std::io::{self, BufRead, Read, Write};

use passfield_core::{Edit, FieldSession, FormState};

use crate::app::AppContext;
use crate::cli::LiveArgs;
use crate::errors::CliError;
use crate::output::form_json;
use crate::terminal::{raw_mode_supported, Key, KeyDecoder, RawMode};
use crate::ui::{divider, frame_height, hint, render_field, OutputMode, UiContext};

const KEY_HELP: &str = "Enter to finish, Ctrl-U to clear, Ctrl-C to abort";

pub fn handle_live(app: &AppContext, args: &LiveArgs) -> anyhow::Result<()> {
    let ui = app.ui_context(&args.output);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.lines && ui.is_interactive() && raw_mode_supported() {
        run_keys(&ui, app.quiet, io::stdin().lock(), &mut out)
    } else {
        run_lines(&ui, io::stdin().lock(), &mut out)
    }
}

/// Writes successive renders of the field.
///
/// Pretty output on a terminal redraws in place; every other mode appends one
/// render per change.
pub struct FrameWriter<'a> {
    ui: &'a UiContext,
    redraw: bool,
    footer: Option<String>,
    drawn: usize,
    frames: usize,
}

impl<'a> FrameWriter<'a> {
    pub fn new(ui: &'a UiContext, redraw: bool) -> Self {
        Self {
            ui,
            redraw: redraw && ui.mode == OutputMode::Pretty,
            footer: None,
            drawn: 0,
            frames: 0,
        }
    }

    pub fn with_footer(mut self, footer: String) -> Self {
        self.footer = Some(footer);
        self
    }

    pub fn emit<W: Write>(&mut self, state: &FormState, out: &mut W) -> anyhow::Result<()> {
        if self.ui.mode.is_json() {
            writeln!(out, "{}", serde_json::to_string(&form_json(state))?)?;
        } else {
            let mut frame = render_field(self.ui, state);
            if let Some(footer) = &self.footer {
                frame.push('\n');
                frame.push_str(footer);
            }

            if self.redraw {
                if self.drawn > 0 {
                    // Cursor up to the first line of the previous frame, clear below
                    write!(out, "\x1b[{}A\x1b[J", self.drawn)?;
                }
                self.drawn = frame_height(&frame, self.ui.width);
            } else if self.frames > 0 {
                writeln!(out, "{}", divider(self.ui))?;
            }
            writeln!(out, "{}", frame)?;
        }
        self.frames += 1;
        out.flush()?;
        Ok(())
    }

    pub fn frames(&self) -> usize {
        self.frames
    }
}

/// Treat every input line as a full-text change.
pub fn run_lines<R: BufRead, W: Write>(
    ui: &UiContext,
    reader: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let mut session = FieldSession::new();
    let mut frames = FrameWriter::new(ui, false);
    frames.emit(session.state(), out)?;

    for line in reader.lines() {
        let transition = session.apply(Edit::Replace(line?));
        if transition.phase_changed() {
            tracing::debug!(from = %transition.from, to = %transition.to, "phase changed");
        }
        frames.emit(session.state(), out)?;
    }

    tracing::debug!(frames = frames.frames(), "line input finished");
    Ok(())
}

/// Read raw keystrokes until Enter, redrawing after each change.
fn run_keys<R: Read, W: Write>(
    ui: &UiContext,
    quiet: bool,
    reader: R,
    out: &mut W,
) -> anyhow::Result<()> {
    let _raw = RawMode::enable()?;
    let session = drive_keys(ui, quiet, reader, out)?;
    tracing::debug!(phase = %session.phase(), "key input finished");
    Ok(())
}

/// Decode keystrokes from `reader` into edits until Enter or end of input.
///
/// Ctrl-C aborts with `CliError::Interrupted`.
fn drive_keys<R: Read, W: Write>(
    ui: &UiContext,
    quiet: bool,
    reader: R,
    out: &mut W,
) -> anyhow::Result<FieldSession> {
    let mut session = FieldSession::new();
    let mut frames = FrameWriter::new(ui, ui.is_tty);
    if !quiet && ui.mode.is_pretty() {
        frames = frames.with_footer(hint(ui, KEY_HELP));
    }
    frames.emit(session.state(), out)?;

    let mut decoder = KeyDecoder::default();
    for byte in reader.bytes() {
        let edit = match decoder.feed(byte?) {
            None | Some(Key::Ignored) => continue,
            Some(Key::Char(c)) => Edit::Insert(c),
            Some(Key::Backspace) => Edit::Backspace,
            Some(Key::ClearLine) => Edit::Clear,
            Some(Key::Submit) => break,
            Some(Key::Interrupt) => return Err(CliError::Interrupted.into()),
        };

        let transition = session.apply(edit);
        if transition.phase_changed() {
            tracing::debug!(from = %transition.from, to = %transition.to, "phase changed");
        }
        if transition.changed {
            frames.emit(session.state(), out)?;
        }
    }

    tracing::trace!(frames = frames.frames(), "keystrokes drained");
    Ok(session)
}
