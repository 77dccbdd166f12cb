//! Input helper functions for the CLI.

use std::io::BufRead;

use dialoguer::Password;
use zeroize::Zeroizing;

use crate::errors::CliError;

/// Resolve the password for a one-shot check.
///
/// Sources, in order: the positional argument, the first stdin line when
/// `from_stdin` is set, or a hidden prompt when interactive.
pub fn read_password(
    arg: Option<&str>,
    from_stdin: bool,
    interactive: bool,
) -> anyhow::Result<Zeroizing<String>> {
    match (arg, from_stdin) {
        (Some(_), true) => Err(CliError::invalid_input(
            "Pass the password as an argument or with --stdin, not both.",
        )
        .into()),
        (Some(value), false) => Ok(Zeroizing::new(value.to_string())),
        (None, true) => read_first_line(std::io::stdin().lock()),
        (None, false) if interactive => prompt_password(),
        (None, false) => Err(CliError::invalid_input(
            "No password provided and no TTY available.\nHint: Pass it as an argument or pipe it with --stdin.",
        )
        .into()),
    }
}

/// Read one line and drop its line ending. Other whitespace is kept.
pub fn read_first_line<R: BufRead>(mut reader: R) -> anyhow::Result<Zeroizing<String>> {
    let mut line = Zeroizing::new(String::new());
    reader
        .read_line(&mut line)
        .map_err(|e| anyhow::anyhow!("Failed to read password from stdin: {}", e))?;
    let kept = strip_line_ending(&line).len();
    line.truncate(kept);
    Ok(line)
}

/// Strip a single trailing `\n` or `\r\n`.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn prompt_password() -> anyhow::Result<Zeroizing<String>> {
    Password::new()
        .with_prompt("Password")
        .allow_empty_password(true)
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| anyhow::anyhow!("Failed to read password: {}", e))
}
