use std::io::Write;

use passfield_core::derive_form_state;

use crate::app::AppContext;
use crate::cli::CheckArgs;
use crate::constants::exit_codes;
use crate::helpers::read_password;
use crate::output::form_json;
use crate::ui::{print, render_field};

pub fn handle_check(app: &AppContext, args: &CheckArgs) -> anyhow::Result<()> {
    let ui = app.ui_context(&args.output);
    let password = read_password(args.password.as_deref(), args.stdin, ui.is_interactive())?;
    let state = derive_form_state(&password);
    tracing::debug!(
        phase = %state.phase(),
        failed = state.validation.failed_rules().len(),
        "evaluated password"
    );

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&form_json(&state))?);
    } else if !app.quiet {
        print(&ui, &render_field(&ui, &state));
    }

    // exit() skips destructors, so wipe the buffers first
    let rejected = state.is_error;
    drop(state);
    drop(password);
    if rejected {
        std::io::stdout().flush()?;
        std::process::exit(exit_codes::REJECTED);
    }
    Ok(())
}
