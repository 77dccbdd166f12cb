//! Passfield CLI - a password input field with live validation feedback
//!
//! This is the terminal presentation layer for Passfield. It feeds text into
//! the core form-state derivation and renders the result.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod terminal;
mod ui;

use clap::Parser;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{check, live, misc, rules};
use crate::config::UiSection;
use crate::errors::CliError;
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = AppContext::new(&cli).and_then(|ctx| run(&ctx, &cli));
    if let Err(e) = result {
        // Errors go out before config is trusted, so use flags only
        let ui_ctx = UiContext::from_env(false, None, cli.no_color, cli.ascii, &UiSection::default());

        let full = format!("{}", e);
        let (message, hint) = split_error_hint(&full);
        print_error(&ui_ctx, message, hint.as_deref());

        let code = e
            .downcast_ref::<CliError>()
            .map(CliError::exit_code)
            .unwrap_or(1);
        std::process::exit(code);
    }
}

/// Split an error into its message and hint, using an explicit "Hint:" line
/// or a contextual hint for common error patterns.
fn split_error_hint(error: &str) -> (&str, Option<String>) {
    if let Some(idx) = error.find("\nHint:") {
        return (&error[..idx], Some(error[idx + 1..].to_string()));
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("unknown rule") {
        return (
            error,
            Some("Hint: Run `passfield rules` to see available rules.".to_string()),
        );
    }

    if error_lower.contains("raw mode") || error_lower.contains("terminal settings") {
        return (
            error,
            Some("Hint: Use `passfield live --lines` to read one value per line instead.".to_string()),
        );
    }

    (error, None)
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Check(args) => check::handle_check(ctx, args),
        Commands::Live(args) => live::handle_live(ctx, args),
        Commands::Rules(args) => rules::handle_rules(ctx, args),
        Commands::Completions { shell } => misc::handle_completions(*shell),
    }
}
