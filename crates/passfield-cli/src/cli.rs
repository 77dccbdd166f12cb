use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use passfield_core::VERSION;

use crate::ui::FormatPreference;

/// Passfield - a password input field with live validation feedback
#[derive(Parser)]
#[command(name = "passfield")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the config file
    #[arg(long, global = true, env = "PASSFIELD_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols instead of Unicode
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Output selection shared by rendering commands
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format (pretty, plain)
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatPreference>,
}

/// Arguments for the `check` command
#[derive(Args)]
pub struct CheckArgs {
    /// Password to evaluate (omit to read from --stdin or a hidden prompt)
    #[arg(value_name = "PASSWORD")]
    pub password: Option<String>,

    /// Read the password from the first line of stdin
    #[arg(long)]
    pub stdin: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `live` command
#[derive(Args)]
pub struct LiveArgs {
    /// Treat each stdin line as the full field text, even on a TTY
    #[arg(long)]
    pub lines: bool,

    #[command(flatten)]
    pub output: OutputArgs,
}

/// Arguments for the `rules` command
#[derive(Args)]
pub struct RulesArgs {
    /// Show a single rule (length, uppercase, number, special)
    #[arg(value_name = "RULE")]
    pub rule: Option<String>,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a password once and render the field
    Check(CheckArgs),

    /// Edit the field interactively, re-rendering on every change
    Live(LiveArgs),

    /// List the password rules and their hint text
    Rules(RulesArgs),

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: Shell,
    },
}
