//! Application context: parsed flags plus loaded config.

use crate::cli::{Cli, OutputArgs};
use crate::config::{load_config, PassfieldConfig};
use crate::ui::UiContext;

/// Unified view of CLI flags and config for command handlers.
pub struct AppContext {
    pub config: PassfieldConfig,
    pub quiet: bool,
    no_color: bool,
    ascii: bool,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = load_config(cli.config.as_deref())?;
        Ok(Self {
            config,
            quiet: cli.quiet,
            no_color: cli.no_color,
            ascii: cli.ascii,
        })
    }

    /// Build a UI context for a command's output flags.
    pub fn ui_context(&self, output: &OutputArgs) -> UiContext {
        UiContext::from_env(
            output.json,
            output.format,
            self.no_color,
            self.ascii,
            &self.config.ui,
        )
    }
}
