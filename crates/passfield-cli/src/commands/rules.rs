use passfield_core::Rule;

use crate::app::AppContext;
use crate::cli::RulesArgs;
use crate::errors::CliError;
use crate::output::rules_json;
use crate::ui::{print, table};

pub fn handle_rules(app: &AppContext, args: &RulesArgs) -> anyhow::Result<()> {
    let ui = app.ui_context(&args.output);
    let rules = match args.rule.as_deref() {
        Some(id) => vec![id
            .parse::<Rule>()
            .map_err(|e| CliError::invalid_input(e.to_string()))?],
        None => Rule::ALL.to_vec(),
    };

    if ui.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&rules_json(&rules))?);
        return Ok(());
    }

    let rows: Vec<[&str; 2]> = rules.iter().map(|rule| [rule.id(), rule.hint()]).collect();
    print(&ui, &table(&ui, &["Rule", "Hint"], &rows));
    Ok(())
}
