// retouch/src/commands/rules.rs
//! Rules command implementation: list the active rule set.

use anyhow::Result;
use comfy_table::Table;

use crate::cli::RulesCommand;

pub fn run(cmd: RulesCommand) -> Result<()> {
    let config = super::resolve_config(cmd.config.as_deref(), &[], &[])?;

    let mut table = Table::new();
    table.set_header(vec!["Name", "Type", "Case", "Pattern", "Replacement"]);
    for rule in &config.rules {
        table.add_row(vec![
            rule.name.clone(),
            rule.pattern_type.clone(),
            if rule.case_insensitive { "insensitive" } else { "sensitive" }.to_string(),
            rule.pattern.clone(),
            rule.replace_with.clone(),
        ]);
    }

    println!("{table}");
    Ok(())
}
