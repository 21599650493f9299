//! Checks command implementation.
//!
//! `civic-audit checks` lists the built-in checks in the order they run,
//! marking the ones disabled in config.

use crate::config::load_config;
use crate::error::Result;
use crate::integrity::CheckRegistry;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_USAGE};

/// The checks command implementation.
pub struct ChecksCommand {
    context: CommandContext,
}

impl ChecksCommand {
    /// Create a new checks command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Build the listing table.
    pub fn table(registry: &CheckRegistry, disabled: &[String]) -> Table {
        let mut table = Table::new(&["ID", "SEVERITY", "STATUS", "DESCRIPTION"]);
        for check in registry.iter() {
            let id = check.id();
            let status = if disabled.iter().any(|d| d == id.as_str()) {
                "disabled"
            } else {
                "enabled"
            };
            table.add_row([
                id.to_string(),
                check.default_severity().to_string(),
                status.to_string(),
                check.description().to_string(),
            ]);
        }
        table
    }
}

impl Command for ChecksCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.context.project_root, self.context.config_override())
        {
            Ok(config) => config,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_USAGE));
            }
        };

        let registry = CheckRegistry::with_builtins();
        ui.output(&Self::table(&registry, &config.checks.disabled).render());

        Ok(CommandResult::success())
    }
}
