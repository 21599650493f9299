//! Stats command implementation.
//!
//! `civic-audit stats` asks the API for its aggregate entity counts.

use std::time::Duration;

use crate::api::{fetch_statistics, AuthHeader, CivicApi, HttpApiClient, Statistics};
use crate::config::load_config;
use crate::error::Result;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandContext, CommandResult, EXIT_FAILURE, EXIT_USAGE};

/// The stats command implementation.
pub struct StatsCommand {
    context: CommandContext,
}

impl StatsCommand {
    /// Create a new stats command.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Fetch and print statistics from `api`.
    pub fn run(&self, api: &dyn CivicApi, ui: &mut dyn UserInterface) -> CommandResult {
        let mut spinner = ui.start_spinner("Fetching statistics...");
        match fetch_statistics(api) {
            Ok(stats) => {
                spinner.finish_success("Fetched statistics");
                ui.show_header("Entity counts");
                ui.output(&stats_table(&stats).render());
                CommandResult::success()
            }
            Err(e) => {
                spinner.finish_error("Could not fetch statistics");
                ui.error(&e.to_string());
                CommandResult::failure(EXIT_FAILURE)
            }
        }
    }
}

fn stats_table(stats: &Statistics) -> Table {
    let mut table = Table::new(&["COLLECTION", "COUNT"]);
    for (name, count) in [
        ("politicians", stats.politicians),
        ("commitments", stats.commitments),
        ("timeline events", stats.timeline_events),
        ("documents", stats.documents),
        ("voting records", stats.voting_records),
    ] {
        table.add_row([name.to_string(), count.to_string()]);
    }
    table
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match load_config(&self.context.project_root, self.context.config_override())
        {
            Ok(config) => config,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_USAGE));
            }
        };

        let Some(base_url) = &config.api.base_url else {
            ui.error("No API configured. Set api.base_url in .civic-audit/config.yml");
            return Ok(CommandResult::failure(EXIT_USAGE));
        };

        let timeout = Duration::from_secs(config.api.timeout_secs);
        let mut client = HttpApiClient::new(base_url, timeout)?;
        if let Some(token) = config.api.token() {
            client = client.with_auth(AuthHeader::bearer(&token));
        }

        Ok(self.run(&client, ui))
    }
}
