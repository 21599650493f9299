//! Schema command implementation.
//!
//! `civic-audit schema` prints the JSON Schema of the bundle file accepted
//! by `check --bundle`.

use crate::error::Result;
use crate::model::Bundle;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Debug, Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    /// Create a new schema command.
    pub fn new() -> Self {
        Self
    }

    /// The bundle schema as pretty-printed JSON.
    pub fn render() -> Result<String> {
        let schema = schemars::schema_for!(Bundle);
        let json = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;
        Ok(json)
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.output(&Self::render()?);
        Ok(CommandResult::success())
    }
}
