//! Command dispatching.
//!
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{CheckArgs, Cli, Commands};
use crate::error::Result;
use crate::ui::UserInterface;

/// Exit code when integrity issues were found.
pub const EXIT_ISSUES: i32 = 1;

/// Exit code when the command could not run (bad config, unreadable input).
pub const EXIT_USAGE: i32 = 2;

/// Exit code when the tool itself failed (upstream API, transport, internal error).
pub const EXIT_FAILURE: i32 = 3;

/// Trait for command implementations.
pub trait Command {
    /// Execute the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where commands find their project and config.
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Project root used for config discovery.
    pub project_root: PathBuf,
    /// Explicit `--config` file, loaded without merging.
    pub config_override: Option<PathBuf>,
}

impl CommandContext {
    /// Create a context for `project_root`.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            config_override: None,
        }
    }

    /// Use an explicit config file.
    pub fn with_config(mut self, path: Option<PathBuf>) -> Self {
        self.config_override = path;
        self
    }

    /// The `--config` path, if any.
    pub fn config_override(&self) -> Option<&Path> {
        self.config_override.as_deref()
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    context: CommandContext,
}

impl CommandDispatcher {
    /// Create a dispatcher for the given context.
    pub fn new(context: CommandContext) -> Self {
        Self { context }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.context.project_root
    }

    /// Route the CLI subcommand to its implementation and run it.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(self.context.clone(), args.clone()).execute(ui)
            }
            Some(Commands::Checks) => {
                super::checks::ChecksCommand::new(self.context.clone()).execute(ui)
            }
            Some(Commands::Stats) => {
                super::stats::StatsCommand::new(self.context.clone()).execute(ui)
            }
            Some(Commands::Schema) => super::schema::SchemaCommand::new().execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => {
                super::check::CheckCommand::new(self.context.clone(), CheckArgs::default())
                    .execute(ui)
            }
        }
    }

    /// Dispatch and turn the outcome into a process exit code.
    ///
    /// An error escaping a command is reported through `ui` and exits with
    /// [`EXIT_FAILURE`], never with [`EXIT_ISSUES`].
    pub fn run(&self, cli: &Cli, ui: &mut dyn UserInterface) -> i32 {
        exit_code(self.dispatch(cli, ui), ui)
    }
}

fn exit_code(outcome: Result<CommandResult>, ui: &mut dyn UserInterface) -> i32 {
    match outcome {
        Ok(result) => result.exit_code,
        Err(e) => {
            tracing::debug!("Command failed: {:?}", e);
            ui.error(&format!("Error: {}", e));
            EXIT_FAILURE
        }
    }
}
