//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and is routed by
//! [`CommandDispatcher`]. Commands talk to the terminal only through
//! [`UserInterface`](crate::ui::UserInterface), so tests drive them with
//! [`MockUI`](crate::ui::MockUI).

pub mod check;
pub mod checks;
pub mod completions;
pub mod dispatcher;
pub mod schema;
pub mod stats;

pub use dispatcher::{
    Command, CommandContext, CommandDispatcher, CommandResult, EXIT_FAILURE, EXIT_ISSUES,
    EXIT_USAGE,
};
