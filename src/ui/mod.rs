//! Terminal output for the CLI.
//!
//! - [`UserInterface`] trait so commands can be driven by a mock in tests
//! - [`TerminalUI`] writing to the real terminal
//! - [`MockUI`] capturing everything for assertions
//!
//! # Example
//!
//! ```
//! use civic_audit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Fetched bundle");
//! assert!(ui.has_success("Fetched"));
//! ```

pub mod mock;
pub mod output;
pub mod spinner;
pub mod table;
pub mod terminal;
pub mod theme;

pub use mock::{MockSpinner, MockUI, SpinnerFinish};
pub use output::OutputMode;
pub use spinner::ProgressSpinner;
pub use table::Table;
pub use terminal::TerminalUI;
pub use theme::{should_use_colors, AuditTheme};

/// Everything a command prints goes through this trait.
///
/// Report text goes to [`output`](UserInterface::output); status lines respect
/// the [`OutputMode`].
pub trait UserInterface {
    fn output_mode(&self) -> OutputMode;

    /// Write command output (reports, listings). Never suppressed.
    fn output(&mut self, text: &str);

    /// Display a status message.
    fn message(&mut self, msg: &str);

    fn success(&mut self, msg: &str);

    /// Non-fatal problem, such as a collection that could not be fetched.
    fn warning(&mut self, msg: &str);

    /// Display an error message. Never suppressed.
    fn error(&mut self, msg: &str);

    /// Show a header line.
    fn show_header(&mut self, title: &str);

    /// Start a spinner for an operation.
    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle>;

    /// Whether color output is enabled.
    fn use_color(&self) -> bool;
}

/// A running spinner returned by [`UserInterface::start_spinner`].
pub trait SpinnerHandle {
    fn set_message(&mut self, msg: &str);

    fn finish_success(&mut self, msg: &str);

    /// Mark the operation as partially successful.
    fn finish_warning(&mut self, msg: &str);

    fn finish_error(&mut self, msg: &str);
}
