//! Mock UI implementation for testing.
//!
//! `MockUI` implements [`UserInterface`] and records every interaction for
//! later assertion.
//!
//! # Example
//!
//! ```
//! use civic_audit::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.output("report");
//! ui.warning("documents could not be fetched");
//!
//! assert_eq!(ui.outputs(), ["report".to_string()]);
//! assert!(ui.has_warning("documents"));
//! ```

use std::sync::{Arc, Mutex};

use super::{OutputMode, SpinnerHandle, UserInterface};

/// How a mock spinner was finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpinnerFinish {
    Success(String),
    Warning(String),
    Error(String),
}

/// Mock UI that captures interactions.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    outputs: Vec<String>,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    spinners: Vec<String>,
    finishes: Arc<Mutex<Vec<SpinnerFinish>>>,
}

impl MockUI {
    /// Create a MockUI in normal mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockUI with a specific output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Captured command output.
    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    /// All command output joined into one string.
    pub fn output_text(&self) -> String {
        self.outputs.concat()
    }

    /// Captured status messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Captured headers.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Messages of every spinner that was started.
    pub fn spinners(&self) -> &[String] {
        &self.spinners
    }

    /// How each spinner was finished, in order.
    pub fn spinner_finishes(&self) -> Vec<SpinnerFinish> {
        self.finishes
            .lock()
            .map(|f| f.clone())
            .unwrap_or_default()
    }

    /// Check if a message containing `msg` was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a success containing `msg` was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a warning containing `msg` was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if an error containing `msg` was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn output(&mut self, text: &str) {
        self.outputs.push(text.to_string());
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        self.spinners.push(message.to_string());
        Box::new(MockSpinner {
            finishes: Arc::clone(&self.finishes),
        })
    }

    fn use_color(&self) -> bool {
        false
    }
}

/// Spinner that records how it finished.
#[derive(Debug, Default)]
pub struct MockSpinner {
    finishes: Arc<Mutex<Vec<SpinnerFinish>>>,
}

impl MockSpinner {
    fn record(&self, finish: SpinnerFinish) {
        if let Ok(mut finishes) = self.finishes.lock() {
            finishes.push(finish);
        }
    }
}

impl SpinnerHandle for MockSpinner {
    fn set_message(&mut self, _msg: &str) {}

    fn finish_success(&mut self, msg: &str) {
        self.record(SpinnerFinish::Success(msg.to_string()));
    }

    fn finish_warning(&mut self, msg: &str) {
        self.record(SpinnerFinish::Warning(msg.to_string()));
    }

    fn finish_error(&mut self, msg: &str) {
        self.record(SpinnerFinish::Error(msg.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_each_channel() {
        let mut ui = MockUI::new();
        ui.output("out");
        ui.message("msg");
        ui.success("ok");
        ui.warning("careful");
        ui.error("bad");
        ui.show_header("Title");

        assert_eq!(ui.outputs(), ["out".to_string()]);
        assert!(ui.has_message("msg"));
        assert!(ui.has_success("ok"));
        assert!(ui.has_warning("care"));
        assert!(ui.has_error("bad"));
        assert_eq!(ui.headers(), ["Title".to_string()]);
    }

    #[test]
    fn records_spinner_lifecycle() {
        let mut ui = MockUI::new();

        let mut spinner = ui.start_spinner("Fetching bundle");
        spinner.finish_warning("Fetched with 1 failure");

        assert_eq!(ui.spinners(), ["Fetching bundle".to_string()]);
        assert_eq!(
            ui.spinner_finishes(),
            vec![SpinnerFinish::Warning("Fetched with 1 failure".to_string())]
        );
    }

    #[test]
    fn with_mode_sets_mode() {
        let ui = MockUI::with_mode(OutputMode::Verbose);
        assert_eq!(ui.output_mode(), OutputMode::Verbose);
        assert!(!ui.use_color());
    }

    #[test]
    fn output_text_concatenates() {
        let mut ui = MockUI::new();
        ui.output("a\n");
        ui.output("b\n");
        assert_eq!(ui.output_text(), "a\nb\n");
    }
}
