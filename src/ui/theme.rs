//! Visual theme and styling.

use console::Style;

/// Styles used for CLI status output.
#[derive(Debug, Clone)]
pub struct AuditTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warning messages (orange).
    pub warning: Style,
    /// Error messages (red bold).
    pub error: Style,
    /// Secondary text.
    pub dim: Style,
    /// Headers (magenta bold).
    pub header: Style,
    /// Table column titles.
    pub key: Style,
}

impl Default for AuditTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AuditTheme {
    /// Create the colored theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            key: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            key: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message.
    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    /// Format a warning message.
    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    /// Format an error message.
    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    /// Format a header line.
    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(format!("◆ {}", title)).to_string()
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_theme_formats_icons() {
        let theme = AuditTheme::plain();

        assert_eq!(theme.format_success("Fetched"), "✓ Fetched");
        assert_eq!(theme.format_warning("Partial"), "⚠ Partial");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
        assert_eq!(theme.format_header("Statistics"), "◆ Statistics");
    }

    #[test]
    fn for_color_false_is_plain() {
        let theme = AuditTheme::for_color(false);
        assert!(!theme.format_error("x").contains('\u{1b}'));
    }

    #[test]
    fn colored_theme_keeps_text() {
        let theme = AuditTheme::new();
        assert!(theme.format_success("done").contains("done"));
    }
}
