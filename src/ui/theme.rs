//! Visual theme and styling.

use console::Style;

/// Gangplank's visual theme.
#[derive(Debug, Clone)]
pub struct GangplankTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text.
    pub dim: Style,
    /// Style for highlighted/important text (bold).
    pub highlight: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for step numbers and counters (dim).
    pub step_number: Style,
    /// Style for durations and timestamps (dim).
    pub duration: Style,
    /// Style for commands shown in output (dim italic).
    pub command: Style,
}

impl Default for GangplankTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl GangplankTheme {
    /// Create the default Gangplank theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            highlight: Style::new().bold(),
            header: Style::new().bold().cyan(),
            step_number: Style::new().dim(),
            duration: Style::new().dim(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            highlight: Style::new(),
            header: Style::new(),
            step_number: Style::new(),
            duration: Style::new(),
            command: Style::new(),
        }
    }

    /// Pick the theme matching the current terminal environment.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format a header banner.
    pub fn format_header(&self, title: &str) -> String {
        format!(
            "{} {}",
            self.header.apply_to("⇒"),
            self.highlight.apply_to(title)
        )
    }

    /// Format a step counter like `[1/3]`.
    pub fn format_counter(&self, index: usize, total: usize) -> String {
        format!("{}", self.step_number.apply_to(format!("[{}/{}]", index, total)))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check if stdout is a TTY
    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let theme = GangplankTheme::plain();
        assert_eq!(theme.format_success("done"), "✓ done");
    }

    #[test]
    fn theme_formats_error() {
        let theme = GangplankTheme::plain();
        assert_eq!(theme.format_error("broken"), "✗ broken");
    }

    #[test]
    fn theme_formats_warning() {
        let theme = GangplankTheme::plain();
        assert_eq!(theme.format_warning("careful"), "⚠ careful");
    }

    #[test]
    fn theme_formats_counter() {
        let theme = GangplankTheme::plain();
        assert_eq!(theme.format_counter(1, 3), "[1/3]");
    }

    #[test]
    fn no_color_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        assert!(!should_use_colors());
        std::env::remove_var("NO_COLOR");
    }
}
