//! Visual theme and styling.

use console::Style;

/// Wisp's visual theme.
///
/// One [`Style`] per message kind; [`WispTheme::plain`] swaps every slot for
/// an unstyled one when colors are off.
#[derive(Debug, Clone)]
pub struct WispTheme {
    /// Success messages (green).
    pub success: Style,
    /// Warnings (orange).
    pub warning: Style,
    /// Errors (red bold).
    pub error: Style,
    /// Header icon (cyan bold).
    pub header: Style,
    /// Header title text (bold).
    pub highlight: Style,
}

impl Default for WispTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl WispTheme {
    /// Create the default Wisp theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            header: Style::new(),
            highlight: Style::new(),
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
            self.header.apply_to("✦"),
            self.highlight.apply_to(title)
        )
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
    fn formatted_messages_carry_icon_and_text() {
        let theme = WispTheme::plain();

        assert_eq!(theme.format_success("Mode set to net"), "✓ Mode set to net");
        assert_eq!(theme.format_warning("no terminal"), "⚠ no terminal");
        assert_eq!(theme.format_error("Unknown mode: plasma"), "✗ Unknown mode: plasma");
    }

    #[test]
    fn header_carries_icon_and_title() {
        let theme = WispTheme::plain();
        let banner = theme.format_header("Effect Console");

        assert!(banner.contains("✦"));
        assert!(banner.contains("Effect Console"));
    }

    #[test]
    fn default_impl_matches_new() {
        let default = WispTheme::default();
        let new = WispTheme::new();
        assert_eq!(
            default.format_success("matrix"),
            new.format_success("matrix")
        );
    }
}
