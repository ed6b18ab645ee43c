//! Centralized UI formatting and color utilities

use colored::{ColoredString, Colorize};

use crate::cuit::CuitKind;

/// Check if quiet mode is enabled via environment variable
pub fn is_quiet() -> bool {
    std::env::var("CUIT_QUIET")
        .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// Returns a colored verdict icon: ✓ (green) for valid, ✗ (red) otherwise.
pub fn verdict_icon(valid: bool) -> ColoredString {
    if valid {
        "✓".green()
    } else {
        "✗".red()
    }
}

/// Short colored label for a taxpayer class.
pub fn kind_label(kind: CuitKind) -> ColoredString {
    match kind {
        CuitKind::Physical => "physical".blue(),
        CuitKind::Juridical => "juridical".magenta(),
    }
}

/// Color scheme for verdict-related text output
pub mod colors {
    use colored::{ColoredString, Colorize};

    /// Green for valid identifiers
    pub fn success(text: &str) -> ColoredString {
        text.green()
    }

    /// Yellow for skipped lines
    pub fn warning(text: &str) -> ColoredString {
        text.yellow()
    }

    /// Red for invalid identifiers
    pub fn error(text: &str) -> ColoredString {
        text.red()
    }

    /// Cyan for identifiers
    pub fn identifier(text: &str) -> ColoredString {
        text.cyan()
    }

    /// Dimmed for secondary text
    pub fn secondary(text: &str) -> ColoredString {
        text.dimmed()
    }

    /// Bold for headings
    pub fn heading(text: &str) -> ColoredString {
        text.bold()
    }
}

/// Common text formatting patterns
pub mod format {
    /// Quote a raw candidate for display, escaping control characters.
    pub fn quoted(input: &str) -> String {
        format!("{:?}", input)
    }
}
