//! Terminal capability detection and ANSI styling.

use std::io::IsTerminal;

/// ANSI escape sequences used by the text renderer.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const GRAY: &str = "\x1b[90m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RED: &str = "\x1b[31m";
}

/// Color palette for text output.
///
/// Every field is either an escape sequence or an empty string, so callers can
/// interpolate unconditionally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Palette with ANSI colors enabled.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            bold: colors::BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            red: colors::RED,
        }
    }

    /// Palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            bold: "",
            gray: "",
            cyan: "",
            red: "",
        }
    }

    /// Pick `colored()` when stdout is a color-capable terminal.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() && std::io::stdout().is_terminal() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    /// Pick `colored()` when stderr is a color-capable terminal.
    #[must_use]
    pub fn detect_stderr() -> Self {
        if supports_color() && std::io::stderr().is_terminal() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Check if the environment allows ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

/// Format a number with thousand separators (commas).
///
/// ```
/// # use campusnav_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999), "999");
/// assert_eq!(format_with_separators(1000), "1,000");
/// assert_eq!(format_with_separators(1234567), "1,234,567");
/// ```
#[must_use]
pub fn format_with_separators(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
