//! Terminal styling and number formatting.
//!
//! ANSI colours are only emitted when the terminal is expected to render them;
//! the `NO_COLOR` and `TERM=dumb` conventions are respected.

/// ANSI escape codes used by the text renderers.
pub mod colors {
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green badge for the departure airport.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse cyan badge for intermediate stops.
    pub const TAG_TRANSIT: &str = "\x1b[1;7;36m";
    /// Bold reverse red badge for the destination.
    pub const TAG_DESTINATION: &str = "\x1b[1;7;31m";

    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    pub const GRAY: &str = "\x1b[90m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    /// 256-colour orange used for fuel figures.
    pub const ORANGE: &str = "\x1b[38;5;208m";
}

/// Resolved colour codes, or empty strings when colour is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_start: &'static str,
    pub tag_transit: &'static str,
    pub tag_destination: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub orange: &'static str,
}

impl ColorPalette {
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_start: colors::TAG_START,
            tag_transit: colors::TAG_TRANSIT,
            tag_destination: colors::TAG_DESTINATION,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            orange: colors::ORANGE,
        }
    }

    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_start: "",
            tag_transit: "",
            tag_destination: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            orange: "",
        }
    }

    /// `colored()` when [`supports_color`] holds, otherwise `plain()`.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
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

/// Whether ANSI colour codes should be written.
///
/// Honours `NO_COLOR` (https://no-color.org/) and `TERM=dumb`.
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

/// Whether Unicode box-drawing characters are safe to print.
///
/// Looks for a UTF hint in `LANG` or `LC_ALL`. Windows terminals are assumed
/// to cope unless `TERM=dumb`.
#[must_use]
pub fn supports_unicode() -> bool {
    let utf_hint = ["LANG", "LC_ALL"].iter().any(|key| {
        std::env::var(key)
            .map(|value| value.to_uppercase().contains("UTF"))
            .unwrap_or(false)
    });
    if utf_hint {
        return true;
    }
    #[cfg(windows)]
    {
        !matches!(std::env::var("TERM"), Ok(term) if term.eq_ignore_ascii_case("dumb"))
    }
    #[cfg(not(windows))]
    {
        false
    }
}

/// Format `value` with thousand separators and a fixed number of decimals.
///
/// # Examples
///
/// ```
/// # use flightpath_cli::terminal::format_with_separators;
/// assert_eq!(format_with_separators(999.0, 0), "999");
/// assert_eq!(format_with_separators(11876.3326, 2), "11,876.33");
/// assert_eq!(format_with_separators(-1234567.0, 1), "-1,234,567.0");
/// ```
#[must_use]
pub fn format_with_separators(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if value.is_sign_negative() && value != 0.0 { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}
