//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and capability detection
//! for the table and route renderers.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for headers and city names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for rules and secondary text.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for flight numbers.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for prices and totals.
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow for rank key banners.
    pub const YELLOW: &str = "\x1b[33m";
    /// Red for unreachable notices.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub yellow: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            yellow: colors::YELLOW,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            yellow: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
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

/// Whether ANSI colors may be emitted.
///
/// Any value of `NO_COLOR` (https://no-color.org/) or `TERM=dumb` turns
/// colors off.
#[must_use]
pub fn supports_color() -> bool {
    let dumb_terminal = std::env::var("TERM").is_ok_and(|term| term.eq_ignore_ascii_case("dumb"));
    std::env::var_os("NO_COLOR").is_none() && !dumb_terminal
}

/// Whether box-drawing glyphs are safe, judged from the `LANG`/`LC_ALL` locale.
#[must_use]
pub fn supports_unicode() -> bool {
    ["LANG", "LC_ALL"].iter().any(|key| {
        std::env::var(key).is_ok_and(|value| value.to_uppercase().contains("UTF"))
    })
}

/// Format a price with comma-grouped thousands, keeping cents only when present.
///
/// ```
/// # use skyroute_cli::terminal::format_price;
/// assert_eq!(format_price(10800.0), "10,800");
/// assert_eq!(format_price(2500.5), "2,500.50");
/// ```
#[must_use]
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0).round() as u64;
    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    match cents % 100 {
        0 => grouped,
        fraction => format!("{grouped}.{fraction:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    /// Sets environment variables for one test and puts the old values back on drop.
    struct ScopedEnv {
        saved: Vec<(&'static str, Option<OsString>)>,
        _lock: MutexGuard<'static, ()>,
    }

    impl ScopedEnv {
        fn set(vars: &[(&'static str, Option<&str>)]) -> Self {
            let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            let saved = vars
                .iter()
                .map(|&(key, value)| {
                    let previous = std::env::var_os(key);
                    match value {
                        Some(value) => std::env::set_var(key, value),
                        None => std::env::remove_var(key),
                    }
                    (key, previous)
                })
                .collect();
            Self { saved, _lock: lock }
        }
    }

    impl Drop for ScopedEnv {
        fn drop(&mut self) {
            for (key, previous) in self.saved.drain(..) {
                match previous {
                    Some(value) => std::env::set_var(key, value),
                    None => std::env::remove_var(key),
                }
            }
        }
    }

    #[test]
    fn prices_group_thousands() {
        assert_eq!(format_price(0.0), "0");
        assert_eq!(format_price(800.0), "800");
        assert_eq!(format_price(1000.0), "1,000");
        assert_eq!(format_price(123_456.0), "123,456");
        assert_eq!(format_price(1_234_567.0), "1,234,567");
    }

    #[test]
    fn prices_keep_cents() {
        assert_eq!(format_price(1200.25), "1,200.25");
        assert_eq!(format_price(0.07), "0.07");
    }

    #[test]
    fn plain_palette_is_empty() {
        let plain = ColorPalette::plain();
        assert!(plain.reset.is_empty());
        assert!(plain.green.is_empty());
        let colored = ColorPalette::colored();
        assert_eq!(colored.green, colors::GREEN);
    }

    #[test]
    fn no_color_and_dumb_terminal_disable_colors() {
        {
            let _env = ScopedEnv::set(&[("NO_COLOR", Some("")), ("TERM", Some("xterm"))]);
            assert!(!supports_color());
        }
        {
            let _env = ScopedEnv::set(&[("NO_COLOR", None), ("TERM", Some("DUMB"))]);
            assert!(!supports_color());
        }
        let _env = ScopedEnv::set(&[("NO_COLOR", None), ("TERM", Some("xterm-256color"))]);
        assert!(supports_color());
    }

    #[test]
    fn unicode_follows_locale() {
        {
            let _env = ScopedEnv::set(&[("LANG", Some("en_US.UTF-8")), ("LC_ALL", None)]);
            assert!(supports_unicode());
        }
        let _env = ScopedEnv::set(&[("LANG", Some("C")), ("LC_ALL", None)]);
        assert!(!supports_unicode());
    }
}
