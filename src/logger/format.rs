//! Line rendering.
//!
//! # Layout
//! ```text
//! [timestamp ]LABEL[ file][ function][ [line]]: item<sep>item<sep>item
//! ```
//! Bracketed segments are present only when the matching [`DisplayConfig`] flag is set.
//! The terminator is appended by the logger, not here.

use std::fmt::{self, Write as _};

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::logger::call_site::CallSite;
use crate::logger::level::LogLevel;

/// `yyyy-MM-dd hh:mm:ssSSS`: 12-hour clock, milliseconds glued to the seconds.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %I:%M:%S%3f";

/// Substituted for an item whose `Display` impl reports an error.
pub const UNRENDERABLE: &str = "<unrenderable>";

/// Which optional segments appear in a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub show_timestamp: bool,
    pub show_file_name: bool,
    pub show_function_name: bool,
    pub show_line_number: bool,
}

impl DisplayConfig {
    /// Every optional segment switched off: lines read `LABEL: items`.
    pub const fn bare() -> Self {
        Self {
            show_timestamp: false,
            show_file_name: false,
            show_function_name: false,
            show_line_number: false,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_timestamp: true,
            show_file_name: true,
            show_function_name: true,
            show_line_number: true,
        }
    }
}

/// How the severity label is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelStyle {
    #[default]
    Plain,
    Emoji,
}

impl LabelStyle {
    pub fn label(self, level: LogLevel) -> &'static str {
        match self {
            LabelStyle::Plain => level.label(),
            LabelStyle::Emoji => level.emoji_label(),
        }
    }
}

/// Everything needed to turn a call into one line of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    pub display: DisplayConfig,
    pub label_style: LabelStyle,
    pub timestamp_format: String,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            label_style: LabelStyle::Plain,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

impl LineFormat {
    /// Render a line (without terminator) using `now` for the timestamp segment.
    pub fn render(
        &self,
        level: LogLevel,
        items: &[&dyn fmt::Display],
        separator: &str,
        site: &CallSite<'_>,
        now: DateTime<Local>,
    ) -> String {
        let mut out = String::with_capacity(64);

        if self.display.show_timestamp {
            push_timestamp(&mut out, &self.timestamp_format, now);
            out.push(' ');
        }

        out.push_str(self.label_style.label(level));

        // A path with no named segment ("" or "///") has nothing to show.
        let file_name = site.short_file_name();
        if self.display.show_file_name && !file_name.is_empty() {
            out.push(' ');
            out.push_str(file_name);
        }

        if self.display.show_function_name {
            out.push(' ');
            out.push_str(site.function);
        }

        if self.display.show_line_number {
            // Writing an integer into a String cannot fail.
            let _ = write!(out, " [{}]", site.line);
        }

        out.push_str(": ");
        join_items(&mut out, items, separator);
        out
    }
}

/// Append `items` joined by `separator`, degrading failing items to [`UNRENDERABLE`].
pub fn join_items(out: &mut String, items: &[&dyn fmt::Display], separator: &str) {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        let start = out.len();
        if write!(out, "{}", item).is_err() {
            out.truncate(start);
            out.push_str(UNRENDERABLE);
        }
    }
}

fn push_timestamp(out: &mut String, pattern: &str, now: DateTime<Local>) {
    let start = out.len();
    if write!(out, "{}", now.format(pattern)).is_err() {
        out.truncate(start);
        let _ = write!(out, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
    }
}

/// Whether chrono accepts `pattern` as a strftime format.
pub fn is_valid_timestamp_format(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct Broken;

    impl fmt::Display for Broken {
        fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    fn site() -> CallSite<'static> {
        CallSite::new("a/b/C.swift", "f()", 10)
    }

    #[test]
    fn test_full_line() {
        let format = LineFormat::default();
        let line = format.render(LogLevel::Warning, &[&"a", &"b"], "-", &site(), fixed_now());
        assert_eq!(line, "2024-03-09 02:05:07000 WARNING C.swift f() [10]: a-b");
    }

    #[test]
    fn test_bare_line() {
        let format = LineFormat {
            display: DisplayConfig::bare(),
            ..LineFormat::default()
        };
        let line = format.render(LogLevel::Info, &[&"hello", &42], " ", &site(), fixed_now());
        assert_eq!(line, "INFO: hello 42");
    }

    #[test]
    fn test_each_flag_independently() {
        let mut format = LineFormat {
            display: DisplayConfig::bare(),
            ..LineFormat::default()
        };

        format.display.show_file_name = true;
        assert_eq!(
            format.render(LogLevel::Debug, &[&"x"], " ", &site(), fixed_now()),
            "DEBUG C.swift: x"
        );

        format.display = DisplayConfig::bare();
        format.display.show_function_name = true;
        assert_eq!(
            format.render(LogLevel::Debug, &[&"x"], " ", &site(), fixed_now()),
            "DEBUG f(): x"
        );

        format.display = DisplayConfig::bare();
        format.display.show_line_number = true;
        assert_eq!(
            format.render(LogLevel::Debug, &[&"x"], " ", &site(), fixed_now()),
            "DEBUG [10]: x"
        );

        format.display = DisplayConfig::bare();
        format.display.show_timestamp = true;
        assert_eq!(
            format.render(LogLevel::Debug, &[&"x"], " ", &site(), fixed_now()),
            "2024-03-09 02:05:07000 DEBUG: x"
        );
    }

    #[test]
    fn test_empty_file_name_segment_omitted() {
        let format = LineFormat {
            display: DisplayConfig {
                show_timestamp: false,
                ..DisplayConfig::default()
            },
            ..LineFormat::default()
        };

        for path in ["", "/", "///"] {
            let site = CallSite::new(path, "f()", 1);
            assert_eq!(
                format.render(LogLevel::Info, &[&"x"], " ", &site, fixed_now()),
                "INFO f() [1]: x"
            );
        }
    }

    #[test]
    fn test_emoji_labels() {
        let format = LineFormat {
            display: DisplayConfig::bare(),
            label_style: LabelStyle::Emoji,
            ..LineFormat::default()
        };
        let line = format.render(LogLevel::Error, &[&"boom"], " ", &site(), fixed_now());
        assert_eq!(line, "❤️ ERROR: boom");
    }

    #[test]
    fn test_unrenderable_item_degrades() {
        let mut out = String::new();
        join_items(&mut out, &[&"before", &Broken, &"after"], ",");
        assert_eq!(out, format!("before,{},after", UNRENDERABLE));
    }

    #[test]
    fn test_no_items() {
        let format = LineFormat {
            display: DisplayConfig::bare(),
            ..LineFormat::default()
        };
        assert_eq!(
            format.render(LogLevel::Info, &[], " ", &site(), fixed_now()),
            "INFO: "
        );
    }

    #[test]
    fn test_timestamp_format_validation() {
        assert!(is_valid_timestamp_format(DEFAULT_TIMESTAMP_FORMAT));
        assert!(is_valid_timestamp_format("%H:%M:%S"));
        assert!(!is_valid_timestamp_format("%Q"));
    }
}
