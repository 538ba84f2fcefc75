// Copyright (c) 2024-2026 Nervosys LLC
// SPDX-License-Identifier: AGPL-3.0-only
//! Terminal styling for command output
//!
//! - Green - success, `[OK]`
//! - Cyan - info, paths
//! - Yellow - numbers, warnings
//! - Magenta - headers
//! - Red - errors
//! - Dim - separators

use colored::{ColoredString, Colorize};

/// Status indicators with consistent colors
pub struct Status;

impl Status {
    /// Success indicator: `[OK]` in green
    pub fn ok() -> ColoredString {
        "[OK]".green()
    }

    /// Info indicator: `[i]` in cyan
    pub fn info() -> ColoredString {
        "[i]".cyan()
    }

    /// Error indicator: `[X]` in red
    pub fn error() -> ColoredString {
        "[X]".red()
    }
}

/// Text styling helpers
pub trait StyledText {
    /// Header/label (magenta bold)
    fn header(&self) -> ColoredString;
    /// Path (cyan)
    fn path(&self) -> ColoredString;
    /// Number (yellow)
    fn count(&self) -> ColoredString;
    /// Error (red)
    fn err(&self) -> ColoredString;
}

impl StyledText for str {
    fn header(&self) -> ColoredString {
        self.magenta().bold()
    }

    fn path(&self) -> ColoredString {
        self.cyan()
    }

    fn count(&self) -> ColoredString {
        self.yellow()
    }

    fn err(&self) -> ColoredString {
        self.red()
    }
}

impl StyledText for String {
    fn header(&self) -> ColoredString {
        self.as_str().header()
    }

    fn path(&self) -> ColoredString {
        self.as_str().path()
    }

    fn count(&self) -> ColoredString {
        self.as_str().count()
    }

    fn err(&self) -> ColoredString {
        self.as_str().err()
    }
}

/// Horizontal separator line
pub fn separator(width: usize) -> ColoredString {
    "═".repeat(width).dimmed()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_survives_styling() {
        colored::control::set_override(false);
        assert_eq!(Status::ok().to_string(), "[OK]");
        assert_eq!("42".count().to_string(), "42");
        assert_eq!(String::from("steps").header().to_string(), "steps");
        assert_eq!(separator(3).to_string(), "═══");
    }
}
