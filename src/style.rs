//! Terminal styling seam.
//!
//! Formatting never talks to the terminal directly; every piece of decorated
//! text goes through the narrow [`Decorate`] contract, so line shape stays
//! testable without a real terminal. [`AnsiDecorator`] is the production
//! implementation backed by the `colored` crate; [`PlainDecorator`] passes
//! text through untouched for non-terminal sinks and tests.

use colored::Colorize;

/// Background color of the tag badge (RGB).
pub const TAG_BACKGROUND_RGB: (u8, u8, u8) = (160, 80, 246);

/// Visual treatment applied to one piece of a log line.
///
/// One variant per treatment the logger uses. The severity-to-style mapping
/// lives in the formatter and is an exhaustive `match`, so adding a severity
/// forces handling it everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Plain white foreground (`debug` and the undecorated line kind).
    White,
    /// Bright blue foreground (`info`).
    BrightBlue,
    /// Bright green foreground (`success`).
    BrightGreen,
    /// Black text on a yellow background (the `warn` banner).
    BlackOnYellow,
    /// Black text on a red background (the `error` banner).
    BlackOnRed,
    /// White text on the purple tag background ([`TAG_BACKGROUND_RGB`]).
    WhiteOnPurple,
}

impl Style {
    /// All styles, for exhaustive iteration in tests.
    pub fn all() -> &'static [Style] {
        &[
            Style::White,
            Style::BrightBlue,
            Style::BrightGreen,
            Style::BlackOnYellow,
            Style::BlackOnRed,
            Style::WhiteOnPurple,
        ]
    }
}

/// Maps text plus a style descriptor to decorated text.
///
/// Contract: decorating the empty string yields the empty string, so an
/// absent tag contributes no stray escape codes to the line.
pub trait Decorate {
    /// Render `text` with the given style.
    fn decorate(&self, text: &str, style: Style) -> String;
}

/// ANSI escape-code decorator backed by the `colored` crate.
///
/// `colored` performs its own tty and NO_COLOR detection at render time, so
/// output piped to a file automatically falls back to plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiDecorator;

impl Decorate for AnsiDecorator {
    fn decorate(&self, text: &str, style: Style) -> String {
        if text.is_empty() {
            return String::new();
        }
        let (r, g, b) = TAG_BACKGROUND_RGB;
        match style {
            Style::White => text.white().to_string(),
            Style::BrightBlue => text.bright_blue().to_string(),
            Style::BrightGreen => text.bright_green().to_string(),
            Style::BlackOnYellow => text.black().on_yellow().to_string(),
            Style::BlackOnRed => text.black().on_red().to_string(),
            Style::WhiteOnPurple => text.white().on_truecolor(r, g, b).to_string(),
        }
    }
}

/// Pass-through decorator: returns the text unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecorator;

impl Decorate for PlainDecorator {
    fn decorate(&self, text: &str, _style: Style) -> String {
        text.to_string()
    }
}
