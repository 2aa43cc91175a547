//! Fixed terminal color palette and escape-sequence rendering.
//!
//! Nine palette slots map straight onto the classic `30`-`37` foreground
//! codes, plus slot 9 which resets the foreground to the terminal default.
//! Rendering is infallible and allocation-free. Colored spans are built with
//! [`wrap`] so every span carries its own trailing reset and never leaks
//! color state into subsequent output.

use std::borrow::Cow;
use std::fmt;

/// A single foreground color in the fixed palette.
///
/// Values render as `ESC[{30 + index}m` where the index is the palette slot
/// (0-7 for the named colors, 9 for [`Color::Reset`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    /// Reset the foreground back to the terminal default.
    Reset,
}

impl Color {
    /// The ANSI escape sequence selecting this color.
    pub fn render(self) -> &'static str {
        match self {
            Color::Black => "\u{1b}[30m",
            Color::Red => "\u{1b}[31m",
            Color::Green => "\u{1b}[32m",
            Color::Yellow => "\u{1b}[33m",
            Color::Blue => "\u{1b}[34m",
            Color::Magenta => "\u{1b}[35m",
            Color::Cyan => "\u{1b}[36m",
            Color::White => "\u{1b}[37m",
            Color::Reset => "\u{1b}[39m",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.render())
    }
}

/// Wrap `text` in a color code and a trailing reset.
///
/// Concatenating any number of wrapped spans never leaves an unterminated
/// color state in the output string.
pub fn wrap(color: Color, text: impl AsRef<str>) -> String {
    format!("{}{}{}", color.render(), text.as_ref(), Color::Reset.render())
}

/// Remove every ANSI escape sequence from `text`.
///
/// Used to derive the plain rendition of a colored line for sinks that
/// declare a plain policy (files, test buffers).
pub fn strip_colors(text: &str) -> Cow<'_, str> {
    console::strip_ansi_codes(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_matches_palette_index() {
        assert_eq!(Color::Black.render(), "\u{1b}[30m");
        assert_eq!(Color::Red.render(), "\u{1b}[31m");
        assert_eq!(Color::Green.render(), "\u{1b}[32m");
        assert_eq!(Color::Yellow.render(), "\u{1b}[33m");
        assert_eq!(Color::Blue.render(), "\u{1b}[34m");
        assert_eq!(Color::Magenta.render(), "\u{1b}[35m");
        assert_eq!(Color::Cyan.render(), "\u{1b}[36m");
        assert_eq!(Color::White.render(), "\u{1b}[37m");
        assert_eq!(Color::Reset.render(), "\u{1b}[39m");
    }

    #[test]
    fn test_wrap_closes_span() {
        assert_eq!(
            wrap(Color::Red, "s"),
            format!("{}s{}", Color::Red.render(), Color::Reset.render())
        );
        // Two concatenated spans stay balanced: each opener has a reset.
        let two = format!("{}{}", wrap(Color::Red, "a"), wrap(Color::Blue, "b"));
        assert!(two.ends_with(Color::Reset.render()));
        assert_eq!(two.matches("\u{1b}[39m").count(), 2);
    }

    #[test]
    fn test_strip_colors_removes_escapes() {
        let colored = wrap(Color::Green, "hello");
        assert_eq!(strip_colors(&colored), "hello");
        assert_eq!(strip_colors("no escapes"), "no escapes");
    }

    #[test]
    fn test_display_delegates_to_render() {
        assert_eq!(format!("{}", Color::Cyan), "\u{1b}[36m");
    }
}
