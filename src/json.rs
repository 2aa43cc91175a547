//! Colorized JSON output.
//!
//! A sequence of regex substitution passes over pretty-printed JSON, not a
//! parser. Pass order matters: each pass runs on the previous pass's output
//! so overlapping matches never double-color. The string-value pattern is a
//! heuristic (a quoted token not immediately followed by a colon) and can
//! mis-highlight values containing escaped quotes or colons; that output is
//! part of the contract this crate preserves, do not swap in a real parser
//! without updating the expected output in the tests.

use std::sync::OnceLock;

use regex::Regex;

use crate::color::{Color, wrap};
use crate::dispatcher::Dispatcher;
use crate::error::HeraldError;

fn brackets_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([\[\]{}])").expect("valid bracket pattern"))
}

fn string_value_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"(\s*?")([^:]*?)("\s*?,?\n)"#).expect("valid string pattern"))
}

fn bool_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(:\s*[true|false]+\s*[,\n])").expect("valid bool pattern"))
}

fn number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(:\s*[0-9]+\s*[,\n])").expect("valid number pattern"))
}

fn null_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(:\s*null\s*[,\n])").expect("valid null pattern"))
}

/// Re-color `content` (already indented) with the legacy highlight passes.
fn highlight(content: &str) -> String {
    let content = brackets_re().replace_all(content, wrap(Color::Green, "${1}"));
    let content = string_value_re().replace_all(
        &content,
        format!(
            "${{1}}{}${{2}}{}${{3}}",
            Color::Blue.render(),
            Color::Reset.render()
        ),
    );
    let content = bool_re().replace_all(&content, wrap(Color::Magenta, "${1}"));
    let content = number_re().replace_all(&content, wrap(Color::Yellow, "${1}"));
    let content = null_re().replace_all(&content, wrap(Color::Red, "${1}"));
    content.into_owned()
}

impl Dispatcher {
    /// Print JSON content re-indented with 2 spaces and syntax highlighted.
    ///
    /// Plain sinks receive the indented, uncolored text; colored sinks the
    /// highlighted rendition. Content that does not parse as JSON is passed
    /// through unmodified to both channels with a diagnostic.
    pub fn print_json(&mut self, content: &[u8]) {
        let indented = match serde_json::from_slice::<serde_json::Value>(content)
            .and_then(|value| serde_json::to_string_pretty(&value))
        {
            Ok(indented) => indented,
            Err(source) => {
                let e = HeraldError::MalformedInput { source };
                tracing::warn!("passing content through unhighlighted: {e}");
                let raw = String::from_utf8_lossy(content);
                self.emit_plain(&raw);
                self.emit(&raw);
                return;
            }
        };

        self.emit_plain(&indented);
        self.emit(&highlight(&indented));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brackets_go_green() {
        let out = highlight("{}\n");
        assert_eq!(
            out,
            format!("{}{}\n", wrap(Color::Green, "{"), wrap(Color::Green, "}"))
        );
    }

    #[test]
    fn test_string_values_go_blue_but_keys_do_not() {
        let out = highlight("{\n  \"name\": \"alpha\"\n}\n");
        // The key is followed by a colon and stays uncolored.
        assert!(out.contains("\"name\""));
        assert!(!out.contains(&format!("{}name", Color::Blue.render())));
        // The value body is wrapped in blue.
        assert!(out.contains(&format!(
            "\"{}alpha{}\"",
            Color::Blue.render(),
            Color::Reset.render()
        )));
    }

    #[test]
    fn test_literals_get_their_colors() {
        let out = highlight("{\n  \"a\": true,\n  \"b\": 42,\n  \"c\": null\n}\n");
        // The trailing [,\n] class consumes a single character, so matches
        // before a comma stop at the comma.
        assert!(out.contains(&wrap(Color::Magenta, ": true,")));
        assert!(out.contains(&wrap(Color::Yellow, ": 42,")));
        assert!(out.contains(&wrap(Color::Red, ": null\n")));
    }

    #[test]
    fn test_number_followed_by_newline_matches() {
        let out = highlight("{\n  \"a\": 1\n}\n");
        assert!(out.contains(&wrap(Color::Yellow, ": 1\n")));
    }
}
