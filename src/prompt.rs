//! Interactive prompts reading from the dispatcher's input source.
//!
//! Each prompt reads one newline-terminated line, trims surrounding
//! whitespace, and substitutes the caller-supplied default when the trimmed
//! input is empty. The input source defaults to stdin and is replaceable via
//! [`Dispatcher::set_input`] for tests.

use crate::color::Color;
use crate::dispatcher::Dispatcher;

impl Dispatcher {
    /// Ask for a string. Empty input returns `default` when one is given.
    pub fn prompt(&mut self, name: &str, default: &str) -> String {
        if default.is_empty() {
            self.print(format!(
                "{}{} : {}",
                Color::Yellow.render(),
                name,
                Color::Reset.render()
            ));
        } else {
            self.print(format!(
                "{}{} [{}]: {}",
                Color::Yellow.render(),
                name,
                default,
                Color::Reset.render()
            ));
        }
        let line = self.read_input_line();
        let input = line.trim();
        if input.is_empty() && !default.is_empty() {
            default.to_string()
        } else {
            input.to_string()
        }
    }

    /// Ask a yes/no question. `y`/`yes` and `n`/`no` (case-insensitive) are
    /// recognized; anything else returns `default`.
    pub fn prompt_bool(&mut self, message: &str, default: bool) -> bool {
        let marker = if default { "Y" } else { "N" };
        self.print(format!(
            "{}{} [{}]: {}",
            Color::Yellow.render(),
            message,
            marker,
            Color::Reset.render()
        ));
        let line = self.read_input_line();
        match line.trim().to_lowercase().as_str() {
            "y" | "yes" => true,
            "n" | "no" => false,
            _ => default,
        }
    }

    /// Ask the user to pick one of `choices` by 1-based number.
    ///
    /// Unparsable or out-of-range input falls back to `choices[default_idx]`.
    ///
    /// # Panics
    /// Panics when `default_idx` is out of range for `choices`.
    pub fn prompt_choice(&mut self, message: &str, choices: &[&str], default_idx: usize) -> String {
        let mut listing = String::from(message);
        for (idx, choice) in choices.iter().enumerate() {
            listing.push_str(&format!("\n{}. {}", idx + 1, choice));
        }
        self.println(listing);
        self.print(format!(
            "{}[{}] {}",
            Color::Yellow.render(),
            choices[default_idx],
            Color::Reset.render()
        ));
        let line = self.read_input_line();
        match line.trim().parse::<usize>() {
            Ok(choice) if (1..=choices.len()).contains(&choice) => choices[choice - 1].to_string(),
            _ => choices[default_idx].to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_trims_input() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.test();
        dispatcher.send_input("  spaced out  \n");
        assert_eq!(dispatcher.prompt("Name", "fallback"), "spaced out");
    }

    #[test]
    fn test_prompt_empty_input_takes_default() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.test();
        dispatcher.send_input("\n");
        assert_eq!(dispatcher.prompt("Name", "fallback"), "fallback");
    }

    #[test]
    fn test_prompt_empty_input_without_default_is_empty() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.test();
        dispatcher.send_input("\n");
        assert_eq!(dispatcher.prompt("Name", ""), "");
    }

    #[test]
    fn test_prompt_shows_default_marker() {
        let mut dispatcher = Dispatcher::empty();
        let handle = dispatcher.test();
        dispatcher.send_input("\n");
        dispatcher.prompt("File", "a.txt");
        assert_eq!(
            handle.last(),
            format!(
                "{}File [a.txt]: {}",
                Color::Yellow.render(),
                Color::Reset.render()
            )
        );
    }

    #[test]
    fn test_prompt_bool_variants() {
        for (input, default, expected) in [
            ("y\n", false, true),
            ("YES\n", false, true),
            ("n\n", true, false),
            ("no\n", true, false),
            ("\n", true, true),
            ("maybe\n", false, false),
        ] {
            let mut dispatcher = Dispatcher::empty();
            dispatcher.test();
            dispatcher.send_input(input);
            assert_eq!(
                dispatcher.prompt_bool("Continue?", default),
                expected,
                "input {input:?} default {default}"
            );
        }
    }

    #[test]
    fn test_prompt_choice_picks_by_number() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.test();
        dispatcher.send_input("2\n");
        let picked = dispatcher.prompt_choice("Choose an option:", &["one", "two", "three"], 0);
        assert_eq!(picked, "two");
    }

    #[test]
    fn test_prompt_choice_falls_back_on_garbage() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.test();
        dispatcher.send_input("not a number\n");
        let picked = dispatcher.prompt_choice("Choose an option:", &["one", "two"], 1);
        assert_eq!(picked, "two");
    }

    #[test]
    fn test_prompt_choice_falls_back_out_of_range() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.test();
        dispatcher.send_input("9\n");
        let picked = dispatcher.prompt_choice("Choose an option:", &["one", "two"], 0);
        assert_eq!(picked, "one");
    }

    #[test]
    fn test_prompt_choice_lists_numbered_options() {
        let mut dispatcher = Dispatcher::empty();
        let handle = dispatcher.test();
        dispatcher.send_input("1\n");
        dispatcher.prompt_choice("Choose an option:", &["alpha", "beta"], 0);
        let output = handle.all();
        assert!(output.contains("Choose an option:\n1. alpha\n2. beta\n"));
        assert!(output.contains("[alpha] "));
    }
}
