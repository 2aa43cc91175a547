//! Fan-out dispatcher owning the sink registry.
//!
//! A [`Dispatcher`] routes each logical write to the sinks whose formatting
//! policy matches: [`Dispatcher::emit`] reaches colored sinks,
//! [`Dispatcher::emit_plain`] reaches plain ones. The println family builds
//! exactly one colored and one plain rendition per message and sends each to
//! its disjoint sink set.
//!
//! Fan-out is best effort: a failing sink is logged and skipped, the
//! remaining sinks still receive the write. The raw [`std::io::Write`]
//! passthrough is deliberately stricter, see its impl below.

use std::fmt::Display;
use std::io::{self, BufRead, BufReader};

use crate::color::{Color, strip_colors, wrap};
use crate::progress::Progress;
use crate::sink::{ConsoleSink, MemoryHandle, MemorySink, Sink};

/// Fan-out router for console output, plus the input source for prompts.
///
/// Invariant: every sink in the registry has successfully initialized.
/// Registry order is insertion order; it determines fan-out order only.
pub struct Dispatcher {
    sinks: Vec<Box<dyn Sink>>,
    input: Box<dyn BufRead + Send>,
    pub(crate) progress: Option<Progress>,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatcher {
    /// A dispatcher writing colored output to stdout and reading prompts
    /// from stdin.
    pub fn new() -> Self {
        let mut dispatcher = Self::empty();
        dispatcher.add_sink(ConsoleSink::new());
        dispatcher
    }

    /// A dispatcher with no sinks; writes go nowhere until one is added.
    pub fn empty() -> Self {
        Self {
            sinks: Vec::new(),
            input: Box::new(BufReader::new(io::stdin())),
            progress: None,
        }
    }

    /// Replace the whole registry with `sink`.
    ///
    /// The sink is initialized first; on failure the registry ends up empty.
    /// Previously registered sinks are dropped either way.
    pub fn set_sinks(&mut self, sink: impl Sink + 'static) {
        self.sinks.clear();
        self.add_sink(sink);
    }

    /// Initialize `sink` and append it to the registry.
    ///
    /// A sink that fails to initialize is dropped; the failure is reported
    /// on the diagnostic channel only.
    pub fn add_sink(&mut self, sink: impl Sink + 'static) {
        let mut sink = Box::new(sink);
        match sink.initialize() {
            Ok(()) => self.sinks.push(sink),
            Err(e) => tracing::warn!("excluding sink that failed to initialize: {e}"),
        }
    }

    /// Number of registered sinks.
    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    /// Replace the input source prompts read from.
    pub fn set_input(&mut self, input: impl BufRead + Send + 'static) {
        self.input = Box::new(input);
    }

    pub(crate) fn read_input_line(&mut self) -> String {
        let mut line = String::new();
        if let Err(e) = self.input.read_line(&mut line) {
            tracing::warn!("reading prompt input failed: {e}");
        }
        line
    }

    /// Write `text` verbatim to every colored-policy sink.
    ///
    /// Write errors are logged and do not abort fan-out to the remaining
    /// sinks.
    pub fn emit(&mut self, text: &str) {
        self.fan_out(text, false);
    }

    /// Write `text` verbatim to every plain-policy sink.
    pub fn emit_plain(&mut self, text: &str) {
        self.fan_out(text, true);
    }

    fn fan_out(&mut self, text: &str, plain: bool) {
        for sink in self
            .sinks
            .iter_mut()
            .filter(|sink| sink.config().plain == plain)
        {
            if let Err(e) = sink.write(text.as_bytes()) {
                tracing::warn!("dropping write to sink: {e}");
            }
        }
    }

    /// Send one finished line down both channels: the colored rendition to
    /// colored sinks, the stripped rendition to plain sinks.
    pub(crate) fn emit_line(&mut self, colored: &str) {
        let plain = strip_colors(colored).into_owned();
        self.emit(colored);
        self.emit_plain(&plain);
    }

    /// Print without a newline. Colored channel only.
    pub fn print(&mut self, text: impl Display) {
        self.emit(&text.to_string());
    }

    /// Print a line, dual-emitting the colored and plain renditions.
    pub fn println(&mut self, text: impl Display) {
        self.emit_line(&format!("{text}\n"));
    }

    /// Print a line wrapped in `color` and a trailing reset.
    pub fn println_colored(&mut self, color: Color, text: impl Display) {
        let line = wrap(color, text.to_string());
        self.emit_line(&format!("{line}\n"));
    }

    /// Print a property name and value with the value right-aligned at
    /// column 60. Oversized pairs fall back to two lines.
    pub fn print_property(&mut self, name: &str, value: &str) {
        let total = name.len() + value.len();
        let line = if total > 60 {
            format!(
                "{}{}\n{}{}{}\n",
                Color::Yellow.render(),
                name,
                Color::White.render(),
                value,
                Color::Reset.render()
            )
        } else {
            format!(
                "{}{}{}{}{}{}\n",
                Color::Yellow.render(),
                name,
                " ".repeat(60 - total),
                Color::White.render(),
                value,
                Color::Reset.render()
            )
        };
        self.emit_line(&line);
    }

    /// Print a description with a bracketed, right-aligned status token:
    /// green `OK` when `err` is `None`, red `FAIL` plus a red error line
    /// otherwise.
    pub fn print_result(&mut self, desc: &str, err: Option<&dyn std::error::Error>) {
        let (status_color, status) = match err {
            None => (Color::Green, "OK"),
            Some(_) => (Color::Red, "FAIL"),
        };
        let line = format!(
            "{}{}{}{}[{}{}{}]{}\n",
            Color::White.render(),
            desc,
            " ".repeat(60usize.saturating_sub(desc.len())),
            Color::Yellow.render(),
            status_color.render(),
            status,
            Color::Yellow.render(),
            Color::Reset.render()
        );
        self.emit_line(&line);
        if let Some(err) = err {
            self.println_colored(Color::Red, err);
        }
    }

    /// Print an informational line, colored white on the console.
    pub fn info(&mut self, message: impl Display) {
        self.println_colored(Color::White, message);
    }

    /// Print a warning line, colored yellow on the console.
    pub fn alert(&mut self, message: impl Display) {
        self.println_colored(Color::Yellow, message);
    }

    /// Print an error line, colored red on the console.
    pub fn error(&mut self, message: impl Display) {
        self.println_colored(Color::Red, message);
    }

    /// Print a debug line. Debug output is not colored.
    pub fn debug(&mut self, message: impl Display) {
        self.println(message);
    }

    /// Reroute output to a fresh in-memory sink and detach the input,
    /// returning the handle tests assert against.
    pub fn test(&mut self) -> MemoryHandle {
        let sink = MemorySink::new();
        let handle = sink.handle();
        self.set_sinks(sink);
        self.set_input(io::Cursor::new(Vec::new()));
        handle
    }

    /// Stage `text` as the next prompt input. Call before the prompt that
    /// consumes it.
    pub fn send_input(&mut self, text: impl Into<String>) {
        self.set_input(io::Cursor::new(text.into().into_bytes()));
    }
}

/// Raw passthrough used when the dispatcher stands in for a generic writer.
///
/// Unlike `emit`/`emit_plain` this ignores sink policy entirely and stops at
/// the first failing sink, returning its error. The asymmetry is part of the
/// legacy contract this crate preserves.
impl io::Write for Dispatcher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for sink in &mut self.sinks {
            if let Err(e) = sink.write(buf) {
                return Err(e.into_io());
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
