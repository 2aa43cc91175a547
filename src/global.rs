//! Process-wide default dispatcher.
//!
//! An opt-in convenience layer for applications that want `herald::info(...)`
//! without threading a [`Dispatcher`] handle around. The instance is built on
//! first use behind a mutex and lives for the whole process; there is no
//! teardown. Libraries should take an explicit [`Dispatcher`] instead.
//!
//! Process-exit policy ([`fatal`]) lives here, outside the dispatcher core.

use std::fmt::Display;
use std::io::BufRead;
use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::color::Color;
use crate::dispatcher::Dispatcher;
use crate::sink::{MemoryHandle, Sink};

static GLOBAL: OnceLock<Mutex<Dispatcher>> = OnceLock::new();

fn global() -> &'static Mutex<Dispatcher> {
    GLOBAL.get_or_init(|| Mutex::new(Dispatcher::new()))
}

/// Run a closure against the global dispatcher.
///
/// The lock is held for the closure's duration; keep it short.
pub fn with<T>(f: impl FnOnce(&mut Dispatcher) -> T) -> T {
    f(&mut global().lock())
}

/// Replace the global registry with a single sink. See
/// [`Dispatcher::set_sinks`].
pub fn set_sinks(sink: impl Sink + 'static) {
    with(|d| d.set_sinks(sink));
}

/// Append a sink to the global registry. See [`Dispatcher::add_sink`].
pub fn add_sink(sink: impl Sink + 'static) {
    with(|d| d.add_sink(sink));
}

/// Replace the input source global prompts read from.
pub fn set_input(input: impl BufRead + Send + 'static) {
    with(|d| d.set_input(input));
}

pub fn print(text: impl Display) {
    with(|d| d.print(text));
}

pub fn println(text: impl Display) {
    with(|d| d.println(text));
}

pub fn println_colored(color: Color, text: impl Display) {
    with(|d| d.println_colored(color, text));
}

pub fn print_property(name: &str, value: &str) {
    with(|d| d.print_property(name, value));
}

pub fn print_result(desc: &str, err: Option<&dyn std::error::Error>) {
    with(|d| d.print_result(desc, err));
}

pub fn print_json(content: &[u8]) {
    with(|d| d.print_json(content));
}

pub fn info(message: impl Display) {
    with(|d| d.info(message));
}

pub fn alert(message: impl Display) {
    with(|d| d.alert(message));
}

pub fn error(message: impl Display) {
    with(|d| d.error(message));
}

pub fn debug(message: impl Display) {
    with(|d| d.debug(message));
}

pub fn prompt(name: &str, default: &str) -> String {
    with(|d| d.prompt(name, default))
}

pub fn prompt_bool(message: &str, default: bool) -> bool {
    with(|d| d.prompt_bool(message, default))
}

pub fn prompt_choice(message: &str, choices: &[&str], default_idx: usize) -> String {
    with(|d| d.prompt_choice(message, choices, default_idx))
}

pub fn start_progress(current: usize, max: usize) {
    with(|d| d.start_progress(current, max));
}

pub fn inc_progress() {
    with(|d| d.inc_progress());
}

pub fn set_progress(current: usize) {
    with(|d| d.set_progress(current));
}

pub fn stop_progress() {
    with(|d| d.stop_progress());
}

/// Reroute the global dispatcher to an in-memory sink for tests, returning
/// the handle to assert against. See [`Dispatcher::test`].
pub fn test() -> MemoryHandle {
    with(|d| d.test())
}

/// Stage input for the next global prompt. Must be called before the prompt
/// that consumes it.
pub fn send_input(text: impl Into<String>) {
    with(|d| d.send_input(text));
}

/// Print an error line and exit the process with a failure code.
pub fn fatal(message: impl Display) -> ! {
    error(message);
    std::process::exit(1);
}
