//! Console output helpers for terminal applications.
//!
//! Formatted, colorized printing routed through configurable output sinks:
//!
//! - Common printing tasks: property key/value pairs, result lines with
//!   OK/FAIL status, log-level messages (info, alert, error, debug)
//! - JSON output with re-indentation and syntax highlighting
//! - Interactive prompts (string, yes/no, numbered choice)
//! - In-place progress bars
//! - Redirectable sinks so tests can capture everything in memory
//!
//! The core object is the [`Dispatcher`]: it owns an ordered sink registry
//! and fans every logical message out as one colored and one plain
//! rendition, routed to disjoint sink sets by each sink's policy. The
//! [`global`] module offers a process-wide default instance for binaries
//! that do not want to pass a handle around.
//!
//! ```no_run
//! use herald::{Color, Dispatcher};
//!
//! let mut out = Dispatcher::new();
//! out.println_colored(Color::Red, "something is wrong");
//! out.print_property("Version", "0.1.0");
//! out.print_result("connect to database", None);
//! ```
//!
//! Capturing output in tests:
//!
//! ```
//! let mut out = herald::Dispatcher::empty();
//! let captured = out.test();
//! out.info("hello");
//! assert_eq!(captured.last(), "\u{1b}[37mhello\u{1b}[39m\n");
//! ```

pub mod color;
pub mod dispatcher;
pub mod error;
pub mod global;
pub mod sink;

mod json;
mod progress;
mod prompt;

pub use color::{Color, strip_colors, wrap};
pub use dispatcher::Dispatcher;
pub use error::{HeraldError, HeraldResult};
pub use sink::{ConsoleSink, FileSink, MemoryHandle, MemorySink, Sink, SinkConfig, WriterSink};
