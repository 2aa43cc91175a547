//! Output sinks and their formatting policy.
//!
//! A sink is a configured output destination: the console, a file, an
//! in-memory test buffer, or any byte stream. Each sink carries a
//! [`SinkConfig`] declaring whether it wants the ANSI-colored rendition of a
//! message or the color-stripped one. The dispatcher routes every logical
//! message to exactly one of the two renditions per sink, never both.

mod console;
mod file;
mod memory;
mod writer;

pub use console::ConsoleSink;
pub use file::FileSink;
pub use memory::{MemoryHandle, MemorySink};
pub use writer::WriterSink;

use crate::error::HeraldResult;

/// Formatting policy attached to a sink.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinkConfig {
    /// When true the sink receives escape-code-free text (files, logs).
    /// When false it receives the colored rendition.
    pub plain: bool,
}

/// A polymorphic output target.
///
/// Lifecycle: the dispatcher calls [`Sink::initialize`] exactly once before
/// the sink enters the registry; a failing sink is excluded. There is no
/// explicit close, resources are released when the sink drops.
pub trait Sink: Send {
    /// The sink's formatting policy. Pure and constant per instance.
    fn config(&self) -> SinkConfig;

    /// Acquire the output resource. Must be safe to call once.
    fn initialize(&mut self) -> HeraldResult<()>;

    /// Attempt a full write of `data`, reporting the byte count on success.
    fn write(&mut self, data: &[u8]) -> HeraldResult<usize>;
}
