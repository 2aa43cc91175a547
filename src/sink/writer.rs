//! Generic sink over any byte stream.

use std::io::Write;

use super::{Sink, SinkConfig};
use crate::error::{HeraldError, HeraldResult};

/// Sink delegating to an arbitrary `io::Write` destination.
///
/// The formatting policy is caller-supplied; initialization is a no-op.
pub struct WriterSink<W: Write + Send> {
    writer: W,
    plain: bool,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(writer: W, plain: bool) -> Self {
        Self { writer, plain }
    }

    /// Consume the sink and hand back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn config(&self) -> SinkConfig {
        SinkConfig { plain: self.plain }
    }

    fn initialize(&mut self) -> HeraldResult<()> {
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> HeraldResult<usize> {
        self.writer.write_all(data).map_err(HeraldError::write)?;
        Ok(data.len())
    }
}
