//! Sink that forwards to the process's standard output.

use std::io::Write;

use super::{Sink, SinkConfig};
use crate::error::{HeraldError, HeraldResult};

/// Colored-policy sink writing straight to stdout.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl Sink for ConsoleSink {
    fn config(&self) -> SinkConfig {
        SinkConfig { plain: false }
    }

    fn initialize(&mut self) -> HeraldResult<()> {
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> HeraldResult<usize> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(data).map_err(HeraldError::write)?;
        Ok(data.len())
    }
}
