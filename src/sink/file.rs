//! Sink that appends plain text to a local file.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;

use super::{Sink, SinkConfig};
use crate::error::{HeraldError, HeraldResult};

/// Plain-policy sink appending to the file at a fixed path.
///
/// The handle is opened by [`Sink::initialize`] (create + append) and held
/// for the sink's lifetime; dropping the sink releases it. Initialization
/// failure keeps the sink out of the dispatcher's registry.
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: Option<File>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file: None,
        }
    }

    /// The path this sink appends to.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn config(&self) -> SinkConfig {
        SinkConfig { plain: true }
    }

    fn initialize(&mut self) -> HeraldResult<()> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(HeraldError::sink_init)?;
        self.file = Some(file);
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> HeraldResult<usize> {
        let Some(file) = self.file.as_mut() else {
            return Err(HeraldError::write(io::Error::new(
                io::ErrorKind::NotConnected,
                "file sink used before initialization",
            )));
        };
        file.write_all(data).map_err(HeraldError::write)?;
        Ok(data.len())
    }
}
