//! In-memory sink for tests.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{Sink, SinkConfig};
use crate::error::HeraldResult;

/// Sink that records every write as one entry in an in-memory sequence.
///
/// Writes never fail. The recorded entries stay reachable through a
/// [`MemoryHandle`] after the sink itself has moved into a dispatcher.
#[derive(Debug, Default)]
pub struct MemorySink {
    handle: MemoryHandle,
    plain: bool,
}

impl MemorySink {
    /// A colored-policy memory sink (the default).
    pub fn new() -> Self {
        Self::default()
    }

    /// A plain-policy memory sink.
    pub fn plain() -> Self {
        Self {
            handle: MemoryHandle::default(),
            plain: true,
        }
    }

    /// A cloneable handle onto the recorded entries.
    pub fn handle(&self) -> MemoryHandle {
        self.handle.clone()
    }
}

impl Sink for MemorySink {
    fn config(&self) -> SinkConfig {
        SinkConfig { plain: self.plain }
    }

    fn initialize(&mut self) -> HeraldResult<()> {
        self.handle.clear();
        Ok(())
    }

    fn write(&mut self, data: &[u8]) -> HeraldResult<usize> {
        let entry = String::from_utf8_lossy(data).into_owned();
        self.handle.entries.lock().push(entry);
        Ok(data.len())
    }
}

/// Shared view of a [`MemorySink`]'s recorded entries.
#[derive(Debug, Clone, Default)]
pub struct MemoryHandle {
    entries: Arc<Mutex<Vec<String>>>,
}

impl MemoryHandle {
    /// The most recent entry, or an empty string when nothing was written.
    pub fn last(&self) -> String {
        self.entries.lock().last().cloned().unwrap_or_default()
    }

    /// Every entry concatenated in write order.
    pub fn all(&self) -> String {
        self.entries.lock().concat()
    }

    /// A snapshot of the individual entries in write order.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().clone()
    }

    /// Drop all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// True when nothing was written since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_entries_in_order() {
        let mut sink = MemorySink::new();
        let handle = sink.handle();
        sink.write(b"a").unwrap();
        sink.write(b"b").unwrap();
        sink.write(b"c").unwrap();
        assert_eq!(handle.entries(), vec!["a", "b", "c"]);
        assert_eq!(handle.all(), "abc");
        assert_eq!(handle.last(), "c");
    }

    #[test]
    fn test_last_on_empty_is_empty_string() {
        let sink = MemorySink::new();
        assert_eq!(sink.handle().last(), "");
    }

    #[test]
    fn test_clear_resets() {
        let mut sink = MemorySink::new();
        let handle = sink.handle();
        sink.write(b"a").unwrap();
        handle.clear();
        assert!(handle.is_empty());
        assert_eq!(handle.all(), "");
    }

    #[test]
    fn test_plain_flag() {
        assert!(!MemorySink::new().config().plain);
        assert!(MemorySink::plain().config().plain);
    }
}
