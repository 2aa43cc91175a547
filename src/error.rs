//! Error types for sink setup and dispatch.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeraldError {
    /// A sink could not acquire its output resource. The sink is excluded
    /// from the registry; the dispatcher keeps running.
    #[error("sink initialization failed: {source}")]
    SinkInit {
        #[source]
        source: std::io::Error,
    },

    /// An I/O failure while fanning a write out to a sink. Logged and
    /// swallowed by `emit`/`emit_plain`; halts the raw `io::Write`
    /// passthrough.
    #[error("sink write failed: {source}")]
    Write {
        #[source]
        source: std::io::Error,
    },

    /// The JSON highlighter received content that does not parse as JSON.
    /// The content is passed through unhighlighted.
    #[error("malformed JSON input: {source}")]
    MalformedInput {
        #[source]
        source: serde_json::Error,
    },
}

impl HeraldError {
    pub(crate) fn sink_init(source: std::io::Error) -> Self {
        Self::SinkInit { source }
    }

    pub(crate) fn write(source: std::io::Error) -> Self {
        Self::Write { source }
    }

    /// Unwrap back to the underlying I/O error for `io::Write` callers.
    pub(crate) fn into_io(self) -> std::io::Error {
        match self {
            Self::SinkInit { source } | Self::Write { source } => source,
            other => std::io::Error::other(other),
        }
    }
}

pub type HeraldResult<T> = Result<T, HeraldError>;
