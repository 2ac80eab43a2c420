//! Error types for reader operations.
//!
//! The boolean surface of [`FileReader`](crate::FileReader) (`open`,
//! `try_rewind`, `read_char`) swallows these errors after logging them. The
//! `*_checked` / `rewind` / `read_byte` counterparts return them so callers
//! can tell why an operation failed.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReaderError>;

#[derive(Debug, Error)]
pub enum ReaderError {
    /// The OS refused to open the path for reading.
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The reader holds no handle.
    #[error("reader is not opened")]
    NotOpened,

    /// Rewind was requested on the standard-input stream.
    #[error("standard input cannot be rewound")]
    NotSeekable,

    #[error("seek to start failed: {source}")]
    Rewind {
        #[source]
        source: io::Error,
    },

    #[error("read failed: {source}")]
    Read {
        #[source]
        source: io::Error,
    },
}

impl ReaderError {
    /// The underlying OS error, if there is one.
    pub fn io_error(&self) -> Option<&io::Error> {
        match self {
            ReaderError::Open { source, .. }
            | ReaderError::Rewind { source }
            | ReaderError::Read { source } => Some(source),
            ReaderError::NotOpened | ReaderError::NotSeekable => None,
        }
    }
}
