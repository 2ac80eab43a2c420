//! Naming what to read: a file path or standard input.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;
use crate::io::FileReader;

/// A byte source, as given on a command line or in a config file.
///
/// Deserializes from `{ kind: stdin }` or `{ kind: file, path: ... }`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ReaderSource {
    Stdin,
    File { path: PathBuf },
}

impl ReaderSource {
    /// Parse a command-line argument. `"-"` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            ReaderSource::Stdin
        } else {
            ReaderSource::File {
                path: PathBuf::from(arg),
            }
        }
    }

    /// Identifier for messages: `"-"` for stdin, the path for files.
    pub fn id(&self) -> String {
        match self {
            ReaderSource::Stdin => "-".into(),
            ReaderSource::File { path } => path.to_string_lossy().into_owned(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            ReaderSource::Stdin => None,
            ReaderSource::File { path } => Some(path),
        }
    }

    /// Run `f` with a reader for this source.
    ///
    /// Files get a fresh reader that is closed when `f` returns. Stdin uses
    /// the shared reader, locked for the duration of the call.
    pub fn with_reader<T>(&self, f: impl FnOnce(&mut FileReader) -> T) -> Result<T> {
        match self {
            ReaderSource::Stdin => {
                let mut reader = FileReader::standard_input();
                Ok(f(&mut reader))
            }
            ReaderSource::File { path } => {
                let mut reader = FileReader::new();
                reader.open_checked(path)?;
                Ok(f(&mut reader))
            }
        }
    }
}

impl fmt::Display for ReaderSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id())
    }
}
