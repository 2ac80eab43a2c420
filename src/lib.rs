//! # raii-reader
//!
//! A byte-at-a-time reader over a file or the process's standard input.
//!
//! ## Overview
//!
//! raii-reader provides:
//! - **Scoped ownership**: a [`FileReader`] owns at most one open file and
//!   closes it when dropped, reopened or closed
//! - **Byte reads**: [`FileReader::read_char`] yields `Option<u8>`, so byte
//!   `0xFF` is never confused with end of stream
//! - **Rewind**: [`FileReader::try_rewind`] restarts a file from offset zero
//! - **Shared stdin**: [`FileReader::standard_input`] is one process-wide
//!   reader bound to standard input, never closed
//! - **Sources**: [`ReaderSource`] parses `-`/path arguments and config
//!   entries into something a reader can be built from
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use raii_reader::FileReader;
//!
//! let mut reader = FileReader::with_path("data.bin");
//! let mut count = 0usize;
//! while reader.read_char().is_some() {
//!     count += 1;
//! }
//! assert!(reader.try_rewind());
//! // the file is closed here
//! ```
//!
//! ## Failure model
//!
//! The core operations never panic and never return errors: a failed open
//! shows up as `is_opened() == false`, a failed rewind as `false`, and end of
//! stream as `None`. The `open_checked`, `rewind` and `read_byte` variants
//! return [`ReaderError`] when the reason matters. Failures are logged
//! through the `log` facade at debug level.

pub mod dump;
pub mod error;
pub mod io;
pub mod source;

pub use dump::hex_dump;
pub use error::ReaderError;
pub use io::{FileReader, MAX_PUSHBACK};
pub use source::ReaderSource;
