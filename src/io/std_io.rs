//! The shared reader bound to standard input.

use std::io;

use log::trace;
use once_cell::sync::Lazy;
use parking_lot::{Mutex, MutexGuard};

use super::reader::{FileReader, read_one};

static STANDARD_INPUT: Lazy<Mutex<FileReader>> = Lazy::new(|| {
    trace!("binding shared reader to standard input");
    Mutex::new(FileReader::bound_to_stdin())
});

impl FileReader {
    /// Lock the process-wide reader bound to standard input.
    ///
    /// The reader is created on first use and lives until the process exits;
    /// dropping the guard never closes the stream. Every caller consumes the
    /// same byte sequence, so interleaving reads from several places splits
    /// the input between them. Do not hold the guard while calling this
    /// again on the same thread: the lock is not reentrant.
    ///
    /// Standard input is never rewindable through this reader.
    pub fn standard_input() -> MutexGuard<'static, FileReader> {
        STANDARD_INPUT.lock()
    }
}

pub(super) fn read_stdin_byte() -> io::Result<Option<u8>> {
    read_one(&mut io::stdin().lock())
}
