//! Byte-at-a-time reader owning at most one file handle.

use std::fs::File;
use std::io::{self, BufReader, Read, Seek};
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::error::{ReaderError, Result};

/// Most bytes [`FileReader::unread_char`] will hold at once.
pub const MAX_PUSHBACK: usize = 64;

/// What a [`FileReader`] is currently bound to.
#[derive(Debug)]
enum Handle {
    /// An owned file. Dropping the variant closes it.
    File {
        path: PathBuf,
        file: BufReader<File>,
    },
    /// The process-wide standard input. Holds no resource, so nothing is
    /// closed when the binding goes away.
    StandardInput,
}

/// Reads single bytes from a file or from standard input.
///
/// A reader owns at most one open file. Opening another path, calling
/// [`close`](Self::close) or dropping the reader releases it. Files are opened
/// in binary mode: every byte value comes back unchanged from
/// [`read_char`](Self::read_char).
///
/// Paths never convert into a reader implicitly: use
/// [`with_path`](Self::with_path) or [`open`](Self::open).
///
/// ```compile_fail
/// use raii_reader::FileReader;
///
/// let reader: FileReader = "input.bin".into();
/// ```
///
/// ```no_run
/// use raii_reader::FileReader;
///
/// let mut reader = FileReader::with_path("input.bin");
/// if reader.is_opened() {
///     while let Some(byte) = reader.read_char() {
///         print!("{byte:02x}");
///     }
/// }
/// ```
#[derive(Debug, Default)]
pub struct FileReader {
    handle: Option<Handle>,
    /// Bytes returned by `read_char` before the handle is touched, last first.
    pushback: Vec<u8>,
    /// Set once the handle reports end of stream; cleared by open, rewind
    /// and unread.
    eof: bool,
}

impl FileReader {
    /// Create a reader with no handle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader and open `path` right away.
    ///
    /// A failed open is not reported here; check [`is_opened`](Self::is_opened).
    pub fn with_path(path: impl AsRef<Path>) -> Self {
        let mut reader = Self::new();
        reader.open(path);
        reader
    }

    pub(crate) fn bound_to_stdin() -> Self {
        Self {
            handle: Some(Handle::StandardInput),
            pushback: Vec::new(),
            eof: false,
        }
    }

    /// Open `path`, releasing the current file first.
    ///
    /// The previous file is closed even when the new open fails; on failure
    /// the reader is left empty and `false` is returned.
    pub fn open(&mut self, path: impl AsRef<Path>) -> bool {
        match self.open_checked(path) {
            Ok(()) => true,
            Err(e) => {
                debug!("{e}");
                false
            }
        }
    }

    /// Like [`open`](Self::open), but returns the reason for a failure.
    pub fn open_checked(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        self.release();

        let file = File::open(path).map_err(|source| ReaderError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        trace!("opened {}", path.display());
        self.handle = Some(Handle::File {
            path: path.to_path_buf(),
            file: BufReader::new(file),
        });
        Ok(())
    }

    /// Whether a handle is held, standard input included.
    pub fn is_opened(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether this reader is bound to the process's standard input.
    pub fn is_standard_input(&self) -> bool {
        matches!(self.handle, Some(Handle::StandardInput))
    }

    /// Path of the open file, if the reader holds one.
    pub fn path(&self) -> Option<&Path> {
        match &self.handle {
            Some(Handle::File { path, .. }) => Some(path),
            _ => None,
        }
    }

    /// Read the next byte.
    ///
    /// Returns `None` at end of stream, on a read error, and when no handle
    /// is held. End of stream does not close the handle, and it sticks: later
    /// reads return `None` without touching the handle until the reader is
    /// reopened, rewound or given a byte through `unread_char`.
    pub fn read_char(&mut self) -> Option<u8> {
        self.read_byte().unwrap_or_else(|e| {
            debug!("{e}");
            None
        })
    }

    /// Read the next byte, separating read errors from end of stream.
    ///
    /// `Ok(None)` means end of stream or no handle.
    pub fn read_byte(&mut self) -> Result<Option<u8>> {
        let Some(handle) = self.handle.as_mut() else {
            return Ok(None);
        };
        if let Some(byte) = self.pushback.pop() {
            return Ok(Some(byte));
        }
        if self.eof {
            return Ok(None);
        }

        let next = match handle {
            Handle::File { file, .. } => read_one(file),
            Handle::StandardInput => super::std_io::read_stdin_byte(),
        }
        .map_err(|source| ReaderError::Read { source })?;
        if next.is_none() {
            self.eof = true;
        }
        Ok(next)
    }

    /// Push `byte` back so the next read returns it.
    ///
    /// Up to [`MAX_PUSHBACK`] bytes may be pushed; they come back in reverse
    /// order. Returns `false` when no handle is held or the pushback is full.
    /// A successful push clears the end-of-stream state.
    pub fn unread_char(&mut self, byte: u8) -> bool {
        if self.handle.is_none() || self.pushback.len() >= MAX_PUSHBACK {
            return false;
        }
        self.pushback.push(byte);
        self.eof = false;
        true
    }

    /// Move back to the first byte of the file.
    ///
    /// Returns `false` with no handle, for standard input, or when the seek
    /// fails.
    pub fn try_rewind(&mut self) -> bool {
        match self.rewind() {
            Ok(()) => true,
            Err(e) => {
                debug!("{e}");
                false
            }
        }
    }

    /// Like [`try_rewind`](Self::try_rewind), but returns the reason for a
    /// failure.
    ///
    /// A failed seek leaves the position and any pushed-back bytes as they
    /// were.
    pub fn rewind(&mut self) -> Result<()> {
        match self.handle.as_mut() {
            None => Err(ReaderError::NotOpened),
            Some(Handle::StandardInput) => Err(ReaderError::NotSeekable),
            Some(Handle::File { file, .. }) => {
                file.rewind()
                    .map_err(|source| ReaderError::Rewind { source })?;
                self.pushback.clear();
                self.eof = false;
                Ok(())
            }
        }
    }

    /// Close the open file now instead of at scope exit.
    ///
    /// A reader bound to standard input stays bound; only its pushed-back
    /// bytes are dropped.
    pub fn close(&mut self) {
        if self.is_standard_input() {
            self.pushback.clear();
        } else {
            self.release();
        }
    }

    /// Drop the current binding. Closes an owned file, never the stdin stream.
    fn release(&mut self) {
        self.pushback.clear();
        self.eof = false;
        match self.handle.take() {
            Some(Handle::File { path, file }) => {
                drop(file);
                trace!("closed {}", path.display());
            }
            Some(Handle::StandardInput) => trace!("unbound standard input"),
            None => {}
        }
    }
}

impl Drop for FileReader {
    fn drop(&mut self) {
        self.release();
    }
}

/// Read exactly one byte, or `None` at end of stream.
pub(super) fn read_one(source: &mut impl Read) -> io::Result<Option<u8>> {
    let mut buf = [0u8; 1];
    loop {
        match source.read(&mut buf) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(buf[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}
