//! Tests for ReaderError.

use std::error::Error as _;
use std::io;
use std::path::PathBuf;

use crate::error::ReaderError;

#[test]
fn open_error_names_path_and_cause() {
    let err = ReaderError::Open {
        path: PathBuf::from("data/in.bin"),
        source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
    };

    let msg = err.to_string();
    assert!(msg.contains("data/in.bin"));
    assert!(msg.contains("no such file"));
    assert!(err.source().is_some());
    assert_eq!(err.io_error().map(io::Error::kind), Some(io::ErrorKind::NotFound));
}

#[test]
fn state_errors_have_no_io_cause() {
    assert!(ReaderError::NotOpened.io_error().is_none());
    assert!(ReaderError::NotSeekable.io_error().is_none());
    assert!(ReaderError::NotOpened.source().is_none());
    assert_eq!(ReaderError::NotSeekable.to_string(), "standard input cannot be rewound");
}

#[test]
fn rewind_and_read_errors_keep_cause() {
    let rewind = ReaderError::Rewind {
        source: io::Error::new(io::ErrorKind::Unsupported, "illegal seek"),
    };
    let read = ReaderError::Read {
        source: io::Error::new(io::ErrorKind::Other, "bad descriptor"),
    };

    assert!(rewind.to_string().contains("illegal seek"));
    assert_eq!(rewind.io_error().map(io::Error::kind), Some(io::ErrorKind::Unsupported));
    assert!(read.to_string().starts_with("read failed"));
    assert!(read.io_error().is_some());
}
