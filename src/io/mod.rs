//! Reader implementation.
//!
//! This module provides:
//! - `FileReader`: single-byte reads from a file it owns
//! - `FileReader::standard_input`: the shared reader bound to stdin

mod reader;
mod std_io;

pub use reader::{FileReader, MAX_PUSHBACK};
