//! Hex dump of everything a reader yields.

use std::io::{self, Write};

use crate::io::FileReader;

const BYTES_PER_LINE: usize = 16;

/// Drain `reader` into `out` as hex lines of the form
/// `00000010: 6c 6f ...` and return the number of bytes read.
pub fn hex_dump(reader: &mut FileReader, out: &mut impl Write) -> io::Result<u64> {
    let mut offset = 0u64;
    let mut line = Vec::with_capacity(BYTES_PER_LINE);

    while let Some(byte) = reader.read_char() {
        line.push(byte);
        if line.len() == BYTES_PER_LINE {
            write_line(out, offset, &line)?;
            offset += line.len() as u64;
            line.clear();
        }
    }
    if !line.is_empty() {
        write_line(out, offset, &line)?;
        offset += line.len() as u64;
    }
    Ok(offset)
}

fn write_line(out: &mut impl Write, offset: u64, bytes: &[u8]) -> io::Result<()> {
    write!(out, "{offset:08x}:")?;
    for byte in bytes {
        write!(out, " {byte:02x}")?;
    }
    writeln!(out)
}
