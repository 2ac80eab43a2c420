//! Tests for hex_dump.

use crate::FileReader;
use crate::dump::hex_dump;
use crate::tests::write_file;

#[test]
fn dumps_sixteen_bytes_per_line() {
    let bytes: Vec<u8> = (0u8..18).map(|b| b.wrapping_mul(15)).collect();
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "dump.bin", &bytes);

    let mut reader = FileReader::with_path(&path);
    let mut out = Vec::new();
    let count = hex_dump(&mut reader, &mut out).unwrap();

    assert_eq!(count, 18);
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0],
        "00000000: 00 0f 1e 2d 3c 4b 5a 69 78 87 96 a5 b4 c3 d2 e1"
    );
    assert_eq!(lines[1], "00000010: f0 ff");
}

#[test]
fn exact_line_has_no_trailing_partial() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "sixteen.bin", &[0xAB; 16]);

    let mut reader = FileReader::with_path(&path);
    let mut out = Vec::new();
    assert_eq!(hex_dump(&mut reader, &mut out).unwrap(), 16);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 1);
}

#[test]
fn empty_reader_writes_nothing() {
    let mut reader = FileReader::new();
    let mut out = Vec::new();

    assert_eq!(hex_dump(&mut reader, &mut out).unwrap(), 0);
    assert!(out.is_empty());
}
