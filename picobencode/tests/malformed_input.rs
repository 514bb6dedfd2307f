// SPDX-License-Identifier: Apache-2.0

// Best-effort reads must never panic or read out of bounds; they count
// errors and keep going. Fail-fast reads stop at the first problem.

use picobencode::{ReadErrorKind, TokenReader, Value, WriteError, Writer};
use test_log::test;

/// Reads `input` as `d <str> <int> e` best-effort and returns the error count.
fn read_dict_of_one(input: &[u8]) -> usize {
    let mut reader = TokenReader::new(input);
    reader.read_dict();
    reader.read_str();
    reader.read_int();
    reader.read_end();
    reader.error_count()
}

#[test]
fn test_well_formed_has_no_errors() {
    assert_eq!(read_dict_of_one(b"d2:!!i3ee"), 0);
}

#[test]
fn test_missing_terminators_are_counted() {
    // Missing the dict's closing e
    assert_eq!(read_dict_of_one(b"d2:!!i3e"), 1);
    // Missing the integer's e
    assert!(read_dict_of_one(b"d2:!!i3") > 0);
}

#[test]
fn test_every_truncation_is_detected() {
    let full = b"d2:!!i3ee";
    for cut in 0..full.len() {
        assert!(
            read_dict_of_one(&full[..cut]) > 0,
            "truncation at {} went unnoticed",
            cut
        );
    }
}

#[test]
fn test_garbage_never_panics() {
    let inputs: [&[u8]; 8] = [
        b"",
        b"e",
        b"xxxx",
        b"d99999999999999999999999:i3ee",
        b"d2:!!i-e",
        b"d2:!!i--3ee",
        b"d:i3ee",
        b"\xff\x00\xfe",
    ];
    for input in inputs {
        assert!(read_dict_of_one(input) > 0, "input {:?} was accepted", input);
    }
}

#[test]
fn test_declared_length_past_end() {
    let mut reader = TokenReader::new(b"10:short");
    assert_eq!(reader.read_str(), b"short");
    assert_eq!(
        reader.first_error().map(|e| e.kind()),
        Some(ReadErrorKind::Truncated)
    );
    assert!(reader.is_empty());
}

#[test]
fn test_oversized_length_prefix() {
    let mut reader = TokenReader::new(b"99999999999999999999999:x");
    let err = reader.try_read_str().unwrap_err();
    assert_eq!(err.kind(), ReadErrorKind::Overflow);
    assert_eq!(reader.remaining(), b"x");
}

#[test]
fn test_fail_fast_stops_at_first_error() {
    let mut reader = TokenReader::new(b"li1ei2x");
    assert!(reader.try_read_list().is_ok());
    assert_eq!(reader.try_read_int(), Ok(1));
    let err = reader.try_read_int().unwrap_err();
    assert_eq!(err.kind(), ReadErrorKind::TokenMismatch);
    assert_eq!(err.byte(), Some(b'x'));
    assert_eq!(err.position(), 6);
    assert_eq!(reader.first_error(), Some(err));
}

#[test]
fn test_next_token_reports_truncation() {
    let mut reader = TokenReader::new(b"l4:sp");
    assert!(reader.next_token().is_ok());
    let err = reader.next_token().unwrap_err();
    assert_eq!(err.kind(), ReadErrorKind::Truncated);
    assert_eq!(reader.error_count(), 1);
}

#[test]
fn test_writer_capacity_overflow_is_reported() {
    let wide: Vec<Value<'static>> = (0..1000).map(Value::int).collect();
    let root = Value::list(&wide);
    let mut out = vec![0u8; 8192];

    assert_eq!(
        picobencode::write(&root, &mut out),
        Err(WriteError::CapacityExceeded { capacity: 768 })
    );
    assert_eq!(
        Writer::<1001>::with_capacity().write(&root, &mut out).map(|n| n > 0),
        Ok(true)
    );
}

#[test]
fn test_writer_buffer_overflow_is_reported() {
    let items = [Value::str("hello"), Value::str("world")];
    let root = Value::list(&items);
    let mut out = [0u8; 10];
    assert_eq!(
        picobencode::write(&root, &mut out),
        Err(WriteError::BufferFull { written: 10 })
    );
}
