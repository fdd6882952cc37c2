use std::io::{Cursor, ErrorKind};

use crate::scanner::{Scanner, Token, next_token};
use crate::tests::support::{FailingReader, InterruptingReader, OneByteReader};

fn scan_all(scanner: &mut Scanner, source: &mut dyn std::io::Read, rs: u8) -> Vec<String> {
    let mut records = Vec::new();
    let mut record = Vec::new();
    while scanner
        .next_record(source, rs, &mut record)
        .expect("scan should succeed")
    {
        records.push(String::from_utf8(record.clone()).expect("test data is utf-8"));
    }
    records
}

#[test]
fn token_includes_separator() {
    assert_eq!(next_token(b"ab\ncd", 0, b'\n', false), Token::Record(3));
    assert_eq!(next_token(b"ab\ncd", 0, b'\n', true), Token::Record(3));
}

#[test]
fn token_needs_more_without_separator() {
    assert_eq!(next_token(b"abc", 0, b'\n', false), Token::NeedMore);
    assert_eq!(next_token(b"", 0, b'\n', false), Token::NeedMore);
}

#[test]
fn token_final_record_without_separator() {
    assert_eq!(next_token(b"abc", 0, b'\n', true), Token::Record(3));
}

#[test]
fn token_end_on_empty_exhausted_buffer() {
    assert_eq!(next_token(b"", 0, b'\n', true), Token::End);
}

#[test]
fn token_skips_searched_prefix() {
    assert_eq!(next_token(b"abcd#", 4, b'#', false), Token::Record(5));
}

#[test]
fn splits_on_newline_keeping_separators() {
    let mut scanner = Scanner::new(8192);
    let mut source = Cursor::new("111\n222\n333");
    assert_eq!(
        scan_all(&mut scanner, &mut source, b'\n'),
        vec!["111\n", "222\n", "333"]
    );
}

#[test]
fn trailing_separator_yields_no_empty_record() {
    let mut scanner = Scanner::new(8192);
    let mut source = Cursor::new("111\n222\n");
    assert_eq!(
        scan_all(&mut scanner, &mut source, b'\n'),
        vec!["111\n", "222\n"]
    );
}

#[test]
fn empty_source_yields_no_records() {
    let mut scanner = Scanner::new(8192);
    let mut source = Cursor::new("");
    assert!(scan_all(&mut scanner, &mut source, b'\n').is_empty());
}

#[test]
fn separator_only_source_yields_one_record() {
    let mut scanner = Scanner::new(8192);
    let mut source = Cursor::new("\n");
    assert_eq!(scan_all(&mut scanner, &mut source, b'\n'), vec!["\n"]);
}

#[test]
fn consecutive_separators_yield_separator_records() {
    let mut scanner = Scanner::new(8192);
    let mut source = Cursor::new("a##b");
    assert_eq!(
        scan_all(&mut scanner, &mut source, b'#'),
        vec!["a#", "#", "b"]
    );
}

#[test]
fn records_longer_than_chunk_are_assembled() {
    let long = "x".repeat(100);
    let input = format!("{long}\n{long}");
    let mut scanner = Scanner::new(7);
    let mut source = Cursor::new(input.clone());
    assert_eq!(
        scan_all(&mut scanner, &mut source, b'\n'),
        vec![format!("{long}\n"), long]
    );
}

#[test]
fn one_byte_reads_give_same_records() {
    let mut scanner = Scanner::new(4);
    let mut source = OneByteReader::new("ab\ncd\n\nef");
    assert_eq!(
        scan_all(&mut scanner, &mut source, b'\n'),
        vec!["ab\n", "cd\n", "\n", "ef"]
    );
}

#[test]
fn separator_change_applies_to_next_scan_only() {
    let mut scanner = Scanner::new(8192);
    let mut source = Cursor::new("a#b\nc#d");
    let mut record = Vec::new();

    assert!(scanner.next_record(&mut source, b'\n', &mut record).unwrap());
    assert_eq!(record, b"a#b\n");

    assert!(scanner.next_record(&mut source, b'#', &mut record).unwrap());
    assert_eq!(record, b"c#");
    assert!(scanner.next_record(&mut source, b'#', &mut record).unwrap());
    assert_eq!(record, b"d");
    assert!(!scanner.next_record(&mut source, b'#', &mut record).unwrap());
}

#[test]
fn interrupted_reads_are_retried() {
    let mut scanner = Scanner::new(2);
    let mut source = InterruptingReader::new(Cursor::new("ab\ncd"));
    assert_eq!(
        scan_all(&mut scanner, &mut source, b'\n'),
        vec!["ab\n", "cd"]
    );
}

#[test]
fn source_errors_are_returned() {
    let mut scanner = Scanner::new(8192);
    let mut source = FailingReader::new("ok\npartial");
    let mut record = Vec::new();

    assert!(scanner.next_record(&mut source, b'\n', &mut record).unwrap());
    assert_eq!(record, b"ok\n");

    let err = scanner
        .next_record(&mut source, b'\n', &mut record)
        .expect_err("source failure should surface");
    assert_eq!(err.kind(), ErrorKind::Other);
}
