//! Tests for ReaderConfig defaults, builders and validation.

use crate::{DEFAULT_BUFFER_LIMIT, DEFAULT_CHUNK_SIZE, Error, ReaderConfig};

#[test]
fn defaults_match_reader_defaults() {
    let config = ReaderConfig::default();

    assert_eq!(config.record_separator, b'\n');
    assert_eq!(config.field_separator, r"\s+");
    assert_eq!(config.buffer_limit, DEFAULT_BUFFER_LIMIT);
    assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
    assert!(config.validate().is_ok());
}

#[test]
fn builders_set_fields() {
    let config = ReaderConfig::new()
        .with_record_separator(b'#')
        .with_field_separator("[,;]")
        .with_buffer_limit(16)
        .with_chunk_size(3);

    assert_eq!(config.record_separator, b'#');
    assert_eq!(config.field_separator, "[,;]");
    assert_eq!(config.buffer_limit, 16);
    assert_eq!(config.chunk_size, 3);

    let fs = config.field_separator_regex().unwrap();
    assert_eq!(fs.split("a,b;c").collect::<Vec<_>>(), vec!["a", "b", "c"]);
}

#[test]
fn zero_buffer_limit_is_rejected() {
    let err = ReaderConfig::new().with_buffer_limit(0).validate().unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("buffer_limit")));
}

#[test]
fn zero_chunk_size_is_rejected() {
    let err = ReaderConfig::new().with_chunk_size(0).validate().unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("chunk_size")));
}

#[test]
fn bad_field_separator_is_rejected() {
    let err = ReaderConfig::new()
        .with_field_separator("(unclosed")
        .validate()
        .unwrap_err();
    assert!(matches!(err, Error::Pattern(_)));
}

#[cfg(feature = "json")]
#[test]
fn json_fills_missing_fields_with_defaults() {
    let config = ReaderConfig::from_json_str(r##"{ "record_separator": "#", "buffer_limit": 8 }"##)
        .unwrap();

    assert_eq!(config.record_separator, b'#');
    assert_eq!(config.buffer_limit, 8);
    assert_eq!(config.field_separator, r"\s+");
    assert_eq!(config.chunk_size, DEFAULT_CHUNK_SIZE);
}

#[cfg(feature = "json")]
#[test]
fn json_rejects_multi_byte_separator() {
    let err = ReaderConfig::from_json_str(r#"{ "record_separator": "ab" }"#).unwrap_err();
    assert!(matches!(err, Error::Config(ref msg) if msg.contains("single byte")));
}

#[cfg(feature = "json")]
#[test]
fn json_is_validated() {
    let err = ReaderConfig::from_json_str(r#"{ "chunk_size": 0 }"#).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_config_parses() {
    let config = ReaderConfig::from_yaml_str("record_separator: ';'\nfield_separator: ','\n").unwrap();

    assert_eq!(config.record_separator, b';');
    assert_eq!(config.field_separator, ",");
    assert_eq!(config.buffer_limit, DEFAULT_BUFFER_LIMIT);
}
