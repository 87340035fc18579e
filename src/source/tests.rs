use super::*;
use std::io::Write;

#[test]
fn test_with_text_keeps_index() {
    let buffer = SourceBuffer::new(2, "int a;");
    let edited = buffer.with_text("int b;");
    assert_eq!(edited.index, 2);
    assert_eq!(edited.text(), "int b;");
    assert_eq!(buffer.text(), "int a;");
}

#[test]
fn test_char_len_counts_characters() {
    assert_eq!(SourceBuffer::new(0, "µs").char_len(), 2);
}

#[test]
fn test_load_sources_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.cpp");
    let second = dir.path().join("b.cpp");
    std::fs::File::create(&first)
        .unwrap()
        .write_all(b"int a;")
        .unwrap();
    std::fs::File::create(&second)
        .unwrap()
        .write_all(b"int b;")
        .unwrap();

    let buffers = load_sources(&[&first, &second]).unwrap();
    assert_eq!(buffers.len(), 2);
    assert_eq!(buffers[0].index, 0);
    assert_eq!(buffers[0].text(), "int a;");
    assert_eq!(buffers[1].index, 1);
    assert_eq!(buffers[1].text(), "int b;");
}

#[test]
fn test_load_sources_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.cpp");
    let err = load_sources(&[&missing]).unwrap_err();
    assert_eq!(err.kind, ErrorType::Io);
    assert_eq!(err.code, "READ_ERROR");

    let none: [&Path; 0] = [];
    assert_eq!(load_sources(&none).unwrap_err().code, "NO_SOURCES");
}
