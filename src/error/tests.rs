use super::*;
use crate::editor::TabbedEditor;
use crate::search::compile_regex;
use crate::settings::{create_annotator_settings_registry, AnnotatorOptions};
use crate::source::load_sources;
use crate::term::TerminalSink;
use crate::test_utils::RecordingSink;
use std::io::{self, Write};

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_display_names_kind_and_code() {
    let err = AnnotateError::new(ErrorType::Renderer, "RENDER_ERROR", "pipe closed");
    assert_eq!(err.to_string(), "renderer error RENDER_ERROR: pipe closed");

    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "renderer error RENDER_ERROR: pipe closed");
}

#[test]
fn test_unclosed_group_is_a_compile_error() {
    let err = compile_regex("(bench").err().unwrap();
    assert_eq!(err.kind, ErrorType::Pattern);
    assert_eq!(err.code, "REGEX_COMPILE_ERROR");
}

#[test]
fn test_unknown_flag_is_a_parse_error() {
    let err = compile_regex("bench/q").err().unwrap();
    assert_eq!(err.kind, ErrorType::Pattern);
    assert_eq!(err.code, "REGEX_PARSE_ERROR");
}

#[test]
fn test_missing_sources() {
    let none: [&str; 0] = [];
    let err = load_sources(&none).unwrap_err();
    assert_eq!(err.kind, ErrorType::Io);
    assert_eq!(err.code, "NO_SOURCES");
}

#[test]
fn test_tab_out_of_range() {
    let mut editor: TabbedEditor<RecordingSink> =
        TabbedEditor::new(["a", "b"], &AnnotatorOptions::default()).unwrap();
    let err = editor.on_buffer_changed(2, "c").unwrap_err();
    assert_eq!(err.kind, ErrorType::Internal);
    assert_eq!(err.code, "TAB_OUT_OF_RANGE");
    assert!(err.message.contains("2 tabs"));
}

#[test]
fn test_failed_write_is_a_render_error() {
    let mut sink = TerminalSink::new(BrokenPipe);
    let err = sink.render(None, "int a;").unwrap_err();
    assert_eq!(err.kind, ErrorType::Renderer);
    assert_eq!(err.code, "RENDER_ERROR");
    assert!(err.message.contains("pipe closed"));
}

#[test]
fn test_io_error_conversion() {
    let err: AnnotateError = io::Error::new(io::ErrorKind::NotFound, "gone").into();
    assert_eq!(err.kind, ErrorType::Io);
    assert_eq!(err.code, "IO_ERROR");
    assert_eq!(err.message, "gone");
}

#[test]
fn test_rejected_assignment_converts() {
    let registry = create_annotator_settings_registry();
    let mut options = AnnotatorOptions::default();
    let err: AnnotateError = registry
        .apply_assignment(&mut options, "colors=99")
        .unwrap_err()
        .into();
    assert_eq!(err.kind, ErrorType::Settings);
    assert_eq!(err.code, "SETTING_OUT_OF_RANGE");
}
