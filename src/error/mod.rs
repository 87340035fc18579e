//! Error type shared by the library and the binary
//!
//! The decoration engine itself never fails: a benchmark that cannot be found
//! simply contributes no ranges. Errors come from loading sources, parsing
//! options, compiling the include expression, driving tabs and writing to the
//! terminal.

use std::fmt;

/// Where an error came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorType {
    /// Reading source files
    Io,
    /// Malformed option values or assignments
    Parse,
    /// Unknown options or values outside their bounds
    Settings,
    /// Expressions that do not compile
    Pattern,
    /// Terminal output
    Renderer,
    /// Misuse of the editor shells, such as a tab index that does not exist
    Internal,
}

impl ErrorType {
    fn label(self) -> &'static str {
        match self {
            Self::Io => "io",
            Self::Parse => "parse",
            Self::Settings => "settings",
            Self::Pattern => "pattern",
            Self::Renderer => "renderer",
            Self::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateError {
    pub kind: ErrorType,
    /// Stable code such as `NO_SOURCES` or `REGEX_COMPILE_ERROR`
    pub code: &'static str,
    pub message: String,
}

impl AnnotateError {
    pub fn new(kind: ErrorType, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for AnnotateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error {}: {}", self.kind, self.code, self.message)
    }
}

impl std::error::Error for AnnotateError {}

impl From<std::io::Error> for AnnotateError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorType::Io, "IO_ERROR", err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AnnotateError>;

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
