//! Setting descriptor types
//! Type definitions for declarative setting configuration

use crate::error::{AnnotateError, ErrorType};

/// Typed value after parsing and validation
/// Setters receive this, never raw strings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(usize),
    /// Free-form text
    Text(String),
}

/// Setting type definition for parsing and validation
#[derive(Debug, Clone)]
pub enum SettingType {
    /// Boolean setting (true/false, on/off, yes/no, 1/0)
    Boolean,
    /// Integer setting with optional min/max bounds
    Integer {
        /// Minimum value (inclusive)
        min: Option<usize>,
        /// Maximum value (inclusive)
        max: Option<usize>,
    },
    /// Non-empty text
    Text,
}

/// Why an option could not be applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettingError {
    /// No option has this name, alias or prefix
    UnknownOption(String),
    /// The prefix matches more than one option
    AmbiguousOption {
        prefix: String,
        candidates: Vec<&'static str>,
    },
    /// The value does not parse as the option's type
    InvalidValue {
        expected: &'static str,
        value: String,
    },
    /// An integer outside the option's bounds
    OutOfRange {
        value: usize,
        min: Option<usize>,
        max: Option<usize>,
    },
    /// Text options must not be blank
    EmptyValue,
    /// An assignment without `=`
    MissingValue(String),
}

impl std::fmt::Display for SettingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownOption(name) => write!(f, "no option named `{name}`"),
            Self::AmbiguousOption { prefix, candidates } => {
                write!(f, "`{prefix}` could be any of {}", candidates.join(", "))
            }
            Self::InvalidValue { expected, value } => {
                write!(f, "`{value}` is not a valid {expected}")
            }
            Self::OutOfRange { value, min, max } => match (min, max) {
                (Some(min), Some(max)) => write!(f, "{value} is outside {min}..={max}"),
                (Some(min), None) => write!(f, "{value} is below {min}"),
                (None, Some(max)) => write!(f, "{value} is above {max}"),
                (None, None) => write!(f, "{value} is out of range"),
            },
            Self::EmptyValue => f.write_str("value must not be empty"),
            Self::MissingValue(assignment) => {
                write!(f, "expected name=value, got `{assignment}`")
            }
        }
    }
}

impl std::error::Error for SettingError {}

impl From<SettingError> for AnnotateError {
    fn from(err: SettingError) -> Self {
        let (kind, code) = match &err {
            SettingError::UnknownOption(_) => (ErrorType::Settings, "UNKNOWN_SETTING"),
            SettingError::AmbiguousOption { .. } => (ErrorType::Settings, "AMBIGUOUS_SETTING"),
            SettingError::OutOfRange { .. } => (ErrorType::Settings, "SETTING_OUT_OF_RANGE"),
            SettingError::EmptyValue => (ErrorType::Settings, "EMPTY_SETTING"),
            SettingError::InvalidValue { .. } | SettingError::MissingValue(_) => {
                (ErrorType::Parse, "SETTING_PARSE_ERROR")
            }
        };
        AnnotateError::new(kind, code, err.to_string())
    }
}

/// Setter function signature
///
/// Receives parsed and validated `SettingValue`, never raw strings.
pub type SettingSetter<T> = fn(&mut T, SettingValue) -> Result<(), SettingError>;

/// Setting descriptor
#[derive(Debug, Clone)]
pub struct SettingDescriptor<T> {
    /// Canonical setting name
    pub name: &'static str,
    /// Short aliases
    pub aliases: &'static [&'static str],
    /// Setting type for parsing and validation
    pub ty: SettingType,
    /// Setter function pointer
    pub set: SettingSetter<T>,
}
