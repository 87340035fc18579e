//! Settings definitions
//! Options that control how decorations are built

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};
use super::registry::SettingsRegistry;
use crate::color::{Palette, DEFAULT_PALETTE_SIZE, MAX_PALETTE_SIZE};

/// Name the result reporter uses for the empty baseline benchmark
pub const DEFAULT_SENTINEL: &str = "Noop";

/// Largest buffer, in characters, that is annotated by default
pub const DEFAULT_MAX_BUFFER_LEN: usize = 20_000;

/// Options for the decoration engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorOptions {
    /// Identifier excluded from ranking and coloring
    pub sentinel: String,
    /// Whether the single-buffer shell marks the experimental include
    pub include_highlight: bool,
    /// Buffers longer than this are left undecorated
    pub max_buffer_len: usize,
    /// Number of distinct benchmark styles
    pub palette_size: usize,
}

impl AnnotatorOptions {
    pub fn palette(&self) -> Palette {
        Palette::new(self.palette_size)
    }
}

impl Default for AnnotatorOptions {
    fn default() -> Self {
        AnnotatorOptions {
            sentinel: DEFAULT_SENTINEL.to_string(),
            include_highlight: true,
            max_buffer_len: DEFAULT_MAX_BUFFER_LEN,
            palette_size: DEFAULT_PALETTE_SIZE,
        }
    }
}

fn mismatch(expected: &'static str, value: SettingValue) -> SettingError {
    SettingError::InvalidValue {
        expected,
        value: format!("{value:?}"),
    }
}

fn set_sentinel(options: &mut AnnotatorOptions, value: SettingValue) -> Result<(), SettingError> {
    match value {
        SettingValue::Text(name) => {
            options.sentinel = name;
            Ok(())
        }
        other => Err(mismatch("text", other)),
    }
}

fn set_include_highlight(
    options: &mut AnnotatorOptions,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Bool(b) => {
            options.include_highlight = b;
            Ok(())
        }
        other => Err(mismatch("boolean", other)),
    }
}

fn set_max_buffer_len(
    options: &mut AnnotatorOptions,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(n) => {
            options.max_buffer_len = n;
            Ok(())
        }
        other => Err(mismatch("integer", other)),
    }
}

fn set_palette_size(
    options: &mut AnnotatorOptions,
    value: SettingValue,
) -> Result<(), SettingError> {
    match value {
        SettingValue::Integer(n) => {
            options.palette_size = n;
            Ok(())
        }
        other => Err(mismatch("integer", other)),
    }
}

const ANNOTATOR_SETTINGS: &[SettingDescriptor<AnnotatorOptions>] = &[
    SettingDescriptor {
        name: "sentinel",
        aliases: &["noop"],
        ty: SettingType::Text,
        set: set_sentinel,
    },
    SettingDescriptor {
        name: "include_highlight",
        aliases: &["rainbow"],
        ty: SettingType::Boolean,
        set: set_include_highlight,
    },
    SettingDescriptor {
        name: "max_buffer_len",
        aliases: &["maxlen"],
        ty: SettingType::Integer {
            min: Some(1),
            max: None,
        },
        set: set_max_buffer_len,
    },
    SettingDescriptor {
        name: "palette_size",
        aliases: &["colors"],
        ty: SettingType::Integer {
            min: Some(1),
            max: Some(MAX_PALETTE_SIZE),
        },
        set: set_palette_size,
    },
];

pub fn create_annotator_settings_registry() -> SettingsRegistry<AnnotatorOptions> {
    SettingsRegistry::new(ANNOTATOR_SETTINGS)
}
