//! Settings registry
//! Declarative options that configure decoration building

pub mod definitions;
pub mod descriptor;
pub mod registry;


pub use definitions::{create_annotator_settings_registry, AnnotatorOptions};
pub use descriptor::{SettingDescriptor, SettingError, SettingSetter, SettingType, SettingValue};
pub use registry::SettingsRegistry;
