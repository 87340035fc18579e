//! Settings registry
//! Resolves option names and applies typed values to a target

use super::descriptor::{SettingDescriptor, SettingError, SettingType, SettingValue};

/// Holds static setting descriptors for one options type
pub struct SettingsRegistry<T: 'static> {
    settings: &'static [SettingDescriptor<T>],
}

impl<T: 'static> Clone for SettingsRegistry<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for SettingsRegistry<T> {}

impl<T: 'static> SettingsRegistry<T> {
    /// Create a new registry from static descriptors
    #[must_use]
    pub const fn new(descriptors: &'static [SettingDescriptor<T>]) -> Self {
        SettingsRegistry {
            settings: descriptors,
        }
    }

    pub fn descriptors(&self) -> &'static [SettingDescriptor<T>] {
        self.settings
    }

    /// Resolve a name, alias or unambiguous prefix of a name
    pub fn resolve(&self, name: &str) -> Result<&'static SettingDescriptor<T>, SettingError> {
        let settings: &'static [SettingDescriptor<T>] = self.settings;
        if let Some(desc) = settings
            .iter()
            .find(|d| d.name == name || d.aliases.iter().any(|alias| *alias == name))
        {
            return Ok(desc);
        }

        let mut candidates = settings.iter().filter(|d| d.name.starts_with(name));
        match (candidates.next(), candidates.next()) {
            (Some(desc), None) if !name.is_empty() => Ok(desc),
            (Some(first), Some(second)) if !name.is_empty() => {
                let candidates = [first, second]
                    .into_iter()
                    .chain(candidates)
                    .map(|d| d.name)
                    .collect();
                Err(SettingError::AmbiguousOption {
                    prefix: name.to_string(),
                    candidates,
                })
            }
            _ => Err(SettingError::UnknownOption(name.to_string())),
        }
    }

    /// Parse string value to `SettingValue` using `SettingType`
    pub(crate) fn parse_value(ty: &SettingType, value: &str) -> Result<SettingValue, SettingError> {
        match ty {
            SettingType::Boolean => {
                let val_lower = value.to_lowercase();
                match val_lower.as_str() {
                    "true" | "1" | "on" | "yes" => Ok(SettingValue::Bool(true)),
                    "false" | "0" | "off" | "no" => Ok(SettingValue::Bool(false)),
                    _ => Err(SettingError::InvalidValue {
                        expected: "boolean",
                        value: value.to_string(),
                    }),
                }
            }
            SettingType::Integer { min, max } => {
                let val = value
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| SettingError::InvalidValue {
                        expected: "integer",
                        value: value.to_string(),
                    })?;

                let below = min.is_some_and(|min| val < min);
                let above = max.is_some_and(|max| val > max);
                if below || above {
                    return Err(SettingError::OutOfRange {
                        value: val,
                        min: *min,
                        max: *max,
                    });
                }
                Ok(SettingValue::Integer(val))
            }
            SettingType::Text => {
                let trimmed = value.trim();
                if trimmed.is_empty() {
                    return Err(SettingError::EmptyValue);
                }
                Ok(SettingValue::Text(trimmed.to_string()))
            }
        }
    }

    /// Set option `name` on `target` from its string form
    pub fn set(&self, target: &mut T, name: &str, value: &str) -> Result<(), SettingError> {
        let desc = self.resolve(name.trim())?;
        let parsed = Self::parse_value(&desc.ty, value)?;
        (desc.set)(target, parsed)
    }

    /// Apply a `name=value` assignment
    pub fn apply_assignment(&self, target: &mut T, assignment: &str) -> Result<(), SettingError> {
        let (name, value) = assignment
            .split_once('=')
            .ok_or_else(|| SettingError::MissingValue(assignment.to_string()))?;
        self.set(target, name, value)
    }
}
