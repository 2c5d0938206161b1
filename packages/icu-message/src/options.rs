//! Message Options
//!
//! The metadata attached to an ICU message declaration: a description for
//! translators, an optional disambiguating meaning, and per-placeholder
//! example values and original-code snippets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{json_type_name, OptionMap, ValidationError};
use crate::placeholder::PlaceholderNames;

/// The only field names an options record may carry.
pub const RECOGNIZED_OPTIONS: [&str; 4] = ["description", "meaning", "example", "original_code"];

/// Placeholder name to text.
pub type PlaceholderMap = IndexMap<String, String>;

/// Options record of a message declaration.
///
/// Deserializing rejects unknown fields. Use [`MessageOptions::try_from`] on a
/// `serde_json::Value` to get the same rejections as [`ValidationError`]s.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MessageOptions {
    /// Usage context shown to translators.
    pub description: String,
    /// Disambiguates otherwise identical templates.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<PlaceholderMap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_code: Option<PlaceholderMap>,
}

impl MessageOptions {
    pub fn new(description: impl Into<String>) -> Self {
        MessageOptions {
            description: description.into(),
            meaning: None,
            example: None,
            original_code: None,
        }
    }

    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = Some(meaning.into());
        self
    }

    pub fn with_example(mut self, placeholder: impl Into<String>, value: impl Into<String>) -> Self {
        self.example
            .get_or_insert_with(IndexMap::new)
            .insert(placeholder.into(), value.into());
        self
    }

    pub fn with_original_code(
        mut self,
        placeholder: impl Into<String>,
        code: impl Into<String>,
    ) -> Self {
        self.original_code
            .get_or_insert_with(IndexMap::new)
            .insert(placeholder.into(), code.into());
        self
    }

    pub fn map(&self, map: OptionMap) -> Option<&PlaceholderMap> {
        match map {
            OptionMap::Example => self.example.as_ref(),
            OptionMap::OriginalCode => self.original_code.as_ref(),
        }
    }
}

impl TryFrom<&Value> for MessageOptions {
    type Error = ValidationError;

    /// Decodes an untyped options record. Placeholder membership is not
    /// checked since no template is involved.
    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let mut violations = Vec::new();
        check_raw_options(value, None, &mut violations);
        if let Some(err) = violations.into_iter().next() {
            return Err(err);
        }

        let fields = value.as_object().ok_or(ValidationError::OptionsNotAnObject {
            found: json_type_name(value),
        })?;
        let description = text_field(fields, "description").ok_or(ValidationError::MissingDescription)?;

        Ok(MessageOptions {
            description,
            meaning: text_field(fields, "meaning"),
            example: map_field(fields, OptionMap::Example),
            original_code: map_field(fields, OptionMap::OriginalCode),
        })
    }
}

/// Checks left over once the record is typed: empty description and map keys
/// that are not placeholders of the template.
pub(crate) fn check_options(
    options: &MessageOptions,
    names: &PlaceholderNames,
    violations: &mut Vec<ValidationError>,
) {
    if options.description.trim().is_empty() {
        violations.push(ValidationError::EmptyDescription);
    }

    for map in [OptionMap::Example, OptionMap::OriginalCode] {
        let Some(entries) = options.map(map) else {
            continue;
        };
        for placeholder in entries.keys() {
            if !names.contains(placeholder) {
                violations.push(ValidationError::UnknownPlaceholder {
                    map,
                    placeholder: placeholder.clone(),
                });
            }
        }
    }
}

/// Checks an untyped options record in field order: description, meaning,
/// example, original_code, then unrecognized fields. Map keys are checked
/// against `names` when given.
pub(crate) fn check_raw_options(
    options: &Value,
    names: Option<&PlaceholderNames>,
    violations: &mut Vec<ValidationError>,
) {
    let Some(fields) = options.as_object() else {
        violations.push(ValidationError::OptionsNotAnObject {
            found: json_type_name(options),
        });
        return;
    };

    match present(fields, "description") {
        None => violations.push(ValidationError::MissingDescription),
        Some(Value::String(description)) if description.trim().is_empty() => {
            violations.push(ValidationError::EmptyDescription)
        }
        Some(Value::String(_)) => {}
        Some(other) => violations.push(ValidationError::NonTextDescription {
            found: json_type_name(other),
        }),
    }

    if let Some(meaning) = present(fields, "meaning") {
        if !meaning.is_string() {
            violations.push(ValidationError::NonTextMeaning {
                found: json_type_name(meaning),
            });
        }
    }

    for map in [OptionMap::Example, OptionMap::OriginalCode] {
        if let Some(value) = present(fields, map.field_name()) {
            check_raw_map(map, value, names, violations);
        }
    }

    for name in fields.keys() {
        if !RECOGNIZED_OPTIONS.contains(&name.as_str()) {
            violations.push(ValidationError::UnknownOption { name: name.clone() });
        }
    }
}

fn check_raw_map(
    map: OptionMap,
    value: &Value,
    names: Option<&PlaceholderNames>,
    violations: &mut Vec<ValidationError>,
) {
    let Some(entries) = value.as_object() else {
        violations.push(ValidationError::MalformedMap {
            map,
            found: json_type_name(value),
        });
        return;
    };

    for (placeholder, text) in entries {
        if names.is_some_and(|names| !names.contains(placeholder)) {
            violations.push(ValidationError::UnknownPlaceholder {
                map,
                placeholder: placeholder.clone(),
            });
        }
        if !text.is_string() {
            violations.push(ValidationError::NonTextValue {
                map,
                placeholder: placeholder.clone(),
                value: text.to_string(),
            });
        }
    }
}

/// `null` counts as absent.
fn present<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    fields.get(key).filter(|value| !value.is_null())
}

fn text_field(fields: &Map<String, Value>, key: &str) -> Option<String> {
    present(fields, key).and_then(Value::as_str).map(str::to_string)
}

fn map_field(fields: &Map<String, Value>, map: OptionMap) -> Option<PlaceholderMap> {
    present(fields, map.field_name())
        .and_then(Value::as_object)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
                .collect()
        })
}
