//! Validation Errors
//!
//! Every authoring mistake the validator can detect is reported through
//! [`ValidationError`]. Messages name the violated rule and the offending value.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// One of the two placeholder-keyed maps carried by the options record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionMap {
    Example,
    OriginalCode,
}

impl OptionMap {
    /// Field name as written in the options record.
    pub fn field_name(&self) -> &'static str {
        match self {
            OptionMap::Example => "example",
            OptionMap::OriginalCode => "original_code",
        }
    }
}

impl fmt::Display for OptionMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "Legacy placeholder '{{${placeholder}}}' is not allowed in ICU template \"{template}\"; use '{{{placeholder}}}' instead"
    )]
    LegacyPlaceholder { placeholder: String, template: String },

    #[error("Message options must be an object, got {found}")]
    OptionsNotAnObject { found: &'static str },

    #[error("Message options are missing the required 'description'")]
    MissingDescription,

    #[error("'description' must be a string, got {found}")]
    NonTextDescription { found: &'static str },

    #[error("'description' must not be empty")]
    EmptyDescription,

    #[error("'meaning' must be a string, got {found}")]
    NonTextMeaning { found: &'static str },

    #[error("'{map}' must be an object mapping placeholder names to strings, got {found}")]
    MalformedMap { map: OptionMap, found: &'static str },

    #[error("'{map}' refers to placeholder '{placeholder}' which does not appear in the template")]
    UnknownPlaceholder { map: OptionMap, placeholder: String },

    #[error("'{map}' value for placeholder '{placeholder}' must be a string, got {value}")]
    NonTextValue {
        map: OptionMap,
        placeholder: String,
        value: String,
    },

    #[error("Unknown message option '{name}'; expected one of description, meaning, example, original_code")]
    UnknownOption { name: String },
}

/// Short JSON type name used in error messages.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
