#![deny(clippy::all)]

//! ICU message declarations.
//!
//! Authors declare localizable messages as ICU templates (`"Hi, {NAME}!"`)
//! with an options record describing them for translators. An external build
//! pipeline extracts the declarations and replaces each call with the
//! translated literal. Code that runs without that pipeline validates the
//! declaration instead, so authoring mistakes surface early:
//!
//! - closure-style `{$NAME}` placeholders in an ICU template,
//! - a missing, empty or non-text `description`, or a non-text `meaning`,
//! - `example` / `original_code` entries for placeholders the template lacks,
//! - option names other than `description`, `meaning`, `example` and
//!   `original_code`.
//!
//! Runtime formatting of the returned template is out of scope.

mod config;
mod error;
mod macros;
mod options;
pub mod placeholder;
mod validator;

pub use config::{ConfigError, ExecutionMode, ValidatorConfig, MODE_ENV_VAR};
pub use error::{OptionMap, ValidationError};
pub use options::{MessageOptions, PlaceholderMap, RECOGNIZED_OPTIONS};
pub use placeholder::{find_legacy_placeholder, placeholder_names, PlaceholderNames};
pub use validator::{validate_and_return, TemplateValidator};
