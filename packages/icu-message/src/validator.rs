//! Template Validator
//!
//! Validates an ICU message template together with its options record and
//! hands the template back unchanged. In compiled mode every call is a
//! pass-through: the build pipeline has already checked and replaced the
//! call site.

use serde_json::Value;

use crate::config::{ExecutionMode, ValidatorConfig};
use crate::error::ValidationError;
use crate::options::{check_options, check_raw_options, MessageOptions};
use crate::placeholder::{find_legacy_placeholder, placeholder_names, PlaceholderNames};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemplateValidator {
    mode: ExecutionMode,
}

impl TemplateValidator {
    pub fn new(mode: ExecutionMode) -> Self {
        TemplateValidator { mode }
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self::new(config.mode)
    }

    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Returns `template` unchanged, or the first violation found.
    pub fn validate_and_return<'a>(
        &self,
        template: &'a str,
        options: &MessageOptions,
    ) -> Result<&'a str, ValidationError> {
        self.first_violation(template, self.violations(template, options))
    }

    /// Same as [`validate_and_return`](Self::validate_and_return) for an
    /// untyped options record, e.g. one decoded from JSON.
    pub fn validate_value_and_return<'a>(
        &self,
        template: &'a str,
        options: &Value,
    ) -> Result<&'a str, ValidationError> {
        self.first_violation(template, self.value_violations(template, options))
    }

    /// Every violation in check order. Empty in compiled mode.
    pub fn violations(&self, template: &str, options: &MessageOptions) -> Vec<ValidationError> {
        if self.mode.is_compiled() {
            return Vec::new();
        }
        let mut violations = Vec::new();
        if let Some(names) = scan_template(template, &mut violations) {
            check_options(options, &names, &mut violations);
        }
        violations
    }

    /// Every violation of an untyped options record, in check order.
    pub fn value_violations(&self, template: &str, options: &Value) -> Vec<ValidationError> {
        if self.mode.is_compiled() {
            return Vec::new();
        }
        let mut violations = Vec::new();
        if let Some(names) = scan_template(template, &mut violations) {
            check_raw_options(options, Some(&names), &mut violations);
        }
        violations
    }

    /// Assertion form used by [`declare_icu_template!`](crate::declare_icu_template).
    ///
    /// # Panics
    ///
    /// Panics with the violation message when validation fails.
    pub fn assert_valid<'a>(&self, template: &'a str, options: &MessageOptions) -> &'a str {
        match self.validate_and_return(template, options) {
            Ok(template) => template,
            Err(err) => panic!("{}", err),
        }
    }

    fn first_violation<'a>(
        &self,
        template: &'a str,
        violations: Vec<ValidationError>,
    ) -> Result<&'a str, ValidationError> {
        if self.mode.is_compiled() {
            tracing::trace!(template, "compiled mode, skipping message validation");
            return Ok(template);
        }
        match violations.into_iter().next() {
            None => Ok(template),
            Some(err) => {
                tracing::debug!(template, error = %err, "rejected message template");
                Err(err)
            }
        }
    }
}

/// Legacy placeholders abort the scan: nothing else is checked for a template
/// written in the wrong syntax.
fn scan_template(
    template: &str,
    violations: &mut Vec<ValidationError>,
) -> Option<PlaceholderNames> {
    if let Some(placeholder) = find_legacy_placeholder(template) {
        violations.push(ValidationError::LegacyPlaceholder {
            placeholder: placeholder.to_string(),
            template: template.to_string(),
        });
        return None;
    }
    let names = placeholder_names(template);
    tracing::trace!(template, placeholders = ?names, "extracted placeholders");
    Some(names)
}

/// Validates in uncompiled mode.
pub fn validate_and_return<'a>(
    template: &'a str,
    options: &MessageOptions,
) -> Result<&'a str, ValidationError> {
    TemplateValidator::default().validate_and_return(template, options)
}
