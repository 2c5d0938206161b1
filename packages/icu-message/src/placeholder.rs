//! Placeholder Scanning
//!
//! ICU templates reference runtime values as `{NAME}`. The closure-style
//! `{$NAME}` form belongs to a compile-time substitution mechanism and is
//! rejected in ICU templates.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

static LEGACY_PLACEHOLDER_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\$([A-Za-z0-9_]+)\}").unwrap());

static ICU_PLACEHOLDER_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());

/// Distinct placeholder names of a template, in order of first occurrence.
pub type PlaceholderNames = IndexSet<String>;

/// Returns the name of the first legacy `{$NAME}` placeholder, if any.
pub fn find_legacy_placeholder(template: &str) -> Option<&str> {
    LEGACY_PLACEHOLDER_REGEXP
        .captures(template)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Collects the distinct ICU placeholder names used by `template`.
pub fn placeholder_names(template: &str) -> PlaceholderNames {
    ICU_PLACEHOLDER_REGEXP
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(template: &str) -> Vec<String> {
        placeholder_names(template).into_iter().collect()
    }

    #[test]
    fn no_placeholders() {
        assert!(placeholder_names("Hello world").is_empty());
        assert!(placeholder_names("").is_empty());
        assert_eq!(find_legacy_placeholder("Hello world"), None);
    }

    #[test]
    fn collapses_duplicates_in_first_occurrence_order() {
        assert_eq!(names("{B} {A} {B} {A}"), vec!["B", "A"]);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_eq!(names("{name} {NAME}"), vec!["name", "NAME"]);
    }

    #[test]
    fn rejects_names_starting_with_a_digit() {
        assert!(placeholder_names("{1st}").is_empty());
        assert_eq!(names("{_1st}"), vec!["_1st"]);
    }

    #[test]
    fn ignores_braces_that_are_not_placeholders() {
        assert!(placeholder_names("{ NAME }").is_empty());
        assert!(placeholder_names("{a-b}").is_empty());
        assert!(placeholder_names("{}").is_empty());
    }

    #[test]
    fn legacy_placeholders_are_not_icu_placeholders() {
        assert!(placeholder_names("{$NAME}").is_empty());
        assert_eq!(find_legacy_placeholder("Hi, {$NAME}!"), Some("NAME"));
    }

    #[test]
    fn finds_first_legacy_placeholder() {
        assert_eq!(find_legacy_placeholder("{OK} {$FIRST} {$SECOND}"), Some("FIRST"));
    }

    #[test]
    fn picks_up_names_inside_icu_expressions() {
        let template = "{COUNT, plural, =1 {one {ITEM}} other {many}}";
        assert_eq!(names(template), vec!["ITEM", "many"]);
    }
}
