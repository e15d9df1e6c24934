//! Per-call options.
//!
//! Options are built in code with the fluent setters below, or loaded from
//! YAML/JSON documents (see `parser`). Every key is optional; absent keys use
//! the defaults documented on each rule.

mod parser;
mod schema;

pub use parser::{OptionsError, Rule};
pub use schema::validate_options_schema;

use serde::{Deserialize, Serialize};

/// Settings that tune how a kind checks its input.
///
/// The `require_*` password keys are enabled by presence: `Some(false)`
/// enables the check just like `Some(true)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Blank input fails the kind check instead of passing through
    #[serde(default)]
    pub required: bool,

    /// Expected email domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,

    /// Regex, bare or delimited as `/body/flags`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,

    /// Date/time format (`Y-m-d` letters or strftime)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,

    /// Extensions accepted by `file_type`, compared case-sensitively
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_types: Option<Vec<String>>,

    /// Largest accepted file, in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_special_chars: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_numbers: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn min_length(mut self, min_length: usize) -> Self {
        self.min_length = Some(min_length);
        self
    }

    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn allowed_types<I, S>(mut self, allowed_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_types = Some(allowed_types.into_iter().map(Into::into).collect());
        self
    }

    pub fn max_size(mut self, max_size: u64) -> Self {
        self.max_size = Some(max_size);
        self
    }

    pub fn multiple(mut self, multiple: f64) -> Self {
        self.multiple = Some(multiple);
        self
    }

    /// Enables the special-character check whatever `flag` is.
    pub fn require_special_chars(mut self, flag: bool) -> Self {
        self.require_special_chars = Some(flag);
        self
    }

    /// Enables the digit check whatever `flag` is.
    pub fn require_numbers(mut self, flag: bool) -> Self {
        self.require_numbers = Some(flag);
        self
    }

    /// Enables the uppercase check whatever `flag` is.
    pub fn require_uppercase(mut self, flag: bool) -> Self {
        self.require_uppercase = Some(flag);
        self
    }

    /// Enables the lowercase check whatever `flag` is.
    pub fn require_lowercase(mut self, flag: bool) -> Self {
        self.require_lowercase = Some(flag);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::new();
        assert!(!options.required);
        assert!(options.pattern.is_none());
        assert!(options.allowed_types.is_none());
    }

    #[test]
    fn test_builder_sets_fields() {
        let options = Options::new()
            .required(true)
            .domain("example.com")
            .min_length(2)
            .max_length(8)
            .allowed_types(["png", "jpg"])
            .require_numbers(false);

        assert!(options.required);
        assert_eq!(options.domain.as_deref(), Some("example.com"));
        assert_eq!(options.min_length, Some(2));
        assert_eq!(options.max_length, Some(8));
        assert_eq!(
            options.allowed_types,
            Some(vec!["png".to_string(), "jpg".to_string()])
        );
        assert_eq!(options.require_numbers, Some(false));
    }

    #[test]
    fn test_serialize_omits_unset_keys() {
        let options = Options::new().max_size(2048);
        let json = serde_json::to_value(&options).unwrap();
        assert_eq!(json, serde_json::json!({ "required": false, "max_size": 2048 }));
    }
}
