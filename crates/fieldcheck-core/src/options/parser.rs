//! Option and rule documents from YAML/JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use super::schema::validate_options_schema;
use super::Options;
use crate::kind::Kind;
use crate::rules::{compile_pattern, datetime, numbers};
use crate::types::{Input, Outcome};
use crate::validator::Validator;
use crate::{CheckError, FileSystem};

/// Errors that can occur when loading option documents.
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Options do not match schema: {}", .0.join("; "))]
    SchemaError(Vec<String>),

    #[error("Options validation failed: {0}")]
    ValidationError(String),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

impl Options {
    /// Parse options from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse options from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse options from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse options from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    fn from_value(value: Value) -> Result<Self, OptionsError> {
        validate_options_schema(&value).map_err(OptionsError::SchemaError)?;
        let options: Options = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the options can configure a validator.
    ///
    /// `check` reports the same problems as `CheckError::InvalidOption` when
    /// the affected kind runs; this catches them when a document is loaded.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if let (Some(min), Some(max)) = (self.min_length, self.max_length) {
            if min > max {
                return Err(OptionsError::ValidationError(format!(
                    "min_length ({}) exceeds max_length ({})",
                    min, max
                )));
            }
        }

        if let (Some(min), Some(max)) = (self.min, self.max) {
            if min > max {
                return Err(OptionsError::ValidationError(format!(
                    "min ({}) exceeds max ({})",
                    min, max
                )));
            }
        }

        if let Some(multiple) = self.multiple {
            numbers::check_multiple(multiple).map_err(invalid)?;
        }

        if let Some(pattern) = &self.pattern {
            compile_pattern(pattern).map_err(invalid)?;
        }

        if let Some(format) = &self.format {
            datetime::to_strftime(format).map_err(invalid)?;
        }

        Ok(())
    }
}

fn invalid(e: CheckError) -> OptionsError {
    OptionsError::ValidationError(e.to_string())
}

/// A kind together with its options, as written in a config document.
///
/// ```yaml
/// kind: email
/// required: true
/// domain: example.com
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub kind: Kind,

    #[serde(flatten)]
    pub options: Options,
}

impl Rule {
    pub fn new(kind: Kind, options: Options) -> Self {
        Self { kind, options }
    }

    /// Parse a rule from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_yaml::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Parse a rule from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse a rule from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse a rule from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, OptionsError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Split off `kind`; the rest of the document is an options document.
    fn from_value(mut value: Value) -> Result<Self, OptionsError> {
        let Some(document) = value.as_object_mut() else {
            return Err(OptionsError::SchemaError(vec![
                "Rule document must be a mapping".to_string(),
            ]));
        };
        let kind = document
            .remove("kind")
            .ok_or_else(|| OptionsError::MissingField("kind".to_string()))?;
        let kind: Kind = serde_json::from_value(kind)?;

        let options = Options::from_value(value)?;
        Ok(Self { kind, options })
    }

    /// Check `input` against this rule on the real filesystem.
    pub fn check(&self, input: impl Into<Input>) -> Result<Outcome, CheckError> {
        Validator::new().check_kind(input, self.kind, &self.options)
    }

    /// Check `input` against this rule with a caller-provided validator.
    pub fn check_with<F: FileSystem>(
        &self,
        validator: &Validator<F>,
        input: impl Into<Input>,
    ) -> Result<Outcome, CheckError> {
        validator.check_kind(input, self.kind, &self.options)
    }
}
