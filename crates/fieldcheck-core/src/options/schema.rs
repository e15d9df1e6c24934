//! JSON Schema gate for option documents.
//!
//! Documents loaded from YAML/JSON are checked against
//! `schema/options.schema.json` before deserialization. Unknown keys and
//! mistyped values surface here as readable messages instead of a single
//! serde error.

use std::sync::OnceLock;

use serde_json::Value;

const OPTIONS_SCHEMA_JSON: &str = include_str!("../../../../schema/options.schema.json");

static OPTIONS_SCHEMA: OnceLock<Result<jsonschema::Validator, String>> = OnceLock::new();

fn options_schema() -> Result<&'static jsonschema::Validator, String> {
    OPTIONS_SCHEMA
        .get_or_init(|| {
            let schema: Value = serde_json::from_str(OPTIONS_SCHEMA_JSON)
                .map_err(|e| format!("options schema is not JSON: {}", e))?;
            jsonschema::options()
                .build(&schema)
                .map_err(|e| format!("options schema does not compile: {}", e))
        })
        .as_ref()
        .map_err(Clone::clone)
}

/// Validate an options document against the schema.
///
/// Every violation is reported, each prefixed with the offending key
/// (`max_size: -1 is less than the minimum of 0`). Violations of the document
/// as a whole carry no prefix.
pub fn validate_options_schema(document: &Value) -> Result<(), Vec<String>> {
    let schema = options_schema().map_err(|e| vec![e])?;

    let errors: Vec<String> = schema
        .iter_errors(document)
        .map(|error| {
            let key = error.instance_path.to_string();
            match key.trim_start_matches('/') {
                "" => error.to_string(),
                key => format!("{}: {}", key, error),
            }
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
