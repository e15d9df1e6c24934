//! Core types shared by every check.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

/// A caller-supplied value.
///
/// Form fields and API payloads arrive loosely typed, so the validator takes
/// whatever the caller has and lets each kind decide how to read it.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Input {
    /// Absent value
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    List(Vec<Input>),
}

impl Input {
    /// Whether the value counts as blank for the required/optional guard.
    ///
    /// Blank values are `Null`, `false`, `0`, `0.0`, the empty string and the
    /// empty list. The string `"0"` is not blank.
    pub fn is_empty(&self) -> bool {
        match self {
            Input::Null => true,
            Input::Bool(value) => !value,
            Input::Int(value) => *value == 0,
            Input::Float(value) => *value == 0.0,
            Input::Text(value) => value.is_empty(),
            Input::List(items) => items.is_empty(),
        }
    }

    /// The value as text, for kinds that check strings.
    ///
    /// Scalars coerce: integers and floats print in decimal (`9.0` prints as
    /// `"9"`), `true` is `"1"`, `false` and `Null` are `""`. Lists have no
    /// textual form.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Input::Null | Input::Bool(false) => Some(Cow::Borrowed("")),
            Input::Bool(true) => Some(Cow::Borrowed("1")),
            Input::Int(value) => Some(Cow::Owned(value.to_string())),
            Input::Float(value) => Some(Cow::Owned(value.to_string())),
            Input::Text(value) => Some(Cow::Borrowed(value.as_str())),
            Input::List(_) => None,
        }
    }

    /// The string slice when the input is `Text`, with no coercion.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Input::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<&String> for Input {
    fn from(value: &String) -> Self {
        Input::Text(value.clone())
    }
}

impl From<bool> for Input {
    fn from(value: bool) -> Self {
        Input::Bool(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Input {
                fn from(value: $ty) -> Self {
                    Input::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Input {
    fn from(value: f32) -> Self {
        Input::Float(f64::from(value))
    }
}

impl From<f64> for Input {
    fn from(value: f64) -> Self {
        Input::Float(value)
    }
}

impl<T: Into<Input>> From<Option<T>> for Input {
    fn from(value: Option<T>) -> Self {
        value.map_or(Input::Null, Into::into)
    }
}

impl<T: Into<Input>> From<Vec<T>> for Input {
    fn from(values: Vec<T>) -> Self {
        Input::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<serde_json::Value> for Input {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Input::Null,
            Value::Bool(b) => Input::Bool(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Input::Int(i),
                None => Input::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            Value::String(s) => Input::Text(s),
            Value::Array(items) => Input::List(items.into_iter().map(Input::from).collect()),
            Value::Object(map) => Input::List(map.into_iter().map(|(_, v)| Input::from(v)).collect()),
        }
    }
}

/// Typed `value` derived by the numeric and boolean kinds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DerivedValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl DerivedValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            DerivedValue::Float(value) => Some(*value),
            DerivedValue::Integer(value) => Some(*value as f64),
            DerivedValue::Bool(_) => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DerivedValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DerivedValue::Bool(value) => Some(*value),
            _ => None,
        }
    }
}

/// Result of one validation call.
///
/// `valid` is the verdict. `required` is `false` only when the input was
/// blank and the field optional: callers should read that combination as
/// "left empty, nothing to report" rather than as a failure.
///
/// Derived fields are filled when the kind's base check passes. Email and
/// text keep them even when an option later reverts `valid`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Outcome {
    pub valid: bool,

    pub required: bool,

    /// Byte length of the textual input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,

    /// Email local part
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Email domain
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    /// Everything before the 10-digit subscriber number, `+` included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile_number: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<DerivedValue>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_extension: Option<String>,

    /// Actual size in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_type: Option<String>,
}

impl Outcome {
    /// Outcome for a blank optional field.
    pub(crate) fn blank_optional() -> Self {
        Self::default()
    }

    /// Starting point for a kind check: not yet valid, required.
    pub(crate) fn pending() -> Self {
        Self {
            required: true,
            ..Self::default()
        }
    }

    /// True when the field was blank and optional, so no kind check ran.
    pub fn is_blank_optional(&self) -> bool {
        !self.valid && !self.required
    }
}
