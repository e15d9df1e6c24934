//! The closed set of validation kinds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a kind name is not one of the supported kinds.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown validation kind: {0}")]
pub struct UnknownKind(pub String);

/// What a value is checked as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Email,
    Phone,
    Mobile,
    Text,
    Url,
    Date,
    Time,
    Alphanumeric,
    Alphabetic,
    Numeric,
    Boolean,
    Integer,
    Float,
    Range,
    Pattern,
    Password,
    FileType,
    FileSize,
    CreditCard,
    MultipleOf,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 20] = [
        Kind::Email,
        Kind::Phone,
        Kind::Mobile,
        Kind::Text,
        Kind::Url,
        Kind::Date,
        Kind::Time,
        Kind::Alphanumeric,
        Kind::Alphabetic,
        Kind::Numeric,
        Kind::Boolean,
        Kind::Integer,
        Kind::Float,
        Kind::Range,
        Kind::Pattern,
        Kind::Password,
        Kind::FileType,
        Kind::FileSize,
        Kind::CreditCard,
        Kind::MultipleOf,
    ];

    /// The snake_case name callers pass to `check`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Email => "email",
            Kind::Phone => "phone",
            Kind::Mobile => "mobile",
            Kind::Text => "text",
            Kind::Url => "url",
            Kind::Date => "date",
            Kind::Time => "time",
            Kind::Alphanumeric => "alphanumeric",
            Kind::Alphabetic => "alphabetic",
            Kind::Numeric => "numeric",
            Kind::Boolean => "boolean",
            Kind::Integer => "integer",
            Kind::Float => "float",
            Kind::Range => "range",
            Kind::Pattern => "pattern",
            Kind::Password => "password",
            Kind::FileType => "file_type",
            Kind::FileSize => "file_size",
            Kind::CreditCard => "credit_card",
            Kind::MultipleOf => "multiple_of",
        }
    }

    /// Whether this kind touches the filesystem.
    pub fn uses_filesystem(&self) -> bool {
        matches!(self, Kind::FileSize)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = UnknownKind;

    /// Names are matched exactly; `"Email"` is not `email`.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == name)
            .ok_or_else(|| UnknownKind(name.to_string()))
    }
}
