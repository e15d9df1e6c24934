//! Shared regex patterns for the rules.
//!
//! Every pattern here is anchored and compiled once. Caller-supplied patterns
//! are compiled per call in `rules::compile_pattern` instead.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // =========================================================================
    // CONTACT PATTERNS
    // =========================================================================

    /// Email address: dot-atom local part, dotted hostname domain
    pub static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^(?P<local>[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*)@(?P<domain>(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)$"
    ).unwrap();

    /// Phone number: optional `+`, then 10 to 15 digits
    pub static ref PHONE_PATTERN: Regex = Regex::new(
        r"^\+?[0-9]{10,15}$"
    ).unwrap();

    /// Mobile number (E.164 shape): optional `+`, non-zero lead, up to 15 digits
    pub static ref MOBILE_PATTERN: Regex = Regex::new(
        r"^\+?[1-9][0-9]{1,14}$"
    ).unwrap();

    /// Visa card number: 13 or 16 digits starting with 4
    pub static ref VISA_PATTERN: Regex = Regex::new(
        r"^4[0-9]{12}(?:[0-9]{3})?$"
    ).unwrap();

    // =========================================================================
    // NUMBER PATTERNS
    // =========================================================================

    /// Numeric string, surrounding whitespace allowed
    pub static ref NUMERIC_PATTERN: Regex = Regex::new(
        r"^\s*[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?\s*$"
    ).unwrap();

    /// Float literal (applied to trimmed text)
    pub static ref FLOAT_PATTERN: Regex = Regex::new(
        r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$"
    ).unwrap();

    /// Integer literal without leading zeros (applied to trimmed text)
    pub static ref INTEGER_PATTERN: Regex = Regex::new(
        r"^[+-]?(?:0|[1-9][0-9]*)$"
    ).unwrap();

    // =========================================================================
    // PASSWORD CHARACTER CLASSES
    // =========================================================================

    /// Anything but an ASCII letter or digit; `_` and non-ASCII count
    pub static ref SPECIAL_CHAR_PATTERN: Regex = Regex::new(r"[^A-Za-z0-9]").unwrap();

    pub static ref DIGIT_PATTERN: Regex = Regex::new(r"[0-9]").unwrap();

    pub static ref UPPERCASE_PATTERN: Regex = Regex::new(r"[A-Z]").unwrap();

    pub static ref LOWERCASE_PATTERN: Regex = Regex::new(r"[a-z]").unwrap();

    // =========================================================================
    // OPTION SYNTAX
    // =========================================================================

    /// Delimited pattern option: `/body/flags`
    pub static ref DELIMITED_PATTERN: Regex = Regex::new(
        r"(?s)^/(?P<body>.*)/(?P<flags>[A-Za-z]*)$"
    ).unwrap();
}
