//! Per-kind rules.
//!
//! Each rule reads the input and options and writes its verdict and derived
//! fields into an `Outcome` that starts out invalid and required. Rules never
//! fail on bad input; they return `Err` only when the options themselves are
//! unusable.
//!
//! | Module | Kinds |
//! |--------|-------|
//! | `text` | email, phone, mobile, text, url, alphanumeric, alphabetic, pattern, credit_card |
//! | `numbers` | numeric, boolean, integer, float, range, multiple_of |
//! | `datetime` | date, time |
//! | `password` | password |
//! | `files` | file_type, file_size |

pub mod datetime;
pub mod files;
pub mod numbers;
pub mod password;
pub mod patterns;
pub mod text;

use regex::Regex;

use crate::CheckError;
use patterns::DELIMITED_PATTERN;

/// Compile a caller-supplied `pattern` option.
///
/// Accepts a bare regex or the delimited `/body/flags` form. Flags `i`, `m`,
/// `s`, `x` and `U` become inline flags; `u` is accepted and ignored since
/// matching is always Unicode-aware.
pub fn compile_pattern(pattern: &str) -> Result<Regex, CheckError> {
    let source = match DELIMITED_PATTERN.captures(pattern) {
        Some(caps) => {
            let body = caps.name("body").map_or("", |m| m.as_str());
            let flags = caps.name("flags").map_or("", |m| m.as_str());

            let mut inline = String::new();
            for flag in flags.chars() {
                match flag {
                    'i' | 'm' | 's' | 'x' | 'U' => inline.push(flag),
                    'u' => {}
                    other => {
                        return Err(CheckError::invalid_option(
                            "pattern",
                            format!("unsupported pattern flag '{}'", other),
                        ));
                    }
                }
            }

            if inline.is_empty() {
                body.to_string()
            } else {
                format!("(?{}){}", inline, body)
            }
        }
        None => pattern.to_string(),
    };

    Regex::new(&source).map_err(|e| CheckError::invalid_option("pattern", e.to_string()))
}
