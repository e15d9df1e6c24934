//! Password strength rule.
//!
//! A password is valid unless one of the requested checks fails. A check is
//! requested when its option is present: `require_numbers: false` still
//! requires a digit. Lengths are byte lengths.

use regex::Regex;

use super::patterns::{DIGIT_PATTERN, LOWERCASE_PATTERN, SPECIAL_CHAR_PATTERN, UPPERCASE_PATTERN};
use crate::options::Options;
use crate::types::{Input, Outcome};

pub fn password(input: &Input, options: &Options, outcome: &mut Outcome) {
    let Some(text) = input.as_text() else {
        return;
    };
    outcome.valid = satisfies(&text, options);
}

fn satisfies(password: &str, options: &Options) -> bool {
    let length = password.len();
    if options.min_length.is_some_and(|min| length < min) {
        return false;
    }
    if options.max_length.is_some_and(|max| length > max) {
        return false;
    }

    let classes: [(Option<bool>, &Regex); 4] = [
        (options.require_special_chars, &*SPECIAL_CHAR_PATTERN),
        (options.require_numbers, &*DIGIT_PATTERN),
        (options.require_uppercase, &*UPPERCASE_PATTERN),
        (options.require_lowercase, &*LOWERCASE_PATTERN),
    ];

    classes
        .iter()
        .all(|(requested, class)| requested.is_none() || class.is_match(password))
}
