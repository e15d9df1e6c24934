//! Rules over the textual form of the input.

use url::Url;

use super::compile_pattern;
use super::patterns::{EMAIL_PATTERN, MOBILE_PATTERN, PHONE_PATTERN, VISA_PATTERN};
use crate::options::Options;
use crate::types::{Input, Outcome};
use crate::CheckError;

/// Digits in a subscriber number; everything before them is the country code.
const SUBSCRIBER_DIGITS: usize = 10;

const MAX_LOCAL_PART: usize = 64;
const MAX_DOMAIN: usize = 253;

/// Schemes whose URLs must carry `://` and a host.
const HOST_SCHEMES: &[&str] = &["http", "https", "ftp", "ftps", "ws", "wss"];

pub fn email(input: &Input, options: &Options, outcome: &mut Outcome) {
    let Some(text) = input.as_text() else {
        return;
    };
    let Some((username, domain)) = split_email(&text) else {
        return;
    };

    outcome.valid = true;
    outcome.username = Some(username.to_string());
    outcome.domain = Some(domain.to_string());
    outcome.length = Some(text.len());

    if let Some(expected) = &options.domain {
        if expected != domain {
            outcome.valid = false;
        }
    }
}

/// Split a well-formed address into local part and domain.
fn split_email(value: &str) -> Option<(&str, &str)> {
    let caps = EMAIL_PATTERN.captures(value)?;
    let local = caps.name("local")?.as_str();
    let domain = caps.name("domain")?.as_str();

    if local.len() > MAX_LOCAL_PART || domain.len() > MAX_DOMAIN {
        return None;
    }

    // Dotted-quad lookalikes such as "1.2.3.4" are not hostnames
    let tld = domain.rsplit('.').next()?;
    if tld.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((local, domain))
}

pub fn phone(input: &Input, outcome: &mut Outcome) {
    let Some(text) = input.as_text() else {
        return;
    };
    if !PHONE_PATTERN.is_match(&text) {
        return;
    }

    let (country_code, number) = split_subscriber(&text);
    outcome.valid = true;
    outcome.length = Some(text.len());
    outcome.country_code = Some(country_code.to_string());
    outcome.phone_number = Some(number.to_string());
}

pub fn mobile(input: &Input, outcome: &mut Outcome) {
    let Some(text) = input.as_text() else {
        return;
    };
    if !MOBILE_PATTERN.is_match(&text) {
        return;
    }

    let (country_code, number) = split_subscriber(&text);
    outcome.valid = true;
    outcome.length = Some(text.len());
    outcome.country_code = Some(country_code.to_string());
    outcome.mobile_number = Some(number.to_string());
}

/// Split off the trailing subscriber digits. Shorter values are all subscriber.
///
/// Only called on pattern-checked ASCII, so the split is on a char boundary.
fn split_subscriber(value: &str) -> (&str, &str) {
    value.split_at(value.len().saturating_sub(SUBSCRIBER_DIGITS))
}

/// Free text: only actual strings qualify, then length and pattern limits apply.
pub fn text(input: &Input, options: &Options, outcome: &mut Outcome) -> Result<(), CheckError> {
    let Some(value) = input.as_str() else {
        return Ok(());
    };

    let length = value.len();
    outcome.valid = true;
    outcome.length = Some(length);

    if options.min_length.is_some_and(|min| length < min) {
        outcome.valid = false;
    }
    if options.max_length.is_some_and(|max| length > max) {
        outcome.valid = false;
    }
    if let Some(pattern) = &options.pattern {
        if !compile_pattern(pattern)?.is_match(value) {
            outcome.valid = false;
        }
    }

    Ok(())
}

pub fn url(input: &Input, outcome: &mut Outcome) {
    let Some(text) = input.as_text() else {
        return;
    };
    if is_url(&text) {
        outcome.valid = true;
        outcome.length = Some(text.len());
    }
}

fn is_url(value: &str) -> bool {
    if value.is_empty() || !value.is_ascii() || value.chars().any(|c| c.is_ascii_whitespace()) {
        return false;
    }

    let Ok(parsed) = Url::parse(value) else {
        return false;
    };

    if HOST_SCHEMES.contains(&parsed.scheme()) {
        // The parser repairs "http:example.com"; require the literal authority
        let has_authority = value
            .get(parsed.scheme().len()..)
            .is_some_and(|rest| rest.starts_with("://"));
        return has_authority && parsed.host_str().is_some_and(|host| !host.is_empty());
    }

    true
}

pub fn alphanumeric(input: &Input, outcome: &mut Outcome) {
    char_class(input, outcome, |b| b.is_ascii_alphanumeric());
}

pub fn alphabetic(input: &Input, outcome: &mut Outcome) {
    char_class(input, outcome, |b| b.is_ascii_alphabetic());
}

/// Non-empty text made only of bytes accepted by `allowed`.
fn char_class(input: &Input, outcome: &mut Outcome, allowed: impl Fn(u8) -> bool) {
    let Some(text) = input.as_text() else {
        return;
    };
    if !text.is_empty() && text.bytes().all(allowed) {
        outcome.valid = true;
        outcome.length = Some(text.len());
    }
}

/// Match against `options.pattern`; without one, nothing matches.
pub fn pattern(input: &Input, options: &Options, outcome: &mut Outcome) -> Result<(), CheckError> {
    let Some(pattern) = &options.pattern else {
        return Ok(());
    };
    let regex = compile_pattern(pattern)?;

    let Some(text) = input.as_text() else {
        return Ok(());
    };
    if regex.is_match(&text) {
        outcome.valid = true;
        outcome.length = Some(text.len());
    }

    Ok(())
}

/// Only Visa numbering is recognized.
pub fn credit_card(input: &Input, outcome: &mut Outcome) {
    let Some(text) = input.as_text() else {
        return;
    };
    if VISA_PATTERN.is_match(&text) {
        outcome.valid = true;
        outcome.card_type = Some("Visa".to_string());
    }
}
