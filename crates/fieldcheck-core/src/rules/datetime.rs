//! Date and time rules.
//!
//! A value is valid when it parses under the format AND formatting the parsed
//! value reproduces the input byte for byte. The second step rejects values a
//! lenient parser would normalize, such as `2024-02-30` or `2024-2-05`.
//!
//! Formats may leave fields out (`Y-m`, `m/d`, `H`). Missing fields are taken
//! from 2000-01-01 00:00:00 UTC, a leap year, so `02/29` under `m/d` is valid.
//! When a weekday is given without the fields that fix it, the year and day
//! are searched for a match, so `Mon, 15 Jun` is valid too.
//!
//! Formats use date letters (`Y-m-d`, `H:i:s`, `\` escapes a letter) unless they
//! contain `%`, in which case they are chrono strftime formats:
//!
//! | Letter | Meaning | strftime |
//! |--------|---------|----------|
//! | `d` / `j` | day, padded / unpadded | `%d` / `%-d` |
//! | `D` / `l` | weekday, short / full | `%a` / `%A` |
//! | `N` / `w` | weekday number, ISO 1-7 / 0-6 from Sunday | `%u` / `%w` |
//! | `m` / `n` | month, padded / unpadded | `%m` / `%-m` |
//! | `M` / `F` | month name, short / full | `%b` / `%B` |
//! | `Y` / `y` | year, 4-digit / 2-digit | `%Y` / `%y` |
//! | `H` / `G` | 24-hour, padded / unpadded | `%H` / `%-H` |
//! | `h` / `g` | 12-hour, padded / unpadded | `%I` / `%-I` |
//! | `i` / `s` | minutes / seconds | `%M` / `%S` |
//! | `u` / `v` | microseconds / milliseconds | `%6f` / `%3f` |
//! | `A` / `a` | AM/PM, upper / lower | `%p` / `%P` |
//! | `O` / `P` | UTC offset, `+0200` / `+02:00` | `%z` / `%:z` |
//! | `U` | Unix timestamp | `%s` |
//! | `c` / `r` | ISO 8601 / RFC 2822 date-time | |
//!
//! Any other ASCII letter is rejected as an invalid option; escape it with `\`
//! to use it literally.

use std::fmt::{self, Write};

use chrono::format::{parse, Item, ParseResult, Parsed, StrftimeItems};
use chrono::{DateTime, FixedOffset, Timelike};

use crate::options::Options;
use crate::types::{Input, Outcome};
use crate::CheckError;

pub const DEFAULT_DATE_FORMAT: &str = "Y-m-d";
pub const DEFAULT_TIME_FORMAT: &str = "H:i:s";

/// Fallback year for formats without one. A leap year, so February 29 resolves.
const BASE_YEAR: i64 = 2000;

/// Years after which the calendar (weekdays and leap days) repeats.
const CALENDAR_CYCLE: i64 = 28;

pub fn date(input: &Input, options: &Options, outcome: &mut Outcome) -> Result<(), CheckError> {
    let format = options.format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT);
    check_round_trip(input, format, outcome)
}

pub fn time(input: &Input, options: &Options, outcome: &mut Outcome) -> Result<(), CheckError> {
    let format = options.format.as_deref().unwrap_or(DEFAULT_TIME_FORMAT);
    check_round_trip(input, format, outcome)
}

fn check_round_trip(input: &Input, format: &str, outcome: &mut Outcome) -> Result<(), CheckError> {
    let strftime = to_strftime(format)?;
    if let Some(text) = input.as_text() {
        outcome.valid = round_trips(&text, &strftime);
    }
    Ok(())
}

/// Translate a `format` option into a chrono strftime string.
pub fn to_strftime(format: &str) -> Result<String, CheckError> {
    let translated = if format.contains('%') {
        format.to_string()
    } else {
        translate_letters(format)?
    };

    if StrftimeItems::new(&translated).any(|item| matches!(item, Item::Error)) {
        return Err(CheckError::invalid_option(
            "format",
            format!("unsupported date/time format '{}'", format),
        ));
    }

    Ok(translated)
}

fn translate_letters(format: &str) -> Result<String, CheckError> {
    let mut out = String::with_capacity(format.len() * 2);
    let mut chars = format.chars();

    while let Some(c) = chars.next() {
        let spec = match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    push_literal(&mut out, escaped);
                }
                continue;
            }
            'd' => "%d",
            'j' => "%-d",
            'D' => "%a",
            'l' => "%A",
            'N' => "%u",
            'w' => "%w",
            'm' => "%m",
            'n' => "%-m",
            'M' => "%b",
            'F' => "%B",
            'Y' => "%Y",
            'y' => "%y",
            'H' => "%H",
            'G' => "%-H",
            'h' => "%I",
            'g' => "%-I",
            'i' => "%M",
            's' => "%S",
            'u' => "%6f",
            'v' => "%3f",
            'A' => "%p",
            'a' => "%P",
            'O' => "%z",
            'P' => "%:z",
            'U' => "%s",
            'c' => "%Y-%m-%dT%H:%M:%S%:z",
            'r' => "%a, %d %b %Y %H:%M:%S %z",
            other if other.is_ascii_alphabetic() => {
                return Err(CheckError::invalid_option(
                    "format",
                    format!(
                        "unsupported format letter '{}' in '{}' (escape it as '\\{}' for a literal)",
                        other, format, other
                    ),
                ));
            }
            other => {
                push_literal(&mut out, other);
                continue;
            }
        };
        out.push_str(spec);
    }

    Ok(out)
}

fn push_literal(out: &mut String, c: char) {
    if c == '%' {
        out.push_str("%%");
    } else {
        out.push(c);
    }
}

/// Parse into loose fields, complete them, then re-format and compare.
fn round_trips(value: &str, strftime: &str) -> bool {
    let mut parsed = Parsed::new();
    if parse(&mut parsed, value, StrftimeItems::new(strftime)).is_err() {
        return false;
    }
    let Some(datetime) = resolve(&parsed) else {
        return false;
    };
    !is_leap_second(datetime.nanosecond())
        && render(datetime.format(strftime)).as_deref() == Some(value)
}

/// Complete the parsed fields into one instant, or `None` when they conflict.
fn resolve(parsed: &Parsed) -> Option<DateTime<FixedOffset>> {
    let mut base = parsed.clone();
    if base.offset().is_none() {
        base.set_offset(0).ok()?;
    }
    if base.timestamp().is_some() {
        return base.to_datetime().ok();
    }
    fill_time(&mut base).ok()?;

    let positional = [base.ordinal(), base.isoweek(), base.week_from_sun(), base.week_from_mon()]
        .iter()
        .any(Option::is_some);
    if !positional && base.month().is_none() {
        base.set_month(1).ok()?;
    }

    let needs_year = [
        base.year(),
        base.year_div_100(),
        base.year_mod_100(),
        base.isoyear(),
        base.isoyear_div_100(),
        base.isoyear_mod_100(),
    ]
    .iter()
    .all(Option::is_none);
    let years: Vec<Option<i64>> = if needs_year {
        (BASE_YEAR..BASE_YEAR + CALENDAR_CYCLE).map(Some).collect()
    } else {
        vec![None]
    };

    let days: Vec<Option<i64>> = match (positional || base.day().is_some(), base.weekday()) {
        (true, _) => vec![None],
        (false, None) => vec![Some(1)],
        (false, Some(_)) => (1..=7).map(Some).collect(),
    };

    years
        .iter()
        .flat_map(|year| days.iter().map(move |day| (*year, *day)))
        .find_map(|(year, day)| complete(&base, year, day))
}

fn complete(base: &Parsed, year: Option<i64>, day: Option<i64>) -> Option<DateTime<FixedOffset>> {
    let mut parsed = base.clone();
    if let Some(year) = year {
        parsed.set_year(year).ok()?;
    }
    if let Some(day) = day {
        parsed.set_day(day).ok()?;
    }
    parsed.to_datetime().ok()
}

/// Midnight for absent clock fields; a bare 12-hour value reads as AM.
fn fill_time(parsed: &mut Parsed) -> ParseResult<()> {
    match (parsed.hour_div_12(), parsed.hour_mod_12()) {
        (None, None) => parsed.set_hour(0)?,
        (None, Some(_)) => parsed.set_ampm(false)?,
        (Some(_), None) => parsed.set_hour12(12)?,
        (Some(_), Some(_)) => {}
    }
    if parsed.minute().is_none() {
        parsed.set_minute(0)?;
    }
    if parsed.second().is_none() {
        parsed.set_second(0)?;
    }
    Ok(())
}

/// chrono represents `:60` as a nanosecond overflow; wall clocks never show it.
fn is_leap_second(nanosecond: u32) -> bool {
    nanosecond >= 1_000_000_000
}

/// Format without panicking when the format asks for fields the value lacks.
fn render(formatted: impl fmt::Display) -> Option<String> {
    let mut out = String::new();
    write!(out, "{}", formatted).ok()?;
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    fn check_date(value: &str, format: Option<&str>) -> bool {
        let mut options = Options::new();
        if let Some(format) = format {
            options = options.format(format);
        }
        let mut outcome = Outcome::pending();
        date(&value.into(), &options, &mut outcome).unwrap();
        outcome.valid
    }

    fn check_time(value: &str, format: Option<&str>) -> bool {
        let mut options = Options::new();
        if let Some(format) = format {
            options = options.format(format);
        }
        let mut outcome = Outcome::pending();
        time(&value.into(), &options, &mut outcome).unwrap();
        outcome.valid
    }

    #[test]
    fn test_translate_letters() {
        let translate = |format| translate_letters(format).unwrap();
        assert_eq!(translate("Y-m-d"), "%Y-%m-%d");
        assert_eq!(translate("H:i:s"), "%H:%M:%S");
        assert_eq!(translate("j/n/Y g:i a"), "%-d/%-m/%Y %-I:%M %P");
        assert_eq!(translate("Y\\Wm"), "%YW%m");
        assert_eq!(translate("d%"), "%d%%");
        assert_eq!(translate("H:i:s.v"), "%H:%M:%S.%3f");
        assert_eq!(translate("U"), "%s");
        assert_eq!(translate("Y-m-d\\TH:i:sP"), "%Y-%m-%dT%H:%M:%S%:z");
    }

    #[test]
    fn test_unsupported_letters_error() {
        for format in ["jS F Y", "t", "L", "z", "e", "T", "W", "o", "Y-m-dTH:i"] {
            let err = translate_letters(format).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidOption, "{}", format);
        }

        let mut outcome = Outcome::pending();
        let options = Options::new().format("jS F Y");
        let err = date(&"1st June 2024".into(), &options, &mut outcome).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
    }

    #[test]
    fn test_default_date_format() {
        assert!(check_date("2024-02-29", None));
        assert!(check_date("1999-12-31", None));
        assert!(!check_date("2023-02-29", None));
        assert!(!check_date("2024-02-30", None));
        assert!(!check_date("2024-2-05", None));
        assert!(!check_date("2024-02-05 ", None));
        assert!(!check_date("05/02/2024", None));
    }

    #[test]
    fn test_custom_date_formats() {
        assert!(check_date("31/12/2024", Some("d/m/Y")));
        assert!(check_date("5/1/2024", Some("j/n/Y")));
        assert!(!check_date("05/01/2024", Some("j/n/Y")));
        assert!(check_date("Mar 3, 2024", Some("M j, Y")));
        assert!(check_date("31.12.2024", Some("%d.%m.%Y")));
        assert!(check_date("2024-06-01 08:30:00", Some("Y-m-d H:i:s")));
        assert!(!check_date("2024-06-01 25:30:00", Some("Y-m-d H:i:s")));
    }

    #[test]
    fn test_partial_date_formats_fill_missing_fields() {
        assert!(check_date("2024-06", Some("Y-m")));
        assert!(!check_date("2024-13", Some("Y-m")));
        assert!(check_date("2024", Some("Y")));
        assert!(check_date("06/15", Some("m/d")));
        assert!(check_date("02/29", Some("m/d")));
        assert!(!check_date("02/30", Some("m/d")));
        assert!(check_date("31", Some("d")));
        assert!(!check_date("32", Some("d")));
    }

    #[test]
    fn test_weekday_without_full_date() {
        assert!(check_date("Mon", Some("D")));
        assert!(check_date("Sunday", Some("l")));
        assert!(check_date("Sat, 15 Jun", Some("D, d M")));
        assert!(check_date("Thu, 29 Feb", Some("D, d M")));
        assert!(!check_date("Sat, 15 Jun 2023", Some("D, d M Y")));
        assert!(check_date("Thu, 15 Jun 2023", Some("D, d M Y")));
    }

    #[test]
    fn test_timestamp_format() {
        assert!(check_date("1718409600", Some("U")));
        assert!(!check_date("01718409600", Some("U")));
        assert!(!check_date("2024-06-15", Some("U")));
    }

    #[test]
    fn test_offset_formats() {
        assert!(check_date("2024-06-15 08:30:00+02:00", Some("Y-m-d H:i:sP")));
        assert!(check_date("2024-06-15 08:30:00 +0200", Some("Y-m-d H:i:s O")));
        assert!(!check_date("2024-06-15 08:30:00 +02:00", Some("Y-m-d H:i:s O")));
        assert!(check_date("2024-06-15T08:30:00+02:00", Some("c")));
        assert!(check_date("Sat, 15 Jun 2024 08:30:00 +0200", Some("r")));
        assert!(!check_date("Mon, 15 Jun 2024 08:30:00 +0200", Some("r")));
    }

    #[test]
    fn test_default_time_format() {
        assert!(check_time("00:00:00", None));
        assert!(check_time("23:59:59", None));
        assert!(!check_time("24:00:00", None));
        assert!(!check_time("23:59:60", None));
        assert!(!check_time("7:05:00", None));
        assert!(!check_time("12:00", None));
    }

    #[test]
    fn test_custom_time_formats() {
        assert!(check_time("3:05 PM", Some("g:i A")));
        assert!(check_time("03:05 pm", Some("h:i a")));
        assert!(!check_time("3:05 pm", Some("g:i A")));
        assert!(check_time("18:45", Some("H:i")));
    }

    #[test]
    fn test_partial_time_formats_fill_missing_fields() {
        assert!(check_time("14", Some("H")));
        assert!(!check_time("24", Some("H")));
        assert!(check_time("05:30", Some("i:s")));
        assert!(!check_time("05:60", Some("i:s")));
        assert!(check_time("3 PM", Some("g A")));
        assert!(check_time("9:15", Some("g:i")));
        assert!(check_time("PM", Some("A")));
    }

    #[test]
    fn test_fractional_seconds() {
        assert!(check_time("08:15:00.250", Some("H:i:s.v")));
        assert!(check_time("08:15:00.000250", Some("H:i:s.u")));
        assert!(!check_time("08:15:00.25", Some("H:i:s.v")));
    }

    #[test]
    fn test_bad_strftime_format_errors() {
        let options = Options::new().format("%Q-%Y");
        let mut outcome = Outcome::pending();
        let err = date(&"2024".into(), &options, &mut outcome).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
    }

    #[test]
    fn test_list_input_is_invalid() {
        let mut outcome = Outcome::pending();
        date(&Input::List(vec![]), &Options::default(), &mut outcome).unwrap();
        assert!(!outcome.valid);
    }
}
