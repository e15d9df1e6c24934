//! Validator: the required/blank guard plus per-kind dispatch.
//!
//! Every call follows the same two steps:
//! 1. Blank input on an optional field short-circuits to
//!    `{valid: false, required: false}` without running the kind check
//! 2. Otherwise `required` is forced to `true` and the kind's rule runs,
//!    even when the input is blank (a blank required value usually fails)
//!
//! Unknown kind names are not errors: they yield `valid: false`.

use crate::kind::Kind;
use crate::options::Options;
use crate::rules::files::{self, FileSystem, OsFileSystem};
use crate::rules::{datetime, numbers, password, text};
use crate::types::{Input, Outcome};
use crate::CheckError;

/// Stateless validator over a filesystem view.
///
/// Only `file_size` touches the filesystem; everything else is pure.
#[derive(Debug, Clone, Default)]
pub struct Validator<F = OsFileSystem> {
    filesystem: F,
}

impl Validator<OsFileSystem> {
    pub fn new() -> Self {
        Self {
            filesystem: OsFileSystem,
        }
    }
}

impl<F: FileSystem> Validator<F> {
    /// Use `filesystem` for `file_size` lookups.
    pub fn with_filesystem(filesystem: F) -> Self {
        Self { filesystem }
    }

    /// Check `input` as the kind named `kind`.
    ///
    /// # Returns
    ///
    /// * `Ok(outcome)` - the verdict, including `valid: false` for values
    ///   that fail the kind and for unknown kind names
    /// * `Err(CheckError)` - the options cannot be applied (bad regex, bad
    ///   format, zero `multiple`) or the filesystem lookup failed
    pub fn check(
        &self,
        input: impl Into<Input>,
        kind: &str,
        options: &Options,
    ) -> Result<Outcome, CheckError> {
        let input = input.into();
        match kind.parse::<Kind>() {
            Ok(kind) => self.run(&input, kind.as_str(), Some(kind), options),
            Err(_) => self.run(&input, kind, None, options),
        }
    }

    /// Check `input` as an already-parsed kind.
    pub fn check_kind(
        &self,
        input: impl Into<Input>,
        kind: Kind,
        options: &Options,
    ) -> Result<Outcome, CheckError> {
        self.run(&input.into(), kind.as_str(), Some(kind), options)
    }

    fn run(
        &self,
        input: &Input,
        name: &str,
        kind: Option<Kind>,
        options: &Options,
    ) -> Result<Outcome, CheckError> {
        if input.is_empty() && !options.required {
            tracing::trace!(kind = name, "Optional field left blank, skipping check");
            return Ok(Outcome::blank_optional());
        }

        let mut outcome = Outcome::pending();

        match kind {
            Some(kind) => {
                if let Err(e) = self.apply(kind, input, options, &mut outcome) {
                    tracing::warn!(kind = name, error = %e, "Validator misconfigured");
                    return Err(e);
                }
            }
            None => {
                tracing::debug!(kind = name, "Unrecognized kind, reporting invalid");
            }
        }

        tracing::debug!(
            kind = name,
            valid = outcome.valid,
            required = outcome.required,
            "Check complete"
        );
        Ok(outcome)
    }

    fn apply(
        &self,
        kind: Kind,
        input: &Input,
        options: &Options,
        outcome: &mut Outcome,
    ) -> Result<(), CheckError> {
        match kind {
            Kind::Email => text::email(input, options, outcome),
            Kind::Phone => text::phone(input, outcome),
            Kind::Mobile => text::mobile(input, outcome),
            Kind::Text => text::text(input, options, outcome)?,
            Kind::Url => text::url(input, outcome),
            Kind::Date => datetime::date(input, options, outcome)?,
            Kind::Time => datetime::time(input, options, outcome)?,
            Kind::Alphanumeric => text::alphanumeric(input, outcome),
            Kind::Alphabetic => text::alphabetic(input, outcome),
            Kind::Numeric => numbers::numeric(input, outcome),
            Kind::Boolean => numbers::boolean(input, outcome),
            Kind::Integer => numbers::integer(input, outcome),
            Kind::Float => numbers::float(input, outcome),
            Kind::Range => numbers::range(input, options, outcome),
            Kind::Pattern => text::pattern(input, options, outcome)?,
            Kind::Password => password::password(input, options, outcome),
            Kind::FileType => files::file_type(input, options, outcome),
            Kind::FileSize => files::file_size(&self.filesystem, input, options, outcome)?,
            Kind::CreditCard => text::credit_card(input, outcome),
            Kind::MultipleOf => numbers::multiple_of(input, options, outcome)?,
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::path::Path;

    use super::*;
    use crate::ErrorKind;

    /// Filesystem where every file is 10 bytes.
    struct TenBytes;

    impl FileSystem for TenBytes {
        fn size_of(&self, _path: &Path) -> io::Result<Option<u64>> {
            Ok(Some(10))
        }
    }

    #[test]
    fn test_blank_optional_short_circuits() {
        let validator = Validator::new();
        for kind in Kind::ALL {
            let outcome = validator.check_kind("", kind, &Options::default()).unwrap();
            assert_eq!(outcome, Outcome::default(), "{}", kind);
        }
    }

    #[test]
    fn test_blank_optional_skips_misconfiguration() {
        let options = Options::new().pattern("([");
        let outcome = Validator::new().check("", "pattern", &options).unwrap();
        assert!(outcome.is_blank_optional());
    }

    #[test]
    fn test_blank_required_runs_kind_check() {
        let options = Options::new().required(true);
        let outcome = Validator::new().check("", "email", &options).unwrap();
        assert!(!outcome.valid);
        assert!(outcome.required);

        // Password has no checks configured, so blank passes
        let outcome = Validator::new().check("", "password", &options).unwrap();
        assert!(outcome.valid);
        assert!(outcome.required);
    }

    #[test]
    fn test_present_value_forces_required() {
        let outcome = Validator::new()
            .check("a@b.com", "email", &Options::default())
            .unwrap();
        assert!(outcome.valid);
        assert!(outcome.required);
    }

    #[test]
    fn test_unknown_kind_is_invalid_not_error() {
        let outcome = Validator::new()
            .check("12345", "zipcode", &Options::default())
            .unwrap();
        assert_eq!(
            outcome,
            Outcome {
                valid: false,
                required: true,
                ..Outcome::default()
            }
        );
    }

    #[test]
    fn test_unknown_kind_blank_optional() {
        let outcome = Validator::new()
            .check("", "zipcode", &Options::default())
            .unwrap();
        assert!(outcome.is_blank_optional());
    }

    #[test]
    fn test_misconfiguration_is_error() {
        let options = Options::new().pattern("([");
        let err = Validator::new()
            .check("abc", "pattern", &options)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidOption);
    }

    #[test]
    fn test_custom_filesystem() {
        let validator = Validator::with_filesystem(TenBytes);

        let outcome = validator
            .check("any/path", "file_size", &Options::new().max_size(10))
            .unwrap();
        assert!(outcome.valid);
        assert_eq!(outcome.file_size, Some(10));

        let outcome = validator
            .check("any/path", "file_size", &Options::new().max_size(9))
            .unwrap();
        assert!(!outcome.valid);
    }

    #[test]
    fn test_borrowed_filesystem() {
        let filesystem = TenBytes;
        let validator = Validator::with_filesystem(&filesystem);
        let outcome = validator
            .check_kind("x", Kind::FileSize, &Options::default())
            .unwrap();
        assert!(outcome.valid);
    }
}
