//! # fieldcheck-core
//!
//! Stateless single-field input validation.
//!
//! Given a raw value, a kind (`email`, `phone`, `date`, `password`, ...) and
//! options, `check` decides whether the value conforms and extracts derived
//! facts such as an email's domain or a phone number's country code.
//!
//! ## Key Guarantees
//!
//! 1. **Deterministic**: Same input always produces same outcome
//!    (`file_size` excepted when the file changes between calls)
//! 2. **Two failure tiers**: a bad value is `valid: false`; a bad option or
//!    failed filesystem lookup is `Err(CheckError)`
//! 3. **Blank optional fields pass through**: `{valid: false, required: false}`
//! 4. **Reentrant**: no shared mutable state, safe from any number of threads
//!
//! ## Example
//!
//! ```rust
//! use fieldcheck_core::{check, Options};
//!
//! let outcome = check("a@b.com", "email", &Options::default())?;
//! assert!(outcome.valid);
//! assert_eq!(outcome.domain.as_deref(), Some("b.com"));
//!
//! let outcome = check("", "email", &Options::default())?;
//! assert!(outcome.is_blank_optional());
//! # Ok::<(), fieldcheck_core::CheckError>(())
//! ```

pub mod kind;
pub mod options;
pub mod rules;
pub mod types;
pub mod validator;

use std::path::PathBuf;

use thiserror::Error;

// Re-export main types at crate root
pub use kind::{Kind, UnknownKind};
pub use options::{Options, OptionsError, Rule};
pub use rules::files::{FileSystem, OsFileSystem};
pub use types::{DerivedValue, Input, Outcome};
pub use validator::Validator;

/// Broad category of a `CheckError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An option cannot be applied (bad regex, bad format, zero divisor)
    InvalidOption,
    /// The filesystem lookup failed for a reason other than a missing file
    Filesystem,
}

/// Errors that mean the validator, not the value, is at fault.
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Invalid option `{option}`: {reason}")]
    InvalidOption { option: &'static str, reason: String },

    #[error("Filesystem lookup failed for {}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl CheckError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CheckError::InvalidOption { .. } => ErrorKind::InvalidOption,
            CheckError::Filesystem { .. } => ErrorKind::Filesystem,
        }
    }

    pub(crate) fn invalid_option(option: &'static str, reason: impl Into<String>) -> Self {
        CheckError::InvalidOption {
            option,
            reason: reason.into(),
        }
    }
}

/// Check a value against a kind, by name.
///
/// This is the main entry point. It uses the real filesystem for
/// `file_size`; use `Validator::with_filesystem` to substitute another.
///
/// # Arguments
///
/// * `input` - The value to check (string, number, boolean, path, ...)
/// * `kind` - Kind name such as `"email"`; unknown names yield `valid: false`
/// * `options` - Per-kind settings; `Options::default()` for none
pub fn check(
    input: impl Into<Input>,
    kind: &str,
    options: &Options,
) -> Result<Outcome, CheckError> {
    Validator::new().check(input, kind, options)
}

/// Check a value against an already-parsed kind.
pub fn check_kind(
    input: impl Into<Input>,
    kind: Kind,
    options: &Options,
) -> Result<Outcome, CheckError> {
    Validator::new().check_kind(input, kind, options)
}
