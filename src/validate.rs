//! Validators.
//!
//! These are the checks the validated setters of [`ParsedUri`][`crate::ParsedUri`] run.
//! The hostname and path validators search for the grammar anywhere in the given string and
//! return the matched part, so `"see random.site.com:80 now"` is accepted as the hostname
//! `random.site.com:80`.

use core::fmt;
use std::error;

use crate::parser::pattern;
use crate::scheme::Scheme;

/// Field of a parsed URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FieldKind {
    /// Scheme.
    Scheme,
    /// Hostname, with optional port.
    Hostname,
    /// Path.
    Path,
}

impl FieldKind {
    /// Returns the field name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Scheme => "scheme",
            Self::Hostname => "hostname",
            Self::Path => "path",
        }
    }
}

/// Field validation error.
///
/// Returned when a proposed value does not match the grammar of the field.
// Note that this type should implement `Copy` trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Error {
    /// Field the rejected value was proposed for.
    field: FieldKind,
}

impl Error {
    /// Creates a new `Error`.
    ///
    /// For internal use.
    #[inline]
    pub(crate) fn new(field: FieldKind) -> Self {
        Self { field }
    }

    /// Returns the field the rejected value was proposed for.
    #[inline]
    #[must_use]
    pub fn field(&self) -> FieldKind {
        self.field
    }
}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}", self.field.name())
    }
}

impl error::Error for Error {}

/// Validates a scheme name.
///
/// The value must be exactly one of the recognized scheme names.
///
/// ```
/// # use uri_fields::{validate, Scheme};
/// assert_eq!(validate::scheme("mailto"), Ok(Scheme::Mailto));
/// assert!(validate::scheme("mailto:").is_err());
/// ```
pub fn scheme(s: &str) -> Result<Scheme, Error> {
    Scheme::from_name(s).ok_or(Error::new(FieldKind::Scheme))
}

/// Validates a hostname and returns the leftmost matching part.
///
/// ```
/// # use uri_fields::validate;
/// assert_eq!(validate::hostname("random.site.com:80"), Ok("random.site.com:80"));
/// assert_eq!(validate::hostname("//www.example.com/index"), Ok("www.example.com"));
/// assert!(validate::hostname("random").is_err());
/// ```
pub fn hostname(s: &str) -> Result<&str, Error> {
    pattern::HOSTNAME
        .find(s)
        .map(|m| m.as_str())
        .ok_or(Error::new(FieldKind::Hostname))
}

/// Validates a path and returns the leftmost matching part.
///
/// Unlike path extraction during parsing, the character before the match is not inspected.
///
/// ```
/// # use uri_fields::validate;
/// assert_eq!(validate::path("/my/good/path"), Ok("/my/good/path"));
/// assert_eq!(validate::path("see /index.html"), Ok("/index.html"));
/// assert!(validate::path("mybadpath").is_err());
/// ```
pub fn path(s: &str) -> Result<&str, Error> {
    pattern::PATH
        .find(s)
        .map(|m| m.as_str())
        .ok_or(Error::new(FieldKind::Path))
}
