//! Snapshot of all fields, for introspection and debugging.

use core::fmt;

use crate::params::Parameters;
use crate::uri::ParsedUri;

/// Names of the fields, in the order [`Fields::iter`] yields them.
pub const FIELD_NAMES: [&str; 9] = [
    "scheme",
    "hostname",
    "path",
    "parameters",
    "fragment",
    "parameter_delimiter",
    "username",
    "password",
    "email",
];

/// Owned snapshot of every field of a [`ParsedUri`].
///
/// An absent scheme is represented by an empty string.
///
/// ```
/// use uri_fields::{FieldValue, ParsedUri};
///
/// let fields = ParsedUri::parse("mailto:a@b.com").all_fields();
/// assert_eq!(fields.get("scheme"), Some(FieldValue::Text("mailto")));
/// assert_eq!(fields.get("email"), Some(FieldValue::Text("a@b.com")));
/// assert_eq!(fields.get("hostname"), Some(FieldValue::Text("b.com")));
/// assert_eq!(fields.get("port"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fields {
    /// Scheme name.
    pub scheme: String,
    /// Hostname.
    pub hostname: String,
    /// Path.
    pub path: String,
    /// Query parameters.
    pub parameters: Parameters,
    /// Fragment.
    pub fragment: String,
    /// Parameter delimiter.
    pub parameter_delimiter: char,
    /// Username.
    pub username: String,
    /// Password.
    pub password: String,
    /// Email address.
    pub email: String,
}

impl Fields {
    /// Returns the value of the field with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<FieldValue<'_>> {
        self.iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value)
    }

    /// Returns an iterator over `(name, value)` pairs of all fields.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, FieldValue<'_>)> {
        let values = [
            FieldValue::Text(&self.scheme),
            FieldValue::Text(&self.hostname),
            FieldValue::Text(&self.path),
            FieldValue::Parameters(&self.parameters),
            FieldValue::Text(&self.fragment),
            FieldValue::Delimiter(self.parameter_delimiter),
            FieldValue::Text(&self.username),
            FieldValue::Text(&self.password),
            FieldValue::Text(&self.email),
        ];
        FIELD_NAMES.into_iter().zip(values)
    }
}

impl From<&ParsedUri> for Fields {
    fn from(uri: &ParsedUri) -> Self {
        Self {
            scheme: uri.scheme_str().to_owned(),
            hostname: uri.hostname.clone(),
            path: uri.path.clone(),
            parameters: uri.parameters.clone(),
            fragment: uri.fragment.clone(),
            parameter_delimiter: uri.parameter_delimiter,
            username: uri.username.clone(),
            password: uri.password.clone(),
            email: uri.email.clone(),
        }
    }
}

/// Value of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A string field.
    Text(&'a str),
    /// The query parameters.
    Parameters(&'a Parameters),
    /// The parameter delimiter.
    Delimiter(char),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Parameters(params) => write!(f, "{:?}", params.iter().collect::<Vec<_>>()),
            Self::Delimiter(c) => write!(f, "{}", c),
        }
    }
}
