//! Parsed URI record.

use core::convert::Infallible;
use core::str::FromStr;

use crate::fields::Fields;
use crate::params::Parameters;
use crate::parser::{ParserConfig, UriParser};
use crate::scheme::Scheme;
use crate::validate::{self, Error};

/// Fields of a URI-like string.
///
/// Created by parsing (see [`UriParser`]), or empty by [`ParsedUri::new`] and then populated
/// through the setters.
///
/// Rendering with [`Display`][`core::fmt::Display`] (or `to_string()`) produces the
/// canonical string form.
/// Note that parsing and rendering are not symmetric: the `?` and `#` separators are always
/// written, even when the parameters or the fragment are empty.
///
/// ```
/// use uri_fields::ParsedUri;
///
/// let uri = ParsedUri::parse("http://www.example.com");
/// assert_eq!(uri.to_string(), "http://www.example.com?#");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedUri {
    /// Scheme.
    pub(crate) scheme: Option<Scheme>,
    /// Hostname with optional port.
    pub(crate) hostname: String,
    /// Path.
    pub(crate) path: String,
    /// Query parameters.
    pub(crate) parameters: Parameters,
    /// Delimiter between query parameters.
    pub(crate) parameter_delimiter: char,
    /// Fragment.
    pub(crate) fragment: String,
    /// Username (`ftp` only).
    pub(crate) username: String,
    /// Password (`ftp` only).
    pub(crate) password: String,
    /// Email address (`mailto` only).
    pub(crate) email: String,
}

impl Default for ParsedUri {
    #[inline]
    fn default() -> Self {
        Self::with_delimiter(ParserConfig::DEFAULT_DELIMITER)
    }
}

impl ParsedUri {
    /// Creates an empty value with the default `&` parameter delimiter.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty value with the given parameter delimiter.
    #[must_use]
    pub fn with_delimiter(delimiter: char) -> Self {
        Self {
            scheme: None,
            hostname: String::new(),
            path: String::new(),
            parameters: Parameters::new(),
            parameter_delimiter: delimiter,
            fragment: String::new(),
            username: String::new(),
            password: String::new(),
            email: String::new(),
        }
    }

    /// Parses the given string with the default `&` parameter delimiter.
    #[inline]
    #[must_use]
    pub fn parse(s: &str) -> Self {
        UriParser::default().parse(s)
    }

    /// Parses the given string with the given parameter delimiter.
    #[inline]
    #[must_use]
    pub fn parse_with_delimiter(s: &str, delimiter: char) -> Self {
        UriParser::new(ParserConfig::with_delimiter(delimiter)).parse(s)
    }

    /// Returns the scheme.
    #[inline]
    #[must_use]
    pub fn scheme(&self) -> Option<Scheme> {
        self.scheme
    }

    /// Returns the scheme name, or an empty string if there is no scheme.
    #[inline]
    #[must_use]
    pub fn scheme_str(&self) -> &str {
        self.scheme.map_or("", Scheme::as_str)
    }

    /// Returns the hostname, including the port if any.
    #[inline]
    #[must_use]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    /// Returns the path.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the query parameters.
    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Returns the query parameters mutably.
    #[inline]
    pub fn parameters_mut(&mut self) -> &mut Parameters {
        &mut self.parameters
    }

    /// Returns the parameter delimiter.
    #[inline]
    #[must_use]
    pub fn parameter_delimiter(&self) -> char {
        self.parameter_delimiter
    }

    /// Returns the fragment.
    #[inline]
    #[must_use]
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Returns the username.
    #[inline]
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the password.
    #[inline]
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the email address.
    #[inline]
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Sets the scheme by name.
    ///
    /// The name must be exactly one of the recognized scheme names.
    /// A rejected name clears the scheme instead of keeping the previous one.
    ///
    /// ```
    /// use uri_fields::{ParsedUri, Scheme};
    ///
    /// let mut uri = ParsedUri::new();
    /// assert_eq!(uri.set_scheme("http"), Ok(Scheme::Http));
    /// assert!(uri.set_scheme("asdf").is_err());
    /// assert_eq!(uri.scheme(), None);
    /// ```
    pub fn set_scheme(&mut self, value: &str) -> Result<Scheme, Error> {
        let result = validate::scheme(value);
        if result.is_err() {
            debug!(value, "rejected scheme, clearing it");
        }
        self.scheme = result.ok();
        result
    }

    /// Sets the scheme.
    #[inline]
    pub fn set_scheme_kind(&mut self, scheme: Option<Scheme>) {
        self.scheme = scheme;
    }

    /// Sets the hostname, and returns the stored value.
    ///
    /// The leftmost part of `value` matching the hostname grammar is stored.
    /// If nothing matches, the previous hostname is kept.
    ///
    /// ```
    /// use uri_fields::ParsedUri;
    ///
    /// let mut uri = ParsedUri::new();
    /// assert!(uri.set_hostname("random").is_err());
    /// assert_eq!(uri.hostname(), "");
    /// assert_eq!(uri.set_hostname("random.site.com:80"), Ok("random.site.com:80"));
    /// assert!(uri.set_hostname("random").is_err());
    /// assert_eq!(uri.hostname(), "random.site.com:80");
    /// ```
    pub fn set_hostname(&mut self, value: &str) -> Result<&str, Error> {
        match validate::hostname(value) {
            Ok(hostname) => {
                self.hostname = hostname.to_owned();
                Ok(&self.hostname)
            }
            Err(e) => {
                debug!(value, "rejected hostname, keeping the previous one");
                Err(e)
            }
        }
    }

    /// Sets the path, and returns the stored value.
    ///
    /// The leftmost part of `value` matching the path grammar is stored.
    /// If nothing matches, the previous path is kept.
    pub fn set_path(&mut self, value: &str) -> Result<&str, Error> {
        match validate::path(value) {
            Ok(path) => {
                self.path = path.to_owned();
                Ok(&self.path)
            }
            Err(e) => {
                debug!(value, "rejected path, keeping the previous one");
                Err(e)
            }
        }
    }

    /// Replaces the query parameters.
    #[inline]
    pub fn set_parameters(&mut self, parameters: impl Into<Parameters>) {
        self.parameters = parameters.into();
    }

    /// Sets the parameter delimiter used when rendering.
    #[inline]
    pub fn set_parameter_delimiter(&mut self, delimiter: char) {
        self.parameter_delimiter = delimiter;
    }

    /// Sets the fragment.
    #[inline]
    pub fn set_fragment(&mut self, fragment: impl Into<String>) {
        self.fragment = fragment.into();
    }

    /// Sets the username.
    #[inline]
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Sets the password.
    #[inline]
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = password.into();
    }

    /// Sets the email address.
    #[inline]
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Inserts or overwrites a query parameter, and returns the replaced value.
    #[inline]
    pub fn add_or_update_param(
        &mut self,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.parameters.insert(name, value)
    }

    /// Inserts or overwrites query parameters.
    ///
    /// ```
    /// use uri_fields::ParsedUri;
    ///
    /// let mut uri = ParsedUri::new();
    /// uri.add_or_update_param("k", "v");
    /// uri.add_or_update_params([("p1", "val1"), ("k", "w")]);
    /// assert_eq!(uri.parameters().get("k"), Some("w"));
    /// assert_eq!(uri.parameters().get("p1"), Some("val1"));
    /// ```
    pub fn add_or_update_params<I, K, V>(&mut self, params: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters.extend(params);
    }

    /// Returns the text after the last `.` of the hostname.
    ///
    /// Returns an empty string if the hostname is empty.
    /// The result is not checked against any list of top-level domains, and a port stays
    /// attached to it.
    ///
    /// ```
    /// use uri_fields::ParsedUri;
    ///
    /// let uri = ParsedUri::parse("http://my.very.long.hostname.co.uk");
    /// assert_eq!(uri.tld(), "uk");
    /// assert_eq!(ParsedUri::new().tld(), "");
    /// ```
    #[must_use]
    pub fn tld(&self) -> &str {
        self.hostname
            .rsplit_once('.')
            .map_or("", |(_, tld)| tld)
    }

    /// Returns a snapshot of all fields.
    #[must_use]
    pub fn all_fields(&self) -> Fields {
        Fields::from(self)
    }
}

impl FromStr for ParsedUri {
    type Err = Infallible;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for ParsedUri {
    #[inline]
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let uri = ParsedUri::new();
        assert_eq!(uri.scheme(), None);
        assert_eq!(uri.scheme_str(), "");
        assert_eq!(uri.hostname(), "");
        assert!(uri.parameters().is_empty());
        assert_eq!(uri.parameter_delimiter(), '&');
        assert_eq!(ParsedUri::parse(""), uri);
    }

    #[test]
    fn parse_keeps_delimiter() {
        let uri = ParsedUri::parse_with_delimiter("", ';');
        assert_eq!(uri.parameter_delimiter(), ';');
    }

    #[test]
    fn scheme_rejection_clears() {
        let mut uri = ParsedUri::parse("ftp://www.myserver.com");
        assert_eq!(uri.scheme(), Some(Scheme::Ftp));
        assert_eq!(
            uri.set_scheme("FTP").map_err(|e| e.field()),
            Err(validate::FieldKind::Scheme)
        );
        assert_eq!(uri.scheme(), None);
    }

    #[test]
    fn path_setter_stores_match() {
        let mut uri = ParsedUri::new();
        assert!(uri.set_path("mybadpath").is_err());
        assert_eq!(uri.path(), "");
        assert_eq!(uri.set_path("/my/good/path"), Ok("/my/good/path"));
        assert_eq!(uri.set_path("x/y.html?z"), Ok("/y.html"));
        assert!(uri.set_path("nothing").is_err());
        assert_eq!(uri.path(), "/y.html");
    }

    #[test]
    fn unconditional_setters() {
        let mut uri = ParsedUri::new();
        uri.set_fragment("anythingiwant");
        uri.set_username("not an ftp uri");
        uri.set_email("???");
        assert_eq!(uri.fragment(), "anythingiwant");
        assert_eq!(uri.username(), "not an ftp uri");
        assert_eq!(uri.email(), "???");
    }

    #[test]
    fn replace_parameters() {
        let mut uri = ParsedUri::new();
        uri.add_or_update_param("k", "v");
        let replacement: Parameters = [("p1", "val1")].into_iter().collect();
        uri.set_parameters(replacement);
        assert!(!uri.parameters().contains_key("k"));
        assert_eq!(uri.parameters().get("p1"), Some("val1"));
    }

    #[test]
    fn tld_keeps_port() {
        let mut uri = ParsedUri::new();
        uri.set_hostname("random.site.com:80").unwrap();
        assert_eq!(uri.tld(), "com:80");
    }
}
