//! Parser.
//!
//! Fields are extracted in a fixed order, since later steps depend on earlier results:
//!
//! 1. scheme: the text before the first `:`, if it is a recognized scheme name.
//! 2. hostname: the leftmost match of the hostname grammar anywhere in the input.
//! 3. path: the first path grammar match whose first occurrence in the input is not
//!    preceded by `/`.
//! 4. parameters: searched for one character after the last occurrence of the path, and
//!    only when a path was found.
//! 5. fragment: the text after the last `#`, and only when a hostname was found.
//! 6. `ftp` credentials or `mailto` email address.
//!
//! A grammar miss leaves the field empty. Parsing never fails.

use crate::params::Parameters;
use crate::scheme::Scheme;
use crate::uri::ParsedUri;

pub(crate) mod pattern;
pub(crate) mod search;

/// Parser configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParserConfig {
    /// Character separating `key=value` pairs in the query.
    ///
    /// The parsed value keeps this delimiter and uses it again when it is rendered.
    pub delimiter: char,
}

impl ParserConfig {
    /// The default parameter delimiter, `&`.
    pub const DEFAULT_DELIMITER: char = '&';

    /// Creates a configuration with the given parameter delimiter.
    #[inline]
    #[must_use]
    pub const fn with_delimiter(delimiter: char) -> Self {
        Self { delimiter }
    }
}

impl Default for ParserConfig {
    #[inline]
    fn default() -> Self {
        Self::with_delimiter(Self::DEFAULT_DELIMITER)
    }
}

/// URI-like string parser.
///
/// ```
/// use uri_fields::{ParserConfig, UriParser};
///
/// let parser = UriParser::new(ParserConfig::with_delimiter(';'));
/// let uri = parser.parse("http://www.example.com/search?q=rust;page=2");
/// assert_eq!(uri.parameters().get("q"), Some("rust"));
/// assert_eq!(uri.parameters().get("page"), Some("2"));
/// assert_eq!(uri.parameter_delimiter(), ';');
/// ```
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UriParser {
    /// Configuration.
    config: ParserConfig,
}

impl UriParser {
    /// Creates a new parser.
    #[inline]
    #[must_use]
    pub const fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses the given string into its fields.
    #[must_use]
    pub fn parse(&self, s: &str) -> ParsedUri {
        let delimiter = self.config.delimiter;
        let mut uri = ParsedUri::with_delimiter(delimiter);
        if s.is_empty() {
            return uri;
        }

        let scheme = find_scheme(s);
        let hostname = find_hostname(s);
        let path = find_path(s);
        let parameters = find_parameters(s, path, delimiter);
        let fragment = find_fragment(s, hostname);
        trace!(
            scheme = scheme.map_or("", Scheme::as_str),
            hostname,
            path,
            parameters = parameters.len(),
            fragment,
            "extracted common fields"
        );

        match scheme {
            Some(Scheme::Ftp) => {
                let (username, password) = find_credentials(s);
                trace!(username, "extracted ftp credentials");
                uri.username = username.to_owned();
                uri.password = password.to_owned();
            }
            Some(Scheme::Mailto) => {
                let email = find_email(s);
                trace!(email, "extracted mailto address");
                uri.email = email.to_owned();
            }
            _ => {}
        }

        uri.scheme = scheme;
        uri.hostname = hostname.to_owned();
        uri.path = path.to_owned();
        uri.parameters = parameters;
        uri.fragment = fragment.to_owned();
        uri
    }
}

/// Finds the scheme before the first colon.
///
/// The colon must not be the first character, and the name is compared case-sensitively.
fn find_scheme(s: &str) -> Option<Scheme> {
    match search::find(s, b':') {
        Some(end) if end > 0 => Scheme::from_name(&s[..end]),
        _ => None,
    }
}

/// Finds the leftmost hostname.
fn find_hostname(s: &str) -> &str {
    pattern::HOSTNAME.find(s).map_or("", |m| m.as_str())
}

/// Finds the path.
///
/// Matches are scanned without overlap. For each, the character before the *first
/// occurrence* of the matched text is inspected, and the match is taken unless that
/// character is `/`. An occurrence at the very start of the input is checked against the
/// last character of the input instead.
fn find_path(s: &str) -> &str {
    for m in pattern::PATH.find_iter(s) {
        let candidate = m.as_str();
        let first = search::find_str(s, candidate).unwrap_or(m.start());
        let prev = s[..first]
            .chars()
            .next_back()
            .or_else(|| s.chars().next_back());
        if prev.is_some_and(|c| c != '/') {
            return candidate;
        }
    }
    ""
}

/// Finds the query parameters after the path.
///
/// The character right after the path (normally `?`) is skipped without inspection.
fn find_parameters(s: &str, path: &str, delimiter: char) -> Parameters {
    if path.is_empty() {
        return Parameters::new();
    }
    let Some(path_start) = search::rfind_str(s, path) else {
        return Parameters::new();
    };
    let window = search::skip_first_char(&s[(path_start + path.len())..]);
    match pattern::parameters(delimiter).find(window) {
        Some(run) => Parameters::from_query(run.as_str(), delimiter),
        None => Parameters::new(),
    }
}

/// Finds the fragment after the last `#`.
fn find_fragment<'a>(s: &'a str, hostname: &str) -> &'a str {
    if hostname.is_empty() {
        return "";
    }
    match search::rfind_split_hole_tail(s, b'#') {
        Some((pos, fragment)) if pos > 0 => fragment,
        _ => "",
    }
}

/// Finds the `user[:password]` block between the first `//` and the first `@`.
///
/// Returns `(username, password)`.
/// A block starting with `:` yields neither.
fn find_credentials(s: &str) -> (&str, &str) {
    let Some(start) = search::find_str(s, "//").map(|pos| pos + 2) else {
        return ("", "");
    };
    let end = match search::find(s, b'@') {
        Some(end) if end > start => end,
        _ => return ("", ""),
    };
    let creds = &s[start..end];
    if creds.starts_with(':') {
        return ("", "");
    }
    let mut pieces = creds.split(':');
    let username = pieces.next().unwrap_or("");
    let password = pieces.next().unwrap_or("");
    (username, password)
}

/// Finds the email address after the scheme colon.
fn find_email(s: &str) -> &str {
    let rest = match search::find(s, b':') {
        Some(colon) => &s[(colon + 1)..],
        None => return "",
    };
    pattern::EMAIL.find(rest).map_or("", |m| m.as_str())
}
