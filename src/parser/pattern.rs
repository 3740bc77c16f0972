//! Field grammars.
//!
//! The grammars are searched for anywhere in the input, so none of them are anchored.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Hostname: dotted word-or-hyphen labels, a lowercase top-level label, and an optional port.
pub(crate) static HOSTNAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:[\w-]+\.)+[a-z]+(?::[0-9]{2,5})?").expect("hostname grammar is valid")
});

/// Path: one or more `/segment` groups and an optional `.ext`.
pub(crate) static PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:/[a-zA-Z]+)+(?:\.[a-z]+)?").expect("path grammar is valid")
});

/// Email address: local part, `@`, and dotted lowercase labels.
pub(crate) static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+@(?:[a-z]+\.)+[a-z]+").expect("email grammar is valid")
});

/// Parameter run with the default `&` delimiter.
static DEFAULT_PARAMETERS: LazyLock<Regex> =
    LazyLock::new(|| parameters_with(crate::ParserConfig::DEFAULT_DELIMITER));

/// Returns the grammar of a run of `key=value` pairs separated by `delimiter`.
///
/// Every pair but the last takes any characters as its value (the delimiter and `#`
/// included), and the last pair takes word characters only.
pub(crate) fn parameters(delimiter: char) -> Cow<'static, Regex> {
    if delimiter == crate::ParserConfig::DEFAULT_DELIMITER {
        Cow::Borrowed(&DEFAULT_PARAMETERS)
    } else {
        Cow::Owned(parameters_with(delimiter))
    }
}

/// Compiles the parameter run grammar for the given delimiter.
fn parameters_with(delimiter: char) -> Regex {
    let mut buf = [0; 4];
    let delimiter = regex::escape(delimiter.encode_utf8(&mut buf));
    Regex::new(&format!(r"(?s)(?:\w+=.+{delimiter})*\w+=\w+"))
        .expect("escaped delimiter always forms a valid grammar")
}
