//! Rendering of parsed URIs.

use core::fmt;

use crate::scheme::Scheme;
use crate::uri::ParsedUri;

/// Writes the canonical string form.
///
/// * `mailto`: `mailto:` followed by the email address. No other field is written.
/// * Otherwise: `scheme://`, the `ftp` credential block (`username[:password]@`), hostname,
///   path, `?`, the parameters, `#`, and the fragment.
///   The `?` and `#` are written even when the parameters or the fragment are empty.
impl fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.scheme == Some(Scheme::Mailto) {
            return write!(f, "{}:{}", self.scheme_str(), self.email);
        }

        write!(f, "{}://", self.scheme_str())?;
        if self.scheme == Some(Scheme::Ftp) {
            f.write_str(&self.username)?;
            if !self.password.is_empty() {
                write!(f, ":{}", self.password)?;
            }
            f.write_str("@")?;
        }
        write!(
            f,
            "{}{}?{}#{}",
            self.hostname,
            self.path,
            self.parameters.display(self.parameter_delimiter),
            self.fragment
        )
    }
}
