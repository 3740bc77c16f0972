//! URI schemes.

use core::fmt;
use core::str::FromStr;

use crate::validate::{Error, FieldKind};

/// A scheme recognized by the parser.
///
/// Only this fixed set is recognized.
/// Any other leading token (such as `foo` in `foo:bar`) is not treated as a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Scheme {
    /// `http`.
    Http,
    /// `https`.
    Https,
    /// `ftp`.
    ///
    /// URIs with this scheme may carry a `user:password@` credential block.
    Ftp,
    /// `mailto`.
    ///
    /// URIs with this scheme carry an email address instead of a hierarchical part.
    Mailto,
}

impl Scheme {
    /// All recognized schemes.
    pub const ALL: [Scheme; 4] = [Scheme::Http, Scheme::Https, Scheme::Ftp, Scheme::Mailto];

    /// Looks up the scheme with the given name.
    ///
    /// The comparison is case-sensitive: `HTTP` is not a recognized scheme name.
    ///
    /// ```
    /// # use uri_fields::Scheme;
    /// assert_eq!(Scheme::from_name("ftp"), Some(Scheme::Ftp));
    /// assert_eq!(Scheme::from_name("FTP"), None);
    /// assert_eq!(Scheme::from_name("gopher"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|scheme| scheme.as_str() == name)
    }

    /// Returns the lowercase name of the scheme.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
            Self::Ftp => "ftp",
            Self::Mailto => "mailto",
        }
    }
}

impl fmt::Display for Scheme {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or(Error::new(FieldKind::Scheme))
    }
}

impl AsRef<str> for Scheme {
    #[inline]
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
mod __serde {
    use super::Scheme;

    use core::fmt;

    use serde::{
        de::{self, Visitor},
        Deserialize, Deserializer, Serialize, Serializer,
    };

    impl Serialize for Scheme {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.as_str())
        }
    }

    /// Scheme name visitor.
    #[derive(Debug, Clone, Copy)]
    struct SchemeVisitor;

    impl Visitor<'_> for SchemeVisitor {
        type Value = Scheme;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("one of `http`, `https`, `ftp`, or `mailto`")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for Scheme {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_str(SchemeVisitor)
        }
    }
}
