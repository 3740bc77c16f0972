//! Query parameters.

use core::fmt::{self, Write as _};
use std::collections::{btree_map, BTreeMap, HashMap};

/// Query parameters, mapping names to values.
///
/// Entries are kept sorted by name, so rendering is deterministic.
#[derive(Default, Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Parameters {
    /// Entries.
    inner: BTreeMap<String, String>,
}

impl Parameters {
    /// Creates an empty mapping.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes a run of `key=value` pairs separated by `delimiter`.
    ///
    /// Each piece is split on `=`: the key is the text before the first `=`, and the value
    /// is the text between the first and the second `=`.
    /// Pieces without `=` are skipped.
    /// A key seen twice keeps the later value.
    ///
    /// ```
    /// # use uri_fields::Parameters;
    /// let params = Parameters::from_query("a=1&b=2=3&junk&a=4", '&');
    /// assert_eq!(params.get("a"), Some("4"));
    /// assert_eq!(params.get("b"), Some("2"));
    /// assert_eq!(params.len(), 2);
    /// ```
    #[must_use]
    pub fn from_query(run: &str, delimiter: char) -> Self {
        let mut params = Self::new();
        for piece in run.split(delimiter) {
            let mut parts = piece.split('=');
            let key = parts.next().unwrap_or("");
            match parts.next() {
                Some(value) => {
                    params.insert(key, value);
                }
                None => debug!(piece, "skipped query piece without `=`"),
            }
        }
        params
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if there are no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the value for the given name.
    #[inline]
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.inner.get(name).map(String::as_str)
    }

    /// Returns true if an entry with the given name exists.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.inner.contains_key(name)
    }

    /// Inserts or overwrites an entry, and returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(name.into(), value.into())
    }

    /// Removes an entry, and returns its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.inner.remove(name)
    }

    /// Removes all entries.
    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Returns an iterator over the entries, in name order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.inner.iter(),
        }
    }

    /// Returns an iterator over the names, in order.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.inner.keys().map(String::as_str)
    }

    /// Returns a value to render the entries as `key=value` pairs joined by `delimiter`.
    ///
    /// ```
    /// # use uri_fields::Parameters;
    /// let params: Parameters = [("k", "v"), ("k2", "v2")].into_iter().collect();
    /// assert_eq!(params.display('&').to_string(), "k=v&k2=v2");
    /// assert_eq!(params.display(';').to_string(), "k=v;k2=v2");
    /// assert_eq!(Parameters::new().display('&').to_string(), "");
    /// ```
    #[inline]
    #[must_use]
    pub fn display(&self, delimiter: char) -> Display<'_> {
        Display {
            params: self,
            delimiter,
        }
    }

    /// Returns the inner map.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.inner
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Parameters {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (name, value) in iter {
            self.insert(name, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Parameters {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut params = Self::new();
        params.extend(iter);
        params
    }
}

impl From<BTreeMap<String, String>> for Parameters {
    #[inline]
    fn from(inner: BTreeMap<String, String>) -> Self {
        Self { inner }
    }
}

impl<S> From<HashMap<String, String, S>> for Parameters {
    #[inline]
    fn from(map: HashMap<String, String, S>) -> Self {
        Self {
            inner: map.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Parameters {
    type Item = (&'a str, &'a str);
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Parameters {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

/// Iterator over the entries of [`Parameters`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    /// Inner iterator.
    inner: btree_map::Iter<'a, String, String>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

/// Renders [`Parameters`] with a delimiter.
///
/// Created by [`Parameters::display`].
#[derive(Debug, Clone, Copy)]
pub struct Display<'a> {
    /// Parameters.
    params: &'a Parameters,
    /// Delimiter between pairs.
    delimiter: char,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, value)) in self.params.iter().enumerate() {
            if i != 0 {
                f.write_char(self.delimiter)?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}
