//! Functions for common string operations.

use memchr::{memchr, memmem, memrchr};

/// Returns the position of the first occurrence of the given ASCII byte.
#[inline]
#[must_use]
pub(crate) fn find(haystack: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii(), "[precondition] needle should be an ASCII byte");
    memchr(needle, haystack.as_bytes())
}

/// Returns the position of the last occurrence of the given ASCII byte.
#[inline]
#[must_use]
pub(crate) fn rfind(haystack: &str, needle: u8) -> Option<usize> {
    debug_assert!(needle.is_ascii(), "[precondition] needle should be an ASCII byte");
    memrchr(needle, haystack.as_bytes())
}

/// Returns the position of the first occurrence of the given substring.
#[inline]
#[must_use]
pub(crate) fn find_str(haystack: &str, needle: &str) -> Option<usize> {
    memmem::find(haystack.as_bytes(), needle.as_bytes())
}

/// Returns the position of the last occurrence of the given substring.
#[inline]
#[must_use]
pub(crate) fn rfind_str(haystack: &str, needle: &str) -> Option<usize> {
    memmem::rfind(haystack.as_bytes(), needle.as_bytes())
}

/// Splits the string at the last occurrence of the given ASCII byte, and returns the part
/// after it, excluding the byte itself.
#[must_use]
pub(crate) fn rfind_split_hole_tail(haystack: &str, needle: u8) -> Option<(usize, &str)> {
    rfind(haystack, needle).map(|pos| (pos, &haystack[(pos + 1)..]))
}

/// Returns the string with its first character removed.
///
/// Returns an empty string if the string is empty.
#[inline]
#[must_use]
pub(crate) fn skip_first_char(s: &str) -> &str {
    let mut chars = s.chars();
    chars.next();
    chars.as_str()
}
