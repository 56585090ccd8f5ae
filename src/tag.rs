//! MARC field tags.
//!
//! A MARC tag is a fixed-width, 3-character string of digits ("001", "245").
//! Because every tag shares the same width and alphabet, lexicographic
//! ordering coincides with numeric ordering, which is what the tag-range
//! accessors on [`Record`](crate::Record) rely on.
//!
//! Numeric input is zero-padded to width 3, so `Tag::from(8)` and
//! `Tag::from("008")` name the same field. (In languages with octal integer
//! literals, `010` famously means `008`; Rust has no such literal form, and
//! the padding contract is pinned by tests regardless.)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A MARC field tag.
///
/// String input is kept as given; numeric input is zero-padded to three
/// digits. A tag that is not three digits never matches anything in a
/// conforming record, it is not an error.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag(String);

impl Tag {
    /// The tag as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Tag {
    fn from(tag: &str) -> Self {
        Tag(tag.to_string())
    }
}

impl From<String> for Tag {
    fn from(tag: String) -> Self {
        Tag(tag)
    }
}

impl From<u16> for Tag {
    fn from(tag: u16) -> Self {
        Tag(format!("{tag:03}"))
    }
}

impl PartialEq<&str> for Tag {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Tag> for &str {
    fn eq(&self, other: &Tag) -> bool {
        *self == other.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_tags_are_zero_padded() {
        assert_eq!(Tag::from(8), "008");
        assert_eq!(Tag::from(10), "010");
        assert_eq!(Tag::from(245), "245");
    }

    #[test]
    fn string_tags_are_kept_as_given() {
        assert_eq!(Tag::from("010").as_str(), "010");
        assert_eq!(Tag::from("1XX").as_str(), "1XX");
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(Tag::from("009") < Tag::from("010"));
        assert!(Tag::from("099") < Tag::from("100"));
        // The 'X' sentinel sorts after every digit, which is what makes
        // inclusive "09X"-style range bounds work.
        assert!(Tag::from("099") < Tag::from("09X"));
        assert!(Tag::from("100") > Tag::from("09X"));
    }
}
