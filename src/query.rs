//! The tag/subfield query language used by [`Record::field`].
//!
//! A query is a [`FieldSpec`]: a single tag, a tag with a subfield code,
//! or a list mixing both. Conversions exist from strings, integers, and
//! pairs so call sites stay close to the catalog notation:
//!
//! ```ignore
//! record.field("650");                        // all 650 fields
//! record.field(("650", 'a'));                 // all 650$a subfields
//! record.field(["650", "651"]);               // 650 and 651 fields
//! record.field(vec![
//!     FieldSpec::from("001"),
//!     FieldSpec::from(("650", 'a')),
//! ]);                                         // mixed field/subfield result
//! ```
//!
//! Mixed queries resolve to a sequence of [`Selection`] items, each either
//! a whole field or a single subfield.
//!
//! [`Record::field`]: crate::Record::field

use crate::field::{Field, Subfield};
use crate::tag::Tag;
use std::fmt;

/// A field query: a tag, a tag plus subfield code, or a list of specs.
///
/// In a list resolved with a default code (see
/// [`Record::field_with_default`]), the default applies to bare-tag items
/// only; an embedded `(tag, code)` pair always keeps its own code.
///
/// [`Record::field_with_default`]: crate::Record::field_with_default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldSpec {
    /// All fields with a tag.
    Tag(Tag),
    /// All subfields with a code, across all fields with a tag.
    TagWithCode(Tag, char),
    /// Each item resolved independently, results concatenated in item
    /// order and flattened one level.
    List(Vec<FieldSpec>),
}

impl FieldSpec {
    /// Build a list spec from any mix of convertible items.
    pub fn list<I>(items: I) -> FieldSpec
    where
        I: IntoIterator,
        I::Item: Into<FieldSpec>,
    {
        FieldSpec::List(items.into_iter().map(Into::into).collect())
    }
}

impl From<Tag> for FieldSpec {
    fn from(tag: Tag) -> Self {
        FieldSpec::Tag(tag)
    }
}

impl From<&str> for FieldSpec {
    fn from(tag: &str) -> Self {
        FieldSpec::Tag(Tag::from(tag))
    }
}

impl From<String> for FieldSpec {
    fn from(tag: String) -> Self {
        FieldSpec::Tag(Tag::from(tag))
    }
}

/// Numeric tags are zero-padded to three digits, so `field(10)` queries
/// tag "010".
impl From<u16> for FieldSpec {
    fn from(tag: u16) -> Self {
        FieldSpec::Tag(Tag::from(tag))
    }
}

impl From<(Tag, char)> for FieldSpec {
    fn from((tag, code): (Tag, char)) -> Self {
        FieldSpec::TagWithCode(tag, code)
    }
}

impl From<(&str, char)> for FieldSpec {
    fn from((tag, code): (&str, char)) -> Self {
        FieldSpec::TagWithCode(Tag::from(tag), code)
    }
}

impl From<(String, char)> for FieldSpec {
    fn from((tag, code): (String, char)) -> Self {
        FieldSpec::TagWithCode(Tag::from(tag), code)
    }
}

impl From<(u16, char)> for FieldSpec {
    fn from((tag, code): (u16, char)) -> Self {
        FieldSpec::TagWithCode(Tag::from(tag), code)
    }
}

impl<T: Into<FieldSpec>> From<Vec<T>> for FieldSpec {
    fn from(items: Vec<T>) -> Self {
        FieldSpec::list(items)
    }
}

impl<T: Into<FieldSpec>, const N: usize> From<[T; N]> for FieldSpec {
    fn from(items: [T; N]) -> Self {
        FieldSpec::list(items)
    }
}

/// One item of a query result: a whole field or a single subfield.
///
/// Single-tag queries yield only fields and tag-plus-code queries only
/// subfields; a mixed list query may interleave both kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection<'a> {
    /// A whole control or data field.
    Field(&'a Field),
    /// A single subfield of some data field.
    Subfield(&'a Subfield),
}

impl<'a> Selection<'a> {
    /// The text value of the selected item.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Selection::Field(field) => field.value(),
            Selection::Subfield(subfield) => subfield.value.clone(),
        }
    }

    /// The selected field, if this selection is one.
    #[must_use]
    pub fn as_field(&self) -> Option<&'a Field> {
        match self {
            Selection::Field(field) => Some(field),
            Selection::Subfield(_) => None,
        }
    }

    /// The selected subfield, if this selection is one.
    #[must_use]
    pub fn as_subfield(&self) -> Option<&'a Subfield> {
        match self {
            Selection::Field(_) => None,
            Selection::Subfield(subfield) => Some(subfield),
        }
    }
}

impl fmt::Display for Selection<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Field(field) => field.fmt(f),
            Selection::Subfield(subfield) => subfield.fmt(f),
        }
    }
}
