//! MARC records and the field-resolution engine.
//!
//! A [`Record`] owns its leader string and its fields in document order,
//! both fixed at construction. Every query is a pure traversal over that
//! materialized sequence: repeated calls return equal results, absent tags
//! return empty results, and nothing ever errors.
//!
//! # Queries
//!
//! The general entry point is [`Record::field`], which takes anything
//! convertible to a [`FieldSpec`]:
//!
//! ```ignore
//! record.field("650");                 // all 650 fields
//! record.field(650);                   // same; numeric tags are zero-padded
//! record.field(("650", 'a'));          // all 650$a subfields
//! record.field(["650", "651"]);        // 650 and 651 fields
//! record.field_with_default(["650", "651"], 'x');  // 650$x and 651$x
//! ```
//!
//! The homogeneous base cases have dedicated accessors
//! ([`Record::fields_by_tag`], [`Record::subfield`]) so the common paths
//! need no result-variant handling.
//!
//! # Semantic tag ranges
//!
//! The named accessors filter the field sequence by inclusive tag range:
//!
//! | accessor                    | range        |
//! |-----------------------------|--------------|
//! | [`Record::control_fields`]  | `001`..`009` |
//! | [`Record::codes`]           | `010`..`09X` |
//! | [`Record::titles`]          | `200`..`24X` |
//! | [`Record::edition`]         | `250`..`28X` |
//! | [`Record::description`]     | `300`..`399` |
//! | [`Record::series`]          | `400`..`499` |
//! | [`Record::notes`]           | `500`..`59X` |
//! | [`Record::subjects`]        | `600`..`69X` |
//! | [`Record::added_entries`]   | `700`..`75X` |
//! | [`Record::linking`]         | `760`..`78X` |
//! | [`Record::series_added`]    | `800`..`83X` |
//! | [`Record::holdings`]        | `841`..`88X` |
//!
//! Bounds with a trailing `X` cover every tag sharing the two-digit
//! prefix: ASCII `'X'` sorts after the digits, so byte-wise comparison
//! gives the inclusive upper edge.

use crate::field::{Field, Subfield};
use crate::query::{FieldSpec, Selection};
use crate::tag::Tag;
use crate::xml::Element;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// A MARC bibliographic record: a leader and the fields in document order.
///
/// Immutable after construction, so records can be shared freely across
/// threads for reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Record leader, stored as-is (not validated)
    leader: String,
    /// Control and data fields in document order
    fields: Vec<Field>,
}

impl Record {
    /// Build a record from a `record` element.
    ///
    /// The leader is the concatenated text of `leader` children (empty
    /// string if absent). Children named `controlfield` or `datafield`
    /// become fields, in document order; every other child is ignored.
    #[must_use]
    pub fn from_element(node: &Element) -> Record {
        let leader = node
            .children()
            .iter()
            .filter(|child| child.name() == "leader")
            .map(Element::text)
            .collect();
        let fields = node.children().iter().filter_map(Field::classify).collect();
        Record { leader, fields }
    }

    /// The record leader, as found in the source.
    #[must_use]
    pub fn leader(&self) -> &str {
        &self.leader
    }

    /// All fields, in document order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    // ========================================================================
    // Query resolution
    // ========================================================================

    /// Resolve a field spec with no default subfield code.
    ///
    /// A single tag yields the fields with that tag; a `(tag, code)` pair
    /// yields the matching subfields across those fields; a list resolves
    /// each item independently and concatenates, flattening one level. A
    /// mixed list therefore yields a mixed sequence of field and subfield
    /// selections.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let titles = record.field("245");
    /// let subjects = record.field(("650", 'a'));
    /// ```
    #[must_use]
    pub fn field(&self, spec: impl Into<FieldSpec>) -> Vec<Selection<'_>> {
        let spec = spec.into();
        let mut results = Vec::new();
        self.resolve(&spec, None, &mut results);
        results
    }

    /// Resolve a field spec with a default subfield code.
    ///
    /// The default applies to bare-tag items, turning them into subfield
    /// lookups; embedded `(tag, code)` pairs keep their own code.
    ///
    /// ```ignore
    /// // 650$x and 651$x
    /// record.field_with_default(["650", "651"], 'x');
    /// // 650$x and 651$v: the embedded pair overrides the default
    /// record.field_with_default(
    ///     vec![FieldSpec::from("650"), FieldSpec::from(("651", 'v'))],
    ///     'x',
    /// );
    /// ```
    #[must_use]
    pub fn field_with_default(
        &self,
        spec: impl Into<FieldSpec>,
        code: char,
    ) -> Vec<Selection<'_>> {
        let spec = spec.into();
        let mut results = Vec::new();
        self.resolve(&spec, Some(code), &mut results);
        results
    }

    fn resolve<'a>(
        &'a self,
        spec: &FieldSpec,
        default_code: Option<char>,
        results: &mut Vec<Selection<'a>>,
    ) {
        match spec {
            FieldSpec::Tag(tag) => match default_code {
                None => results.extend(
                    self.fields
                        .iter()
                        .filter(|field| field.tag() == tag)
                        .map(Selection::Field),
                ),
                Some(code) => self.collect_subfields(tag, code, results),
            },
            FieldSpec::TagWithCode(tag, code) => self.collect_subfields(tag, *code, results),
            FieldSpec::List(items) => {
                for item in items {
                    self.resolve(item, default_code, results);
                }
            }
        }
    }

    fn collect_subfields<'a>(
        &'a self,
        tag: &Tag,
        code: char,
        results: &mut Vec<Selection<'a>>,
    ) {
        for field in self.fields.iter().filter(|field| field.tag() == tag) {
            results.extend(field.subfield(code).into_iter().map(Selection::Subfield));
        }
    }

    /// All fields with the given tag, in document order.
    ///
    /// The homogeneous base case of [`Record::field`].
    #[must_use]
    pub fn fields_by_tag(&self, tag: impl Into<Tag>) -> Vec<&Field> {
        let tag = tag.into();
        self.fields.iter().filter(|field| *field.tag() == tag).collect()
    }

    /// All subfields with the given code across every field with the
    /// given tag, in field order then subfield order.
    ///
    /// Note that the result may span several fields. Control fields never
    /// contribute.
    #[must_use]
    pub fn subfield(&self, tag: impl Into<Tag>, code: char) -> Vec<&Subfield> {
        let tag = tag.into();
        self.fields
            .iter()
            .filter(|field| *field.tag() == tag)
            .flat_map(|field| field.subfield(code))
            .collect()
    }

    /// Does the record contain at least one match for the spec?
    #[must_use]
    pub fn has_field(&self, spec: impl Into<FieldSpec>) -> bool {
        !self.field(spec).is_empty()
    }

    /// [`Record::has_field`] with a default subfield code.
    #[must_use]
    pub fn has_field_with_default(&self, spec: impl Into<FieldSpec>, code: char) -> bool {
        !self.field_with_default(spec, code).is_empty()
    }

    // ========================================================================
    // Semantic tag-range accessors
    // ========================================================================

    /// Fields within an inclusive tag range, in document order.
    fn fields_in_range(&self, lower: &str, upper: &str) -> Vec<&Field> {
        self.fields
            .iter()
            .filter(|field| {
                let tag = field.tag().as_str();
                tag >= lower && tag <= upper
            })
            .collect()
    }

    /// The control fields (001-009).
    #[must_use]
    pub fn control_fields(&self) -> Vec<&Field> {
        self.fields_in_range("001", "009")
    }

    /// The number and code fields (010-09X).
    #[must_use]
    pub fn codes(&self) -> Vec<&Field> {
        self.fields_in_range("010", "09X")
    }

    /// The title fields (200-24X).
    #[must_use]
    pub fn titles(&self) -> Vec<&Field> {
        self.fields_in_range("200", "24X")
    }

    /// The edition and imprint fields (250-28X).
    #[must_use]
    pub fn edition(&self) -> Vec<&Field> {
        self.fields_in_range("250", "28X")
    }

    /// The physical description fields (300-399).
    #[must_use]
    pub fn description(&self) -> Vec<&Field> {
        self.fields_in_range("300", "399")
    }

    /// The series statement fields (400-499).
    #[must_use]
    pub fn series(&self) -> Vec<&Field> {
        self.fields_in_range("400", "499")
    }

    /// The note fields (500-59X).
    #[must_use]
    pub fn notes(&self) -> Vec<&Field> {
        self.fields_in_range("500", "59X")
    }

    /// The subject access fields (600-69X).
    #[must_use]
    pub fn subjects(&self) -> Vec<&Field> {
        self.fields_in_range("600", "69X")
    }

    /// The added entry fields (700-75X).
    #[must_use]
    pub fn added_entries(&self) -> Vec<&Field> {
        self.fields_in_range("700", "75X")
    }

    /// The linking entry fields (760-78X).
    #[must_use]
    pub fn linking(&self) -> Vec<&Field> {
        self.fields_in_range("760", "78X")
    }

    /// The series added entry fields (800-83X).
    #[must_use]
    pub fn series_added(&self) -> Vec<&Field> {
        self.fields_in_range("800", "83X")
    }

    /// The holdings and alternate graphics fields (841-88X).
    #[must_use]
    pub fn holdings(&self) -> Vec<&Field> {
        self.fields_in_range("841", "88X")
    }

    // ========================================================================
    // Named lookups
    // ========================================================================

    /// The main entry field (100, 110, 111, or 130), or `None`.
    ///
    /// MARC mandates at most one main entry but this is not validated
    /// here: the first field in the 1XX block wins.
    #[must_use]
    pub fn main_entry(&self) -> Option<&Field> {
        self.fields.iter().find(|field| {
            let tag = field.tag().as_str();
            tag >= "100" && tag <= "1XX"
        })
    }

    /// The title statement (first 245 field), or `None`.
    #[must_use]
    pub fn title_statement(&self) -> Option<&Field> {
        self.fields.iter().find(|field| *field.tag() == "245")
    }

    /// The Library of Congress Control Number (first 010$a), verbatim, or
    /// `None`.
    ///
    /// LCCN values carry significant leading and trailing spaces; they are
    /// returned exactly as found.
    #[must_use]
    pub fn lccn(&self) -> Option<&str> {
        self.subfield("010", 'a')
            .first()
            .map(|subfield| subfield.value.as_str())
    }

    /// All ISBNs (020$a), across every 020 field, in order.
    #[must_use]
    pub fn isbns(&self) -> Vec<&str> {
        self.subfield("020", 'a')
            .into_iter()
            .map(|subfield| subfield.value.as_str())
            .collect()
    }

    /// All ISSNs (022$a), across every 022 field, in order.
    #[must_use]
    pub fn issns(&self) -> Vec<&str> {
        self.subfield("022", 'a')
            .into_iter()
            .map(|subfield| subfield.value.as_str())
            .collect()
    }
}

/// Dictionary-like access to the first field with a given tag.
///
/// Panics if no such field exists. For fallible access, use
/// [`Record::fields_by_tag`].
impl Index<&str> for Record {
    type Output = Field;

    fn index(&self, tag: &str) -> &Self::Output {
        self.fields
            .iter()
            .find(|field| *field.tag() == tag)
            .expect("field not found")
    }
}
