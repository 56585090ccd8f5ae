//! MARC field and subfield views.
//!
//! This module provides the immutable object model behind the record
//! query engine:
//!
//! - [`Subfield`] — a `(code, value)` pair inside a data field
//! - [`ControlField`] — tags 001-009, a bare value with no subfields
//! - [`DataField`] — tags 010 and up, two indicators plus ordered subfields
//! - [`Field`] — the union of the two field kinds, classified once from
//!   the source element and never re-inspected afterward
//!
//! Construction is lenient by design: a missing attribute or missing text
//! becomes a blank, never an error. All types render in the conventional
//! catalog-card form, where a blank indicator prints as `#`:
//!
//! ```text
//! 001    1027474578
//! 245  10$aKindred /$cOctavia E. Butler.
//! 020  ##$a9781472214812
//! ```

use crate::tag::Tag;
use crate::xml::Element;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::ops::Index;

/// A subfield within a data field: a single-character code and a value.
///
/// Created once at [`DataField`] construction time and immutable
/// thereafter. A missing `code` attribute yields a blank code; missing
/// text yields an empty value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subfield {
    /// Subfield code (single character)
    pub code: char,
    /// Subfield value
    pub value: String,
}

impl Subfield {
    pub(crate) fn from_element(node: &Element) -> Self {
        Subfield {
            code: node.attr("code").and_then(|c| c.chars().next()).unwrap_or(' '),
            value: node.text().to_string(),
        }
    }
}

impl fmt::Display for Subfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}{}", self.code, self.value)
    }
}

/// A control field (001-009): a tag and a value, no indicators, no
/// subfields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlField {
    /// Field tag
    pub tag: Tag,
    /// Full text value of the field
    pub value: String,
}

impl ControlField {
    pub(crate) fn from_element(node: &Element) -> Self {
        ControlField {
            tag: Tag::from(node.attr("tag").unwrap_or_default()),
            value: node.text().to_string(),
        }
    }

    /// Always empty. Control fields have no subfields; this shim lets
    /// callers treat both field kinds uniformly.
    #[must_use]
    pub fn subfield(&self, _code: char) -> Vec<&Subfield> {
        Vec::new()
    }

    /// Always an empty slice, for the same uniformity reason.
    #[must_use]
    pub fn subfields(&self) -> &[Subfield] {
        &[]
    }
}

impl fmt::Display for ControlField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}    {}", self.tag, self.value)
    }
}

/// A data field (010 and up): a tag, two indicator characters, and an
/// ordered sequence of subfields.
///
/// A literal space is a meaningful indicator value ("blank"), not absence;
/// it renders as `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataField {
    /// Field tag
    pub tag: Tag,
    /// First indicator
    pub ind1: char,
    /// Second indicator
    pub ind2: char,
    /// Subfields in source order
    pub subfields: SmallVec<[Subfield; 4]>,
}

impl DataField {
    pub(crate) fn from_element(node: &Element) -> Self {
        let subfields = node
            .children()
            .iter()
            .filter(|child| child.name() == "subfield")
            .map(Subfield::from_element)
            .collect();
        DataField {
            tag: Tag::from(node.attr("tag").unwrap_or_default()),
            ind1: node.attr("ind1").and_then(|i| i.chars().next()).unwrap_or(' '),
            ind2: node.attr("ind2").and_then(|i| i.chars().next()).unwrap_or(' '),
            subfields,
        }
    }

    /// All subfields with the given code, in source order.
    ///
    /// Codes are not required to be unique, so this may return zero, one,
    /// or many subfields.
    #[must_use]
    pub fn subfield(&self, code: char) -> Vec<&Subfield> {
        self.subfields.iter().filter(|sf| sf.code == code).collect()
    }

    /// Subfields in source order.
    #[must_use]
    pub fn subfields(&self) -> &[Subfield] {
        &self.subfields
    }

    /// The subfield values concatenated, with no separator.
    #[must_use]
    pub fn value(&self) -> String {
        self.subfields.iter().map(|sf| sf.value.as_str()).collect()
    }
}

fn indicator_display(indicator: char) -> char {
    if indicator == ' ' {
        '#'
    } else {
        indicator
    }
}

impl fmt::Display for DataField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}  {}{}",
            self.tag,
            indicator_display(self.ind1),
            indicator_display(self.ind2)
        )?;
        for subfield in &self.subfields {
            write!(f, "{subfield}")?;
        }
        Ok(())
    }
}

/// Dictionary-like access to the first subfield value with a given code.
///
/// Panics if no such subfield exists. For fallible access, use
/// [`DataField::subfield`].
impl Index<char> for DataField {
    type Output = str;

    fn index(&self, code: char) -> &Self::Output {
        self.subfields
            .iter()
            .find(|sf| sf.code == code)
            .map(|sf| sf.value.as_str())
            .expect("subfield not found")
    }
}

/// A record field: either a control field or a data field.
///
/// The two variants share tag-based identity and the `subfield` lookup
/// capability (always empty for control fields), so query results can mix
/// them freely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// A control field (001-009)
    Control(ControlField),
    /// A data field (010 and up)
    Data(DataField),
}

impl Field {
    /// Classify a record child element into a field, or `None` for any
    /// other element kind. This is the only place element names are
    /// inspected; afterwards the variant is authoritative.
    #[must_use]
    pub fn classify(node: &Element) -> Option<Field> {
        match node.name() {
            "controlfield" => Some(Field::Control(ControlField::from_element(node))),
            "datafield" => Some(Field::Data(DataField::from_element(node))),
            _ => None,
        }
    }

    /// The field's tag.
    #[must_use]
    pub fn tag(&self) -> &Tag {
        match self {
            Field::Control(cf) => &cf.tag,
            Field::Data(df) => &df.tag,
        }
    }

    /// The field's text value: the stored value for a control field, the
    /// concatenated subfield values for a data field.
    #[must_use]
    pub fn value(&self) -> String {
        match self {
            Field::Control(cf) => cf.value.clone(),
            Field::Data(df) => df.value(),
        }
    }

    /// All subfields with the given code; always empty for control fields.
    #[must_use]
    pub fn subfield(&self, code: char) -> Vec<&Subfield> {
        match self {
            Field::Control(cf) => cf.subfield(code),
            Field::Data(df) => df.subfield(code),
        }
    }

    /// Subfields in source order; always empty for control fields.
    #[must_use]
    pub fn subfields(&self) -> &[Subfield] {
        match self {
            Field::Control(cf) => cf.subfields(),
            Field::Data(df) => df.subfields(),
        }
    }

    /// The control field variant, if this is one.
    #[must_use]
    pub fn as_control(&self) -> Option<&ControlField> {
        match self {
            Field::Control(cf) => Some(cf),
            Field::Data(_) => None,
        }
    }

    /// The data field variant, if this is one.
    #[must_use]
    pub fn as_data(&self) -> Option<&DataField> {
        match self {
            Field::Control(_) => None,
            Field::Data(df) => Some(df),
        }
    }

    /// True for the control field variant.
    #[must_use]
    pub fn is_control(&self) -> bool {
        matches!(self, Field::Control(_))
    }

    /// True for the data field variant.
    #[must_use]
    pub fn is_data(&self) -> bool {
        matches!(self, Field::Data(_))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Control(cf) => cf.fmt(f),
            Field::Data(df) => df.fmt(f),
        }
    }
}
