#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Module overview
//!
//! - [`document`] — `Document` and `Collection`, the record producers
//! - [`record`] — `Record` and the field-resolution engine
//! - [`field`] — `Field`, `ControlField`, `DataField`, `Subfield`
//! - [`query`] — the `FieldSpec` query language and `Selection` results
//! - [`tag`] — 3-character MARC tags and the zero-padding contract
//! - [`xml`] — the document-ordered element tree behind it all
//! - [`error`] — error types
//!
//! Parsing can fail; everything after construction is infallible and
//! returns empty sequences or `None` for absent data.

pub mod document;
pub mod error;
pub mod field;
pub mod query;
pub mod record;
pub mod tag;
pub mod xml;

pub use document::{Collection, Document};
pub use error::{MarcxError, Result};
pub use field::{ControlField, DataField, Field, Subfield};
pub use query::{FieldSpec, Selection};
pub use record::Record;
pub use tag::Tag;
pub use xml::{Element, XmlDocument};
