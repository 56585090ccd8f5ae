//! Error types for MARC-XML operations.
//!
//! This module provides the [`MarcxError`] type for all library operations
//! and the [`Result`] convenience type.
//!
//! Only document construction can fail: malformed XML aborts the parse and
//! no partial document is produced. Every query in the crate treats absence
//! as a normal outcome and returns an empty sequence or `None` instead of
//! an error.

use thiserror::Error;

/// Error type for all MARC-XML library operations.
#[derive(Error, Debug)]
pub enum MarcxError {
    /// Malformed XML encountered while parsing a document.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed attribute syntax encountered while parsing a document.
    #[error("XML attribute error: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    /// Structurally unusable input, such as a document with no root element.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// IO error from the underlying source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for [`std::result::Result`] with [`MarcxError`].
pub type Result<T> = std::result::Result<T, MarcxError>;
