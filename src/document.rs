//! MARC-XML documents and collections.
//!
//! [`Document`] owns a parsed XML tree and hands out [`Record`] views for
//! every `record` element in it, whether the records sit at the top level
//! or inside `collection` wrappers. [`Collection`] is the matching view
//! over a single collection element.
//!
//! Construction accepts a pre-parsed [`XmlDocument`], a string, raw bytes,
//! or any [`BufRead`] source. Opening files is left to the caller.

use crate::error::Result;
use crate::record::Record;
use crate::xml::{Element, XmlDocument};
use log::debug;
use std::io::BufRead;

/// A MARC-XML document.
#[derive(Debug, Clone)]
pub struct Document {
    document: XmlDocument,
}

impl Document {
    /// Wrap an already-parsed XML document.
    #[must_use]
    pub fn new(document: XmlDocument) -> Document {
        Document { document }
    }

    /// Parse a document from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not well-formed XML; no partial
    /// document is produced.
    pub fn parse(xml: &str) -> Result<Document> {
        Ok(Document::new(XmlDocument::parse(xml)?))
    }

    /// Parse a document from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not well-formed XML.
    pub fn from_bytes(xml: &[u8]) -> Result<Document> {
        Ok(Document::new(XmlDocument::from_reader(xml)?))
    }

    /// Parse a document from any buffered reader, such as an open file.
    ///
    /// # Errors
    ///
    /// Returns an error on IO failure or if the input is not well-formed
    /// XML.
    pub fn from_reader<R: BufRead>(source: R) -> Result<Document> {
        Ok(Document::new(XmlDocument::from_reader(source)?))
    }

    /// The underlying XML document.
    #[must_use]
    pub fn document(&self) -> &XmlDocument {
        &self.document
    }

    /// Every record in the document, in document order.
    ///
    /// Covers both bare top-level records and records nested inside
    /// collections.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        let records: Vec<Record> = self
            .document
            .select("record")
            .into_iter()
            .map(Record::from_element)
            .collect();
        debug!("document yielded {} records", records.len());
        records
    }

    /// Every collection element in the document; empty if there are none.
    #[must_use]
    pub fn collections(&self) -> Vec<Collection<'_>> {
        self.document
            .select("collection")
            .into_iter()
            .map(Collection::new)
            .collect()
    }
}

/// A view over one `collection` element.
#[derive(Debug, Clone, Copy)]
pub struct Collection<'a> {
    node: &'a Element,
}

impl<'a> Collection<'a> {
    /// Wrap a collection element.
    #[must_use]
    pub fn new(node: &'a Element) -> Collection<'a> {
        Collection { node }
    }

    /// The records in the collection, in document order.
    #[must_use]
    pub fn records(&self) -> Vec<Record> {
        self.node
            .descendants("record")
            .into_iter()
            .map(Record::from_element)
            .collect()
    }
}
