//! A small document-ordered XML element tree built on quick-xml events.
//!
//! MARC-XML queries need a materialized tree: the field sequence of a
//! record must preserve document order *across* control and data fields,
//! and tag-range accessors filter that sequence without re-sorting. The
//! streaming events from [`quick_xml`] are folded into [`Element`] nodes
//! that expose exactly the traversal surface the record layer consumes:
//! local name, attributes, concatenated text, children, and a
//! document-order descendant search.
//!
//! Two deliberate behaviors:
//!
//! - Namespace prefixes are stripped (`<marc:record>` is seen as
//!   `record`), so both default-namespace and prefixed MARCXML are
//!   accepted.
//! - Text is never trimmed. Leaders, control field values, and subfield
//!   values (LCCNs in particular) carry significant leading and trailing
//!   spaces.

use crate::error::{MarcxError, Result};
use log::debug;
use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;
use std::io::BufRead;

/// An XML element: local name, attributes, direct text content, and child
/// elements in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// The element's local name (namespace prefix stripped).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The value of an attribute, or `None` if absent.
    ///
    /// Attribute keys are matched by local name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// The concatenated direct text and CDATA content, verbatim.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// All descendant elements with the given local name, in document
    /// order. The element itself is not considered.
    #[must_use]
    pub fn descendants(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        for child in &self.children {
            child.collect_named(name, &mut found);
        }
        found
    }

    /// Pre-order self-or-descendant collection.
    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        if self.name == name {
            found.push(self);
        }
        for child in &self.children {
            child.collect_named(name, found);
        }
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Element> {
        let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
        let mut attributes = Vec::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.push((key, value));
        }
        Ok(Element {
            name,
            attributes,
            text: String::new(),
            children: Vec::new(),
        })
    }
}

/// A parsed XML document.
///
/// Parsing is eager and fatal on malformed input: no partial document is
/// ever produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlDocument {
    root: Element,
}

impl XmlDocument {
    /// Parse a document from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not well-formed XML.
    pub fn parse(xml: &str) -> Result<XmlDocument> {
        Self::from_reader(xml.as_bytes())
    }

    /// Parse a document from any buffered reader.
    ///
    /// # Errors
    ///
    /// Returns an error on IO failure or if the input is not well-formed
    /// XML.
    pub fn from_reader<R: BufRead>(source: R) -> Result<XmlDocument> {
        let mut reader = Reader::from_reader(source);
        let mut buf = Vec::new();
        let mut stack: Vec<Element> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(start) => {
                    stack.push(Element::from_start(&start)?);
                }
                Event::Empty(start) => {
                    let element = Element::from_start(&start)?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::End(_) => {
                    let element = stack.pop().ok_or_else(|| {
                        MarcxError::InvalidDocument("closing tag without opening tag".to_string())
                    })?;
                    Self::attach(&mut stack, &mut root, element)?;
                }
                Event::Text(text) => {
                    if let Some(open) = stack.last_mut() {
                        open.text.push_str(&text.unescape()?);
                    }
                }
                Event::CData(cdata) => {
                    if let Some(open) = stack.last_mut() {
                        open.text
                            .push_str(&String::from_utf8_lossy(&cdata.into_inner()));
                    }
                }
                Event::Eof => break,
                // Declarations, comments, processing instructions, DOCTYPE
                _ => {}
            }
            buf.clear();
        }

        let root = root
            .ok_or_else(|| MarcxError::InvalidDocument("no root element".to_string()))?;
        debug!("parsed XML document with root element <{}>", root.name());
        Ok(XmlDocument { root })
    }

    /// Hand a completed element to its parent, or make it the root.
    fn attach(
        stack: &mut [Element],
        root: &mut Option<Element>,
        element: Element,
    ) -> Result<()> {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(element);
        } else if root.is_some() {
            return Err(MarcxError::InvalidDocument(
                "multiple root elements".to_string(),
            ));
        } else {
            *root = Some(element);
        }
        Ok(())
    }

    /// The document's root element.
    #[must_use]
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element with the given local name, in document order. The
    /// root element itself is included when it matches.
    #[must_use]
    pub fn select(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.root.collect_named(name, &mut found);
        found
    }
}
