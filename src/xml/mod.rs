//! XML response parsing
//!
//! Every API action reads its payload through [`parse_root`], which turns
//! response text into an [`Element`] tree or fails with
//! [`Error::MalformedResponse`](crate::Error::MalformedResponse) carrying the
//! offending body. There is no partial-root path: callers either get a
//! complete tree or an error.

use crate::error::{Error, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

#[cfg(test)]
mod tests;

// ============================================================================
// Element tree
// ============================================================================

/// A parsed XML element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    name: String,
    attributes: Vec<(String, String)>,
    text: String,
    children: Vec<Element>,
}

impl Element {
    /// The tag name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// An attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Accumulated character data, entities unescaped
    pub fn text(&self) -> &str {
        &self.text
    }

    /// All direct children in document order
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// The first direct child with the given name
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|child| child.name == name)
    }

    /// All direct children with the given name, in document order
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> {
        self.children.iter().filter(move |child| child.name == name)
    }

    /// All descendants with the given name, depth-first in document order
    pub fn find_all(&self, name: &str) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_named(name, &mut found);
        found
    }

    fn collect_named<'a>(&'a self, name: &str, found: &mut Vec<&'a Element>) {
        for child in &self.children {
            if child.name == name {
                found.push(child);
            }
            child.collect_named(name, found);
        }
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse response text into its root element
///
/// Fails with `MalformedResponse` on anything that is not a well-formed
/// single-rooted document: mismatched or unclosed tags, text outside the
/// root, multiple roots, or an empty input.
pub fn parse_root(xml: &str) -> Result<Element> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(Error::malformed("more than one root element", xml));
                }
                stack.push(element_from(&start, xml)?);
            }
            Ok(Event::Empty(start)) => {
                if root.is_some() && stack.is_empty() {
                    return Err(Error::malformed("more than one root element", xml));
                }
                let element = element_from(&start, xml)?;
                close(element, &mut stack, &mut root);
            }
            Ok(Event::End(end)) => {
                let element = stack
                    .pop()
                    .ok_or_else(|| Error::malformed("closing tag without opening tag", xml))?;
                let end_qname = end.name();
                let end_name = String::from_utf8_lossy(end_qname.as_ref());
                if element.name != end_name {
                    return Err(Error::malformed(
                        format!("expected </{}>, found </{end_name}>", element.name),
                        xml,
                    ));
                }
                close(element, &mut stack, &mut root);
            }
            Ok(Event::Text(text)) => {
                let unescaped = text
                    .unescape()
                    .map_err(|e| Error::malformed(format!("bad character data: {e}"), xml))?;
                append_text(&unescaped, &mut stack, xml)?;
            }
            Ok(Event::CData(cdata)) => {
                let content = String::from_utf8_lossy(cdata.as_ref()).into_owned();
                append_text(&content, &mut stack, xml)?;
            }
            Ok(Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_)) => {}
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::malformed(e.to_string(), xml)),
        }
    }

    if let Some(unclosed) = stack.last() {
        return Err(Error::malformed(
            format!("unclosed element <{}>", unclosed.name),
            xml,
        ));
    }
    root.ok_or_else(|| Error::malformed("no root element", xml))
}

/// Attach a completed element to its parent, or install it as the root
fn close(element: Element, stack: &mut Vec<Element>, root: &mut Option<Element>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// Append character data to the innermost open element
fn append_text(content: &str, stack: &mut [Element], xml: &str) -> Result<()> {
    match stack.last_mut() {
        Some(open) => {
            if !content.trim().is_empty() {
                open.text.push_str(content);
            }
            Ok(())
        }
        None => {
            if content.trim().is_empty() {
                Ok(())
            } else {
                Err(Error::malformed("character data outside root element", xml))
            }
        }
    }
}

/// Build an element shell from an opening tag
fn element_from(start: &BytesStart<'_>, xml: &str) -> Result<Element> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr =
            attr.map_err(|e| Error::malformed(format!("bad attribute in <{name}>: {e}"), xml))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| Error::malformed(format!("bad attribute value in <{name}>: {e}"), xml))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Element {
        name,
        attributes,
        text: String::new(),
        children: Vec::new(),
    })
}
