//! Minimal XML document tree with a single-pass renderer.
//!
//! Gateway envelopes are assembled as [`Element`] trees through a consuming
//! builder, then rendered once to a single-line string. Escaping of text and
//! attribute values is delegated to `quick-xml`, which also writes the
//! events; tree construction never deals in raw markup, so an unbalanced
//! document cannot be expressed.

use quick_xml::{
    Writer,
    events::{BytesEnd, BytesStart, BytesText, Event},
};

/// A node in an XML document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Nested element.
    Element(Element),
    /// Text content.
    Text(String),
}

/// An XML element with ordered attributes and children.
///
/// Built once, rendered, then discarded. Attributes and children keep their
/// insertion order through rendering.
///
/// # Examples
///
/// ```
/// use portico_connector::xml::Element;
///
/// let doc = Element::new("Order")
///     .attribute("currency", "USD")
///     .child(Element::new("Amt").text("10.00"));
///
/// assert_eq!(doc.render(), r#"<Order currency="USD"><Amt>10.00</Amt></Order>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with the given tag name.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self { tag: tag.to_owned(), attributes: Vec::new(), children: Vec::new() }
    }

    /// Appends an attribute, preserving declaration order.
    #[must_use]
    pub fn attribute(mut self, name: &str, value: &str) -> Self {
        self.attributes.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Appends a child element.
    #[must_use]
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends text content.
    #[must_use]
    pub fn text(mut self, text: &str) -> Self {
        self.children.push(Node::Text(text.to_owned()));
        self
    }

    /// Returns the element tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Renders the tree to a single-line XML string.
    ///
    /// Childless elements render self-closing. No XML declaration is
    /// emitted; the output starts at the root element.
    #[must_use]
    pub fn render(&self) -> String {
        let mut writer = Writer::new(Vec::new());
        self.write_into(&mut writer)
            .expect("writing XML events to an in-memory buffer cannot fail");
        String::from_utf8(writer.into_inner()).expect("rendered XML is valid UTF-8")
    }

    fn write_into(&self, writer: &mut Writer<Vec<u8>>) -> quick_xml::Result<()> {
        let mut start = BytesStart::new(self.tag.as_str());
        for (name, value) in &self.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if self.children.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;
        for child in &self.children {
            match child {
                Node::Element(element) => element.write_into(writer)?,
                Node::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
            }
        }
        writer.write_event(Event::End(BytesEnd::new(self.tag.as_str())))?;
        Ok(())
    }
}
