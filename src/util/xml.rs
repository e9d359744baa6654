//! Small element/attribute builder over `quick-xml`.
//!
//! Output mirrors what Eclipse itself writes: an XML declaration, one
//! element per line, the configured indentation, attributes in insertion
//! order and a trailing newline.

use std::borrow::Cow;

use quick_xml::escape::partial_escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::name::QName;
use quick_xml::Writer;

/// Indented XML document writer.
pub struct XmlWriter {
    writer: Writer<Vec<u8>>,
}

impl XmlWriter {
    /// Start a UTF-8 document indented with `indent_size` copies of `indent_char`.
    pub fn new(indent_char: u8, indent_size: usize) -> quick_xml::Result<Self> {
        let mut writer = Writer::new_with_indent(Vec::new(), indent_char, indent_size);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(XmlWriter { writer })
    }

    /// Open an element.
    pub fn start(&mut self, name: &str) -> quick_xml::Result<()> {
        self.writer.write_event(Event::Start(BytesStart::new(name)))
    }

    /// Close an element.
    pub fn end(&mut self, name: &str) -> quick_xml::Result<()> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))
    }

    /// Write `<name>text</name>` on a single line.
    pub fn text_element(&mut self, name: &str, text: &str) -> quick_xml::Result<()> {
        self.start(name)?;
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(partial_escape(text))))?;
        self.end(name)
    }

    /// Write a self-closing element with attributes in the given order.
    pub fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> quick_xml::Result<()> {
        let mut element = BytesStart::new(name);
        for (key, value) in attributes {
            element.push_attribute(Attribute {
                key: QName(key.as_bytes()),
                value: Cow::Owned(escape_attribute(value).into_bytes()),
            });
        }
        self.writer.write_event(Event::Empty(element))
    }

    /// Finish the document, terminating the last line.
    pub fn finish(self) -> String {
        let mut bytes = self.writer.into_inner();
        bytes.push(b'\n');
        // Every byte written came from a `&str`.
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

/// Escape an attribute value. Apostrophes are left alone because values
/// are always double-quoted.
fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
