//! XML serialization of a [`LinkDocument`].
//!
//! ## Structure
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <links>
//!     <link type="Equivalence" comment="Created by indexing ...">
//!         <element id="..." name="Property" model="..." tool="BaSyx">
//!             <elementClass>https://example.org/semantic/1</elementClass>
//!         </element>
//!     </link>
//! </links>
//! ```

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use super::{Link, LinkDocument, LinkElement};
use crate::error::{MatcherError, Result};

/// Element and attribute names of the link document.
pub mod tags {
    pub const LINKS: &str = "links";
    pub const LINK: &str = "link";
    pub const ELEMENT: &str = "element";
    pub const ELEMENT_CLASS: &str = "elementClass";
}

/// Indented link document writer.
pub struct LinkWriter {
    indent: usize,
}

impl Default for LinkWriter {
    fn default() -> Self {
        Self { indent: 4 }
    }
}

impl LinkWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, document: &LinkDocument) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', self.indent);

        write_event(
            &mut writer,
            Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)),
        )?;

        if document.links.is_empty() {
            write_event(&mut writer, Event::Empty(BytesStart::new(tags::LINKS)))?;
        } else {
            write_event(&mut writer, Event::Start(BytesStart::new(tags::LINKS)))?;
            for link in &document.links {
                write_link(&mut writer, link)?;
            }
            write_event(&mut writer, Event::End(BytesEnd::new(tags::LINKS)))?;
        }

        let mut output = buffer.into_inner();
        output.push(b'\n');
        Ok(output)
    }
}

fn write_event<W: std::io::Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| MatcherError::xml(format!("Write error: {e}")))
}

fn write_link<W: std::io::Write>(writer: &mut Writer<W>, link: &Link) -> Result<()> {
    let mut start = BytesStart::new(tags::LINK);
    start.push_attribute(("type", link.link_type.as_str()));
    start.push_attribute(("comment", link.comment.as_str()));

    if link.elements.is_empty() {
        return write_event(writer, Event::Empty(start));
    }

    write_event(writer, Event::Start(start))?;
    for element in &link.elements {
        write_element(writer, element)?;
    }
    write_event(writer, Event::End(BytesEnd::new(tags::LINK)))
}

fn write_element<W: std::io::Write>(writer: &mut Writer<W>, element: &LinkElement) -> Result<()> {
    let mut start = BytesStart::new(tags::ELEMENT);
    start.push_attribute(("id", element.id.as_str()));
    start.push_attribute(("name", element.name.as_str()));
    start.push_attribute(("model", element.model.as_str()));
    start.push_attribute(("tool", element.tool.as_str()));

    write_event(writer, Event::Start(start))?;
    write_event(writer, Event::Start(BytesStart::new(tags::ELEMENT_CLASS)))?;
    write_event(writer, Event::Text(BytesText::new(&element.element_class)))?;
    write_event(writer, Event::End(BytesEnd::new(tags::ELEMENT_CLASS)))?;
    write_event(writer, Event::End(BytesEnd::new(tags::ELEMENT)))
}
