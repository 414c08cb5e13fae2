//! XML event reading for the workbook parts (workbook.xml, sheetN.xml, content.xml, ...)
//! Wraps `quick_xml::Reader` and adds helpers for attributes and text content

use crate::error::SpreadsheetError;
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::BytesRef;
use quick_xml::events::BytesStart;
use quick_xml::events::BytesText;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::borrow::Cow;
use std::io::BufRead;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while decoding XML content
#[derive(Error, Debug)]
pub enum XmlError {
    #[error("Parse entity '{0}' failed")]
    ParseEntityError(String),

    #[error("Parse attribute value '{0}' failed")]
    ParseAttributeValueError(String),
}

/// XML reader with a reusable event buffer
pub(crate) struct XmlReader<R: BufRead> {
    reader: Reader<R>,
    buffer: Vec<u8>,
}

impl<R: BufRead> XmlReader<R> {
    pub(crate) fn new(buf_reader: R) -> XmlReader<R> {
        let mut reader = Reader::from_reader(buf_reader);
        let config = reader.config_mut();
        config.check_comments = false;
        config.check_end_names = false;
        // <c r="A1"/> must produce a Start/End pair like <c r="A1"></c>
        config.expand_empty_elements = true;
        config.trim_text(false);

        let buffer = Vec::with_capacity(1024);
        XmlReader { reader, buffer }
    }

    /// Reads the next event, `None` at end of document
    pub(crate) fn next(&'_ mut self) -> Result<Option<Event<'_>>, SpreadsheetError> {
        self.buffer.clear();
        match self.reader.read_event_into(&mut self.buffer) {
            Ok(Event::Eof) => Ok(None),
            Ok(event) => Ok(Some(event)),
            Err(error) => Err(SpreadsheetError::XmlError(error)),
        }
    }
}

pub(crate) trait XmlAttributeHelper<'a> {
    /// Gets the unescaped attribute value
    fn get_value(&self) -> Result<Cow<'a, str>, SpreadsheetError>;

    /// Parses the attribute value to the specified type
    fn parse_value<T: FromStr>(&self) -> Result<T, SpreadsheetError>;
}

impl<'a> XmlAttributeHelper<'a> for Attribute<'a> {
    fn get_value(&self) -> Result<Cow<'a, str>, SpreadsheetError> {
        Ok(self.unescape_value()?)
    }

    fn parse_value<T: FromStr>(&self) -> Result<T, SpreadsheetError> {
        self.get_value()?
            .parse()
            .map_err(|_| match std::str::from_utf8(&self.value) {
                Ok(value) => SpreadsheetError::XmlHelperError(XmlError::ParseAttributeValueError(value.to_string())),
                Err(error) => SpreadsheetError::StringEncodingError(error),
            })
    }
}

/// Attribute lookup on start tags
pub(crate) trait XmlNodeHelper<'a> {
    fn get_attribute_value(&'a self, name: &str) -> Result<Option<Cow<'a, str>>, SpreadsheetError>;

    fn parse_attribute_value<T: FromStr>(&self, name: &str) -> Result<Option<T>, SpreadsheetError>;
}

impl<'a> XmlNodeHelper<'a> for BytesStart<'a> {
    fn get_attribute_value(&'a self, name: &str) -> Result<Option<Cow<'a, str>>, SpreadsheetError> {
        self.try_get_attribute(name)?
            .map(|attribute| attribute.get_value())
            .transpose()
    }

    fn parse_attribute_value<T: FromStr>(&self, name: &str) -> Result<Option<T>, SpreadsheetError> {
        self.try_get_attribute(name)?
            .map(|attribute| attribute.parse_value())
            .transpose()
    }
}

/// Accumulates cell text from Text and GeneralRef events
pub(crate) trait XmlTextContextHelper {
    fn push_bytes_text(&mut self, text: &BytesText) -> Result<(), SpreadsheetError>;

    /// Appends a resolved entity (`&amp;`) or character reference (`&#10;`, `&#x41;`)
    fn push_bytes_ref(&mut self, bytes: &BytesRef) -> Result<(), SpreadsheetError>;
}

impl XmlTextContextHelper for String {
    fn push_bytes_text(&mut self, text: &BytesText) -> Result<(), SpreadsheetError> {
        self.push_str(&text.xml_content()?);
        Ok(())
    }

    fn push_bytes_ref(&mut self, bytes: &BytesRef) -> Result<(), SpreadsheetError> {
        let raw = bytes.xml_content()?;
        push_reference(self, &raw)
    }
}

fn push_reference(text: &mut String, raw: &str) -> Result<(), SpreadsheetError> {
    if let Some(number) = raw.strip_prefix('#') {
        let code = if let Some(hex) = number.strip_prefix('x') {
            u32::from_str_radix(hex, 16)?
        } else {
            number.parse::<u32>()?
        };
        if let Some(character) = char::from_u32(code) {
            text.push(character);
        }
    } else if let Some(entity) = resolve_xml_entity(raw) {
        text.push_str(entity);
    } else {
        Err(XmlError::ParseEntityError(raw.to_string()))?;
    }
    Ok(())
}

/// Loops over the reader's events, dispatching to the given match arms.
/// Unmatched events are ignored; `break` leaves the loop.
#[macro_export]
macro_rules! match_xml_events {
    ($reader:expr => { $($arms:tt)* }) => {
        while let Some(result) = $reader.next()? {
            match result {
                Event::Eof => break,
                $($arms)*
                _ => (),
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::name::QName;

    #[test]
    fn reads_text_with_references() -> Result<(), SpreadsheetError> {
        let xml = r#"<t>Tom &amp; Jerry&#10;&#x41;</t>"#;
        let mut reader = XmlReader::new(xml.as_bytes());
        let mut text = String::new();
        match_xml_events!(reader => {
            Event::Text(event) => text.push_bytes_text(&event)?,
            Event::GeneralRef(event) => text.push_bytes_ref(&event)?,
        });
        assert_eq!(text, "Tom & Jerry\nA");
        Ok(())
    }

    #[test]
    fn unknown_entity_is_error() {
        let mut text = String::new();
        assert!(push_reference(&mut text, "bogus").is_err());
        assert!(text.is_empty());
    }

    #[test]
    fn reads_attributes() -> Result<(), SpreadsheetError> {
        let xml = r#"<row r="3" spans="1:2"><c r="B3" t="s"/></row>"#;
        let mut reader = XmlReader::new(xml.as_bytes());
        let mut rows = Vec::new();
        let mut cells = Vec::new();
        let mut ends = 0;
        match_xml_events!(reader => {
            Event::Start(event) if event.name() == QName(b"row") => {
                rows.push(event.parse_attribute_value::<usize>("r")?);
            }
            Event::Start(event) if event.name() == QName(b"c") => {
                let reference = event.get_attribute_value("r")?.map(|value| value.to_string());
                let kind = event.get_attribute_value("t")?.map(|value| value.to_string());
                cells.push((reference, kind));
            }
            Event::End(event) if event.name() == QName(b"c") => ends += 1,
        });
        assert_eq!(rows, vec![Some(3)]);
        assert_eq!(cells, vec![(Some("B3".to_string()), Some("s".to_string()))]);
        assert_eq!(ends, 1);
        Ok(())
    }
}
