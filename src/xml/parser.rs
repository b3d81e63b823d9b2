//! Builds an [`Element`] tree from `quick-xml` events
//!
//! `quick-xml` is a pull parser that leaves some well-formedness checks to the
//! caller: a single root element, no stray text around it, no unclosed tags at
//! the end of input and valid tag name starts. Those are checked here.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::element::Element;
use super::error::XmlError;

/// Parse a complete document and return its root element.
pub(crate) fn parse_document(text: &str) -> Result<Element, XmlError> {
    let mut reader = Reader::from_str(text);
    reader.config_mut().check_end_names = true;

    let mut stack: Vec<Element> = Vec::new();
    let mut root: Option<Element> = None;

    loop {
        let event = reader.read_event().map_err(|e| {
            XmlError::Malformed(format!("{} at position {}", e, reader.error_position()))
        })?;

        match event {
            Event::Start(start) => {
                let element = open_element(&start, reader.buffer_position())?;
                ensure_single_root(&stack, &root, &element)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&start, reader.buffer_position())?;
                ensure_single_root(&stack, &root, &element)?;
                attach(&mut stack, &mut root, element);
            }
            Event::End(end) => {
                let element = stack.pop().ok_or_else(|| {
                    XmlError::Malformed(format!(
                        "unexpected end tag </{}>",
                        String::from_utf8_lossy(end.name().as_ref())
                    ))
                })?;
                attach(&mut stack, &mut root, element);
            }
            Event::Text(content) => {
                let content = content.unescape().map_err(|e| {
                    XmlError::Malformed(format!("{} at position {}", e, reader.buffer_position()))
                })?;
                add_text(&mut stack, &content)?;
            }
            Event::CData(content) => {
                let content = String::from_utf8_lossy(&content).into_owned();
                add_text(&mut stack, &content)?;
            }
            Event::Eof => break,
            // declarations, comments, processing instructions, doctype
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(XmlError::Malformed(format!(
            "unclosed element <{}> at end of input",
            open.name
        )));
    }
    root.ok_or_else(|| XmlError::Malformed("no element found".to_string()))
}

fn open_element(start: &BytesStart<'_>, position: impl std::fmt::Display) -> Result<Element, XmlError> {
    let name = std::str::from_utf8(start.name().as_ref())
        .map_err(|e| XmlError::Malformed(e.to_string()))?
        .to_string();
    if !is_valid_name_start(&name) {
        return Err(XmlError::Malformed(format!(
            "not well-formed (invalid token) in tag name '{}' at position {}",
            name, position
        )));
    }

    let mut element = Element::new(name);
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| {
            XmlError::Malformed(format!("{} in <{}>", e, element.name))
        })?;
        let key = String::from_utf8_lossy(attribute.key.as_ref()).into_owned();
        let value = attribute
            .unescape_value()
            .map_err(|e| XmlError::Malformed(format!("{} in <{}>", e, element.name)))?
            .into_owned();
        element.attributes.insert(key, value);
    }
    Ok(element)
}

/// XML names start with a letter, `_` or `:`.
fn is_valid_name_start(name: &str) -> bool {
    name.chars()
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_' || c == ':')
}

fn ensure_single_root(
    stack: &[Element],
    root: &Option<Element>,
    element: &Element,
) -> Result<(), XmlError> {
    if stack.is_empty() && root.is_some() {
        return Err(XmlError::Malformed(format!(
            "junk after document element: <{}>",
            element.name
        )));
    }
    Ok(())
}

fn attach(stack: &mut [Element], root: &mut Option<Element>, element: Element) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

/// Whitespace outside the root element is ignored; anything else is an error.
fn add_text(stack: &mut [Element], content: &str) -> Result<(), XmlError> {
    match stack.last_mut() {
        Some(current) => {
            current.append_text(content);
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(XmlError::Malformed(format!(
            "text outside the root element: '{}'",
            content.trim()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builds_tree_with_text() {
        let root = parse_document(r#"<?xml version="1.0"?><a x="1">hi<b/>tail &amp; more</a>"#)
            .unwrap();
        assert_eq!(root.name, "a");
        assert_eq!(root.attribute("x"), Some("1"));
        assert_eq!(root.text.as_deref(), Some("hi"));
        assert_eq!(root.children[0].name, "b");
        assert_eq!(root.children[0].tail.as_deref(), Some("tail & more"));
    }

    #[test]
    fn test_attribute_entities_are_unescaped() {
        let root = parse_document(r#"<a title="x &lt; y"/>"#).unwrap();
        assert_eq!(root.attribute("title"), Some("x < y"));
    }

    #[test]
    fn test_cdata_is_text() {
        let root = parse_document("<a><![CDATA[<raw>]]></a>").unwrap();
        assert_eq!(root.text.as_deref(), Some("<raw>"));
    }

    #[test]
    fn test_rejects_malformed_documents() {
        let cases = [
            "",
            "   ",
            "<a>",
            "<a><b></a>",
            "<a></b>",
            "</a>",
            "<a/><b/>",
            "<a/>trailing",
            "<1abc/>",
            "<a x=1/>",
            r#"<a x="1" x="2"/>"#,
            "<a>fish & chips</a>",
        ];
        for case in cases {
            assert!(
                matches!(parse_document(case), Err(XmlError::Malformed(_))),
                "{case:?} should be malformed"
            );
        }
    }
}
