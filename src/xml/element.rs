//! Element tree produced by the markup reader

use std::collections::HashMap;

use serde::Serialize;

/// One markup element.
///
/// `text` is the character data between the start tag and the first child;
/// `tail` is the character data after this element's end tag, up to the next
/// sibling or the parent's end tag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    pub name: String,
    pub attributes: HashMap<String, String>,
    pub children: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tail: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// This element and all of its descendants, in document order.
    pub fn iter(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// All elements below this one, in document order. This element itself
    /// is not included.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }

    /// Every element below this one with the given tag, at any depth.
    pub fn find_all<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.descendants().filter(move |element| element.name == tag)
    }

    /// Number of elements below this one with the given tag.
    pub fn count(&self, tag: &str) -> usize {
        self.find_all(tag).count()
    }

    /// Number of elements in this subtree, including this one.
    pub fn element_count(&self) -> usize {
        self.iter().count()
    }

    pub(crate) fn append_text(&mut self, content: &str) {
        match self.children.last_mut() {
            Some(last) => push_segment(&mut last.tail, content),
            None => push_segment(&mut self.text, content),
        }
    }
}

fn push_segment(segment: &mut Option<String>, content: &str) {
    segment.get_or_insert_with(String::new).push_str(content);
}

/// Pre-order iterator over an element subtree.
pub struct Descendants<'a> {
    stack: Vec<&'a Element>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Element;

    fn next(&mut self) -> Option<Self::Item> {
        let element = self.stack.pop()?;
        self.stack.extend(element.children.iter().rev());
        Some(element)
    }
}
