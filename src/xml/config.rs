//! Validation options for the markup reader

use serde::{Deserialize, Serialize};

use super::rules::AttrType;

/// Options for [`read_xml`](super::read_xml).
///
/// Rule tables are ordered; within each rule category the first violation in
/// this order is the one reported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct XmlOptions {
    /// Tags that must occur at least once anywhere in the tree
    pub required_tags: Vec<String>,

    /// Attributes every occurrence of a tag must carry
    #[serde(with = "crate::ordered")]
    pub required_attrs: Vec<(String, Vec<String>)>,

    /// `"tag@attribute"` keys mapped to the attribute's expected type
    #[serde(with = "crate::ordered")]
    pub attr_types: Vec<(String, AttrType)>,

    /// Tags that may occur at most once
    pub unique_tags: Vec<String>,
}

impl XmlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn required_attrs<I, S>(mut self, tag: impl Into<String>, attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_attrs
            .push((tag.into(), attributes.into_iter().map(Into::into).collect()));
        self
    }

    /// Declare the type of an attribute; `key` is `"tag@attribute"`.
    pub fn attr_type(mut self, key: impl Into<String>, expected: AttrType) -> Self {
        self.attr_types.push((key.into(), expected));
        self
    }

    pub fn unique_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique_tags = tags.into_iter().map(Into::into).collect();
        self
    }
}
