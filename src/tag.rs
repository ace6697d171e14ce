//! The contract between the catalog entities and whatever tree of tags they
//! are read from.
//!
//! A [`Tag`] exposes its kind, its named string attributes, its immediate
//! children in document order, and its text content. Entity factories only
//! ever talk to this trait, so a tree built by [`crate::markup`], a decoded
//! message or a hand-built fixture ([`Element`]) are all equally good inputs.

use std::fmt;

use crate::error::{CatalogError, Result};

pub trait Tag: Sized {
    fn kind(&self) -> &str;
    fn attribute(&self, name: &str) -> Option<&str>;
    fn attributes(&self) -> Vec<(&str, &str)>;
    fn children(&self) -> &[Self];
    fn text(&self) -> Option<&str>;
    /// Line and column of the tag in its source document, when known.
    fn position(&self) -> Option<(usize, usize)> {
        None
    }

    fn is(&self, kind: &str) -> bool {
        self.kind().eq_ignore_ascii_case(kind)
    }
    fn identity(&self) -> TagIdentity {
        TagIdentity {
            kind: self.kind().to_string(),
            attributes: self
                .attributes()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            position: self.position(),
        }
    }
    fn required(&self, name: &str) -> Result<&str> {
        self.attribute(name).ok_or_else(|| CatalogError::MissingAttribute {
            tag: self.identity(),
            attribute: name.to_string(),
        })
    }
    fn integer(&self, name: &str) -> Result<i64> {
        let value = self.required(name)?;
        value.trim().parse::<i64>().map_err(|_| CatalogError::InvalidNumber {
            tag: self.identity(),
            attribute: name.to_string(),
            value: value.to_string(),
        })
    }
    /// Fails with a schema violation naming this tag as the parent.
    fn unexpected(&self, child: &Self) -> CatalogError {
        let found = child.identity();
        tracing::warn!(parent = self.kind(), found = %found, "unexpected child tag");
        CatalogError::UnexpectedTag {
            parent: self.kind().to_string(),
            found,
        }
    }
}

/// Deserialization of an entity from a tag and its subtree.
pub trait FromTag: Sized {
    fn from_tag<T: Tag>(tag: &T) -> Result<Self>;
}

/// Descriptive identity of a tag, carried by errors so that callers can
/// locate the offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagIdentity {
    pub kind: String,
    pub attributes: Vec<(String, String)>,
    pub position: Option<(usize, usize)>,
}

impl fmt::Display for TagIdentity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{}", self.kind)?;
        for (name, value) in &self.attributes {
            write!(f, " {}={:?}", name, value)?;
        }
        write!(f, ">")?;
        if let Some((line, col)) = self.position {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

/// An owned tag tree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    kind: String,
    attributes: Vec<(String, String)>,
    children: Vec<Element>,
    text: Option<String>,
    position: Option<(usize, usize)>,
}

impl Element {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            ..Default::default()
        }
    }
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
    pub fn at(mut self, line: usize, col: usize) -> Self {
        self.position = Some((line, col));
        self
    }
}

impl Tag for Element {
    fn kind(&self) -> &str {
        &self.kind
    }
    fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
    fn attributes(&self) -> Vec<(&str, &str)> {
        self.attributes
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect()
    }
    fn children(&self) -> &[Self] {
        &self.children
    }
    fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
    fn position(&self) -> Option<(usize, usize)> {
        self.position
    }
}
