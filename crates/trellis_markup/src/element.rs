//! Raw element tree.
//!
//! The element parser produces this shape straight from tokens; names are
//! still prefixed and nothing has been resolved. The prefix annotator
//! fills in `namespace` and `scope` before type lookup runs.

use std::fmt;

use crate::prefix::PrefixScope;
use crate::span::Span;

/// A possibly-prefixed markup name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QName {
    /// Namespace prefix, if the name was written `prefix:local`.
    pub prefix: Option<String>,
    /// Local part of the name (dots included for property elements).
    pub local: String,
}

impl QName {
    /// Splits a raw name on the first `:` into prefix and local part.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((prefix, local)) => Self {
                prefix: Some(prefix.to_string()),
                local: local.to_string(),
            },
            None => Self {
                prefix: None,
                local: raw.to_string(),
            },
        }
    }

    /// Creates an unprefixed name.
    #[must_use]
    pub fn local(name: impl Into<String>) -> Self {
        Self {
            prefix: None,
            local: name.into(),
        }
    }
}

impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.prefix {
            Some(prefix) => write!(f, "{prefix}:{}", self.local),
            None => write!(f, "{}", self.local),
        }
    }
}

/// One attribute on an element.
#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    /// Attribute name, possibly prefixed.
    pub name: QName,
    /// Decoded attribute value text.
    pub value: String,
    /// Source location of the attribute name.
    pub span: Span,
}

/// One child of an element: a nested element or a text run.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// A nested element.
    Element(Element),
    /// A non-whitespace text run, entities decoded.
    Text(String, Span),
}

/// One parsed markup element.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Element name, possibly prefixed.
    pub name: QName,
    /// Resolved namespace; empty until the prefix annotator runs.
    pub namespace: String,
    /// In-scope prefix map; empty until the prefix annotator runs.
    /// The default namespace is stored under the empty-string key.
    pub scope: PrefixScope,
    /// Attributes in document order (xmlns declarations are removed by
    /// the annotator).
    pub attributes: Vec<Attribute>,
    /// Children in document order.
    pub children: Vec<Content>,
    /// Source location of the element name in its start tag.
    pub span: Span,
}

impl Element {
    /// Creates an element with no attributes or children.
    #[must_use]
    pub fn new(name: QName, span: Span) -> Self {
        Self {
            name,
            namespace: String::new(),
            scope: PrefixScope::default(),
            attributes: Vec::new(),
            children: Vec::new(),
            span,
        }
    }
}
