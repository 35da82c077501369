//! Namespace-prefix resolution.
//!
//! A scoped pass over the raw element tree, run before any type or
//! property lookup. `xmlns="…"` and `xmlns:p="…"` attributes establish
//! the in-scope prefix map (and are removed from the attribute list);
//! every element is annotated with its resolved namespace and its full
//! in-scope map, which the inline-extension expander consults later.

use trellis_foundation::{Error, Result};

use crate::element::{Content, Element};
use crate::span::Span;

/// In-scope prefix-to-namespace map.
///
/// Persistent map so each element's scope shares structure with its
/// parent's. The default namespace lives under the empty-string key.
pub type PrefixScope = im::HashMap<String, String>;

/// Resolves namespace prefixes across the whole tree.
///
/// # Errors
/// Fails with a syntax error when an element or attribute uses a prefix
/// with no in-scope `xmlns:` declaration.
pub fn annotate(root: Element, source: &str) -> Result<Element> {
    annotate_element(root, &PrefixScope::default(), source)
}

fn annotate_element(mut element: Element, parent: &PrefixScope, source: &str) -> Result<Element> {
    let mut scope = parent.clone();

    // Drain xmlns declarations into the scope; keep everything else.
    let mut kept = Vec::with_capacity(element.attributes.len());
    for attribute in element.attributes {
        match (&attribute.name.prefix, attribute.name.local.as_str()) {
            (None, "xmlns") => {
                scope.insert(String::new(), attribute.value);
            }
            (Some(prefix), local) if prefix == "xmlns" => {
                scope.insert(local.to_string(), attribute.value);
            }
            _ => kept.push(attribute),
        }
    }

    for attribute in &kept {
        if let Some(prefix) = &attribute.name.prefix {
            if !scope.contains_key(prefix) {
                return Err(unknown_prefix(prefix, attribute.span, source));
            }
        }
    }
    element.attributes = kept;

    element.namespace = match &element.name.prefix {
        Some(prefix) => scope
            .get(prefix)
            .cloned()
            .ok_or_else(|| unknown_prefix(prefix, element.span, source))?,
        None => scope.get("").cloned().unwrap_or_default(),
    };

    element.children = element
        .children
        .into_iter()
        .map(|child| match child {
            Content::Element(nested) => {
                annotate_element(nested, &scope, source).map(Content::Element)
            }
            text @ Content::Text(..) => Ok(text),
        })
        .collect::<Result<_>>()?;

    element.scope = scope;
    Ok(element)
}

fn unknown_prefix(prefix: &str, span: Span, source: &str) -> Error {
    Error::syntax(
        format!("unknown namespace prefix: {prefix}"),
        span.line,
        span.column,
        span.line_text(source),
    )
}
