//! Inline extension expansion.
//!
//! A compact textual form embedded in an attribute value, such as a
//! cross-reference marker, expands into the same nested-node structure a
//! property element would produce, so the builder sees one uniform
//! shape. The grammar is:
//!
//! ```text
//! "{" qualified-name [ positional ] [ Prop "=" value { "," ... } ] "}"
//! ```
//!
//! A positional argument routes to the extension type's content
//! property. Prefixes resolve through the owning element's in-scope
//! prefix map.

use std::sync::Arc;

use trellis_foundation::{Error, Result};
use trellis_registry::TypeDirectory;

use crate::element::QName;
use crate::node::{ConstructionNode, PropertyAssignment};
use crate::prefix::PrefixScope;
use crate::span::Span;

/// Expands one inline extension value into a construction node.
pub(crate) fn expand(
    raw: &str,
    scope: &PrefixScope,
    directory: &TypeDirectory,
    span: Span,
    source: &str,
) -> Result<ConstructionNode> {
    let inner = raw
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .ok_or_else(|| syntax_at("unterminated inline extension", span, source))?;
    if inner.contains('{') {
        return Err(syntax_at(
            "nested inline extensions are not supported",
            span,
            source,
        ));
    }

    let inner = inner.trim();
    let (name_raw, arguments) = match inner.find(char::is_whitespace) {
        Some(split) => (&inner[..split], inner[split..].trim_start()),
        None => (inner, ""),
    };
    if name_raw.is_empty() {
        return Err(syntax_at("empty inline extension", span, source));
    }

    let name = QName::parse(name_raw);
    let namespace = match &name.prefix {
        Some(prefix) => scope.get(prefix).cloned().ok_or_else(|| {
            syntax_at(format!("unknown namespace prefix: {prefix}"), span, source)
        })?,
        None => scope.get("").cloned().unwrap_or_default(),
    };
    let instance_type = directory.resolve(&namespace, &name.local)?;
    let mut node = ConstructionNode::new(Arc::clone(&instance_type));

    for segment in arguments.split(',') {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }
        if let Some((key, value)) = segment.split_once('=') {
            let key = key.trim();
            let value = value.trim();
            let property = instance_type
                .property(key)
                .ok_or_else(|| Error::unresolved_property(instance_type.name(), key))?;
            if instance_type.name_property() == Some(key) {
                node.set_name(value);
            }
            node.push_assignment(PropertyAssignment::literal(Arc::clone(property), value));
        } else {
            let content = instance_type.content_property().ok_or_else(|| {
                Error::unresolved_property(instance_type.name(), "(content)")
            })?;
            node.push_assignment(PropertyAssignment::literal(Arc::clone(content), segment));
        }
    }

    Ok(node)
}

fn syntax_at(message: impl Into<String>, span: Span, source: &str) -> Error {
    Error::syntax(message, span.line, span.column, span.line_text(source))
}
