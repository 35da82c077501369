//! Construction-tree building.
//!
//! The last parse pass: walks the annotated element tree, resolves every
//! element to a registered type and every attribute or property element
//! to a property descriptor, and produces the construction tree the
//! object builder consumes. Inline extensions inside attribute values are
//! expanded here so the builder sees one uniform shape.

use std::sync::Arc;

use trellis_foundation::{Error, ErrorContext, Result};
use trellis_registry::{PropertyDescriptor, TypeDescriptor, TypeDirectory};

use crate::element::{Content, Element};
use crate::inline;
use crate::node::{ConstructionNode, ConstructionTree, PropertyAssignment};
use crate::span::Span;

/// Builds the construction tree for an annotated element tree.
pub(crate) fn build_tree(
    root: &Element,
    source: &str,
    directory: &TypeDirectory,
) -> Result<ConstructionTree> {
    Ok(ConstructionTree::new(build_node(root, source, directory)?))
}

/// Builds one construction node from one element.
fn build_node(
    element: &Element,
    source: &str,
    directory: &TypeDirectory,
) -> Result<ConstructionNode> {
    if element.name.local.contains('.') {
        return Err(syntax_at(
            format!("misplaced property element <{}>", element.name),
            element.span,
            source,
        ));
    }

    let instance_type = directory
        .resolve(&element.namespace, &element.name.local)
        .map_err(|err| err.with_context(position_of(element.span)))?;
    let mut node = ConstructionNode::new(Arc::clone(&instance_type));

    for attribute in &element.attributes {
        let local = attribute.name.local.as_str();
        let is_name_attr = instance_type.name_property() == Some(local);
        let property = instance_type.property(local);

        if let Some(escaped) = attribute.value.strip_prefix("{}") {
            // `{}` escape: the remainder is a literal.
            let property = require_property(&instance_type, local, attribute.span, property)?;
            if is_name_attr {
                node.set_name(escaped);
            }
            node.push_assignment(PropertyAssignment::literal(Arc::clone(property), escaped));
        } else if attribute.value.starts_with('{') {
            let property = require_property(&instance_type, local, attribute.span, property)?;
            let expanded = inline::expand(
                &attribute.value,
                &element.scope,
                directory,
                attribute.span,
                source,
            )?;
            node.push_assignment(PropertyAssignment::nested(
                Arc::clone(property),
                vec![expanded],
            ));
        } else {
            if is_name_attr {
                node.set_name(attribute.value.clone());
            }
            match property {
                Some(property) => node.push_assignment(PropertyAssignment::literal(
                    Arc::clone(property),
                    attribute.value.clone(),
                )),
                // A name-declaring attribute needs no backing property.
                None if is_name_attr => {}
                None => {
                    return Err(unresolved(&instance_type, local, attribute.span));
                }
            }
        }
    }

    let mut content_nodes = Vec::new();
    let mut content_text = String::new();
    for child in &element.children {
        match child {
            Content::Element(nested) if nested.name.local.contains('.') => {
                let assignment = property_element(nested, &instance_type, source, directory)?;
                node.push_assignment(assignment);
            }
            Content::Element(nested) => {
                content_nodes.push(build_node(nested, source, directory)?);
            }
            Content::Text(text, _) => content_text.push_str(text),
        }
    }

    if !content_nodes.is_empty() && !content_text.is_empty() {
        return Err(syntax_at(
            format!("mixed text and element content in <{}>", element.name),
            element.span,
            source,
        ));
    }
    if !content_nodes.is_empty() {
        let content = require_content_property(&instance_type, element.span)?;
        node.push_assignment(PropertyAssignment::nested(
            Arc::clone(content),
            content_nodes,
        ));
    } else if !content_text.is_empty() {
        let content = require_content_property(&instance_type, element.span)?;
        node.push_assignment(PropertyAssignment::literal(
            Arc::clone(content),
            content_text.trim(),
        ));
    }

    Ok(node)
}

/// Builds the assignment for one `Owner.Property` element.
fn property_element(
    element: &Element,
    owner: &Arc<TypeDescriptor>,
    source: &str,
    directory: &TypeDirectory,
) -> Result<PropertyAssignment> {
    // The local name contains a dot; callers checked.
    let Some((owner_name, property_name)) = element.name.local.split_once('.') else {
        return Err(syntax_at(
            format!("malformed property element <{}>", element.name),
            element.span,
            source,
        ));
    };
    if owner_name != owner.name() {
        return Err(syntax_at(
            format!(
                "property element <{}> does not match its parent <{}>",
                element.name,
                owner.name()
            ),
            element.span,
            source,
        ));
    }
    if !element.attributes.is_empty() {
        return Err(syntax_at(
            format!("property element <{}> cannot carry attributes", element.name),
            element.span,
            source,
        ));
    }

    let property = owner
        .property(property_name)
        .ok_or_else(|| unresolved(owner, property_name, element.span))?;

    let mut nodes = Vec::new();
    let mut text = String::new();
    for child in &element.children {
        match child {
            Content::Element(nested) => nodes.push(build_node(nested, source, directory)?),
            Content::Text(run, _) => text.push_str(run),
        }
    }
    if !nodes.is_empty() && !text.is_empty() {
        return Err(syntax_at(
            format!("mixed text and element content in <{}>", element.name),
            element.span,
            source,
        ));
    }
    if !text.is_empty() {
        return Ok(PropertyAssignment::literal(
            Arc::clone(property),
            text.trim(),
        ));
    }
    // An empty property element produces a neither-side assignment; the
    // builder rejects it when the tree is consumed.
    Ok(PropertyAssignment::new(Arc::clone(property), None, nodes))
}

fn require_property<'a>(
    owner: &Arc<TypeDescriptor>,
    name: &str,
    span: Span,
    property: Option<&'a Arc<PropertyDescriptor>>,
) -> Result<&'a Arc<PropertyDescriptor>> {
    property.ok_or_else(|| unresolved(owner, name, span))
}

fn require_content_property(
    owner: &Arc<TypeDescriptor>,
    span: Span,
) -> Result<&Arc<PropertyDescriptor>> {
    owner
        .content_property()
        .ok_or_else(|| unresolved(owner, "(content)", span))
}

fn unresolved(owner: &Arc<TypeDescriptor>, property: &str, span: Span) -> Error {
    Error::unresolved_property(owner.name(), property).with_context(position_of(span))
}

fn position_of(span: Span) -> ErrorContext {
    ErrorContext::new().with_position(span.line as usize, span.column as usize)
}

fn syntax_at(message: impl Into<String>, span: Span, source: &str) -> Error {
    Error::syntax(message, span.line, span.column, span.line_text(source))
}
