//! Construction tree model.
//!
//! The parsed, type-resolved intermediate representation of markup
//! before instantiation. The tree is immutable input to the object
//! builder: it is produced once by the parse phase and consumed once by
//! the build phase, never re-walked or shared.

use std::sync::Arc;

use trellis_registry::{PropertyDescriptor, TypeDescriptor};

/// One markup element instance-to-be.
#[derive(Debug)]
pub struct ConstructionNode {
    instance_type: Arc<TypeDescriptor>,
    name: Option<String>,
    assignments: Vec<PropertyAssignment>,
}

impl ConstructionNode {
    /// Creates a node for the given resolved type.
    #[must_use]
    pub fn new(instance_type: Arc<TypeDescriptor>) -> Self {
        Self {
            instance_type,
            name: None,
            assignments: Vec::new(),
        }
    }

    /// Records the markup-declared name for this instance.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    /// Appends an assignment; insertion order is document order.
    pub fn push_assignment(&mut self, assignment: PropertyAssignment) {
        self.assignments.push(assignment);
    }

    /// Returns the resolved type this node instantiates.
    #[must_use]
    pub fn instance_type(&self) -> &Arc<TypeDescriptor> {
        &self.instance_type
    }

    /// Returns the markup-declared name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the pending assignments in document order.
    #[must_use]
    pub fn assignments(&self) -> &[PropertyAssignment] {
        &self.assignments
    }
}

/// One pending attribute or nested-element binding.
///
/// Exactly one of the source value or the children must be present; the
/// builder validates this when the assignment is applied.
#[derive(Debug)]
pub struct PropertyAssignment {
    property: Arc<PropertyDescriptor>,
    source_value: Option<String>,
    children: Vec<ConstructionNode>,
}

impl PropertyAssignment {
    /// Creates an assignment with explicit parts.
    ///
    /// Invalid combinations (both or neither present) are representable
    /// on purpose; they are detected at build time.
    #[must_use]
    pub fn new(
        property: Arc<PropertyDescriptor>,
        source_value: Option<String>,
        children: Vec<ConstructionNode>,
    ) -> Self {
        Self {
            property,
            source_value,
            children,
        }
    }

    /// Creates a literal (attribute-style) assignment.
    #[must_use]
    pub fn literal(property: Arc<PropertyDescriptor>, source_value: impl Into<String>) -> Self {
        Self::new(property, Some(source_value.into()), Vec::new())
    }

    /// Creates an element-content-style assignment.
    #[must_use]
    pub fn nested(property: Arc<PropertyDescriptor>, children: Vec<ConstructionNode>) -> Self {
        Self::new(property, None, children)
    }

    /// Returns the target property descriptor.
    #[must_use]
    pub fn property(&self) -> &Arc<PropertyDescriptor> {
        &self.property
    }

    /// Returns the literal source value, if this is an attribute-style
    /// assignment.
    #[must_use]
    pub fn source_value(&self) -> Option<&str> {
        self.source_value.as_deref()
    }

    /// Returns the nested child nodes in document order.
    #[must_use]
    pub fn children(&self) -> &[ConstructionNode] {
        &self.children
    }
}

/// The finished result of the parse phase: a strict tree of nodes.
#[derive(Debug)]
pub struct ConstructionTree {
    root: ConstructionNode,
}

impl ConstructionTree {
    /// Wraps a root node.
    #[must_use]
    pub fn new(root: ConstructionNode) -> Self {
        Self { root }
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &ConstructionNode {
        &self.root
    }

    /// Consumes the tree, returning the root node.
    #[must_use]
    pub fn into_root(self) -> ConstructionNode {
        self.root
    }
}
