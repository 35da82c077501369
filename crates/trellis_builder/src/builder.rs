//! The object builder.
//!
//! Walks a construction tree depth-first and produces the live object
//! graph: allocates each node's instance, applies every assignment in
//! document order, and registers named instances as they are created.
//! Fail-fast: the first error aborts the whole build.

use trellis_foundation::{AssignmentFault, Error, ObjectHandle, Result, Value};
use trellis_markup::{ConstructionNode, PropertyAssignment};
use trellis_registry::{PropertyKind, SourceValueConverter};

use crate::context::BuildContext;
use crate::creator::CreateInstance;

/// Builds object graphs from construction trees.
///
/// Pure function of the tree plus collaborators; the tree is never
/// mutated and can in principle be inspected afterwards, though a load
/// consumes it exactly once.
pub struct ObjectBuilder<'a> {
    creator: &'a dyn CreateInstance,
    converter: &'a SourceValueConverter,
}

impl<'a> ObjectBuilder<'a> {
    /// Creates a builder over the given collaborators.
    #[must_use]
    pub fn new(creator: &'a dyn CreateInstance, converter: &'a SourceValueConverter) -> Self {
        Self { creator, converter }
    }

    /// Builds the instance for `node` and everything beneath it.
    ///
    /// This is the single recursive entry point; stack depth grows only
    /// with document nesting depth.
    ///
    /// # Errors
    /// Fails with the first instantiation, assignment, conversion, or
    /// duplicate-name error encountered.
    pub fn build(&self, node: &ConstructionNode, ctx: &mut BuildContext<'_>) -> Result<ObjectHandle> {
        let instance = self.creator.create(node.instance_type())?;

        // Names register before the instance's own properties are
        // applied, so a descendant can reference an ancestor that is
        // still being populated.
        if let Some(name) = node.name() {
            ctx.register_name(name, &instance)?;
        }

        ctx.lifecycle().on_begin_init(&instance);
        for assignment in node.assignments() {
            self.apply(&instance, assignment, ctx)?;
        }
        ctx.lifecycle().on_end_init(&instance);

        Ok(instance)
    }

    /// Applies one property assignment to `instance`.
    fn apply(
        &self,
        instance: &ObjectHandle,
        assignment: &PropertyAssignment,
        ctx: &mut BuildContext<'_>,
    ) -> Result<()> {
        let property = assignment.property();

        match (assignment.source_value(), assignment.children()) {
            (Some(_), [_, ..]) => Err(Error::invalid_assignment(
                property.name(),
                AssignmentFault::BothPresent,
            )),
            (None, []) => Err(Error::invalid_assignment(
                property.name(),
                AssignmentFault::NeitherPresent,
            )),
            (Some(literal), []) => {
                let value = self.converter.convert(property.value_type(), literal)?;
                property.set(instance, value)
            }
            (None, children) => match property.kind() {
                PropertyKind::Appendable => {
                    // Append into the collection the instance already
                    // holds; the builder never replaces it.
                    for child in children {
                        let value = self.build(child, ctx)?;
                        property.append(instance, Value::Object(value))?;
                    }
                    Ok(())
                }
                PropertyKind::Scalar => {
                    // Only the first child is assigned; the rest are
                    // still built so their side effects (name
                    // registration included) occur.
                    let mut first = None;
                    for child in children {
                        let value = self.build(child, ctx)?;
                        if first.is_none() {
                            first = Some(value);
                        }
                    }
                    match first {
                        Some(value) => property.set(instance, Value::Object(value)),
                        None => Ok(()),
                    }
                }
            },
        }
    }
}
