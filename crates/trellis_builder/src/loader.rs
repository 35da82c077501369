//! The loader entry point.

use trellis_foundation::{ObjectHandle, Result};
use trellis_markup::parse;
use trellis_registry::{SourceValueConverter, TypeDirectory};

use crate::builder::ObjectBuilder;
use crate::context::{BuildContext, InstanceLifecycle};
use crate::creator::InstanceCreator;

/// The pair a successful load returns: the fully populated root instance
/// and a snapshot of the namescope. Immutable once returned.
#[derive(Debug, Clone)]
pub struct ConstructionResult {
    root: ObjectHandle,
    namescope: im::HashMap<String, ObjectHandle>,
}

impl ConstructionResult {
    /// Returns the root instance.
    #[must_use]
    pub fn root(&self) -> &ObjectHandle {
        &self.root
    }

    /// Returns the namescope snapshot.
    #[must_use]
    pub fn namescope(&self) -> &im::HashMap<String, ObjectHandle> {
        &self.namescope
    }

    /// Looks up a named instance from the snapshot.
    #[must_use]
    pub fn find_name(&self, name: &str) -> Option<&ObjectHandle> {
        self.namescope.get(name)
    }
}

/// Loads markup text into live object graphs.
///
/// Owns the read-only collaborators (type directory, converter), so one
/// loader can serve repeated and concurrent `load` calls; every call
/// gets its own fresh build context and namescope.
pub struct Loader {
    directory: TypeDirectory,
    converter: SourceValueConverter,
    creator: InstanceCreator,
    lifecycle: Option<Box<dyn InstanceLifecycle>>,
}

impl Loader {
    /// Creates a loader over the given type directory with the built-in
    /// converter.
    #[must_use]
    pub fn new(directory: TypeDirectory) -> Self {
        Self {
            directory,
            converter: SourceValueConverter::new(),
            creator: InstanceCreator,
            lifecycle: None,
        }
    }

    /// Replaces the source-value converter.
    #[must_use]
    pub fn with_converter(mut self, converter: SourceValueConverter) -> Self {
        self.converter = converter;
        self
    }

    /// Installs a lifecycle hook signaled around each instance's
    /// population.
    #[must_use]
    pub fn with_lifecycle(mut self, lifecycle: Box<dyn InstanceLifecycle>) -> Self {
        self.lifecycle = Some(lifecycle);
        self
    }

    /// Returns the type directory this loader resolves against.
    #[must_use]
    pub fn directory(&self) -> &TypeDirectory {
        &self.directory
    }

    /// Loads markup text: parse, build, and return the finished graph.
    ///
    /// Synchronous and CPU-bound; either fully completes or fails fast
    /// with the first error, returning no partial graph.
    ///
    /// # Errors
    /// Surfaces every parse- and build-phase error unchanged: syntax,
    /// unresolved type/property, invalid assignment, conversion,
    /// instantiation, and duplicate-name errors.
    pub fn load(&self, markup: &str) -> Result<ConstructionResult> {
        let tree = parse(markup, &self.directory)?;

        let mut ctx = match &self.lifecycle {
            Some(lifecycle) => BuildContext::with_lifecycle(lifecycle.as_ref()),
            None => BuildContext::new(),
        };
        let builder = ObjectBuilder::new(&self.creator, &self.converter);
        let root = builder.build(tree.root(), &mut ctx)?;

        Ok(ConstructionResult {
            root,
            namescope: ctx.namescope().snapshot(),
        })
    }
}

impl std::fmt::Debug for Loader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Loader")
            .field("directory", &self.directory)
            .field("converter", &self.converter)
            .field("lifecycle", &self.lifecycle.is_some())
            .finish()
    }
}
