//! Type and property descriptors.
//!
//! Descriptors are hand-written adapters between the loader's untyped
//! world ([`Value`], [`ObjectHandle`]) and concrete host types. They
//! replace runtime reflection: each property exposes its capabilities as
//! closures, and whether it is scalar or appendable is decided once, at
//! registration time.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use trellis_foundation::{Error, ObjectHandle, Result, Type, Value};

/// Setter or appender capability: writes a value into an instance.
pub type WriteFn = dyn Fn(&ObjectHandle, Value) -> Result<()> + Send + Sync;

/// Getter capability: reads a property's current value from an instance.
pub type ReadFn = dyn Fn(&ObjectHandle) -> Result<Value> + Send + Sync;

/// Constructor capability: allocates a fresh default instance.
pub type ConstructFn = dyn Fn() -> ObjectHandle + Send + Sync;

/// Whether a property holds one value or appends many.
///
/// Decided when the descriptor is registered, never re-derived per
/// assignment. A string-typed property is always `Scalar` even though a
/// string is iterable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyKind {
    /// Exactly one value; later assignments overwrite.
    Scalar,
    /// An existing collection instance that child values append into.
    Appendable,
}

/// A settable/gettable property on a registered markup type.
pub struct PropertyDescriptor {
    name: String,
    value_type: Type,
    kind: PropertyKind,
    set: Option<Arc<WriteFn>>,
    get: Option<Arc<ReadFn>>,
    append: Option<Arc<WriteFn>>,
}

impl PropertyDescriptor {
    /// Creates a scalar property backed by a typed setter.
    ///
    /// The setter receives the host instance already downcast to `T`.
    pub fn scalar<T, F>(name: impl Into<String>, value_type: Type, set: F) -> Self
    where
        T: Any,
        F: Fn(&mut T, Value) -> Result<()> + Send + Sync + 'static,
    {
        let set: Arc<WriteFn> = Arc::new(move |instance: &ObjectHandle, value: Value| {
            instance.with_mut(|host: &mut T| set(host, value))?
        });
        Self {
            name: name.into(),
            value_type,
            kind: PropertyKind::Scalar,
            set: Some(set),
            get: None,
            append: None,
        }
    }

    /// Creates an appendable property backed by a typed appender.
    ///
    /// The appender must push into the collection already held by the
    /// instance; it never replaces the collection. The host type's
    /// constructor is responsible for initializing that collection.
    pub fn appendable<T, F>(name: impl Into<String>, value_type: Type, append: F) -> Self
    where
        T: Any,
        F: Fn(&mut T, Value) -> Result<()> + Send + Sync + 'static,
    {
        let append: Arc<WriteFn> = Arc::new(move |instance: &ObjectHandle, value: Value| {
            instance.with_mut(|host: &mut T| append(host, value))?
        });
        Self {
            name: name.into(),
            value_type,
            kind: PropertyKind::Appendable,
            set: None,
            get: None,
            append: Some(append),
        }
    }

    /// Adds a typed getter capability.
    #[must_use]
    pub fn with_getter<T, F>(mut self, get: F) -> Self
    where
        T: Any,
        F: Fn(&T) -> Value + Send + Sync + 'static,
    {
        let get: Arc<ReadFn> =
            Arc::new(move |instance: &ObjectHandle| instance.with(|host: &T| get(host)));
        self.get = Some(get);
        self
    }

    /// Returns the property name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the declared value type.
    #[must_use]
    pub fn value_type(&self) -> &Type {
        &self.value_type
    }

    /// Returns whether this property is scalar or appendable.
    #[must_use]
    pub const fn kind(&self) -> PropertyKind {
        self.kind
    }

    /// Returns true if the property can be written with a single value.
    #[must_use]
    pub fn is_settable(&self) -> bool {
        self.set.is_some()
    }

    /// Returns true if the property's current value can be read.
    #[must_use]
    pub fn is_gettable(&self) -> bool {
        self.get.is_some()
    }

    /// Writes `value` into `instance`.
    ///
    /// # Errors
    /// Fails if the property has no setter or the setter rejects the value.
    pub fn set(&self, instance: &ObjectHandle, value: Value) -> Result<()> {
        let set = self
            .set
            .as_ref()
            .ok_or_else(|| Error::internal(format!("property {} has no setter", self.name)))?;
        set(instance, value)
    }

    /// Reads the property's current value from `instance`.
    ///
    /// # Errors
    /// Fails if the property has no getter.
    pub fn get(&self, instance: &ObjectHandle) -> Result<Value> {
        let get = self
            .get
            .as_ref()
            .ok_or_else(|| Error::internal(format!("property {} has no getter", self.name)))?;
        get(instance)
    }

    /// Appends `value` into the collection already held by `instance`.
    ///
    /// # Errors
    /// Fails if the property is not appendable or the appender rejects
    /// the value.
    pub fn append(&self, instance: &ObjectHandle, value: Value) -> Result<()> {
        let append = self
            .append
            .as_ref()
            .ok_or_else(|| Error::internal(format!("property {} is not appendable", self.name)))?;
        append(instance, value)
    }
}

impl fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("value_type", &self.value_type)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// A registered markup type: constructor plus property table.
pub struct TypeDescriptor {
    namespace: String,
    name: String,
    construct: Option<Arc<ConstructFn>>,
    properties: HashMap<String, Arc<PropertyDescriptor>>,
    content_property: Option<String>,
    name_property: Option<String>,
}

impl TypeDescriptor {
    /// Creates a descriptor for `name` in `namespace` with no capabilities.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            construct: None,
            properties: HashMap::new(),
            content_property: None,
            name_property: None,
        }
    }

    /// Sets an explicit constructor closure.
    #[must_use]
    pub fn with_constructor<F>(mut self, construct: F) -> Self
    where
        F: Fn() -> ObjectHandle + Send + Sync + 'static,
    {
        self.construct = Some(Arc::new(construct));
        self
    }

    /// Constructs instances via `T::default()`.
    ///
    /// The `Default` impl must leave every appendable property holding an
    /// empty collection; the builder appends into it and never allocates
    /// a collection itself.
    #[must_use]
    pub fn with_default<T: Any + Default>(self) -> Self {
        self.with_constructor(|| ObjectHandle::new(T::default()))
    }

    /// Registers a property.
    #[must_use]
    pub fn with_property(mut self, property: PropertyDescriptor) -> Self {
        self.properties
            .insert(property.name.clone(), Arc::new(property));
        self
    }

    /// Declares the default content property targeted by element children.
    #[must_use]
    pub fn with_content_property(mut self, name: impl Into<String>) -> Self {
        self.content_property = Some(name.into());
        self
    }

    /// Declares the property whose attribute also names the instance in
    /// the namescope.
    #[must_use]
    pub fn with_name_property(mut self, name: impl Into<String>) -> Self {
        self.name_property = Some(name.into());
        self
    }

    /// Returns the namespace this type was registered under.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the local markup name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the constructor, if one was registered.
    #[must_use]
    pub fn constructor(&self) -> Option<&Arc<ConstructFn>> {
        self.construct.as_ref()
    }

    /// Looks up a property by name.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Arc<PropertyDescriptor>> {
        self.properties.get(name)
    }

    /// Returns the content property descriptor, if one is declared.
    #[must_use]
    pub fn content_property(&self) -> Option<&Arc<PropertyDescriptor>> {
        self.content_property
            .as_deref()
            .and_then(|name| self.properties.get(name))
    }

    /// Returns the name of the namescope-declaring property, if any.
    #[must_use]
    pub fn name_property(&self) -> Option<&str> {
        self.name_property.as_deref()
    }
}

impl fmt::Debug for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("namespace", &self.namespace)
            .field("name", &self.name)
            .field("properties", &self.properties.len())
            .finish_non_exhaustive()
    }
}
