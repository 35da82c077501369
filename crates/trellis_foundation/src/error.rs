//! Error types for the Trellis loader.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! Every failure during parse or build surfaces as one of these; the
//! first error aborts the whole load and no partial graph is returned.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for Trellis operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates a syntax error at the given source position.
    #[must_use]
    pub fn syntax(message: impl Into<String>, line: u32, column: u32, context: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax {
            message: message.into(),
            line,
            column,
            context: context.into(),
        })
    }

    /// Creates an unresolved-type error.
    #[must_use]
    pub fn unresolved_type(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedType {
            namespace: namespace.into(),
            name: name.into(),
        })
    }

    /// Creates an unresolved-property error.
    #[must_use]
    pub fn unresolved_property(type_name: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnresolvedProperty {
            type_name: type_name.into(),
            property: property.into(),
        })
    }

    /// Creates an invalid-assignment error.
    #[must_use]
    pub fn invalid_assignment(property: impl Into<String>, fault: AssignmentFault) -> Self {
        Self::new(ErrorKind::InvalidAssignment {
            property: property.into(),
            fault,
        })
    }

    /// Creates a conversion error.
    #[must_use]
    pub fn conversion(target: Type, literal: impl Into<String>) -> Self {
        Self::new(ErrorKind::Conversion {
            target,
            literal: literal.into(),
        })
    }

    /// Creates an instantiation error.
    #[must_use]
    pub fn instantiation(type_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Instantiation {
            type_name: type_name.into(),
            message: message.into(),
        })
    }

    /// Creates a duplicate-name error.
    #[must_use]
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::DuplicateName(name.into()))
    }

    /// Creates a type-mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates a downcast error for a failed host-type access.
    #[must_use]
    pub fn downcast(expected: &'static str) -> Self {
        Self::new(ErrorKind::Downcast { expected })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Malformed markup text.
    #[error("syntax error at {line}:{column}: {message}")]
    Syntax {
        /// Description of the syntax error.
        message: String,
        /// Line number (1-indexed).
        line: u32,
        /// Column number (1-indexed).
        column: u32,
        /// The source line where the error occurred.
        context: String,
    },

    /// Element name could not be mapped through the type directory.
    #[error("unresolved type: {name} in namespace \"{namespace}\"")]
    UnresolvedType {
        /// The resolved namespace of the element.
        namespace: String,
        /// The local element name.
        name: String,
    },

    /// Attribute or property name is not declared on the owning type.
    #[error("unresolved property: {property} on type {type_name}")]
    UnresolvedProperty {
        /// The owning markup type.
        type_name: String,
        /// The property name that was not found.
        property: String,
    },

    /// A property assignment holds both a source value and children,
    /// or neither.
    #[error("invalid assignment to {property}: {fault}")]
    InvalidAssignment {
        /// The property being assigned.
        property: String,
        /// Which side of the exactly-one-of invariant was violated.
        fault: AssignmentFault,
    },

    /// A literal could not be converted to its declared target type.
    #[error("cannot convert \"{literal}\" to {target}")]
    Conversion {
        /// The declared target type.
        target: Type,
        /// The literal text that failed to convert.
        literal: String,
    },

    /// A type has no usable construction path.
    #[error("cannot instantiate {type_name}: {message}")]
    Instantiation {
        /// The markup type that could not be constructed.
        type_name: String,
        /// Why construction failed.
        message: String,
    },

    /// A markup-declared name was registered twice in one build.
    #[error("duplicate name: {0}")]
    DuplicateName(String),

    /// A value had the wrong type for its target.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// An object handle did not hold the expected host type.
    #[error("instance is not a {expected}")]
    Downcast {
        /// The host type that was requested.
        expected: &'static str,
    },

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Which side of the exactly-one-of invariant an assignment violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssignmentFault {
    /// Both a source value and children were present.
    BothPresent,
    /// Neither a source value nor children were present.
    NeitherPresent,
}

impl fmt::Display for AssignmentFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BothPresent => write!(f, "source value and children both present"),
            Self::NeitherPresent => write!(f, "neither source value nor children present"),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Source document or element name.
    pub source: Option<String>,
    /// Line number in source.
    pub line: Option<usize>,
    /// Column number in source.
    pub column: Option<usize>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source location.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the line and column.
    #[must_use]
    pub fn with_position(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let (Some(line), Some(col)) = (self.line, self.column) {
            write!(f, ":{line}:{col}")?;
        }
        Ok(())
    }
}
