//! Error types for the building model.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityRef;
use crate::kinds::{ComponentKind, ConnectionRole, EntityKind};

/// Result alias used across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for building model operations.
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

    /// Names the operation that failed, keeping any existing frames.
    #[must_use]
    pub fn in_operation(mut self, operation: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_operation(operation));
        self
    }

    /// Creates an entity not found error.
    #[must_use]
    pub fn entity_not_found(entity: impl Into<EntityRef>) -> Self {
        Self::new(ErrorKind::EntityNotFound(entity.into()))
    }

    /// Creates a stale entity reference error.
    #[must_use]
    pub fn stale_entity(entity: impl Into<EntityRef>) -> Self {
        Self::new(ErrorKind::StaleEntity(entity.into()))
    }

    /// Creates an invalid entity kind error.
    #[must_use]
    pub fn invalid_entity_kind(kind: EntityKind, expected: &'static str) -> Self {
        Self::new(ErrorKind::InvalidEntityKind { kind, expected })
    }

    /// Creates a disallowed inside entity error.
    #[must_use]
    pub fn disallowed_inside(kind: ComponentKind) -> Self {
        Self::new(ErrorKind::DisallowedInsideEntity(kind))
    }

    /// Creates a role conflict error.
    #[must_use]
    pub fn role_conflict(entity: EntityRef, requested: ConnectionRole, held: ConnectionRole) -> Self {
        Self::new(ErrorKind::RoleConflict {
            entity,
            requested,
            held,
        })
    }

    /// Creates a relationship not found error.
    #[must_use]
    pub fn relationship_not_found(from: impl Into<EntityRef>, to: impl Into<EntityRef>) -> Self {
        Self::new(ErrorKind::RelationshipNotFound {
            from: from.into(),
            to: to.into(),
        })
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
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
    /// Entity was not found in storage.
    #[error("entity not found: {0}")]
    EntityNotFound(EntityRef),

    /// Entity reference is stale (generation mismatch).
    #[error("stale entity reference: {0:?}")]
    StaleEntity(EntityRef),

    /// Entity kind is not admitted where it was offered.
    #[error("invalid entity kind: {kind} is not {expected}")]
    InvalidEntityKind {
        /// The kind that was offered.
        kind: EntityKind,
        /// Description of what is admitted.
        expected: &'static str,
    },

    /// A flow-blocking component was offered as an inside entity.
    #[error("{} cannot be inside a duct connection", .0.name())]
    DisallowedInsideEntity(ComponentKind),

    /// Entity already holds the opposite role in a duct connection.
    #[error("role conflict: {entity} is already a {held}, cannot add as {requested}")]
    RoleConflict {
        /// The conflicting entity.
        entity: EntityRef,
        /// The role that was requested.
        requested: ConnectionRole,
        /// The role already held.
        held: ConnectionRole,
    },

    /// A relationship to be removed does not exist.
    #[error("relationship not found: {from} -> {to}")]
    RelationshipNotFound {
        /// Owner side of the relationship.
        from: EntityRef,
        /// Target side of the relationship.
        to: EntityRef,
    },

    /// A record failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The public operation that failed.
    pub operation: Option<String>,
    /// Nested call frames, innermost first.
    pub frames: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Adds a call frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(operation) = &self.operation {
            write!(f, "in {operation}")?;
        }
        if !self.frames.is_empty() {
            writeln!(f)?;
            for frame in &self.frames {
                writeln!(f, "  at {frame}")?;
            }
        }
        Ok(())
    }
}
