//! Error types for style-tree construction and queries.

use thiserror::Error;

/// Result type alias for cslkit-style operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while declaring schemas or building the node tree.
///
/// All of these indicate a malformed style tree (or a malformed schema
/// declaration) upstream; none are recoverable by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A schema for this kind was already declared.
    #[error("schema for node kind '{kind}' is already declared")]
    SchemaRedeclared { kind: String },

    /// An attribute key outside the kind's declared schema was supplied.
    #[error("attribute '{attribute}' is not declared for node kind '{kind}'")]
    UndeclaredAttribute { kind: String, attribute: String },

    /// A child was attached under a role the kind does not declare.
    #[error("child role '{role}' is not declared for node kind '{kind}'")]
    UndeclaredChildRole { kind: String, role: String },

    /// A child of the wrong kind was attached under a declared role.
    #[error("role '{role}' of '{kind}' expects '{expected}' children, found '{found}'")]
    ChildKindMismatch {
        kind: String,
        role: String,
        expected: String,
        found: String,
    },

    /// A node of an unexpected kind was handed to a kind-specific view.
    #[error("expected a '{expected}' node, found '{found}'")]
    WrongNodeKind { expected: String, found: String },

    /// An operation that is intentionally left unimplemented.
    #[error("'{operation}' is not implemented")]
    NotImplemented { operation: &'static str },
}
