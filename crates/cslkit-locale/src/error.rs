//! Error types for locale resolution.

use thiserror::Error;

/// Result type alias for cslkit-locale operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving or querying locales.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A locale identifier did not match the expected tag syntax
    /// (`xx`, `xx-YY`, or `-YY`).
    #[error("not a valid locale tag: '{tag}'")]
    InvalidLocaleFormat { tag: String },

    /// An operation that is intentionally left unimplemented.
    #[error("'{operation}' is not implemented")]
    NotImplemented { operation: &'static str },
}
