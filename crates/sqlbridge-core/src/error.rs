//! Error types for dialect queries.

use crate::types::TypeCode;

/// Errors a dialect can report to the host framework.
///
/// Both kinds are fatal configuration/schema errors: there is no I/O behind
/// a dialect and nothing to retry. Hosts are expected to surface them, not
/// to fall back to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DialectError {
    /// The abstract type code has no mapping on this engine.
    #[error("no column type mapping for {code} in the {dialect} dialect")]
    UnsupportedType {
        /// Dialect that was asked.
        dialect: &'static str,
        /// The unmapped code.
        code: TypeCode,
    },

    /// The DDL operation has no syntax on this engine.
    #[error("no {operation} syntax in the {dialect} dialect")]
    UnsupportedOperation {
        /// Dialect that was asked.
        dialect: &'static str,
        /// The operation with no equivalent, e.g. `"add foreign key"`.
        operation: &'static str,
    },
}

/// Result type for dialect queries.
pub type Result<T> = std::result::Result<T, DialectError>;
