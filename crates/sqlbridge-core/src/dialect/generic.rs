//! Generic SQL dialect.

use super::Dialect;
use crate::error::Result;
use crate::types::TypeCode;

/// A generic dialect using ANSI SQL spellings and baseline capabilities.
///
/// Every abstract type code maps to its ANSI name and every fragment comes
/// from the trait defaults. Useful as a placeholder before an engine is
/// chosen and as the reference point dialect tests compare against.
#[derive(Debug, Default, Clone, Copy)]
pub struct GenericDialect;

impl GenericDialect {
    /// Creates a new generic dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for GenericDialect {
    fn name(&self) -> &'static str {
        "generic"
    }

    fn column_type(&self, code: TypeCode) -> Result<&str> {
        Ok(code.ansi_name())
    }
}
