//! Abstract column type codes and the per-engine type name mapping.
//!
//! Hosts describe columns with [`TypeCode`]s; a dialect owns a
//! [`TypeMapping`] that turns each code into the literal type name its
//! engine expects in DDL.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, Result};

/// Abstract column type identifiers understood by every dialect.
///
/// The set is fixed; dialects may map any subset of it. Codes a dialect
/// leaves unmapped surface as [`DialectError::UnsupportedType`] when
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TypeCode {
    /// Single bit.
    Bit,
    /// Tiny integer (8-bit).
    TinyInt,
    /// Small integer (16-bit).
    SmallInt,
    /// Integer (32-bit).
    Integer,
    /// Big integer (64-bit).
    BigInt,
    /// Floating point with implementation-defined precision.
    Float,
    /// Floating point (single precision).
    Real,
    /// Floating point (double precision).
    Double,
    /// Exact numeric with precision and scale.
    Numeric,
    /// Exact numeric (alias family of NUMERIC).
    Decimal,
    /// Fixed-length character string.
    Char,
    /// Variable-length character string.
    Varchar,
    /// Long variable-length character string.
    LongVarchar,
    /// Date only.
    Date,
    /// Time only.
    Time,
    /// Date and time.
    Timestamp,
    /// Fixed-length binary.
    Binary,
    /// Variable-length binary.
    VarBinary,
    /// Long variable-length binary.
    LongVarBinary,
    /// Binary large object.
    Blob,
    /// Character large object.
    Clob,
    /// Boolean.
    Boolean,
}

impl TypeCode {
    /// Every type code, in declaration order.
    pub const ALL: [Self; 22] = [
        Self::Bit,
        Self::TinyInt,
        Self::SmallInt,
        Self::Integer,
        Self::BigInt,
        Self::Float,
        Self::Real,
        Self::Double,
        Self::Numeric,
        Self::Decimal,
        Self::Char,
        Self::Varchar,
        Self::LongVarchar,
        Self::Date,
        Self::Time,
        Self::Timestamp,
        Self::Binary,
        Self::VarBinary,
        Self::LongVarBinary,
        Self::Blob,
        Self::Clob,
        Self::Boolean,
    ];

    /// Returns the lowercase ANSI-flavored name of the code.
    ///
    /// This is the name a by-the-book engine would accept; dialects with
    /// their own spellings map the code through a [`TypeMapping`] instead.
    #[must_use]
    pub const fn ansi_name(self) -> &'static str {
        match self {
            Self::Bit => "bit",
            Self::TinyInt => "tinyint",
            Self::SmallInt => "smallint",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Float => "float",
            Self::Real => "real",
            Self::Double => "double",
            Self::Numeric => "numeric",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::Varchar => "varchar",
            Self::LongVarchar => "longvarchar",
            Self::Date => "date",
            Self::Time => "time",
            Self::Timestamp => "timestamp",
            Self::Binary => "binary",
            Self::VarBinary => "varbinary",
            Self::LongVarBinary => "longvarbinary",
            Self::Blob => "blob",
            Self::Clob => "clob",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ansi_name())
    }
}

/// Immutable mapping from [`TypeCode`] to an engine's literal type name.
///
/// Built once from a fixed table at dialect construction and never mutated
/// afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeMapping {
    entries: HashMap<TypeCode, &'static str>,
}

impl TypeMapping {
    /// Builds the mapping from a table of `(code, type name)` rows.
    ///
    /// Keys are expected to be unique; a duplicated code keeps the last
    /// row of the table.
    #[must_use]
    pub fn from_table(table: &[(TypeCode, &'static str)]) -> Self {
        Self {
            entries: table.iter().copied().collect(),
        }
    }

    /// Looks up the engine type name for a code.
    #[must_use]
    pub fn get(&self, code: TypeCode) -> Option<&'static str> {
        self.entries.get(&code).copied()
    }

    /// Looks up the engine type name for a code, failing loudly when the
    /// code has no mapping.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedType`] naming `dialect` when
    /// `code` is not in the table.
    pub fn resolve(&self, dialect: &'static str, code: TypeCode) -> Result<&'static str> {
        self.get(code)
            .ok_or(DialectError::UnsupportedType { dialect, code })
    }

    /// Returns the number of mapped codes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the mapping is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
