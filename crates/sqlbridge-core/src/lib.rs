//! # sqlbridge-core
//!
//! The dialect contract between a persistence host and a SQL engine.
//!
//! Hosts generate SQL from an abstract model; engines disagree on type
//! names, clause spellings, and feature support. This crate provides:
//! - The [`Dialect`] trait the host's SQL-generation layer consults
//! - Abstract [`TypeCode`]s with immutable [`TypeMapping`] and
//!   [`FunctionMapping`] tables built once at dialect construction
//! - A [`Capabilities`] record of engine feature flags
//! - [`GenericDialect`], an ANSI-flavored baseline implementation
//!
//! Engine adapters (e.g. `sqlbridge-sqlite`) implement [`Dialect`] in their
//! own crates.
//!
//! ## Querying a dialect
//!
//! ```rust
//! use sqlbridge_core::{Dialect, GenericDialect, TypeCode};
//!
//! let dialect = GenericDialect::new();
//! assert_eq!(dialect.column_type(TypeCode::Varchar)?, "varchar");
//! assert_eq!(dialect.quote_identifier("order"), "\"order\"");
//! assert!(!dialect.capabilities().identity_columns);
//! # Ok::<(), sqlbridge_core::DialectError>(())
//! ```
//!
//! ## Implementing a dialect
//!
//! Only `name` and `column_type` are required; every other method defaults
//! to conservative ANSI behavior:
//!
//! ```rust
//! use sqlbridge_core::{Dialect, Result, TypeCode};
//!
//! struct MemoryDialect;
//!
//! impl Dialect for MemoryDialect {
//!     fn name(&self) -> &'static str {
//!         "memory"
//!     }
//!
//!     fn column_type(&self, code: TypeCode) -> Result<&str> {
//!         Ok(code.ansi_name())
//!     }
//!
//!     fn limit_clause(&self, query: &str, has_offset: bool) -> String {
//!         if has_offset {
//!             format!("{query} limit ? offset ?")
//!         } else {
//!             format!("{query} limit ?")
//!         }
//!     }
//! }
//!
//! let dialect = MemoryDialect;
//! assert_eq!(
//!     dialect.limit_clause("select * from events", false),
//!     "select * from events limit ?"
//! );
//! ```

pub mod capabilities;
pub mod dialect;
pub mod error;
pub mod function;
pub mod types;

pub use capabilities::Capabilities;
pub use dialect::{Dialect, ForeignKeyDefinition, GenericDialect};
pub use error::{DialectError, Result};
pub use function::{FunctionForm, FunctionMapping, SqlFunction};
pub use types::{TypeCode, TypeMapping};
