//! # sqlbridge-sqlite
//!
//! SQLite dialect adapter for `sqlbridge-core`.
//!
//! # How SQLite differs from other dialects
//!
//! - **[Type affinity]**: SQLite derives a column's affinity from its
//!   declared type name rather than enforcing strict types. Declared names
//!   here keep the abstract code's spelling where possible; all binary
//!   codes collapse to `blob` and booleans are stored as `integer`.
//! - **[Rowid identity]**: an `integer primary key` column aliases the
//!   rowid, so identity columns are declared plain `integer` and the
//!   generated key is read back with `select last_insert_rowid()`. See
//!   [`last_insert_rowid`].
//! - **Row limiting**: `limit ? offset ?` with the limit placeholder
//!   first. See [LIMIT].
//! - **Limited [ALTER TABLE]**: columns can be added, but constraints
//!   cannot be added or dropped after table creation; those clause
//!   renderers fail with `UnsupportedOperation` instead of emitting SQL
//!   the engine would reject.
//! - **No row locking**: a writer locks the whole database, so the
//!   `for update` clause renders empty. See [locking].
//!
//! [Type affinity]: https://www.sqlite.org/datatype3.html
//! [Rowid identity]: https://www.sqlite.org/lang_createtable.html#rowid
//! [`last_insert_rowid`]: https://www.sqlite.org/lang_corefunc.html#last_insert_rowid
//! [LIMIT]: https://www.sqlite.org/lang_select.html#limitoffset
//! [ALTER TABLE]: https://www.sqlite.org/lang_altertable.html
//! [locking]: https://www.sqlite.org/lockingv3.html
//!
//! ## Example
//!
//! ```rust
//! use sqlbridge_core::{Dialect, TypeCode};
//! use sqlbridge_sqlite::SqliteDialect;
//!
//! let dialect = SqliteDialect::new();
//! assert_eq!(dialect.column_type(TypeCode::Boolean)?, "integer");
//! assert_eq!(
//!     dialect.limit_clause("select id from users", true),
//!     "select id from users limit ? offset ?"
//! );
//! assert!(!dialect.capabilities().alter_table);
//! # Ok::<(), sqlbridge_core::DialectError>(())
//! ```

mod dialect;

pub use dialect::SqliteDialect;
