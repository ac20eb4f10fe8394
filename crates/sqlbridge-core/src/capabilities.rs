//! Engine capability flags.
//!
//! Hosts consult a [`Capabilities`] record before generating SQL or planning
//! schema changes, instead of probing each engine quirk ad hoc. The record
//! is a plain value: dialects build theirs as a struct literal over the
//! [`Capabilities::ansi`] baseline and hand out copies.

use serde::{Deserialize, Serialize};

/// Feature-support flags declared by a dialect.
///
/// All fields are public so hosts can branch on them directly. The
/// [`Capabilities::ansi`] constructor gives the baseline of a conservative
/// ANSI-flavored engine; concrete dialects override the fields where their
/// engine differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    /// Engine can declare auto-generated key columns. When false, hosts
    /// must use another key-generation strategy (sequences, application
    /// assignment).
    pub identity_columns: bool,

    /// Identity column declarations carry an explicit data type token.
    /// When false, the fragment from
    /// [`Dialect::identity_column_declaration`](crate::Dialect::identity_column_declaration)
    /// already names the type and the host must not append one.
    pub data_type_in_identity_column: bool,

    /// Engine supports limiting result rows in SQL. When false,
    /// [`Dialect::limit_clause`](crate::Dialect::limit_clause) returns the
    /// query unchanged and the host truncates rows itself.
    pub limit: bool,

    /// Engine supports temporary tables.
    pub temporary_tables: bool,

    /// Temporary tables must be dropped explicitly after use. When false,
    /// the engine scopes them to the connection and the host leaves them
    /// alone.
    pub drop_temporary_table_after_use: bool,

    /// Engine supports `union all` between selects.
    pub union_all: bool,

    /// Engine supports general `alter table` statements. When false, hosts
    /// rebuild tables instead of altering them in place.
    pub alter_table: bool,

    /// Constraints must be dropped before their table is dropped.
    pub drop_constraints: bool,

    /// `drop table` accepts an `if exists` guard before the table name.
    pub if_exists_before_table_name: bool,

    /// Foreign keys may declare `on delete cascade`.
    pub cascade_delete: bool,

    /// Rows from an outer join can be locked with a `for update` clause.
    pub outer_join_for_update: bool,

    /// Engine can report the current timestamp through a plain select
    /// (see [`Dialect::current_timestamp_select`](crate::Dialect::current_timestamp_select)).
    pub current_timestamp_selection: bool,

    /// The current-timestamp retrieval is a callable statement rather than
    /// a plain select.
    pub current_timestamp_callable: bool,
}

impl Capabilities {
    /// Baseline flags of a conservative ANSI-flavored engine.
    #[must_use]
    pub const fn ansi() -> Self {
        Self {
            identity_columns: false,
            data_type_in_identity_column: true,
            limit: false,
            temporary_tables: false,
            drop_temporary_table_after_use: true,
            union_all: true,
            alter_table: true,
            drop_constraints: true,
            if_exists_before_table_name: false,
            cascade_delete: true,
            outer_join_for_update: true,
            current_timestamp_selection: false,
            current_timestamp_callable: false,
        }
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::ansi()
    }
}
