//! SQL dialect contract.
//!
//! Different engines spell the same SQL differently. This module provides
//! the trait a host consults for engine-specific type names, SQL fragments,
//! and feature support, plus a [`GenericDialect`] baseline implementation.

mod generic;

pub use generic::GenericDialect;

use crate::capabilities::Capabilities;
use crate::error::Result;
use crate::function::SqlFunction;
use crate::types::TypeCode;

/// Inputs for rendering an `add constraint … foreign key` clause.
///
/// Borrowed parameter pack so call sites can pass slices straight from the
/// host's schema model.
#[derive(Debug, Clone, Copy)]
pub struct ForeignKeyDefinition<'a> {
    /// Constraint name, already quoted if the host wants quoting.
    pub constraint_name: &'a str,
    /// Referencing columns on the altered table.
    pub columns: &'a [&'a str],
    /// Table the constraint points at.
    pub referenced_table: &'a str,
    /// Referenced columns; ignored when `references_primary_key` is true.
    pub referenced_columns: &'a [&'a str],
    /// When true the constraint targets the referenced table's primary key
    /// and the rendered clause omits the referenced column list.
    pub references_primary_key: bool,
}

/// Trait for engine-specific SQL generation behavior.
///
/// Hosts hold a dialect for the lifetime of the process and query it from
/// any thread; implementations must be immutable after construction. Only
/// [`name`](Dialect::name) and [`column_type`](Dialect::column_type) are
/// required — every other method defaults to the behavior of a conservative
/// ANSI-flavored engine.
pub trait Dialect: Send + Sync {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns the engine type name used to declare a column of the given
    /// abstract type.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedType`](crate::DialectError::UnsupportedType)
    /// when the engine has no type for the code.
    fn column_type(&self, code: TypeCode) -> Result<&str>;

    /// Returns the engine's feature-support flags.
    fn capabilities(&self) -> Capabilities {
        Capabilities::ansi()
    }

    /// Looks up a portable function by name, ignoring ASCII case.
    ///
    /// `None` means the engine has no special spelling and the host should
    /// render the call generically.
    fn function(&self, _name: &str) -> Option<&SqlFunction> {
        None
    }

    /// Renders a portable function call with pre-rendered argument
    /// fragments, or `None` when [`function`](Dialect::function) has no
    /// entry for the name.
    fn render_function(&self, name: &str, args: &[&str]) -> Option<String> {
        self.function(name)
            .map(|function| function.form.render(args))
    }

    /// Returns the identifier quote character (e.g., `"` for standard SQL,
    /// `` ` `` for MySQL).
    fn identifier_quote(&self) -> char {
        '"'
    }

    /// Quotes an identifier with the dialect's quote character.
    fn quote_identifier(&self, name: &str) -> String {
        let quote = self.identifier_quote();
        format!("{quote}{name}{quote}")
    }

    /// Returns the declaration fragment for an auto-generated key column.
    ///
    /// Empty at the ANSI baseline; consult
    /// [`Capabilities::identity_columns`] before using it. When
    /// [`Capabilities::data_type_in_identity_column`] is false the fragment
    /// already names the column type and the host must not append one.
    fn identity_column_declaration(&self) -> &str {
        ""
    }

    /// Returns the statement that retrieves the key generated by the most
    /// recent insert on the current connection, or `""` when the engine has
    /// no such statement.
    fn identity_select(&self) -> &str {
        ""
    }

    /// Appends the engine's row-limiting clause to a rendered query.
    ///
    /// The returned SQL carries positional placeholders for the host to
    /// bind in clause order. At the ANSI baseline (no limit support, see
    /// [`Capabilities::limit`]) the query is returned unchanged.
    fn limit_clause(&self, query: &str, _has_offset: bool) -> String {
        query.to_string()
    }

    /// Returns the statement prefix for creating a temporary table, up to
    /// but not including the table name.
    fn create_temporary_table_prefix(&self) -> &str {
        "create temporary table"
    }

    /// Returns the `alter table` clause keyword(s) for adding a column.
    fn add_column_clause(&self) -> &str {
        "add column"
    }

    /// Returns the pessimistic-locking clause appended to a query, with
    /// its leading space, or `""` when the engine has no row-locking SQL.
    fn for_update_clause(&self) -> &str {
        " for update"
    }

    /// Returns the statement that selects the engine's current timestamp,
    /// or `""` when the engine has none (see
    /// [`Capabilities::current_timestamp_selection`]).
    fn current_timestamp_select(&self) -> &str {
        ""
    }

    /// Renders the `alter table` clause that adds a foreign key
    /// constraint, without the leading `alter table <name>` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedOperation`](crate::DialectError::UnsupportedOperation)
    /// when the engine cannot add foreign keys to existing tables.
    fn add_foreign_key_clause(&self, definition: &ForeignKeyDefinition<'_>) -> Result<String> {
        let clause = format!(
            "add constraint {} foreign key ({}) references {}",
            definition.constraint_name,
            definition.columns.join(", "),
            definition.referenced_table
        );
        if definition.references_primary_key {
            Ok(clause)
        } else {
            Ok(format!(
                "{clause} ({})",
                definition.referenced_columns.join(", ")
            ))
        }
    }

    /// Renders the `alter table` clause that drops a foreign key
    /// constraint, without the leading `alter table <name>` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedOperation`](crate::DialectError::UnsupportedOperation)
    /// when the engine cannot drop constraints.
    fn drop_foreign_key_clause(&self, constraint_name: &str) -> Result<String> {
        Ok(format!("drop constraint {constraint_name}"))
    }

    /// Renders the `alter table` clause that adds a primary key
    /// constraint, without the leading `alter table <name>` prefix.
    ///
    /// # Errors
    ///
    /// Returns [`DialectError::UnsupportedOperation`](crate::DialectError::UnsupportedOperation)
    /// when the engine cannot add primary keys to existing tables.
    fn add_primary_key_clause(&self, constraint_name: &str, columns: &[&str]) -> Result<String> {
        Ok(format!(
            "add constraint {constraint_name} primary key ({})",
            columns.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Trait default behavior, probed through a minimal implementation
    // ==========================================================================

    struct AnsiProbe;

    impl Dialect for AnsiProbe {
        fn name(&self) -> &'static str {
            "ansi-probe"
        }

        fn column_type(&self, code: TypeCode) -> Result<&str> {
            Ok(code.ansi_name())
        }
    }

    #[test]
    fn test_defaults_match_ansi_baseline() {
        let dialect = AnsiProbe;
        assert_eq!(dialect.capabilities(), Capabilities::ansi());
        assert_eq!(dialect.identifier_quote(), '"');
        assert_eq!(dialect.quote_identifier("order"), "\"order\"");
        assert_eq!(dialect.identity_column_declaration(), "");
        assert_eq!(dialect.identity_select(), "");
        assert_eq!(
            dialect.create_temporary_table_prefix(),
            "create temporary table"
        );
        assert_eq!(dialect.add_column_clause(), "add column");
        assert_eq!(dialect.for_update_clause(), " for update");
        assert_eq!(dialect.current_timestamp_select(), "");
    }

    #[test]
    fn test_default_limit_clause_returns_query_unchanged() {
        let dialect = AnsiProbe;
        assert_eq!(
            dialect.limit_clause("select * from users", true),
            "select * from users"
        );
        assert_eq!(
            dialect.limit_clause("select * from users", false),
            "select * from users"
        );
    }

    #[test]
    fn test_default_function_lookup_is_empty() {
        let dialect = AnsiProbe;
        assert!(dialect.function("concat").is_none());
        assert!(dialect.render_function("concat", &["a", "b"]).is_none());
    }

    #[test]
    fn test_default_add_foreign_key_clause() {
        let dialect = AnsiProbe;
        let definition = ForeignKeyDefinition {
            constraint_name: "fk_orders_user",
            columns: &["user_id"],
            referenced_table: "users",
            referenced_columns: &["id"],
            references_primary_key: false,
        };
        assert_eq!(
            dialect.add_foreign_key_clause(&definition).unwrap(),
            "add constraint fk_orders_user foreign key (user_id) references users (id)"
        );
    }

    #[test]
    fn test_foreign_key_to_primary_key_omits_column_list() {
        let dialect = AnsiProbe;
        let definition = ForeignKeyDefinition {
            constraint_name: "fk_orders_user",
            columns: &["user_id"],
            referenced_table: "users",
            referenced_columns: &["id"],
            references_primary_key: true,
        };
        assert_eq!(
            dialect.add_foreign_key_clause(&definition).unwrap(),
            "add constraint fk_orders_user foreign key (user_id) references users"
        );
    }

    #[test]
    fn test_default_composite_key_clauses() {
        let dialect = AnsiProbe;
        let definition = ForeignKeyDefinition {
            constraint_name: "fk_lines_order",
            columns: &["order_id", "order_line"],
            referenced_table: "orders",
            referenced_columns: &["id", "line"],
            references_primary_key: false,
        };
        assert_eq!(
            dialect.add_foreign_key_clause(&definition).unwrap(),
            "add constraint fk_lines_order foreign key (order_id, order_line) \
             references orders (id, line)"
        );
        assert_eq!(
            dialect.drop_foreign_key_clause("fk_lines_order").unwrap(),
            "drop constraint fk_lines_order"
        );
        assert_eq!(
            dialect
                .add_primary_key_clause("pk_lines", &["order_id", "order_line"])
                .unwrap(),
            "add constraint pk_lines primary key (order_id, order_line)"
        );
    }

    #[test]
    fn test_dialect_is_object_safe() {
        let dialect: &dyn Dialect = &AnsiProbe;
        assert_eq!(dialect.name(), "ansi-probe");
        assert_eq!(dialect.column_type(TypeCode::Integer).unwrap(), "integer");
    }
}
