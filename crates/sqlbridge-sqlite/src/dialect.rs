//! SQLite dialect implementation.

use sqlbridge_core::{
    Capabilities, Dialect, DialectError, ForeignKeyDefinition, FunctionForm,
    FunctionMapping, Result, SqlFunction, TypeCode, TypeMapping,
};
use tracing::debug;

/// Column type table.
///
/// SQLite derives a column's affinity from its declared type name, so most
/// declared names stay close to the abstract code. The exceptions: all
/// binary codes collapse to `blob`, and `bit`/`boolean` are declared
/// `integer` because SQLite has no boolean storage class.
const COLUMN_TYPES: &[(TypeCode, &str)] = &[
    (TypeCode::Bit, "integer"),
    (TypeCode::TinyInt, "tinyint"),
    (TypeCode::SmallInt, "smallint"),
    (TypeCode::Integer, "integer"),
    (TypeCode::BigInt, "bigint"),
    (TypeCode::Float, "float"),
    (TypeCode::Real, "real"),
    (TypeCode::Double, "double"),
    (TypeCode::Numeric, "numeric"),
    (TypeCode::Decimal, "decimal"),
    (TypeCode::Char, "char"),
    (TypeCode::Varchar, "varchar"),
    (TypeCode::LongVarchar, "longvarchar"),
    (TypeCode::Date, "date"),
    (TypeCode::Time, "time"),
    (TypeCode::Timestamp, "timestamp"),
    (TypeCode::Binary, "blob"),
    (TypeCode::VarBinary, "blob"),
    (TypeCode::LongVarBinary, "blob"),
    (TypeCode::Blob, "blob"),
    (TypeCode::Clob, "clob"),
    (TypeCode::Boolean, "integer"),
];

/// Portable functions with SQLite-specific spellings.
const FUNCTIONS: &[(&str, SqlFunction)] = &[
    (
        "concat",
        SqlFunction {
            form: FunctionForm::Infix {
                prefix: "",
                separator: "||",
                suffix: "",
            },
            returns: TypeCode::Varchar,
        },
    ),
    (
        "mod",
        SqlFunction {
            form: FunctionForm::Template("?1 % ?2"),
            returns: TypeCode::Integer,
        },
    ),
    (
        "substr",
        SqlFunction {
            form: FunctionForm::Named("substr"),
            returns: TypeCode::Varchar,
        },
    ),
    (
        "substring",
        SqlFunction {
            form: FunctionForm::Named("substr"),
            returns: TypeCode::Varchar,
        },
    ),
];

/// SQLite feature flags.
const SQLITE_CAPABILITIES: Capabilities = Capabilities {
    identity_columns: true,
    data_type_in_identity_column: false,
    limit: true,
    temporary_tables: true,
    drop_temporary_table_after_use: false,
    union_all: true,
    alter_table: false,
    drop_constraints: false,
    if_exists_before_table_name: true,
    cascade_delete: false,
    outer_join_for_update: false,
    current_timestamp_selection: true,
    current_timestamp_callable: false,
};

/// SQLite dialect.
///
/// Built once from fixed tables and immutable afterwards; share one
/// instance across threads for the life of the process.
#[derive(Debug, Clone)]
pub struct SqliteDialect {
    types: TypeMapping,
    functions: FunctionMapping,
}

impl SqliteDialect {
    /// Creates a new SQLite dialect.
    #[must_use]
    pub fn new() -> Self {
        let dialect = Self {
            types: TypeMapping::from_table(COLUMN_TYPES),
            functions: FunctionMapping::from_table(FUNCTIONS),
        };
        debug!(
            types = dialect.types.len(),
            functions = dialect.functions.len(),
            "Initialized SQLite dialect"
        );
        dialect
    }
}

impl Default for SqliteDialect {
    fn default() -> Self {
        Self::new()
    }
}

impl Dialect for SqliteDialect {
    fn name(&self) -> &'static str {
        "sqlite"
    }

    fn column_type(&self, code: TypeCode) -> Result<&str> {
        self.types.resolve(self.name(), code)
    }

    fn capabilities(&self) -> Capabilities {
        SQLITE_CAPABILITIES
    }

    fn function(&self, name: &str) -> Option<&SqlFunction> {
        self.functions.get(name)
    }

    fn identity_column_declaration(&self) -> &str {
        "integer" // rowid alias; carries the type, so no extra type token
    }

    fn identity_select(&self) -> &str {
        "select last_insert_rowid()"
    }

    /// Appends `limit ?` or `limit ? offset ?`.
    ///
    /// Placeholders bind in clause order: the limit value first, then the
    /// offset.
    fn limit_clause(&self, query: &str, has_offset: bool) -> String {
        if has_offset {
            format!("{query} limit ? offset ?")
        } else {
            format!("{query} limit ?")
        }
    }

    fn create_temporary_table_prefix(&self) -> &str {
        "create temporary table if not exists"
    }

    fn for_update_clause(&self) -> &str {
        "" // a writer locks the whole database; there is no row-locking SQL
    }

    fn current_timestamp_select(&self) -> &str {
        "select current_timestamp"
    }

    fn add_foreign_key_clause(&self, _definition: &ForeignKeyDefinition<'_>) -> Result<String> {
        Err(DialectError::UnsupportedOperation {
            dialect: self.name(),
            operation: "add foreign key",
        })
    }

    fn drop_foreign_key_clause(&self, _constraint_name: &str) -> Result<String> {
        Err(DialectError::UnsupportedOperation {
            dialect: self.name(),
            operation: "drop foreign key",
        })
    }

    fn add_primary_key_clause(&self, _constraint_name: &str, _columns: &[&str]) -> Result<String> {
        Err(DialectError::UnsupportedOperation {
            dialect: self.name(),
            operation: "add primary key",
        })
    }
}
