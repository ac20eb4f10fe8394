//! Contract tests for the SQLite dialect.
//!
//! These tests pin the exact strings hosts build SQL from:
//! - The full column type table
//! - Identity, limit, temporary table, and locking fragments
//! - The complete capability record, including its serialized report
//! - Concurrent reads through a shared reference

use sqlbridge_core::{Dialect, TypeCode};
use sqlbridge_sqlite::SqliteDialect;

// =============================================================================
// Test: column type table
// =============================================================================

#[test]
fn test_full_column_type_table() {
    let expected = [
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
    assert_eq!(expected.len(), TypeCode::ALL.len(), "table covers every code");

    let dialect = SqliteDialect::new();
    for (code, name) in expected {
        assert_eq!(dialect.column_type(code).unwrap(), name, "type name for {code:?}");
    }
}

// =============================================================================
// Test: SQL fragments
// =============================================================================

#[test]
fn test_fragments_compose_into_statements() {
    let dialect = SqliteDialect::new();

    // create temporary table if not exists "session_ids" ("id" integer)
    let ddl = format!(
        "{} {} ({} {})",
        dialect.create_temporary_table_prefix(),
        dialect.quote_identifier("session_ids"),
        dialect.quote_identifier("id"),
        dialect.column_type(TypeCode::Integer).unwrap()
    );
    assert_eq!(
        ddl,
        "create temporary table if not exists \"session_ids\" (\"id\" integer)"
    );

    // paginated query with no locking clause appended
    let query = format!(
        "select * from orders{}",
        dialect.for_update_clause()
    );
    assert_eq!(
        dialect.limit_clause(&query, true),
        "select * from orders limit ? offset ?"
    );
}

#[test]
fn test_identity_round_trip_fragments() {
    let dialect = SqliteDialect::new();

    // declaration carries the type itself
    assert_eq!(dialect.identity_column_declaration(), "integer");
    assert!(!dialect.capabilities().data_type_in_identity_column);

    assert_eq!(dialect.identity_select(), "select last_insert_rowid()");
    assert_eq!(dialect.current_timestamp_select(), "select current_timestamp");
}

#[test]
fn test_alter_table_constraint_clauses_are_rejected() {
    let dialect = SqliteDialect::new();
    assert!(dialect.drop_foreign_key_clause("fk_any").is_err());
    assert!(dialect.add_primary_key_clause("pk_any", &["id"]).is_err());
    assert!(!dialect.capabilities().alter_table);
    assert!(!dialect.capabilities().drop_constraints);
}

// =============================================================================
// Test: capability record
// =============================================================================

#[test]
fn test_capability_record_is_stable() {
    let dialect = SqliteDialect::new();
    let first = dialect.capabilities();
    for _ in 0..3 {
        assert_eq!(dialect.capabilities(), first);
    }
}

#[test]
fn test_capability_report_serializes() {
    let report = serde_json::to_value(SqliteDialect::new().capabilities()).unwrap();
    assert_eq!(report["identity_columns"], serde_json::json!(true));
    assert_eq!(report["data_type_in_identity_column"], serde_json::json!(false));
    assert_eq!(report["limit"], serde_json::json!(true));
    assert_eq!(report["temporary_tables"], serde_json::json!(true));
    assert_eq!(report["drop_temporary_table_after_use"], serde_json::json!(false));
    assert_eq!(report["union_all"], serde_json::json!(true));
    assert_eq!(report["alter_table"], serde_json::json!(false));
    assert_eq!(report["drop_constraints"], serde_json::json!(false));
    assert_eq!(report["if_exists_before_table_name"], serde_json::json!(true));
    assert_eq!(report["cascade_delete"], serde_json::json!(false));
    assert_eq!(report["outer_join_for_update"], serde_json::json!(false));
    assert_eq!(report["current_timestamp_selection"], serde_json::json!(true));
    assert_eq!(report["current_timestamp_callable"], serde_json::json!(false));
}

// =============================================================================
// Test: concurrent reads
// =============================================================================

#[test]
fn test_shared_across_threads() {
    let dialect = SqliteDialect::new();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let mut answers = Vec::new();
                    for code in TypeCode::ALL {
                        answers.push(dialect.column_type(code).unwrap().to_string());
                    }
                    answers.push(dialect.limit_clause("select 1", true));
                    answers.push(dialect.render_function("concat", &["a", "b"]).unwrap());
                    answers
                })
            })
            .collect();

        let mut results = handles.into_iter().map(|h| h.join().unwrap());
        let first = results.next().unwrap();
        for result in results {
            assert_eq!(result, first);
        }
    });
}

// =============================================================================
// Test: host-side usage through a trait object
// =============================================================================

#[test]
fn test_usable_as_trait_object() {
    let dialect: Box<dyn Dialect> = Box::new(SqliteDialect::new());
    assert_eq!(dialect.name(), "sqlite");
    assert_eq!(dialect.column_type(TypeCode::Clob).unwrap(), "clob");
    assert_eq!(dialect.render_function("mod", &["7", "3"]).unwrap(), "7 % 3");
}
