//! Example: Paginated Query Rendering
//!
//! This example builds a table through the SQLite dialect's fragments, runs
//! a paginated query against an in-memory database, reads back the last
//! generated key, and prints the engine's capability report.
//!
//! Run with: cargo run --example paginated_query -p sqlbridge-sqlite

use sqlbridge_core::{Dialect, TypeCode};
use sqlbridge_sqlite::SqliteDialect;
use sqlx::sqlite::SqlitePoolOptions;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .without_time()
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let dialect = SqliteDialect::new();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await?;

    let ddl = format!(
        "create table articles (id {} primary key, title {}, published {})",
        dialect.identity_column_declaration(),
        dialect.column_type(TypeCode::Varchar)?,
        dialect.column_type(TypeCode::Boolean)?
    );
    info!(sql = %ddl, "Creating table");
    sqlx::query(&ddl).execute(&pool).await?;

    for title in ["intro", "setup", "queries", "dialects", "errors", "wrap-up"] {
        sqlx::query("insert into articles (title, published) values (?, ?)")
            .bind(title)
            .bind(true)
            .execute(&pool)
            .await?;
    }

    let (last_id,): (i64,) = sqlx::query_as(dialect.identity_select())
        .fetch_one(&pool)
        .await?;
    info!(last_id, "Generated key of the most recent insert");

    // Second page, two rows per page: the limit binds first, then the offset.
    let query = dialect.limit_clause("select id, title from articles order by id", true);
    info!(sql = %query, "Running paginated query");
    let page: Vec<(i64, String)> = sqlx::query_as(&query)
        .bind(2_i64)
        .bind(2_i64)
        .fetch_all(&pool)
        .await?;
    for (id, title) in page {
        println!("{id}: {title}");
    }

    println!("{}", serde_json::to_string_pretty(&dialect.capabilities())?);

    Ok(())
}
