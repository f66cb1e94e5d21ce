//! Pool construction and table DDL.

use crate::error::AppError;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

/// Open a pool on `database_url`. An in-memory SQLite database lives and
/// dies with its connection, so memory URLs get exactly one connection that
/// is never reaped.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let options = if is_memory_url(database_url) {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    };
    Ok(options.connect(database_url).await?)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Create the movies table if missing. Call once before serving.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS movies (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            release_date DATE NOT NULL,
            genre TEXT NOT NULL,
            price REAL NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}
