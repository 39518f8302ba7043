use std::path::Path;

use anyhow::Context;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Database file, created next to the process on first run.
pub const DB_FILE: &str = "db.sqlite";

pub async fn connect(path: impl AsRef<Path>) -> anyhow::Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true);

    let db = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await
        .context("open sqlite database")?;
    Ok(db)
}

#[cfg(test)]
pub async fn in_memory() -> anyhow::Result<SqlitePool> {
    // Every connection would get its own memory database, so the pool is
    // pinned to a single one.
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .context("open in-memory sqlite database")?;
    Ok(db)
}

/// Ensure the users table exists. Safe to run on every startup.
pub async fn init_schema(db: &SqlitePool) -> anyhow::Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT UNIQUE NOT NULL,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(db)
    .await
    .context("create users table")?;
    Ok(())
}
