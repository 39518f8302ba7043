use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::AppConfig;
use crate::db;

#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub async fn init() -> anyhow::Result<Self> {
        let config = Arc::new(AppConfig::from_env());

        let db = db::connect(db::DB_FILE).await?;
        db::init_schema(&db).await?;

        Ok(Self::from_parts(db, config))
    }

    pub fn from_parts(db: SqlitePool, config: Arc<AppConfig>) -> Self {
        Self { db, config }
    }
}

#[cfg(test)]
impl AppState {
    /// State backed by an in-memory database, for router tests.
    pub async fn for_tests() -> Self {
        let db = db::in_memory().await.expect("in-memory pool");
        db::init_schema(&db).await.expect("schema init");

        let config = Arc::new(AppConfig {
            port: 0,
            admin_username: "RIZZO".into(),
        });

        Self::from_parts(db, config)
    }
}
