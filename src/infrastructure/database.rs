//! 数据库基础设施

use sqlx::{
    postgres::{PgPool, PgPoolOptions},
    Error,
};
use tracing::info;

use super::postgres_store::PgUserStore;
use crate::config::DatabaseConfig;

pub struct DatabaseManager {
    pool: PgPool,
}

impl DatabaseManager {
    /// 建立连接池；首个连接失败即返回错误
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, Error> {
        info!(
            "Connecting to database at {}:{} (db: {})",
            config.host,
            config.port,
            config.dbname.as_deref().unwrap_or("<default>")
        );

        let pool = PgPoolOptions::new()
            .connect_with(config.connect_options())
            .await?;

        Ok(Self { pool })
    }

    pub fn user_store(&self) -> PgUserStore {
        PgUserStore::new(self.pool.clone())
    }
}
