//! SeaORM storage backend
//!
//! This module provides database storage using SeaORM,
//! supporting SQLite, MySQL/MariaDB, and PostgreSQL.

mod connection;
mod converters;
mod mutations;
mod query;

use async_trait::async_trait;
use sea_orm::DatabaseConnection;
use tracing::warn;

use crate::errors::{Result, ShortenerError};
use crate::storage::MappingStore;

pub use connection::{PoolOptions, connect_generic, connect_sqlite, run_migrations};
pub use converters::{long_url_hash, model_to_shortlink, new_active_model};

/// 从数据库 URL 推断数据库类型
pub fn infer_backend_from_url(database_url: &str) -> Result<String> {
    if database_url.starts_with("sqlite:")
        || database_url.ends_with(".db")
        || database_url.ends_with(".sqlite")
        || database_url == ":memory:"
    {
        Ok("sqlite".to_string())
    } else if database_url.starts_with("mysql://") || database_url.starts_with("mariadb://") {
        Ok("mysql".to_string())
    } else if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        Ok("postgres".to_string())
    } else {
        Err(ShortenerError::database_config(format!(
            "无法从 URL 推断数据库类型: {}. 支持的 URL 格式: sqlite://, mysql://, mariadb://, postgres://",
            database_url
        )))
    }
}

/// SeaORM-based storage backend
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    /// 使用默认连接池参数连接
    pub async fn new(database_url: &str, backend_name: &str) -> Result<Self> {
        Self::with_pool(database_url, backend_name, PoolOptions::default()).await
    }

    pub async fn with_pool(
        database_url: &str,
        backend_name: &str,
        pool: PoolOptions,
    ) -> Result<Self> {
        if database_url.is_empty() {
            return Err(ShortenerError::database_config("database_url 未设置"));
        }

        // 根据不同数据库类型配置连接选项
        let db = if backend_name == "sqlite" {
            connect_sqlite(database_url).await?
        } else {
            connect_generic(database_url, backend_name, pool).await?
        };

        let storage = Self::from_connection(db, backend_name);

        // 运行迁移
        run_migrations(&storage.db).await?;

        warn!(
            "{} Storage initialized.",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    /// 包装一个已建立的连接（不运行迁移）
    pub fn from_connection(db: DatabaseConnection, backend_name: &str) -> Self {
        Self {
            db,
            backend_name: backend_name.to_string(),
        }
    }

    /// 获取数据库连接（关闭连接池等场景使用）
    pub fn get_db(&self) -> &DatabaseConnection {
        &self.db
    }
}

#[async_trait]
impl MappingStore for SeaOrmStorage {
    async fn find_code_by_long_url(&self, long_url: &str) -> Result<Option<String>> {
        self.code_for_long_url(long_url).await
    }

    async fn find_long_url_by_code(&self, code: &str) -> Result<Option<String>> {
        Ok(self.get(code).await?.map(|link| link.long_url))
    }

    async fn code_exists(&self, code: &str) -> Result<bool> {
        self.exists(code).await
    }

    async fn insert(&self, code: &str, long_url: &str) -> Result<()> {
        self.create(code, long_url).await
    }

    async fn health_check(&self) -> Result<()> {
        self.ping().await
    }

    fn backend_name(&self) -> &str {
        &self.backend_name
    }
}
