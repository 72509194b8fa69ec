//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QuerySelect};
use tracing::{error, trace};

use super::SeaOrmStorage;
use super::converters::{long_url_hash, model_to_shortlink};
use crate::errors::{Result, ShortenerError};
use crate::storage::ShortLink;

use migration::entities::short_url;

impl SeaOrmStorage {
    /// 按短码查询完整映射
    pub async fn get(&self, code: &str) -> Result<Option<ShortLink>> {
        let model = short_url::Entity::find()
            .filter(short_url::Column::ShortUrl.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("查询短链接失败 ({}): {}", code, e);
                ShortenerError::database_operation(format!("查询短链接失败: {}", e))
            })?;

        Ok(model.map(model_to_shortlink))
    }

    /// 按长链接反查短码（精确匹配，走 longURLHash 唯一索引）
    pub async fn code_for_long_url(&self, long_url: &str) -> Result<Option<String>> {
        let code = short_url::Entity::find()
            .select_only()
            .column(short_url::Column::ShortUrl)
            .filter(short_url::Column::LongUrlHash.eq(long_url_hash(long_url)))
            .filter(short_url::Column::LongUrl.eq(long_url))
            .into_tuple::<String>()
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("按长链接查询短码失败: {}", e);
                ShortenerError::database_operation(format!("按长链接查询短码失败: {}", e))
            })?;

        trace!("Lookup by long URL: found = {}", code.is_some());
        Ok(code)
    }

    /// 短码是否已存在
    pub async fn exists(&self, code: &str) -> Result<bool> {
        let count = short_url::Entity::find()
            .filter(short_url::Column::ShortUrl.eq(code))
            .count(&self.db)
            .await
            .map_err(|e| {
                error!("检查短码是否存在失败 ({}): {}", code, e);
                ShortenerError::database_operation(format!("检查短码是否存在失败: {}", e))
            })?;

        Ok(count > 0)
    }

    /// 获取映射总数
    pub async fn count(&self) -> Result<u64> {
        short_url::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| ShortenerError::database_operation(format!("统计短链接数量失败: {}", e)))
    }

    /// 检查连接池是否可用
    pub async fn ping(&self) -> Result<()> {
        self.db
            .ping()
            .await
            .map_err(|e| ShortenerError::database_connection(e.to_string()))
    }
}
