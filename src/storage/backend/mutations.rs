//! Mutation operations for SeaOrmStorage
//!
//! Mappings are only ever inserted; there is no update or delete path.

use sea_orm::EntityTrait;
use tracing::{error, info};

use super::SeaOrmStorage;
use super::converters::new_active_model;
use crate::errors::{Result, ShortenerError};

use migration::entities::short_url;

impl SeaOrmStorage {
    /// 插入一条新映射
    ///
    /// 唯一约束冲突（shortURL 或 longURL）返回 `DuplicateMapping`，
    /// 由调用方决定如何处理。
    pub async fn create(&self, code: &str, long_url: &str) -> Result<()> {
        match short_url::Entity::insert(new_active_model(code, long_url))
            .exec(&self.db)
            .await
        {
            Ok(_) => {
                info!("Short link created: {}", code);
                Ok(())
            }
            Err(e) => {
                let err = ShortenerError::from(e);
                if let ShortenerError::DuplicateMapping(ref detail) = err {
                    info!("Insert of '{}' hit a unique constraint: {}", code, detail);
                } else {
                    error!(
                        "插入短链接 '{}' 失败 (target: {}): {}",
                        code,
                        truncate_for_log(long_url),
                        err
                    );
                }
                Err(err)
            }
        }
    }
}

fn truncate_for_log(url: &str) -> String {
    match url.char_indices().nth(50) {
        Some((idx, _)) => format!("{}...", &url[..idx]),
        None => url.to_string(),
    }
}
