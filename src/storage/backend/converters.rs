use sha2::{Digest, Sha256};

use crate::storage::ShortLink;
use migration::entities::short_url;

/// longURL 的 SHA-256（小写十六进制），唯一索引建在该列上
pub fn long_url_hash(long_url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(long_url.as_bytes());
    hex::encode(hasher.finalize())
}

/// 将 Sea-ORM Model 转换为 ShortLink
pub fn model_to_shortlink(model: short_url::Model) -> ShortLink {
    ShortLink {
        code: model.short_url,
        long_url: model.long_url,
    }
}

/// 构造插入用的 ActiveModel（id 交给数据库自增）
pub fn new_active_model(code: &str, long_url: &str) -> short_url::ActiveModel {
    use sea_orm::ActiveValue::*;

    short_url::ActiveModel {
        id: NotSet,
        short_url: Set(code.to_string()),
        long_url: Set(long_url.to_string()),
        long_url_hash: Set(long_url_hash(long_url)),
    }
}
