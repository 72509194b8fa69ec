use serde::{Deserialize, Serialize};

/// 一条短链接映射（short code → long URL）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortLink {
    pub code: String,
    pub long_url: String,
}

impl ShortLink {
    pub fn new(code: impl Into<String>, long_url: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            long_url: long_url.into(),
        }
    }
}
