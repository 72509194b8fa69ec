use async_trait::async_trait;

use crate::errors::Result;

/// Persistence seam for short code ↔ long URL mappings.
///
/// Handlers and [`ShortenService`](crate::services::ShortenService) only see
/// this trait; the SeaORM backend is injected at startup and tests plug in
/// in-memory stubs.
#[async_trait]
pub trait MappingStore: Send + Sync {
    /// Short code already mapped to exactly this long URL.
    ///
    /// `Ok(None)` means "not found"; `Err` is reserved for storage failures.
    async fn find_code_by_long_url(&self, long_url: &str) -> Result<Option<String>>;

    /// Long URL a short code points to.
    async fn find_long_url_by_code(&self, code: &str) -> Result<Option<String>>;

    async fn code_exists(&self, code: &str) -> Result<bool>;

    /// Persist a new mapping.
    ///
    /// A unique constraint violation (on either column) is reported as
    /// [`ShortenerError::DuplicateMapping`](crate::errors::ShortenerError::DuplicateMapping).
    async fn insert(&self, code: &str, long_url: &str) -> Result<()>;

    /// Verify the connection is alive.
    async fn health_check(&self) -> Result<()>;

    fn backend_name(&self) -> &str;
}
