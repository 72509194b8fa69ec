//! Shortening workflow
//!
//! Sequences the mapping store and the code generator for a single request:
//! reuse an existing mapping, otherwise pick a free code and persist it.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::ShortenerConfig;
use crate::errors::{Result, ShortenerError};
use crate::services::code_generator::{CodeGenerator, RandomCodeGenerator};
use crate::storage::MappingStore;

/// Knobs for code generation, usually taken from `[shortener]` in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenSettings {
    pub code_length: usize,
    /// Total candidates tried (fresh code, suffixed code, then fresh codes).
    pub max_attempts: u32,
}

impl Default for ShortenSettings {
    fn default() -> Self {
        Self {
            code_length: 8,
            max_attempts: 5,
        }
    }
}

impl From<&ShortenerConfig> for ShortenSettings {
    fn from(config: &ShortenerConfig) -> Self {
        Self {
            code_length: config.code_length,
            max_attempts: config.max_attempts,
        }
    }
}

/// Result of a shorten call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortenOutcome {
    pub code: String,
    /// `false` when an existing mapping for the long URL was returned.
    pub created: bool,
}

pub struct ShortenService {
    store: Arc<dyn MappingStore>,
    generator: Arc<dyn CodeGenerator>,
    settings: ShortenSettings,
}

impl ShortenService {
    pub fn new(
        store: Arc<dyn MappingStore>,
        generator: Arc<dyn CodeGenerator>,
        settings: ShortenSettings,
    ) -> Self {
        Self {
            store,
            generator,
            settings,
        }
    }

    /// Build the service with the random generator described by `config`.
    pub fn from_config(store: Arc<dyn MappingStore>, config: &ShortenerConfig) -> Self {
        Self::new(
            store,
            Arc::new(RandomCodeGenerator::new(config.collision_suffix.clone())),
            ShortenSettings::from(config),
        )
    }

    /// Return the short code for `long_url`, creating a mapping if needed.
    ///
    /// Candidate order: a fresh code, then the suffixed form of that code,
    /// then fresh codes until `max_attempts` is reached. Storage errors abort
    /// immediately.
    pub async fn shorten(&self, long_url: &str) -> Result<ShortenOutcome> {
        if let Some(code) = self.store.find_code_by_long_url(long_url).await? {
            debug!("Reusing existing short code '{}'", code);
            return Ok(ShortenOutcome {
                code,
                created: false,
            });
        }

        let mut candidate = String::new();
        for attempt in 1..=self.settings.max_attempts {
            candidate = if attempt == 2 {
                self.generator.regenerate(&candidate)
            } else {
                self.generator.generate(self.settings.code_length)
            };

            if self.store.code_exists(&candidate).await? {
                warn!(
                    "Short code collision on attempt {}/{}: '{}'",
                    attempt, self.settings.max_attempts, candidate
                );
                continue;
            }

            match self.store.insert(&candidate, long_url).await {
                Ok(()) => {
                    info!("ShortenService: created '{}'", candidate);
                    return Ok(ShortenOutcome {
                        code: candidate,
                        created: true,
                    });
                }
                Err(ShortenerError::DuplicateMapping(detail)) => {
                    // 并发请求可能已经为同一个长链接写入了映射
                    if let Some(code) = self.store.find_code_by_long_url(long_url).await? {
                        info!(
                            "ShortenService: concurrent request already mapped the URL to '{}'",
                            code
                        );
                        return Ok(ShortenOutcome {
                            code,
                            created: false,
                        });
                    }
                    warn!(
                        "Short code '{}' was taken concurrently on attempt {}/{}: {}",
                        candidate, attempt, self.settings.max_attempts, detail
                    );
                }
                Err(e) => return Err(e),
            }
        }

        Err(ShortenerError::code_space_exhausted(format!(
            "no free short code after {} attempts",
            self.settings.max_attempts
        )))
    }

    /// Long URL behind `code`, if any.
    pub async fn resolve(&self, code: &str) -> Result<Option<String>> {
        self.store.find_long_url_by_code(code).await
    }
}
