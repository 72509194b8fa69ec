use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::config::get_config;
use crate::services::ShortenService;
use crate::storage::{MappingStore, SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub store: Arc<dyn MappingStore>,
    pub shorten_service: Arc<ShortenService>,
}

/// 准备服务器启动的上下文
///
/// 校验配置、连接数据库并运行迁移、构建 ShortenService
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let config = get_config();
    config
        .shortener
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid [shortener] configuration")?;

    let storage = StorageFactory::create()
        .await
        .map_err(|e| {
            eprintln!("{}", e.format_colored());
            e
        })
        .context("Failed to create storage backend")?;

    let store: Arc<dyn MappingStore> = storage.clone();
    info!("Using storage backend: {}", store.backend_name());

    let count = storage
        .count()
        .await
        .context("Failed to count existing short links")?;
    info!("{} short links in store", count);

    let shorten_service = Arc::new(ShortenService::from_config(
        store.clone(),
        &config.shortener,
    ));
    debug!(
        "ShortenService ready (code length {}, up to {} attempts)",
        config.shortener.code_length, config.shortener.max_attempts
    );

    info!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        store,
        shorten_service,
    })
}
