use actix_web::{HttpResponse, Responder, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, trace};

use crate::storage::MappingStore;

/// 健康检查超时，超时视为数据库不可用
const HEALTH_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub description: String,
}

/// Health Service
///
/// Always answers 200; the body carries the actual state. Talks to the store
/// directly rather than through `ShortenService`.
pub struct HealthService;

impl HealthService {
    pub async fn health_check(store: web::Data<Arc<dyn MappingStore>>) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let outcome = match tokio::time::timeout(HEALTH_CHECK_TIMEOUT, store.health_check()).await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(e.message().to_string()),
            Err(_) => Err("timeout".to_string()),
        };

        let response = match outcome {
            Ok(()) => HealthResponse {
                status: "OK".to_string(),
                description: "Application is healthy".to_string(),
            },
            Err(detail) => {
                error!(
                    "Storage health check failed ({}): {}",
                    store.backend_name(),
                    detail
                );
                HealthResponse {
                    status: "Error".to_string(),
                    description: format!("Failed to connect to the database: {}", detail),
                }
            }
        };

        trace!(
            "Health check completed in {:?}, status: {}",
            start_time.elapsed(),
            response.status
        );

        HttpResponse::Ok().json(response)
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Resource {
    web::resource("/health").route(web::route().to(HealthService::health_check))
}
