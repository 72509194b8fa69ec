use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};

use super::shorten::plain_text;
use crate::services::ShortenService;

#[derive(Debug, Serialize, Deserialize)]
pub struct ResolveResponse {
    #[serde(rename = "longURL")]
    pub long_url: String,
}

pub struct RedirectService;

impl RedirectService {
    /// `GET /api/resolve/{code}` → `{"longURL": ...}`
    pub async fn resolve(
        path: web::Path<String>,
        service: web::Data<Arc<ShortenService>>,
    ) -> HttpResponse {
        let code = path.into_inner();
        match service.resolve(&code).await {
            Ok(Some(long_url)) => HttpResponse::Ok().json(ResolveResponse { long_url }),
            Ok(None) => {
                debug!("Resolve: short code not found: {}", code);
                plain_text(StatusCode::NOT_FOUND, "Not Found")
            }
            Err(e) => {
                error!("Database error during resolve: {}", e);
                plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Failed to query database")
            }
        }
    }

    /// `GET /{code}` → 307 to the long URL
    pub async fn handle_redirect(
        path: web::Path<String>,
        service: web::Data<Arc<ShortenService>>,
    ) -> HttpResponse {
        let code = path.into_inner();
        match service.resolve(&code).await {
            Ok(Some(long_url)) => HttpResponse::TemporaryRedirect()
                .insert_header(("Location", long_url))
                .finish(),
            Ok(None) => {
                debug!("Redirect link not found in database: {}", code);
                plain_text(StatusCode::NOT_FOUND, "Not Found")
            }
            Err(e) => {
                error!("Database error during redirect lookup: {}", e);
                plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

pub fn resolve_routes() -> actix_web::Resource {
    web::resource("/api/resolve/{code}").route(web::get().to(RedirectService::resolve))
}

/// 兜底的短码跳转路由，必须最后注册
pub fn redirect_routes() -> actix_web::Resource {
    web::resource("/{code}")
        .route(web::get().to(RedirectService::handle_redirect))
        .route(web::head().to(RedirectService::handle_redirect))
}
