use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, trace, warn};

use crate::errors::ShortenerError;
use crate::services::ShortenService;

#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    #[serde(rename = "longUrl")]
    pub long_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ShortenResponse {
    // 字段名沿用既有客户端使用的拼写
    #[serde(rename = "shortendUrl")]
    pub shortend_url: String,
}

pub struct ShortenApi;

impl ShortenApi {
    pub async fn shorten(
        body: Result<web::Bytes, actix_web::Error>,
        service: web::Data<Arc<ShortenService>>,
    ) -> HttpResponse {
        // 读取失败（包括超过 MAX_BODY_BYTES）统一返回 400
        let body = match body {
            Ok(body) => body,
            Err(e) => {
                warn!("Failed to read request body: {}", e);
                return plain_text(StatusCode::BAD_REQUEST, "Failed to read request body");
            }
        };

        let request: ShortenRequest = match serde_json::from_slice(&body) {
            Ok(req) => req,
            Err(e) => {
                warn!("Failed to decode request body: {}", e);
                return plain_text(StatusCode::BAD_REQUEST, "Failed to decode request body");
            }
        };
        trace!("Shorten request for '{}'", request.long_url);

        match service.shorten(&request.long_url).await {
            Ok(outcome) => HttpResponse::Ok().json(ShortenResponse {
                shortend_url: outcome.code,
            }),
            Err(e) => {
                error!("Failed to shorten URL: {}", e);
                let message = match e {
                    ShortenerError::CodeSpaceExhausted(_) => "Failed to generate short URL",
                    _ => "Failed to save URL to the database",
                };
                plain_text(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }

    pub async fn method_not_allowed() -> HttpResponse {
        warn!("Method not allowed");
        plain_text(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
    }
}

pub(crate) fn plain_text(status: StatusCode, message: &'static str) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(("Content-Type", "text/plain; charset=utf-8"))
        .body(message)
}

/// `/api/shorten` 请求体上限
pub const MAX_BODY_BYTES: usize = 8 * 1024 * 1024;

/// `/api/shorten`：只接受 POST，其余方法返回 405
pub fn shorten_routes() -> actix_web::Resource {
    web::resource("/api/shorten")
        .app_data(web::PayloadConfig::new(MAX_BODY_BYTES))
        .route(web::post().to(ShortenApi::shorten))
        .default_service(web::to(ShortenApi::method_not_allowed))
}
