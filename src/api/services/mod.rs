pub mod health;
pub mod redirect;
pub mod shorten;

use actix_web::web;

pub use health::{HealthService, health_routes};
pub use redirect::{RedirectService, redirect_routes, resolve_routes};
pub use shorten::{ShortenApi, shorten_routes};

/// 注册全部路由（顺序敏感：`/{code}` 兜底放在最后）
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(shorten_routes())
        .service(resolve_routes())
        .service(health_routes())
        .service(redirect_routes());
}
