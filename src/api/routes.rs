// API routes configuration
// Author: Gabriel Demetrios Lafis

use actix_web::{web, HttpResponse, Responder};

use super::{handlers, ApiError};

/// Configure API routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .route("/toy-census", web::post().to(handlers::census))
        .route("/health", web::get().to(health_check));
}

/// JSON extractor configuration.
///
/// Every payload failure (empty body, missing content type, malformed
/// JSON, wrong field types) collapses to the same 400 outcome as an
/// engine-level validation failure.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .error_handler(|err, _req| ApiError::ValidationError(err.to_string()).into())
}

/// Health check handler
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
