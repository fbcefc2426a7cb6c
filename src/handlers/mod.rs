use std::sync::Arc;

use ntex::web::{self, Error};
use serde::Serialize;

use crate::errors::AppError;
use crate::AppState;

#[derive(Serialize)]
pub struct Response<T> {
    pub status: String,
    pub message: String,
    pub count: Option<i64>,
    pub data: Option<T>,
}

#[derive(Serialize)]
struct StoreStatus<'a> {
    endpoint: &'a str,
}

/// health check
async fn health() -> Result<web::HttpResponse, Error> {
    Ok(web::HttpResponse::Ok().json(&Response::<()> {
        status: "success".to_string(),
        message: "Server is running...".to_string(),
        count: None,
        data: None,
    }))
}

/// store reachability check, round-trips a PING through the shared handle
async fn store_health(state: web::types::State<Arc<AppState>>) -> Result<web::HttpResponse, Error> {
    state.redis.ping().await.map_err(|e| {
        log::error!("🔥 Store health check failed: {}", e);
        store_error(&e)
    })?;

    Ok(web::HttpResponse::Ok().json(&Response::<StoreStatus> {
        status: "success".to_string(),
        message: "Store is reachable".to_string(),
        count: None,
        data: Some(StoreStatus {
            endpoint: state.redis.url(),
        }),
    }))
}

// the redis error text stays in the log, clients get a fixed message
fn store_error(e: &redis::RedisError) -> AppError {
    if e.is_connection_refusal() || e.is_io_error() || e.is_timeout() || e.is_connection_dropped() {
        AppError::ServiceUnavailable
    } else {
        AppError::InternalServerError("Store health check failed".to_string())
    }
}

// not found handler
async fn not_found_error() -> Result<web::HttpResponse, Error> {
    Ok(web::HttpResponse::NotFound().json(&Response::<()> {
        status: "error".to_string(),
        message: "Not Found".to_string(),
        count: None,
        data: None,
    }))
}

/// configure routes
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service((
                web::resource("/health").route(web::get().to(health)),
                web::resource("/health/store").route(web::get().to(store_health)),
            ))
            .default_service(web::route().to(not_found_error)),
    );
}
