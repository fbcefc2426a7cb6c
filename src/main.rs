mod config;
mod errors;
mod handlers;
mod repository;

use std::sync::Arc;

use ntex::web;

use repository::redis::RedisHandle;

pub struct AppState {
    redis: RedisHandle,
}

#[ntex::main]
async fn main() -> std::io::Result<()> {
    // load .env if present, the real environment wins
    dotenvy::dotenv().ok();

    // enable logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // set up the store client, startup stops here if the configuration is incomplete
    let redis = match repository::redis::init_from_env() {
        Ok(handle) => {
            log::info!("✅ Redis client configured for {}", handle.url());
            log::debug!("{:?}", handle.config());
            handle
        }
        Err(e) => {
            log::error!("🔥 Error configuring Redis: {}", e);
            std::process::exit(1);
        }
    };

    // web::HttpServer can be shutdown gracefully.
    web::HttpServer::new(move || {
        web::App::new()
            .state(Arc::new(AppState {
                redis: redis.clone(),
            }))
            // enable logger
            .wrap(web::middleware::Logger::default())
            .wrap(web::middleware::DefaultHeaders::new().header("content-type", "application/json"))
            .configure(handlers::config)
    })
    .bind(("127.0.0.1", 8080))?
    .run()
    .await
}
