use actix_web::{web, App, HttpServer};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use ward_auth::config::{EnvConfig, CONFIG};
use ward_auth::db::service::DbService;
use ward_auth::routes::configure_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = EnvConfig::from_env();
    let addr = format!("0.0.0.0:{}", config.port);
    let db_url = config.db_url.clone();
    CONFIG.set(config).expect("config already initialized");

    let db = Arc::new(
        DbService::new(db_url.as_str())
            .await
            .expect("Failed to initialize database service"),
    );

    tracing::info!("Starting server on {}", addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(Arc::clone(&db)))
            .configure(configure_routes)
    })
    .bind(addr)?
    .run()
    .await
}
