//! Quill API Server entry point.

use std::sync::Arc;

use actix_web::{App, HttpServer};
use tracing_actix_web::TracingLogger;

use api_server::config::AppConfig;
use api_server::observability::{QuillRootSpanBuilder, RequestIdMiddleware};
use api_server::state::AppState;
use api_server::telemetry::{TelemetryConfig, init_telemetry};
use quill_core::ports::TokenService;
use quill_infra::JwtTokenService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    tracing::info!(
        "Starting Quill API Server on {}:{}",
        config.host,
        config.port
    );

    let state = AppState::new(config.database.as_ref()).await;
    let token_service: Arc<dyn TokenService> = Arc::new(JwtTokenService::new(config.jwt.clone()));

    HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::<QuillRootSpanBuilder>::new())
            // Outermost, so the root span sees the request ID.
            .wrap(RequestIdMiddleware)
            .configure(api_server::configure_app(
                state.clone(),
                token_service.clone(),
            ))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
