//! # Quill API Server
//!
//! Actix-web application serving authenticated CRUD over posts.
//! The binary in `main.rs` wires configuration and telemetry around
//! [`configure_app`]; tests mount the same routes on an in-memory store.

use std::sync::Arc;

use actix_web::web;

use quill_core::ports::TokenService;

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod openapi;
pub mod state;
pub mod telemetry;

use state::AppState;

/// Register shared state, the token service and all routes.
pub fn configure_app(
    state: AppState,
    token_service: Arc<dyn TokenService>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::Data::new(token_service))
            .configure(handlers::configure_routes);
    }
}
