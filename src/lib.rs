// FUNGIBLES SERVICE
// Handles: Farcaster mention replies and on-chain inscription PNG rendering.

pub mod chain;
pub mod config;
pub mod error;
pub mod handlers;
pub mod inscription;
pub mod messages;
pub mod neynar;
pub mod svg;
pub mod tokens;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::chain::ChainClient;
use crate::config::Config;
use crate::neynar::CastPublisher;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub chain: Arc<dyn ChainClient>,
    pub publisher: Arc<dyn CastPublisher>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/fungibles-farcaster-mentions",
            post(handlers::mentions_handler),
        )
        .route("/api/inscription-png", get(handlers::inscription_png_handler))
        .route("/health", get(handlers::health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
