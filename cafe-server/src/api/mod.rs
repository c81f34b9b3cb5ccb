//! API routes
//!
//! - [`home`] - static landing page
//! - [`health`] - liveness probe
//! - [`cafes`] - cafe CRUD endpoints

pub mod cafes;
pub mod health;
pub mod home;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

/// Build the complete application router
pub fn build_router(state: ServerState) -> Router {
    Router::new()
        .merge(home::router())
        .merge(health::router())
        .merge(cafes::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
