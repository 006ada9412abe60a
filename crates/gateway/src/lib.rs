//! Bonbon Gateway library.
//!
//! The transport-adapter boundary of the shop: a small webhook service that
//! receives updates from the messaging gateway, parses them into typed
//! actions, dispatches into `bonbon-engine` and returns the render
//! instruction as JSON. Everything with real semantics lives in the engine;
//! this crate is plumbing.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Build the gateway application router.
///
/// Shared between the binary and the integration tests so both exercise the
/// same middleware stack.
pub fn app(state: AppState) -> Router {
    routes::routes()
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
