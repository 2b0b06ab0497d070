mod handlers;
mod middleware;

pub mod error;

use std::sync::Arc;

use axum::{
    Router,
    http::{Method, header},
    middleware as axum_middleware,
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::config::CorsSettings;
use crate::infra::storage::DocumentStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<DocumentStore>,
}

/// Assemble the service router: the collection routes, CORS for the single
/// configured origin, and request logging. Preflight requests are answered by
/// the CORS layer before they reach a route.
pub fn build_router(state: AppState, cors: &CorsSettings) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors.allowed_origin.clone())
        .allow_methods([Method::GET, Method::PUT])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route(
            "/collection",
            get(handlers::get_collection).put(handlers::put_collection),
        )
        .with_state(state)
        .layer(cors_layer)
        .layer(axum_middleware::from_fn(middleware::log_responses))
        .layer(axum_middleware::from_fn(middleware::set_request_context))
}
