//! Collection handlers

use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde_json::Value;

use super::AppState;
use super::error::ApiError;

/// Return the whole persisted collection.
///
/// A missing or unparsable document is not distinguished for clients; both
/// surface as the same read failure.
pub async fn get_collection(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ApiError> {
    let document = state.store.load().await?;
    Ok(Json(document))
}

/// Replace the whole persisted collection with the request body.
///
/// Any JSON value is accepted and persisted verbatim; clients own the shape
/// of what they store here.
pub async fn put_collection(
    State(state): State<AppState>,
    Json(document): Json<Value>,
) -> Result<impl IntoResponse, ApiError> {
    state.store.replace(&document).await?;
    Ok("Collection updated successfully")
}
