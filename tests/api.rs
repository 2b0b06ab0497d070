use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use scorta_api_types::Product;
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use scorta::config::CorsSettings;
use scorta::infra::http::{self, AppState};
use scorta::infra::storage::DocumentStore;

const ALLOWED_ORIGIN: &str = "http://127.0.0.1:5500";

fn cors_settings() -> CorsSettings {
    CorsSettings {
        allowed_origin: ALLOWED_ORIGIN.parse().expect("origin header"),
    }
}

fn router_over(store: Arc<DocumentStore>) -> Router {
    http::build_router(AppState { store }, &cors_settings())
}

async fn fresh_router(dir: &TempDir) -> Router {
    let store = Arc::new(DocumentStore::new(dir.path().join("data.json")));
    store.ensure_exists().await.expect("init");
    router_over(store)
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.expect("body").to_bytes();
    serde_json::from_slice(&bytes).expect("json body")
}

fn get_collection() -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri("/collection")
        .body(Body::empty())
        .expect("request")
}

fn put_collection(document: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri("/collection")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(document).expect("encode")))
        .expect("request")
}

#[tokio::test]
async fn missing_document_initialises_to_an_empty_collection() {
    let dir = TempDir::new().expect("tempdir");
    let router = fresh_router(&dir).await;

    let response = router.oneshot(get_collection()).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn put_then_get_round_trips_the_collection() {
    let dir = TempDir::new().expect("tempdir");
    let router = fresh_router(&dir).await;

    let collection = json!([
        {"id": "1", "name": "Caneta", "category": "Papelaria", "quantity": 10, "price": 1.5},
        {"id": "2", "name": "Caderno", "category": "Papelaria", "quantity": 3, "price": 12.9}
    ]);

    let response = router
        .clone()
        .oneshot(put_collection(&collection))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    let confirmation = response.into_body().collect().await.expect("body").to_bytes();
    assert_eq!(&confirmation[..], b"Collection updated successfully");

    let response = router.oneshot(get_collection()).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> =
        serde_json::from_value(body_json(response).await).expect("typed collection");
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].id, "1");
    assert_eq!(products[0].name, "Caneta");
    assert_eq!(products[1].quantity, 3);
    assert_eq!(products[1].price, 12.9);
}

#[tokio::test]
async fn put_replaces_the_previous_collection_wholesale() {
    let dir = TempDir::new().expect("tempdir");
    let router = fresh_router(&dir).await;

    let first = json!([{"id": "1", "name": "Caneta", "category": "Papelaria", "quantity": 1, "price": 1.0}]);
    let second = json!([{"id": "2", "name": "Caderno", "category": "Papelaria", "quantity": 2, "price": 2.0}]);

    router
        .clone()
        .oneshot(put_collection(&first))
        .await
        .expect("first put");
    router
        .clone()
        .oneshot(put_collection(&second))
        .await
        .expect("second put");

    let response = router.oneshot(get_collection()).await.expect("response");
    assert_eq!(body_json(response).await, second);
}

#[tokio::test]
async fn any_json_value_is_persisted_verbatim() {
    let dir = TempDir::new().expect("tempdir");
    let router = fresh_router(&dir).await;

    let document = json!({"note": "not an array"});
    let response = router
        .clone()
        .oneshot(put_collection(&document))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::OK);

    let response = router.oneshot(get_collection()).await.expect("response");
    assert_eq!(body_json(response).await, document);
}

#[tokio::test]
async fn missing_and_corrupt_documents_surface_the_same_read_failure() {
    let dir = TempDir::new().expect("tempdir");

    // Missing: router built without ensure_exists.
    let store = Arc::new(DocumentStore::new(dir.path().join("absent.json")));
    let response = router_over(store)
        .oneshot(get_collection())
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let missing_body = response.into_body().collect().await.expect("body").to_bytes();

    // Corrupt: file exists but is not JSON.
    let corrupt_path = dir.path().join("corrupt.json");
    std::fs::write(&corrupt_path, "{not json").expect("seed");
    let store = Arc::new(DocumentStore::new(corrupt_path));
    let response = router_over(store)
        .oneshot(get_collection())
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let corrupt_body = response.into_body().collect().await.expect("body").to_bytes();

    assert_eq!(missing_body, corrupt_body);
}

#[tokio::test]
async fn write_failure_maps_to_an_internal_error() {
    let dir = TempDir::new().expect("tempdir");

    // A directory at the document path makes every write fail.
    let blocked = dir.path().join("data.json");
    std::fs::create_dir(&blocked).expect("blocker");
    let store = Arc::new(DocumentStore::new(blocked));

    let response = router_over(store)
        .oneshot(put_collection(&json!([])))
        .await
        .expect("response");
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn preflight_is_answered_for_the_configured_origin() {
    let dir = TempDir::new().expect("tempdir");
    let router = fresh_router(&dir).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/collection")
        .header(header::ORIGIN, ALLOWED_ORIGIN)
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .expect("request");

    let response = router.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin header"),
        ALLOWED_ORIGIN
    );
}

#[tokio::test]
async fn other_origins_are_served_with_the_configured_allow_value() {
    let dir = TempDir::new().expect("tempdir");
    let router = fresh_router(&dir).await;

    let request = Request::builder()
        .method(Method::GET)
        .uri("/collection")
        .header(header::ORIGIN, "http://elsewhere.example")
        .body(Body::empty())
        .expect("request");

    // The server always names the one allowed origin; a mismatching request
    // is still served and rejection is left to the browser.
    let response = router.oneshot(request).await.expect("response");
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .expect("allow-origin header"),
        ALLOWED_ORIGIN
    );
}
