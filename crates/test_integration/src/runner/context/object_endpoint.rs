//! Stand-in for the bucket's HTTP side: accepts uploads through the signed
//! write URLs of `InMemoryObjectStore` and serves the stored objects back.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::put;
use axum::Router;
use common_services::testing::SharedObjects;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Clone)]
pub struct ObjectEndpointState {
    pub objects: SharedObjects,
    /// While set, every upload is refused.
    pub reject_uploads: Arc<AtomicBool>,
}

pub fn object_router(state: ObjectEndpointState) -> Router {
    Router::new()
        .route("/{key}", put(put_object).get(get_object))
        .with_state(state)
}

async fn put_object(
    State(state): State<ObjectEndpointState>,
    Path(key): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> StatusCode {
    if state.reject_uploads.load(Ordering::SeqCst) {
        return StatusCode::FORBIDDEN;
    }
    // The write grant pins the content type.
    if headers.get(header::CONTENT_TYPE).and_then(|v| v.to_str().ok()) != Some("image/jpeg") {
        return StatusCode::FORBIDDEN;
    }

    state.objects.lock().await.insert(key, body.to_vec());
    StatusCode::OK
}

async fn get_object(
    State(state): State<ObjectEndpointState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    match state.objects.lock().await.get(&key) {
        Some(bytes) => Ok(([(header::CONTENT_TYPE, "image/jpeg")], bytes.clone())),
        None => Err(StatusCode::NOT_FOUND),
    }
}
