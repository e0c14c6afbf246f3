use crate::api_state::ApiContext;
use crate::search::handlers::search_face_handler;
use axum::{Router, routing::post};

pub fn search_public_router() -> Router<ApiContext> {
    Router::new().route("/api/search-face", post(search_face_handler))
}
