use crate::api_state::ApiContext;
use crate::upload::handlers::get_presigned_url_handler;
use axum::{Router, routing::post};

pub fn upload_public_router() -> Router<ApiContext> {
    Router::new().route("/api/get-presigned-url", post(get_presigned_url_handler))
}
