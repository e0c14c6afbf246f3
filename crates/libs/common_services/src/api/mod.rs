use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod search;
pub mod upload;

/// Body of every non-200 response.
#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

pub(crate) fn message_response(status: StatusCode, message: &str) -> Response {
    let body = Json(MessageResponse {
        message: message.to_owned(),
    });
    (status, body).into_response()
}
