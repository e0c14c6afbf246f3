use crate::api::message_response;
use crate::face_index::FaceIndexError;
use crate::object_store::ObjectStoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("no image key given")]
    MissingKey,

    #[error("no matching face in the collection")]
    NoMatch,

    #[error("no face detected in query image {0}")]
    NoFaceDetected(String),

    #[error("face index error")]
    FaceIndex(#[from] FaceIndexError),

    #[error("storage error")]
    Storage(#[from] ObjectStoreError),

    #[error("matched face {0} has no external image id")]
    MissingExternalId(String),
}

fn log_error(error: &SearchError) {
    match error {
        SearchError::MissingKey => warn!("Face search requested without an image key"),
        SearchError::NoMatch => info!("No match found."),
        SearchError::NoFaceDetected(key) => info!("No face detected in query image {}", key),
        SearchError::FaceIndex(e) => error!("Error searching for face: {}", e),
        SearchError::Storage(e) => error!("Error signing matched image URL: {}", e),
        SearchError::MissingExternalId(face_id) => {
            error!("Matched face {} was indexed without an external image id", face_id);
        }
    }
}

impl IntoResponse for SearchError {
    fn into_response(self) -> Response {
        log_error(&self);

        match self {
            Self::MissingKey => {
                message_response(StatusCode::BAD_REQUEST, "S3 image key is required.")
            }
            Self::NoMatch | Self::NoFaceDetected(_) => message_response(
                StatusCode::NOT_FOUND,
                "No match found in the collection.",
            ),
            Self::FaceIndex(_) | Self::Storage(_) | Self::MissingExternalId(_) => {
                message_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error.")
            }
        }
    }
}
