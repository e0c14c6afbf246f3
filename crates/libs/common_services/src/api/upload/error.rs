use crate::api::message_response;
use crate::object_store::ObjectStoreError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("storage error")]
    Storage(#[from] ObjectStoreError),
}

impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        match self {
            Self::Storage(e) => {
                error!("Error generating pre-signed URL: {}", e);
                message_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error generating upload URL",
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MessageResponse;

    #[tokio::test]
    async fn storage_failure_is_a_500_with_message() -> Result<(), Box<dyn std::error::Error>> {
        let response =
            UploadError::Storage(ObjectStoreError::Request("access denied".to_owned()))
                .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        let body: MessageResponse = serde_json::from_slice(&body)?;
        assert_eq!(body.message, "Error generating upload URL");
        Ok(())
    }
}
