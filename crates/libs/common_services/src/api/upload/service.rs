use crate::api::upload::error::UploadError;
use crate::api::upload::interfaces::UploadGrantResponse;
use crate::object_store::ObjectStore;
use crate::utils::generate_object_key;
use app_state::{SearchSettings, UPLOAD_CONTENT_TYPE};
use tracing::{info, instrument};

/// Hands out a short-lived write grant under a fresh random key.
///
/// Nothing is recorded server side; the bucket only learns about the key once
/// the client uploads to it.
#[instrument(skip_all, err(Debug))]
pub async fn issue_upload_grant(
    object_store: &dyn ObjectStore,
    search_settings: &SearchSettings,
) -> Result<UploadGrantResponse, UploadError> {
    let key = generate_object_key();
    let expires_in = search_settings.upload_url_expiry();
    let upload_url = object_store
        .presign_put(&key, UPLOAD_CONTENT_TYPE, expires_in)
        .await?;
    info!("Issued upload grant for {key}");

    Ok(UploadGrantResponse {
        upload_url,
        key,
        expires_in: expires_in.as_secs(),
    })
}
