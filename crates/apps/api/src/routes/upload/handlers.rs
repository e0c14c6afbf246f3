use app_state::AppSettings;
use axum::Json;
use axum::extract::State;
use common_services::api::upload::error::UploadError;
use common_services::api::upload::interfaces::UploadGrantResponse;
use common_services::api::upload::service::issue_upload_grant;
use common_services::object_store::ObjectStore;
use std::sync::Arc;
use tracing::instrument;

/// Get a pre-signed URL to upload a captured JPEG to.
///
/// # Errors
///
/// Returns an `UploadError` when the object store refuses to sign the URL.
#[utoipa::path(
    post,
    path = "/api/get-presigned-url",
    tag = "Face Search",
    responses(
        (status = 200, description = "Upload URL and the key the image will be stored under.", body = UploadGrantResponse),
        (status = 500, description = "The upload URL could not be generated.", body = common_services::api::MessageResponse),
    )
)]
#[instrument(skip(object_store, settings))]
pub async fn get_presigned_url_handler(
    State(object_store): State<Arc<dyn ObjectStore>>,
    State(settings): State<AppSettings>,
) -> Result<Json<UploadGrantResponse>, UploadError> {
    let grant = issue_upload_grant(object_store.as_ref(), &settings.search).await?;
    Ok(Json(grant))
}
