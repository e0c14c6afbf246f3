use app_state::AppSettings;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use common_services::api::search::error::SearchError;
use common_services::api::search::interfaces::{SearchFaceRequest, SearchFaceResponse};
use common_services::api::search::service::{FaceSearchConfig, search_face};
use common_services::face_index::FaceIndex;
use common_services::object_store::ObjectStore;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Search the face collection using an uploaded image as the query.
///
/// # Errors
///
/// Returns a `SearchError` when the key is missing, nothing matched, or the
/// face index or object store failed.
#[utoipa::path(
    post,
    path = "/api/search-face",
    tag = "Face Search",
    request_body = SearchFaceRequest,
    responses(
        (status = 200, description = "Matches, most similar first.", body = SearchFaceResponse),
        (status = 400, description = "No image key given.", body = common_services::api::MessageResponse),
        (status = 404, description = "No face in the collection matched.", body = common_services::api::MessageResponse),
        (status = 500, description = "The face index or object store failed.", body = common_services::api::MessageResponse),
    )
)]
#[instrument(skip_all)]
pub async fn search_face_handler(
    State(face_index): State<Arc<dyn FaceIndex>>,
    State(object_store): State<Arc<dyn ObjectStore>>,
    State(settings): State<AppSettings>,
    payload: Result<Json<SearchFaceRequest>, JsonRejection>,
) -> Result<Json<SearchFaceResponse>, SearchError> {
    // An unreadable body carries no key either.
    let request = payload.map_or_else(
        |rejection| {
            debug!("Rejected search body: {}", rejection.body_text());
            SearchFaceRequest::default()
        },
        |Json(request)| request,
    );

    let response = search_face(
        face_index.as_ref(),
        object_store.as_ref(),
        FaceSearchConfig::from_settings(&settings),
        request.key.as_deref(),
    )
    .await?;
    Ok(Json(response))
}
