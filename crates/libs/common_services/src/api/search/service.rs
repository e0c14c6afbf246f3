use crate::api::search::error::SearchError;
use crate::api::search::interfaces::{MatchResult, SearchFaceResponse};
use crate::face_index::{FaceIndex, FaceIndexError, FaceMatch, FaceSearchQuery};
use crate::object_store::ObjectStore;
use crate::utils::format_similarity;
use app_state::AppSettings;
use futures_util::future::try_join_all;
use std::time::Duration;
use tracing::{info, instrument};

#[derive(Debug, Clone, Copy)]
pub struct FaceSearchConfig<'a> {
    pub collection_id: &'a str,
    pub threshold: f32,
    pub max_faces: i32,
    pub image_url_expiry: Duration,
}

impl<'a> FaceSearchConfig<'a> {
    #[must_use]
    pub fn from_settings(settings: &'a AppSettings) -> Self {
        Self {
            collection_id: &settings.aws.collection_id,
            threshold: settings.search.face_match_threshold,
            max_faces: settings.search.max_faces,
            image_url_expiry: settings.search.image_url_expiry(),
        }
    }
}

/// Searches the collection for faces similar to the one in the uploaded image at `key`.
///
/// Every match gets a read URL for the image stored under its external id. The URLs
/// are signed concurrently, but the matches keep the order the face index ranked
/// them in. If any URL cannot be signed the whole search fails.
#[instrument(skip(face_index, object_store, config))]
pub async fn search_face(
    face_index: &dyn FaceIndex,
    object_store: &dyn ObjectStore,
    config: FaceSearchConfig<'_>,
    key: Option<&str>,
) -> Result<SearchFaceResponse, SearchError> {
    let key = key
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(SearchError::MissingKey)?;

    let face_matches = face_index
        .search_faces_by_image(FaceSearchQuery {
            collection_id: config.collection_id,
            image_key: key,
            threshold: config.threshold,
            max_faces: config.max_faces,
        })
        .await
        .map_err(|e| match e {
            FaceIndexError::NoFaceInImage => SearchError::NoFaceDetected(key.to_owned()),
            other => SearchError::FaceIndex(other),
        })?;

    if face_matches.is_empty() {
        return Err(SearchError::NoMatch);
    }
    info!("Found {} matches.", face_matches.len());

    let matches = try_join_all(
        face_matches
            .into_iter()
            .map(|face_match| sign_match(object_store, face_match, config.image_url_expiry)),
    )
    .await?;

    Ok(SearchFaceResponse {
        message: "Matches found!".to_owned(),
        matches,
    })
}

async fn sign_match(
    object_store: &dyn ObjectStore,
    face_match: FaceMatch,
    expires_in: Duration,
) -> Result<MatchResult, SearchError> {
    let person_id = face_match
        .external_image_id
        .ok_or(SearchError::MissingExternalId(face_match.face_id))?;
    let image_url = object_store.presign_get(&person_id, expires_in).await?;

    Ok(MatchResult {
        similarity: format_similarity(face_match.similarity),
        person_id,
        image_url,
    })
}
