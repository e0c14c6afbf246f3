use super::{FaceIndex, FaceIndexError, FaceMatch, FaceSearchQuery, IndexedFace};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_rekognition::Client;
use aws_sdk_rekognition::error::{DisplayErrorContext, SdkError};
use aws_sdk_rekognition::operation::search_faces_by_image::SearchFacesByImageError;
use aws_sdk_rekognition::types::{Face, Image, S3Object};
use tracing::{debug, instrument};

/// [`FaceIndex`] backed by AWS Rekognition, reading images from one S3 bucket.
#[derive(Clone, Debug)]
pub struct RekognitionFaceIndex {
    client: Client,
    bucket: String,
}

impl RekognitionFaceIndex {
    #[must_use]
    pub fn new(sdk_config: &SdkConfig, bucket: impl Into<String>) -> Self {
        Self {
            client: Client::new(sdk_config),
            bucket: bucket.into(),
        }
    }

    fn s3_image(&self, key: &str) -> Image {
        Image::builder()
            .s3_object(S3Object::builder().bucket(&self.bucket).name(key).build())
            .build()
    }
}

fn service_error<E: std::error::Error>(err: E) -> FaceIndexError {
    FaceIndexError::Service(DisplayErrorContext(err).to_string())
}

fn indexed_face(face: &Face) -> Option<IndexedFace> {
    Some(IndexedFace {
        face_id: face.face_id()?.to_owned(),
        external_image_id: face.external_image_id().map(ToOwned::to_owned),
    })
}

/// A match missing its face id or score fails the whole search.
fn face_match(
    face_match: &aws_sdk_rekognition::types::FaceMatch,
) -> Result<FaceMatch, FaceIndexError> {
    let face = face_match
        .face()
        .ok_or_else(|| FaceIndexError::Service("face match without a face".to_owned()))?;
    let face_id = face
        .face_id()
        .ok_or_else(|| FaceIndexError::Service("matched face without a face id".to_owned()))?;
    let similarity = face_match.similarity().ok_or_else(|| {
        FaceIndexError::Service(format!("match for face {face_id} has no similarity"))
    })?;

    Ok(FaceMatch {
        face_id: face_id.to_owned(),
        external_image_id: face.external_image_id().map(ToOwned::to_owned),
        similarity,
    })
}

// Rekognition reports a query image without any face as an invalid parameter.
fn search_error<R>(
    err: SdkError<SearchFacesByImageError, R>,
    query: &FaceSearchQuery<'_>,
) -> FaceIndexError
where
    R: std::fmt::Debug + 'static,
{
    match err.as_service_error() {
        Some(e) if e.is_invalid_parameter_exception() => FaceIndexError::NoFaceInImage,
        Some(e) if e.is_resource_not_found_exception() => {
            FaceIndexError::CollectionNotFound(query.collection_id.to_owned())
        }
        Some(e) if e.is_invalid_s3_object_exception() => {
            FaceIndexError::ImageUnavailable(query.image_key.to_owned())
        }
        _ => service_error(err),
    }
}

#[async_trait]
impl FaceIndex for RekognitionFaceIndex {
    #[instrument(skip(self))]
    async fn search_faces_by_image(
        &self,
        query: FaceSearchQuery<'_>,
    ) -> Result<Vec<FaceMatch>, FaceIndexError> {
        let response = self
            .client
            .search_faces_by_image()
            .collection_id(query.collection_id)
            .image(self.s3_image(query.image_key))
            .face_match_threshold(query.threshold)
            .max_faces(query.max_faces)
            .send()
            .await
            .map_err(|e| search_error(e, &query))?;

        let matches = response
            .face_matches()
            .iter()
            .map(face_match)
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Rekognition returned {} matches", matches.len());
        Ok(matches)
    }

    #[instrument(skip(self))]
    async fn index_faces(
        &self,
        collection_id: &str,
        image_key: &str,
        external_image_id: &str,
    ) -> Result<Vec<IndexedFace>, FaceIndexError> {
        let response = self
            .client
            .index_faces()
            .collection_id(collection_id)
            .image(self.s3_image(image_key))
            .external_image_id(external_image_id)
            .send()
            .await
            .map_err(service_error)?;

        Ok(response
            .face_records()
            .iter()
            .filter_map(|record| record.face().and_then(indexed_face))
            .collect())
    }

    #[instrument(skip(self))]
    async fn list_faces(
        &self,
        collection_id: &str,
        max_results: i32,
    ) -> Result<Vec<IndexedFace>, FaceIndexError> {
        let response = self
            .client
            .list_faces()
            .collection_id(collection_id)
            .max_results(max_results)
            .send()
            .await
            .map_err(service_error)?;

        Ok(response.faces().iter().filter_map(indexed_face).collect())
    }

    #[instrument(skip(self))]
    async fn list_collections(&self) -> Result<Vec<String>, FaceIndexError> {
        let mut collection_ids = Vec::new();
        let mut next_token: Option<String> = None;

        loop {
            let page = self
                .client
                .list_collections()
                .set_next_token(next_token.take())
                .send()
                .await
                .map_err(service_error)?;
            collection_ids.extend(page.collection_ids().iter().cloned());

            match page.next_token() {
                Some(token) => next_token = Some(token.to_owned()),
                None => break,
            }
        }

        Ok(collection_ids)
    }

    #[instrument(skip(self))]
    async fn create_collection(&self, collection_id: &str) -> Result<(), FaceIndexError> {
        self.client
            .create_collection()
            .collection_id(collection_id)
            .send()
            .await
            .map_err(service_error)?;
        Ok(())
    }
}
