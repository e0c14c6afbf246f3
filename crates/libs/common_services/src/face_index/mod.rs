//! The face-recognition service that owns the embeddings. Detection, feature
//! extraction and similarity ranking all happen on the other side of this trait.

mod error;
mod rekognition;

pub use error::*;
pub use rekognition::*;

use async_trait::async_trait;

/// A face search using a stored image as the query.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceSearchQuery<'a> {
    pub collection_id: &'a str,
    /// Object key of the query image.
    pub image_key: &'a str,
    /// Minimum similarity (0-100) for a face to be returned.
    pub threshold: f32,
    pub max_faces: i32,
}

/// One ranked result of a face search.
#[derive(Debug, Clone, PartialEq)]
pub struct FaceMatch {
    pub face_id: String,
    /// The identifier the face was registered under, if any.
    pub external_image_id: Option<String>,
    pub similarity: f32,
}

/// A face registered in a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedFace {
    pub face_id: String,
    pub external_image_id: Option<String>,
}

#[async_trait]
pub trait FaceIndex: Send + Sync {
    /// Matches ordered by similarity, highest first, as ranked by the service.
    async fn search_faces_by_image(
        &self,
        query: FaceSearchQuery<'_>,
    ) -> Result<Vec<FaceMatch>, FaceIndexError>;

    /// Registers the faces found in the stored image at `image_key`. An empty
    /// result means no face was detected.
    async fn index_faces(
        &self,
        collection_id: &str,
        image_key: &str,
        external_image_id: &str,
    ) -> Result<Vec<IndexedFace>, FaceIndexError>;

    async fn list_faces(
        &self,
        collection_id: &str,
        max_results: i32,
    ) -> Result<Vec<IndexedFace>, FaceIndexError>;

    async fn list_collections(&self) -> Result<Vec<String>, FaceIndexError>;

    async fn create_collection(&self, collection_id: &str) -> Result<(), FaceIndexError>;
}
