//! One-shot maintenance of the face collection: bootstrapping it, filling it
//! from the bucket and inspecting what it holds.

mod bulk_index;
mod list_faces;

pub use bulk_index::*;
pub use list_faces::*;

use crate::face_index::{FaceIndex, FaceIndexError};
use tracing::{info, instrument};

/// Whether [`ensure_collection`] had to create the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    AlreadyExists,
    Created,
}

/// Creates `collection_id` unless the face index already has it.
#[instrument(skip(face_index))]
pub async fn ensure_collection(
    face_index: &dyn FaceIndex,
    collection_id: &str,
) -> Result<CollectionStatus, FaceIndexError> {
    let collections = face_index.list_collections().await?;
    info!("Existing collections: {:?}", collections);
    if collections.iter().any(|c| c == collection_id) {
        info!("Collection '{collection_id}' already exists.");
        return Ok(CollectionStatus::AlreadyExists);
    }

    info!("Creating collection: {collection_id}");
    face_index.create_collection(collection_id).await?;
    info!("Collection '{collection_id}' created.");
    Ok(CollectionStatus::Created)
}
