use crate::face_index::{FaceIndex, FaceIndexError};
use crate::object_store::{ObjectStore, ObjectStoreError};
use thiserror::Error;
use tracing::{info, instrument, warn};

#[derive(Debug, Error)]
pub enum BulkIndexError {
    #[error("could not list bucket contents")]
    Listing(#[from] ObjectStoreError),

    #[error("indexing '{key}' failed")]
    Indexing {
        key: String,
        #[source]
        source: FaceIndexError,
    },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BulkIndexSummary {
    /// Images in which at least one face was registered.
    pub indexed: usize,
    /// Images in which no face was detected.
    pub without_face: usize,
}

/// Registers the faces of every image in the bucket, using each object key as
/// the external identifier.
///
/// Items are processed one at a time and already registered items are not rolled
/// back when a later one fails. There is no duplicate detection: running this
/// again registers every face again unless the face index deduplicates by itself.
#[instrument(skip(face_index, object_store))]
pub async fn bulk_index(
    face_index: &dyn FaceIndex,
    object_store: &dyn ObjectStore,
    collection_id: &str,
) -> Result<BulkIndexSummary, BulkIndexError> {
    let keys = object_store.list_keys().await?;
    let mut summary = BulkIndexSummary::default();
    if keys.is_empty() {
        info!("Bucket is empty. Nothing to index.");
        return Ok(summary);
    }
    info!("Found {} images to index.", keys.len());

    for key in keys {
        info!("-> Indexing: {key}");
        let faces = face_index
            .index_faces(collection_id, &key, &key)
            .await
            .map_err(|source| BulkIndexError::Indexing {
                key: key.clone(),
                source,
            })?;

        match faces.first() {
            Some(face) => {
                info!("   Success! Face ID: {}", face.face_id);
                summary.indexed += 1;
            }
            None => {
                warn!("   No face detected in {key}.");
                summary.without_face += 1;
            }
        }
    }

    info!(
        "Bulk indexing complete: {} indexed, {} without a face",
        summary.indexed, summary.without_face
    );
    Ok(summary)
}
