use crate::face_index::{FaceIndex, FaceIndexError, IndexedFace};
use tracing::{info, instrument};

/// Lists up to `max_results` faces registered in the collection.
#[instrument(skip(face_index))]
pub async fn list_faces(
    face_index: &dyn FaceIndex,
    collection_id: &str,
    max_results: i32,
) -> Result<Vec<IndexedFace>, FaceIndexError> {
    info!("Listing faces in collection: {collection_id}");
    let faces = face_index.list_faces(collection_id, max_results).await?;
    info!("Found {} faces", faces.len());
    Ok(faces)
}
