use thiserror::Error;

#[derive(Debug, Error)]
pub enum FaceIndexError {
    #[error("no face detected in the query image")]
    NoFaceInImage,

    #[error("collection '{0}' does not exist")]
    CollectionNotFound(String),

    #[error("image '{0}' could not be read from storage")]
    ImageUnavailable(String),

    #[error("face index request failed: {0}")]
    Service(String),
}
