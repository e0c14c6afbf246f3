use thiserror::Error;

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("invalid signing configuration: {0}")]
    SigningConfig(String),

    #[error("storage request failed: {0}")]
    Request(String),
}
