//! Gateway to the bucket holding both the captured query images and the
//! registered source images. It never moves image bytes itself: it hands out
//! pre-signed URLs and lists keys.

mod error;
mod s3;

pub use error::*;
pub use s3::*;

use async_trait::async_trait;
use std::time::Duration;

#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// A URL allowing a single `PUT` of `key` with the given content type.
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String, ObjectStoreError>;

    /// A URL allowing `GET` of `key` until it expires.
    async fn presign_get(&self, key: &str, expires_in: Duration)
    -> Result<String, ObjectStoreError>;

    /// Every key currently in the bucket.
    async fn list_keys(&self) -> Result<Vec<String>, ObjectStoreError>;
}
