use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadGrantResponse {
    /// Pre-signed URL accepting a single `PUT` of a JPEG image.
    pub upload_url: String,
    /// Object key to pass to the face search once the upload finished.
    pub key: String,
    /// Seconds until `upload_url` stops working.
    pub expires_in: u64,
}
