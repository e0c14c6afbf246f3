use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Serialize, ToSchema, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchFaceRequest {
    /// Object key returned by `/api/get-presigned-url`, after the image was uploaded.
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    /// Identifier the matched face was registered under; also the key of its source image.
    pub person_id: String,
    /// Similarity in percent, with two decimals.
    pub similarity: String,
    /// Pre-signed URL of the matched person's source image.
    pub image_url: String,
}

#[derive(Serialize, Deserialize, ToSchema, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFaceResponse {
    pub message: String,
    /// Matches in the order ranked by the face index, most similar first.
    pub matches: Vec<MatchResult>,
}
