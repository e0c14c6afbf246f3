//! Wire types of the face search API, as seen from the client.

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UploadGrant {
    pub upload_url: String,
    pub key: String,
}

#[derive(Serialize, Debug)]
pub struct SearchFaceRequest<'a> {
    pub key: &'a str,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub person_id: String,
    pub similarity: String,
    pub image_url: String,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchFaceResponse {
    pub message: String,
    #[serde(default)]
    pub matches: Vec<MatchResult>,
}

/// Body the API sends along with error statuses.
#[derive(Deserialize, Debug)]
pub(crate) struct ErrorBody {
    pub message: Option<String>,
}
