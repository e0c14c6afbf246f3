use crate::constants::{
    default_collection_id, default_face_match_threshold, default_image_url_expiry_secs,
    default_max_faces, default_upload_url_expiry_secs,
};
use serde::Deserialize;

/// Settings exactly as they come out of `settings.yaml` and the environment.
#[derive(Debug, Deserialize, Clone)]
pub struct RawSettings {
    pub api: ApiSettings,
    pub aws: RawAwsSettings,
    #[serde(default)]
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

/// Logging configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingSettings {
    pub level: String,
}

/// Configuration for the API server.
#[derive(Debug, Deserialize, Clone)]
pub struct ApiSettings {
    pub host: String,
    pub port: u32,
    /// Origins allowed by CORS. An empty list allows any origin.
    #[serde(default)]
    pub allowed_origins: Vec<String>,
    pub public_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RawAwsSettings {
    /// Empty means: let the AWS default provider chain decide.
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub bucket_name: String,
    #[serde(default = "default_collection_id")]
    pub collection_id: String,
}

/// Tuning of the face search and the lifetime of the signed URLs it hands out.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchSettings {
    #[serde(default = "default_face_match_threshold")]
    pub face_match_threshold: f32,
    #[serde(default = "default_max_faces")]
    pub max_faces: i32,
    #[serde(default = "default_upload_url_expiry_secs")]
    pub upload_url_expiry_secs: u64,
    #[serde(default = "default_image_url_expiry_secs")]
    pub image_url_expiry_secs: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            face_match_threshold: default_face_match_threshold(),
            max_faces: default_max_faces(),
            upload_url_expiry_secs: default_upload_url_expiry_secs(),
            image_url_expiry_secs: default_image_url_expiry_secs(),
        }
    }
}
