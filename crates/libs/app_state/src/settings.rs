use crate::{ApiSettings, LoggingSettings, RawSettings, SearchSettings};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub api: ApiSettings,
    pub aws: AwsSettings,
    pub search: SearchSettings,
    pub logging: LoggingSettings,
}

/// Where the images live and which face collection they are indexed in.
#[derive(Debug, Deserialize, Clone)]
pub struct AwsSettings {
    pub region: Option<String>,
    pub bucket_name: String,
    pub collection_id: String,
}

impl From<RawSettings> for AppSettings {
    fn from(raw: RawSettings) -> Self {
        let region = Some(raw.aws.region.trim().to_owned()).filter(|r| !r.is_empty());

        Self {
            api: raw.api,
            aws: AwsSettings {
                region,
                bucket_name: raw.aws.bucket_name,
                collection_id: raw.aws.collection_id,
            },
            search: raw.search,
            logging: raw.logging,
        }
    }
}

impl SearchSettings {
    #[must_use]
    pub const fn upload_url_expiry(&self) -> Duration {
        Duration::from_secs(self.upload_url_expiry_secs)
    }

    #[must_use]
    pub const fn image_url_expiry(&self) -> Duration {
        Duration::from_secs(self.image_url_expiry_secs)
    }
}

impl LoggingSettings {
    /// `EnvFilter` directives giving each of `targets` the configured level.
    #[must_use]
    pub fn directives(&self, targets: &[&str]) -> String {
        let level = self.level.trim();
        targets
            .iter()
            .map(|target| format!("{target}={level}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}
