use crate::{AppSettings, RawSettings};
use color_eyre::eyre::{Result, bail};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Overrides the location of the settings file.
pub const CONFIG_PATH_ENV: &str = "FACE_SEARCH_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "config/settings.yaml";

pub fn load_app_settings() -> Result<AppSettings> {
    // Load .env first so it can feed both the APP__ overrides and the plain AWS variables.
    dotenv::from_path(".env").ok();
    let config_path = env::var(CONFIG_PATH_ENV)
        .map_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    load_settings_from_path(&config_path, true)
}

/// Loads settings from a yaml file, optionally layering the environment on top.
///
/// Environment overrides use the `APP` prefix with `__` as separator, e.g.
/// `APP__AWS__BUCKET_NAME`. The plain `AWS_REGION` and `BUCKET_NAME` variables are
/// honoured as a fallback when the file and the `APP` overrides leave them empty.
pub fn load_settings_from_path(config_path: &Path, read_env: bool) -> Result<AppSettings> {
    let config_path = config_path.canonicalize()?;
    debug!("Loading settings from {}", config_path.display());

    let mut builder = config::Config::builder().add_source(config::File::from(config_path));
    if read_env {
        builder = builder.add_source(
            config::Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );
    }

    let mut raw_settings = builder.build()?.try_deserialize::<RawSettings>()?;
    if read_env {
        apply_plain_env_fallbacks(&mut raw_settings, |name| env::var(name).ok());
    }

    let settings: AppSettings = raw_settings.into();
    validate(&settings)?;

    Ok(settings)
}

fn apply_plain_env_fallbacks(raw: &mut RawSettings, lookup: impl Fn(&str) -> Option<String>) {
    if raw.aws.region.trim().is_empty() {
        if let Some(region) = lookup("AWS_REGION") {
            raw.aws.region = region;
        }
    }
    if raw.aws.bucket_name.trim().is_empty() {
        if let Some(bucket) = lookup("BUCKET_NAME") {
            raw.aws.bucket_name = bucket;
        }
    }
}

fn validate(settings: &AppSettings) -> Result<()> {
    if settings.aws.bucket_name.trim().is_empty() {
        bail!("No bucket configured: set aws.bucket_name, APP__AWS__BUCKET_NAME or BUCKET_NAME");
    }
    if settings.aws.collection_id.trim().is_empty() {
        bail!("aws.collection_id must not be empty");
    }
    if !(0.0..=100.0).contains(&settings.search.face_match_threshold) {
        bail!(
            "search.face_match_threshold must be within 0..=100, got {}",
            settings.search.face_match_threshold
        );
    }
    if settings.search.max_faces < 1 {
        bail!("search.max_faces must be at least 1");
    }
    Ok(())
}
