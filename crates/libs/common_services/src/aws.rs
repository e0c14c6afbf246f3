use aws_config::meta::region::RegionProviderChain;
use aws_config::{BehaviorVersion, SdkConfig};
use aws_sdk_s3::config::Region;
use tracing::info;

/// Region used when neither the settings nor the environment name one.
const FALLBACK_REGION: &str = "us-east-1";

/// Loads the shared AWS configuration used by both the S3 and Rekognition clients.
///
/// An explicitly configured region wins, then the default provider chain
/// (`AWS_REGION`, profile files, IMDS), then [`FALLBACK_REGION`].
pub async fn load_aws_config(region: Option<&str>) -> SdkConfig {
    let region_provider = RegionProviderChain::first_try(region.map(|r| Region::new(r.to_owned())))
        .or_default_provider()
        .or_else(Region::new(FALLBACK_REGION));

    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(region_provider)
        .load()
        .await;
    info!(
        "AWS configured for region {}",
        sdk_config.region().map_or("<none>", |r| r.as_ref())
    );
    sdk_config
}
