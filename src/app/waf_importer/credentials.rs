use super::config::ImporterConfig;
use aws_config::BehaviorVersion;
use aws_types::region::Region;
use tracing::{debug, info};

/// The only region that serves the WAF Classic API
pub const WAF_CLASSIC_REGION: &str = "us-east-1";

/// Pick the region the WAF client is built for.
///
/// WAF Classic is global, so this is always [`WAF_CLASSIC_REGION`]; a
/// different requested region is reported and ignored.
pub fn resolve_waf_region(config: &ImporterConfig) -> Region {
    let query_region = WAF_CLASSIC_REGION;

    if let Some(requested) = config.region.as_deref() {
        if requested != query_region {
            info!(
                "WAF Classic is a global service; querying {} instead of requested region {}",
                query_region, requested
            );
        }
    }

    Region::new(query_region)
}

/// Build the SDK configuration for the WAF client
pub async fn create_aws_config(config: &ImporterConfig) -> aws_config::SdkConfig {
    let region = resolve_waf_region(config);
    debug!(
        "Creating AWS config: region={}, profile={:?}, endpoint={:?}",
        region, config.profile, config.endpoint_url
    );

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region);

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }
    if let Some(endpoint_url) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint_url);
    }
    if let Some(credentials) = &config.credentials {
        debug!(
            "Using static credentials for access key {}",
            credentials.access_key_id
        );
        loader = loader.credentials_provider(credentials.to_aws_credentials());
    }

    loader.load().await
}
