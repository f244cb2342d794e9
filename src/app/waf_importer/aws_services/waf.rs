use super::{BoxError, WafApi, WafResourceKind, WafSummary};
use async_trait::async_trait;
use aws_sdk_waf as waf;
use tracing::debug;

/// `WafApi` backed by the AWS SDK WAF Classic client
pub struct WafService {
    client: waf::Client,
}

impl WafService {
    pub fn new(client: waf::Client) -> Self {
        Self { client }
    }

    pub fn from_config(aws_config: &aws_config::SdkConfig) -> Self {
        Self::new(waf::Client::new(aws_config))
    }
}

/// Project SDK summary items onto id/name pairs.
fn summarize<T>(
    items: &[T],
    id: impl Fn(&T) -> &str,
    name: impl Fn(&T) -> &str,
) -> Vec<WafSummary> {
    items
        .iter()
        .map(|item| WafSummary::new(id(item), name(item)))
        .collect()
}

#[async_trait]
impl WafApi for WafService {
    async fn list_summaries(&self, kind: WafResourceKind) -> Result<Vec<WafSummary>, BoxError> {
        debug!("Calling WAF {}", kind.list_operation());
        let client = &self.client;

        let summaries = match kind {
            WafResourceKind::WebAcl => {
                let output = client
                    .list_web_acls()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(output.web_acls(), |s| s.web_acl_id(), |s| s.name())
            }
            WafResourceKind::ByteMatchSet => {
                let output = client
                    .list_byte_match_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(
                    output.byte_match_sets(),
                    |s| s.byte_match_set_id(),
                    |s| s.name(),
                )
            }
            WafResourceKind::GeoMatchSet => {
                let output = client
                    .list_geo_match_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(
                    output.geo_match_sets(),
                    |s| s.geo_match_set_id(),
                    |s| s.name(),
                )
            }
            WafResourceKind::IpSet => {
                let output = client
                    .list_ip_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(output.ip_sets(), |s| s.ip_set_id(), |s| s.name())
            }
            WafResourceKind::RateBasedRule => {
                let output = client
                    .list_rate_based_rules()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(output.rules(), |s| s.rule_id(), |s| s.name())
            }
            WafResourceKind::RegexMatchSet => {
                let output = client
                    .list_regex_match_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(
                    output.regex_match_sets(),
                    |s| s.regex_match_set_id(),
                    |s| s.name(),
                )
            }
            WafResourceKind::RegexPatternSet => {
                let output = client
                    .list_regex_pattern_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(
                    output.regex_pattern_sets(),
                    |s| s.regex_pattern_set_id(),
                    |s| s.name(),
                )
            }
            WafResourceKind::Rule => {
                let output = client
                    .list_rules()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(output.rules(), |s| s.rule_id(), |s| s.name())
            }
            WafResourceKind::RuleGroup => {
                let output = client
                    .list_rule_groups()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(output.rule_groups(), |s| s.rule_group_id(), |s| s.name())
            }
            WafResourceKind::SizeConstraintSet => {
                let output = client
                    .list_size_constraint_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(
                    output.size_constraint_sets(),
                    |s| s.size_constraint_set_id(),
                    |s| s.name(),
                )
            }
            WafResourceKind::SqlInjectionMatchSet => {
                let output = client
                    .list_sql_injection_match_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(
                    output.sql_injection_match_sets(),
                    |s| s.sql_injection_match_set_id(),
                    |s| s.name(),
                )
            }
            WafResourceKind::XssMatchSet => {
                let output = client
                    .list_xss_match_sets()
                    .send()
                    .await
                    .map_err(waf::Error::from)?;
                summarize(
                    output.xss_match_sets(),
                    |s| s.xss_match_set_id(),
                    |s| s.name(),
                )
            }
        };

        Ok(summaries)
    }
}
