//! Access to the AWS WAF Classic list operations.
//!
//! The importer never talks to `aws_sdk_waf` directly. Everything goes through
//! the [`WafApi`] trait so the generator can be driven by the real
//! [`WafService`] or by an in-memory fake in tests.

use async_trait::async_trait;
use std::fmt;

pub mod waf;

pub use waf::WafService;

/// Boxed error returned by a failed list call (SDK, transport or fake).
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The twelve WAF Classic resource families the importer enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WafResourceKind {
    WebAcl,
    ByteMatchSet,
    GeoMatchSet,
    IpSet,
    RateBasedRule,
    RegexMatchSet,
    RegexPatternSet,
    Rule,
    RuleGroup,
    SizeConstraintSet,
    SqlInjectionMatchSet,
    XssMatchSet,
}

impl WafResourceKind {
    /// Enumeration order used by the generator. Output order follows it.
    pub const ALL: [WafResourceKind; 12] = [
        WafResourceKind::WebAcl,
        WafResourceKind::ByteMatchSet,
        WafResourceKind::GeoMatchSet,
        WafResourceKind::IpSet,
        WafResourceKind::RateBasedRule,
        WafResourceKind::RegexMatchSet,
        WafResourceKind::RegexPatternSet,
        WafResourceKind::Rule,
        WafResourceKind::RuleGroup,
        WafResourceKind::SizeConstraintSet,
        WafResourceKind::SqlInjectionMatchSet,
        WafResourceKind::XssMatchSet,
    ];

    /// Terraform resource type emitted for this family
    pub fn terraform_type(&self) -> &'static str {
        match self {
            WafResourceKind::WebAcl => "aws_waf_web_acl",
            WafResourceKind::ByteMatchSet => "aws_waf_byte_match_set",
            WafResourceKind::GeoMatchSet => "aws_waf_geo_match_set",
            WafResourceKind::IpSet => "aws_waf_ipset",
            WafResourceKind::RateBasedRule => "aws_waf_rate_based_rule",
            WafResourceKind::RegexMatchSet => "aws_waf_regex_match_set",
            WafResourceKind::RegexPatternSet => "aws_waf_regex_pattern_set",
            WafResourceKind::Rule => "aws_waf_rule",
            WafResourceKind::RuleGroup => "aws_waf_rule_group",
            WafResourceKind::SizeConstraintSet => "aws_waf_size_constraint_set",
            WafResourceKind::SqlInjectionMatchSet => "aws_waf_sql_injection_match_set",
            WafResourceKind::XssMatchSet => "aws_waf_xss_match_set",
        }
    }

    /// Name of the WAF API operation backing this family
    pub fn list_operation(&self) -> &'static str {
        match self {
            WafResourceKind::WebAcl => "ListWebACLs",
            WafResourceKind::ByteMatchSet => "ListByteMatchSets",
            WafResourceKind::GeoMatchSet => "ListGeoMatchSets",
            WafResourceKind::IpSet => "ListIPSets",
            WafResourceKind::RateBasedRule => "ListRateBasedRules",
            WafResourceKind::RegexMatchSet => "ListRegexMatchSets",
            WafResourceKind::RegexPatternSet => "ListRegexPatternSets",
            WafResourceKind::Rule => "ListRules",
            WafResourceKind::RuleGroup => "ListRuleGroups",
            WafResourceKind::SizeConstraintSet => "ListSizeConstraintSets",
            WafResourceKind::SqlInjectionMatchSet => "ListSqlInjectionMatchSets",
            WafResourceKind::XssMatchSet => "ListXssMatchSets",
        }
    }
}

impl fmt::Display for WafResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.terraform_type())
    }
}

/// The two fields the importer reads from any WAF `*Summary` item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WafSummary {
    pub id: String,
    pub name: String,
}

impl WafSummary {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A client able to run the WAF Classic list calls.
///
/// Each call is issued once with no filter and no pagination marker. An `Err`
/// means the whole call failed; implementations must not return partial
/// results alongside an error.
#[async_trait]
pub trait WafApi: Send + Sync {
    async fn list_summaries(&self, kind: WafResourceKind) -> Result<Vec<WafSummary>, BoxError>;
}
