//! WAF Generator Integration Tests
//!
//! Drives `WafGenerator` with an in-memory `WafApi` so every list call can be
//! scripted.
//!
//! # Test Coverage
//!
//! - **Descriptor shape**: id, generated name, type, provider, empty-value prefixes
//! - **Traversal order**: twelve families in fixed order, one call each
//! - **Abort on failure**: first failing call stops the run and drops results

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use std::collections::HashMap;
use std::sync::Mutex;
use wafimporter::app::waf_importer::{
    BoxError, ImportError, ImportableResource, WafApi, WafGenerator, WafResourceKind, WafSummary,
};

#[derive(Default)]
struct FakeWafApi {
    responses: HashMap<WafResourceKind, Vec<WafSummary>>,
    failing: Option<WafResourceKind>,
    calls: Mutex<Vec<WafResourceKind>>,
}

impl FakeWafApi {
    fn with(mut self, kind: WafResourceKind, summaries: Vec<WafSummary>) -> Self {
        self.responses.insert(kind, summaries);
        self
    }

    fn failing_at(mut self, kind: WafResourceKind) -> Self {
        self.failing = Some(kind);
        self
    }

    fn calls(&self) -> Vec<WafResourceKind> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WafApi for FakeWafApi {
    async fn list_summaries(&self, kind: WafResourceKind) -> Result<Vec<WafSummary>, BoxError> {
        self.calls.lock().unwrap().push(kind);
        if self.failing == Some(kind) {
            return Err(format!("AccessDeniedException: not allowed to call {}", kind.list_operation()).into());
        }
        Ok(self.responses.get(&kind).cloned().unwrap_or_default())
    }
}

/// One summary per family, each id prefixed by the family's position
fn one_of_each() -> FakeWafApi {
    WafResourceKind::ALL
        .iter()
        .enumerate()
        .fold(FakeWafApi::default(), |api, (index, kind)| {
            api.with(
                *kind,
                vec![WafSummary::new(
                    format!("{:02}aaaaaa-bbbb-cccc", index),
                    format!("item{}", index),
                )],
            )
        })
}

// ============================================================================
// Descriptor Tests
// ============================================================================

#[tokio::test]
async fn test_web_acl_descriptor() {
    let api = FakeWafApi::default().with(
        WafResourceKind::WebAcl,
        vec![WafSummary::new("abcd1234ef", "myacl")],
    );
    let generator = WafGenerator::new(api);

    let resources = generator.init_resources().await.unwrap();

    assert_eq!(
        resources,
        vec![ImportableResource::new_simple(
            "abcd1234ef",
            "myacl_abcd1234",
            "aws_waf_web_acl",
            "aws",
            &["tags."],
        )]
    );
    assert_eq!(resources[0].address(), "aws_waf_web_acl.myacl_abcd1234");
}

#[tokio::test]
async fn test_ids_are_not_transformed() {
    let ids = ["short", "0123456789abcdef", "with spaces and/slashes"];
    let api = FakeWafApi::default().with(
        WafResourceKind::RegexPatternSet,
        ids.iter().map(|id| WafSummary::new(*id, "patterns")).collect(),
    );

    let resources = WafGenerator::new(api).init_resources().await.unwrap();

    let got: Vec<&str> = resources.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(got, ids.to_vec());
    let names: Vec<&str> = resources.iter().map(|r| r.resource_name.as_str()).collect();
    assert_eq!(
        names,
        vec!["patterns_short", "patterns_01234567", "patterns_with spa"]
    );
}

#[tokio::test]
async fn test_every_descriptor_carries_type_provider_and_allowances() {
    let generator = WafGenerator::new(one_of_each());
    let resources = generator.init_resources().await.unwrap();

    for (resource, kind) in resources.iter().zip(WafResourceKind::ALL) {
        assert_eq!(resource.resource_type, kind.terraform_type());
        assert_eq!(resource.provider, "aws");
        assert_eq!(resource.allow_empty_values, vec!["tags.".to_string()]);
    }
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[tokio::test]
async fn test_output_follows_fixed_family_order() {
    let generator = WafGenerator::new(one_of_each());
    let resources = generator.init_resources().await.unwrap();

    let types: Vec<&str> = resources.iter().map(|r| r.resource_type.as_str()).collect();
    assert_eq!(
        types,
        vec![
            "aws_waf_web_acl",
            "aws_waf_byte_match_set",
            "aws_waf_geo_match_set",
            "aws_waf_ipset",
            "aws_waf_rate_based_rule",
            "aws_waf_regex_match_set",
            "aws_waf_regex_pattern_set",
            "aws_waf_rule",
            "aws_waf_rule_group",
            "aws_waf_size_constraint_set",
            "aws_waf_sql_injection_match_set",
            "aws_waf_xss_match_set",
        ]
    );
    assert_eq!(generator.api().calls(), WafResourceKind::ALL.to_vec());
}

#[tokio::test]
async fn test_length_is_sum_of_all_responses() {
    let api = FakeWafApi::default()
        .with(
            WafResourceKind::Rule,
            vec![
                WafSummary::new("rule0001-x", "a"),
                WafSummary::new("rule0002-x", "b"),
                WafSummary::new("rule0003-x", "c"),
            ],
        )
        .with(
            WafResourceKind::IpSet,
            vec![WafSummary::new("ipset001-x", "office")],
        )
        .with(
            WafResourceKind::XssMatchSet,
            vec![
                WafSummary::new("xss00001-x", "body"),
                WafSummary::new("xss00002-x", "query"),
            ],
        );

    let resources = WafGenerator::new(api).init_resources().await.unwrap();

    assert_eq!(resources.len(), 6);
    let names: Vec<&str> = resources.iter().map(|r| r.resource_name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "office_ipset001",
            "a_rule0001",
            "b_rule0002",
            "c_rule0003",
            "body_xss00001",
            "query_xss00002",
        ]
    );
}

#[tokio::test]
async fn test_no_resources_anywhere() {
    let generator = WafGenerator::new(FakeWafApi::default());
    let resources = generator.init_resources().await.unwrap();

    assert!(resources.is_empty());
    assert_eq!(generator.api().calls().len(), 12);
}

// ============================================================================
// Failure Tests
// ============================================================================

#[tokio::test]
async fn test_failure_stops_later_listers() {
    let api = one_of_each().failing_at(WafResourceKind::RegexMatchSet);
    let generator = WafGenerator::new(api);

    let error = generator.init_resources().await.unwrap_err();

    assert!(matches!(
        error,
        ImportError::ListFailed {
            kind: WafResourceKind::RegexMatchSet,
            ..
        }
    ));
    assert_eq!(
        generator.api().calls(),
        WafResourceKind::ALL[..6].to_vec(),
        "listers after the failing one must not run"
    );
}

#[tokio::test]
async fn test_failure_on_first_lister() {
    let generator = WafGenerator::new(one_of_each().failing_at(WafResourceKind::WebAcl));

    let error = generator.init_resources().await.unwrap_err();

    assert_eq!(error.kind(), WafResourceKind::WebAcl);
    assert_eq!(error.to_string(), "ListWebACLs failed while loading aws_waf_web_acl");
    assert!(error.detail().contains("AccessDeniedException"));
    assert_eq!(generator.api().calls(), vec![WafResourceKind::WebAcl]);
}

#[tokio::test]
async fn test_failure_on_last_lister_returns_no_partial_results() {
    let generator = WafGenerator::new(one_of_each().failing_at(WafResourceKind::XssMatchSet));

    let result = generator.init_resources().await;

    assert!(result.is_err());
    assert_eq!(generator.api().calls().len(), 12);
}

#[tokio::test]
async fn test_single_lister() {
    let api = one_of_each();
    let generator = WafGenerator::new(api);

    let resources = generator.load(WafResourceKind::SizeConstraintSet).await.unwrap();

    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].resource_name, "item9_09aaaaaa");
    assert_eq!(resources[0].resource_type, "aws_waf_size_constraint_set");
}
