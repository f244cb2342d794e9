//! WAF Importer - AWS WAF Classic resource discovery for infrastructure-as-code import
//!
//! The importer lists every AWS WAF Classic resource in an account (web ACLs,
//! rules, rule groups and the match/pattern sets they reference) and turns each
//! one into an [`ImportableResource`]: the provider id, a generated resource
//! name, the Terraform resource type and the attribute prefixes whose empty
//! values must be preserved.
//!
//! # Core Features
//!
//! - **Twelve resource families**: one list call each, executed sequentially
//! - **All-or-nothing runs**: the first failing call aborts the whole run
//! - **Deterministic output**: resources come back in a fixed family order
//!
//! # Getting Started
//!
//! ```no_run
//! use wafimporter::app::waf_importer::{create_aws_config, ImporterConfig, WafGenerator, WafService};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let aws_config = create_aws_config(&ImporterConfig::default()).await;
//! let generator = WafGenerator::new(WafService::from_config(&aws_config));
//! let resources = generator.init_resources().await?;
//! println!("{} WAF resources", resources.len());
//! # Ok(())
//! # }
//! ```

#![warn(clippy::all, rust_2018_idioms)]

// Include logging macros first
#[macro_use]
pub mod logging_macros;

pub mod app;
pub use app::waf_importer::ImportableResource;
