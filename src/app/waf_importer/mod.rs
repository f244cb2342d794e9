pub mod aws_services;
pub mod config;
pub mod credentials;
pub mod generator;
pub mod normalizers;
pub mod output;
pub mod sdk_errors;
pub mod state;

pub use aws_services::{BoxError, WafApi, WafResourceKind, WafService, WafSummary};
pub use config::{ImporterConfig, StaticCredentials};
pub use credentials::{create_aws_config, resolve_waf_region, WAF_CLASSIC_REGION};
pub use generator::WafGenerator;
pub use normalizers::{ResourceNormalizer, WafNormalizer};
pub use output::{write_resources, write_resources_to, OutputFormat};
pub use sdk_errors::{categorize_error, ErrorCategory, ImportError};
pub use state::ImportableResource;
