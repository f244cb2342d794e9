use crate::app::waf_importer::aws_services::{WafResourceKind, WafSummary};
use crate::app::waf_importer::state::ImportableResource;

pub mod waf;

pub use waf::*;

/// Provider tag carried by every descriptor this crate produces
pub const AWS_PROVIDER: &str = "aws";

/// Trait for turning a list-call summary into an importable descriptor
pub trait ResourceNormalizer {
    /// Normalize one summary item
    fn normalize(&self, summary: &WafSummary) -> ImportableResource;

    /// Get the Terraform resource type this normalizer emits
    fn resource_type(&self) -> &'static str;
}
