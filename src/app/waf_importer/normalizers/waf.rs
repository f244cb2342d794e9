use super::*;

/// Attribute prefixes whose empty values WAF resources keep
pub const WAF_ALLOW_EMPTY_VALUES: &[&str] = &["tags."];

/// Length of the id fragment appended to resource names
pub const ID_SUFFIX_LEN: usize = 8;

/// Normalizer for every AWS WAF Classic resource family
pub struct WafNormalizer {
    kind: WafResourceKind,
}

impl WafNormalizer {
    pub fn new(kind: WafResourceKind) -> Self {
        Self { kind }
    }
}

impl ResourceNormalizer for WafNormalizer {
    fn normalize(&self, summary: &WafSummary) -> ImportableResource {
        let resource_name = format!("{}_{}", summary.name, id_prefix(&summary.id));
        trace_trace!(
            "Normalized {} {} as {}",
            self.kind,
            summary.id,
            resource_name
        );

        ImportableResource::new_simple(
            summary.id.clone(),
            resource_name,
            self.kind.terraform_type(),
            AWS_PROVIDER,
            WAF_ALLOW_EMPTY_VALUES,
        )
    }

    fn resource_type(&self) -> &'static str {
        self.kind.terraform_type()
    }
}

/// First `ID_SUFFIX_LEN` characters of `id`, or all of it when shorter.
///
/// Counts chars rather than bytes so a multi-byte id cannot split a code point.
pub fn id_prefix(id: &str) -> &str {
    match id.char_indices().nth(ID_SUFFIX_LEN) {
        Some((end, _)) => &id[..end],
        None => id,
    }
}

/// Convert one successful list response into descriptors, preserving order.
pub fn load_resources(kind: WafResourceKind, summaries: &[WafSummary]) -> Vec<ImportableResource> {
    let normalizer = WafNormalizer::new(kind);
    summaries
        .iter()
        .map(|summary| normalizer.normalize(summary))
        .collect()
}
