use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

static UNSAFE_NAME_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9A-Za-z_\-]").expect("static regex is valid"));

/// One discovered cloud resource, ready to be handed to an importer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportableResource {
    pub id: String,            // Provider-assigned identifier, never rewritten
    pub resource_name: String, // <name>_<id prefix>
    pub resource_type: String, // aws_waf_web_acl, aws_waf_rule, ...
    pub provider: String,
    /// Attribute prefixes whose empty values must survive serialization
    pub allow_empty_values: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

impl ImportableResource {
    /// Build a descriptor whose only known attribute is its id.
    pub fn new_simple(
        id: impl Into<String>,
        resource_name: impl Into<String>,
        resource_type: impl Into<String>,
        provider: impl Into<String>,
        allow_empty_values: &[&str],
    ) -> Self {
        let id = id.into();
        let mut attributes = BTreeMap::new();
        attributes.insert("id".to_string(), id.clone());

        Self {
            id,
            resource_name: resource_name.into(),
            resource_type: resource_type.into(),
            provider: provider.into(),
            allow_empty_values: allow_empty_values.iter().map(|p| p.to_string()).collect(),
            attributes,
        }
    }

    /// Terraform address, e.g. `aws_waf_web_acl.myacl_abcd1234`
    pub fn address(&self) -> String {
        format!(
            "{}.{}",
            self.resource_type,
            sanitize_resource_name(&self.resource_name)
        )
    }

    /// Whether an empty value under `attribute` should be kept
    pub fn allows_empty_value(&self, attribute: &str) -> bool {
        self.allow_empty_values
            .iter()
            .any(|prefix| attribute.starts_with(prefix.as_str()))
    }
}

/// Make a resource name usable as a Terraform identifier.
///
/// Characters outside `[0-9A-Za-z_-]` become `-`. Names starting with a digit
/// get a `tfer--` prefix since Terraform identifiers cannot start with one.
pub fn sanitize_resource_name(name: &str) -> String {
    let sanitized = UNSAFE_NAME_CHARS.replace_all(name, "-").into_owned();
    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        format!("tfer--{}", sanitized)
    } else {
        sanitized
    }
}
