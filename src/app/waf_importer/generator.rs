use super::aws_services::{BoxError, WafApi, WafResourceKind};
use super::normalizers::load_resources;
use super::sdk_errors::ImportError;
use super::state::ImportableResource;
use aws_smithy_types::error::display::DisplayErrorContext;
use std::time::Instant;
use tracing::{debug, error, info};

/// Enumerates every WAF Classic resource family through one shared client.
pub struct WafGenerator<A: WafApi> {
    api: A,
}

impl<A: WafApi> WafGenerator<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Run all twelve listers in order and return the collected descriptors.
    ///
    /// Stops at the first failing list call; nothing collected before the
    /// failure is returned.
    pub async fn init_resources(&self) -> Result<Vec<ImportableResource>, ImportError> {
        let start = Instant::now();
        let mut resources = Vec::new();

        for kind in WafResourceKind::ALL {
            let loaded = self.load(kind).await?;
            resources.extend(loaded);
        }

        info!(
            "Loaded {} WAF resources in {:.2?}",
            resources.len(),
            start.elapsed()
        );
        Ok(resources)
    }

    /// Run a single lister
    pub async fn load(&self, kind: WafResourceKind) -> Result<Vec<ImportableResource>, ImportError> {
        debug!("Listing {} via {}", kind, kind.list_operation());

        let summaries = self.api.list_summaries(kind).await.map_err(|source| {
            error!("{}", failure_message(kind, &source));
            ImportError::ListFailed { kind, source }
        })?;

        let resources = load_resources(kind, &summaries);
        info!("Found {} {} resources", resources.len(), kind);
        Ok(resources)
    }

    pub fn api(&self) -> &A {
        &self.api
    }
}

/// Log line for a failed list call, including every error in the source chain
fn failure_message(kind: WafResourceKind, source: &BoxError) -> String {
    format!(
        "{} failed: {}",
        kind.list_operation(),
        DisplayErrorContext(&**source)
    )
}
