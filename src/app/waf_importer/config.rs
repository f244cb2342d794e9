//! Importer configuration.
//!
//! Settings come from an optional `wafimporter.toml` and are overridden by
//! command-line flags. Anything left unset falls through to the AWS SDK's
//! default provider chain (environment, shared config files, IMDS).
//!
//! # wafimporter.toml Format
//!
//! ```toml
//! region = "us-east-1"
//! profile = "security-audit"
//! endpoint_url = "http://localhost:4566"
//!
//! [credentials]
//! access_key_id = "AKIA..."
//! secret_access_key = "..."
//! session_token = "..."
//! ```

use anyhow::{Context, Result};
use aws_credential_types::Credentials;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Static credentials read from the config file
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct StaticCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
}

impl std::fmt::Debug for StaticCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"** redacted **")
            .field("session_token", &self.session_token.as_ref().map(|_| "** redacted **"))
            .finish()
    }
}

impl StaticCredentials {
    /// Create AWS SDK Credentials from these keys
    pub fn to_aws_credentials(&self) -> Credentials {
        Credentials::from_keys(
            &self.access_key_id,
            &self.secret_access_key,
            self.session_token.clone(),
        )
    }
}

/// Resolved importer settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImporterConfig {
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub profile: Option<String>,
    /// Custom endpoint, e.g. a local AWS emulator
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub credentials: Option<StaticCredentials>,
}

impl ImporterConfig {
    /// Default config file location, `<config_dir>/wafimporter.toml`
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "", "wafimporter")
            .map(|dirs| dirs.config_dir().join("wafimporter.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit path must exist and parse. The default path is optional:
    /// when it is missing an empty configuration is returned.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            return Self::load_from_path(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_path(&path),
            Some(path) => {
                debug!("No config file at {:?}, using defaults", path);
                Ok(Self::default())
            }
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific TOML file
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {:?}", path))?;
        let config: ImporterConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {:?}", path))?;

        debug!(
            "Loaded config from {:?}: region={:?}, profile={:?}, endpoint={:?}, static_credentials={}",
            path,
            config.region,
            config.profile,
            config.endpoint_url,
            config.credentials.is_some()
        );
        Ok(config)
    }

    /// Apply command-line overrides (CLI > config file)
    pub fn with_overrides(
        mut self,
        region: Option<String>,
        profile: Option<String>,
        endpoint_url: Option<String>,
    ) -> Self {
        if region.is_some() {
            self.region = region;
        }
        if profile.is_some() {
            self.profile = profile;
        }
        if endpoint_url.is_some() {
            self.endpoint_url = endpoint_url;
        }
        self
    }
}
