//! Server configuration
//!
//! Values come from CLI flags or their environment variables (see `main.rs`)
//! and are validated here before anything touches the network.

use crate::error::{Error, Result};

pub const DEFAULT_BASE_URL: &str = "https://services.leadconnectorhq.com";
pub const DEFAULT_API_VERSION: &str = "2021-07-28";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which tools are visible when the server starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiscoveryMode {
    /// Only the meta-tools; categories are enabled on demand
    #[default]
    Progressive,
    /// Every category enabled up front, for clients without `tools/list_changed`
    All,
}

/// Validated server configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub token: String,
    pub base_url: String,
    pub api_version: String,
    pub timeout_secs: u64,
    pub discovery: DiscoveryMode,
}

impl ServerConfig {
    /// Build a configuration, rejecting a missing or blank token.
    pub fn new(
        token: Option<String>,
        base_url: String,
        api_version: String,
        timeout_secs: u64,
        all_tools: bool,
    ) -> Result<Self> {
        let token = token
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                Error::Config(
                    "Missing GHL_PRIVATE_TOKEN environment variable. Set it to your HighLevel \
                     Private Integration token or pass --token."
                        .to_string(),
                )
            })?;

        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(Error::Config(format!(
                "Invalid base URL: {base_url} (expected http:// or https://)"
            )));
        }

        if timeout_secs == 0 {
            return Err(Error::Config("Timeout must be at least 1 second".to_string()));
        }

        Ok(Self {
            token,
            base_url,
            api_version,
            timeout_secs,
            discovery: if all_tools {
                DiscoveryMode::All
            } else {
                DiscoveryMode::Progressive
            },
        })
    }
}

impl std::fmt::Debug for ServerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServerConfig")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("api_version", &self.api_version)
            .field("timeout_secs", &self.timeout_secs)
            .field("discovery", &self.discovery)
            .finish()
    }
}
