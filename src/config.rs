//! Upstream settings used when rewriting redirects.

use serde::Deserialize;

use crate::error::ConfigError;
use crate::location::{rewrite_location, rewrite_location_uri, UriFields};

/// Scheme and port the client should use to reach the proxy.
///
/// ```toml
/// scheme = "https"
/// port = 8443
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub scheme: String,
    pub port: u16,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            port: 80,
        }
    }
}

impl UpstreamConfig {
    pub fn from_toml(src: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(src)?;
        match config.scheme.as_str() {
            "http" | "https" => Ok(config),
            _ => Err(ConfigError::UnsupportedScheme { scheme: config.scheme }),
        }
    }

    /// See [`rewrite_location_uri`].
    pub fn rewrite_location(
        &self,
        uri: &str,
        fields: &UriFields,
        request_host: &str,
    ) -> Option<String> {
        rewrite_location_uri(uri, fields, request_host, &self.scheme, self.port)
    }

    /// Split `location` and rewrite it, copying its components verbatim.
    /// `None` if it must be passed on unchanged.
    pub fn rewrite_location_str(&self, location: &str, request_host: &str) -> Option<String> {
        rewrite_location(location, request_host, &self.scheme, self.port)
    }
}
