//! Client configuration model.

use serde::{Deserialize, Serialize};

use crate::error::Result;

const DEFAULT_API_BASE: &str = "http://localhost:8080";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_VIDEOS: usize = 10;

/// Configuration for the platform API client.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the platform API (no trailing slash).
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Default page size for recommendation and search requests.
    #[serde(default = "default_max_videos")]
    pub max_videos: usize,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_max_videos() -> usize {
    DEFAULT_MAX_VIDEOS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            request_timeout_secs: default_timeout_secs(),
            max_videos: default_max_videos(),
        }
    }
}

impl ClientConfig {
    /// Parses a configuration from TOML text, filling defaults for
    /// missing fields.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Returns the base URL with any trailing slash removed, so endpoint
    /// paths can be appended with a single `/`.
    pub fn normalized_api_base(&self) -> &str {
        self.api_base.trim_end_matches('/')
    }
}
