//! Client-side configuration used by the form and dashboard.

use serde::{Deserialize, Serialize};

/// Where the client finds the API and keeps its bearer token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// File holding the persisted bearer token.
    #[serde(default = "default_token_path")]
    pub token_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            token_path: default_token_path(),
        }
    }
}

fn default_api_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_token_path() -> String {
    ".recruit/access_token.json".to_string()
}
