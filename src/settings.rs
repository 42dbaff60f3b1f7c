use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;

pub const DEFAULT_API_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_API_SCOPE: &str = "api://example-api/.default";

pub const API_BASE_URL_VAR: &str = "API_BASE_URL";
pub const API_SCOPE_VAR: &str = "API_SCOPE";

/// Where the API lives and which scope to request tokens for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiSettings {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_api_scope")]
    pub api_scope: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            api_scope: default_api_scope(),
        }
    }
}

impl ApiSettings {
    /// Read `API_BASE_URL` and `API_SCOPE`, falling back to the defaults for
    /// unset or empty variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Parse settings from a JSON document such as
    /// `{"apiBaseUrl": "...", "apiScope": "..."}`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Serialization)
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str, default: fn() -> String| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(default)
        };
        Self {
            api_base_url: read(API_BASE_URL_VAR, default_api_base_url),
            api_scope: read(API_SCOPE_VAR, default_api_scope),
        }
    }
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_owned()
}

fn default_api_scope() -> String {
    DEFAULT_API_SCOPE.to_owned()
}
