use url::Url;

use crate::error::ConfigError;

pub const API_BASE_KEY: &str = "TASKBOARD_API_BASE";
pub const LOG_LEVEL_KEY: &str = "TASKBOARD_LOG";

const DEFAULT_API_BASE: &str = "http://localhost:5000";
const DEFAULT_LOG_LEVEL: &str = "info";
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Where the dashboard finds its API and how chatty it logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Absolute origin (plus optional path prefix), without trailing slash.
    pub api_base: String,
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    /// Builds the configuration from a key lookup (environment, build-time
    /// constants, test maps). Missing or blank keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_blank(lookup(API_BASE_KEY)) {
            let url = Url::parse(&raw).map_err(|e| ConfigError::Invalid {
                key: API_BASE_KEY,
                reason: e.to_string(),
            })?;
            if url.cannot_be_a_base() || url.query().is_some() {
                return Err(ConfigError::Invalid {
                    key: API_BASE_KEY,
                    reason: "not a base URL".to_string(),
                });
            }
            // Endpoint paths are appended; a trailing slash would double up.
            config.api_base = url.as_str().trim_end_matches('/').to_string();
        }

        if let Some(level) = non_blank(lookup(LOG_LEVEL_KEY)) {
            let level = level.to_ascii_lowercase();
            if !LOG_LEVELS.contains(&level.as_str()) {
                return Err(ConfigError::Invalid {
                    key: LOG_LEVEL_KEY,
                    reason: format!("unknown level {level:?}"),
                });
            }
            config.log_level = level;
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
