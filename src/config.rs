use std::env;

use crate::error::ConfigError;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/calendar/v3";

/// Application configuration loaded from environment variables.
/// Loaded once at startup and treated as immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub mcp_port: u16,
    pub gcal_base_url: String,
    pub gcal_access_token: String,
    /// Optional static bearer token for inbound MCP requests. Unset means
    /// the server is open (local use behind a trusted boundary).
    pub mcp_bearer_token: Option<String>,
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mcp_port = match env::var("MCP_PORT") {
            Ok(v) => v.parse().map_err(|_| ConfigError::InvalidValue {
                name: "MCP_PORT",
                value: v,
            })?,
            Err(_) => 5233,
        };

        Ok(Self {
            mcp_port,
            gcal_base_url: env::var("GCAL_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            gcal_access_token: env::var("GCAL_ACCESS_TOKEN")
                .map_err(|_| ConfigError::MissingVar("GCAL_ACCESS_TOKEN"))?,
            mcp_bearer_token: env::var("MCP_BEARER_TOKEN").ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Env-var mutation races between parallel tests, so these only assert
    // on values the test itself controls.

    #[test]
    fn test_default_base_url_is_calendar_v3() {
        assert_eq!(DEFAULT_BASE_URL, "https://www.googleapis.com/calendar/v3");
    }

    #[test]
    fn test_missing_token_is_an_error() {
        // GCAL_ACCESS_TOKEN is never set in the test environment unless a
        // test sets it; from_env must refuse to start without it.
        if env::var("GCAL_ACCESS_TOKEN").is_err() {
            let err = Config::from_env().unwrap_err();
            assert!(matches!(err, ConfigError::MissingVar("GCAL_ACCESS_TOKEN")));
        }
    }
}
