use std::fmt;

use crate::config::Config;

/// Logical connection name passed to the dispatch capability on every call.
pub const CONNECTION_NAME: &str = "gcal-mcp";

/// Static connection descriptor binding the service name to a base URL,
/// auth header template, and bearer secret. Built once at startup and
/// never mutated.
#[derive(Clone)]
pub struct Connection {
    pub name: &'static str,
    pub base_url: String,
    pub auth_header_format: &'static str,
    secret: String,
}

impl Connection {
    pub fn new(base_url: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            name: CONNECTION_NAME,
            base_url: base_url.into(),
            auth_header_format: "Bearer {api_key}",
            secret: secret.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.gcal_base_url, &config.gcal_access_token)
    }

    /// Render the Authorization header value from the template.
    pub fn auth_header(&self) -> String {
        self.auth_header_format.replace("{api_key}", &self.secret)
    }
}

// The bearer secret must not leak into logs or error chains.
impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("name", &self.name)
            .field("base_url", &self.base_url)
            .field("auth_header_format", &self.auth_header_format)
            .field("secret", &"<redacted>")
            .finish()
    }
}
