/// Configuration loading errors. Remote Calendar API failures never become
/// Rust errors — they are normalized into `gcal::ApiResult` values.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ConfigError::MissingVar("GCAL_ACCESS_TOKEN");
        assert_eq!(
            err.to_string(),
            "missing required environment variable GCAL_ACCESS_TOKEN"
        );

        let err = ConfigError::InvalidValue {
            name: "MCP_PORT",
            value: "not-a-port".to_string(),
        };
        assert!(err.to_string().contains("MCP_PORT"));
        assert!(err.to_string().contains("not-a-port"));
    }
}
