//! Error types for Storefront

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StorefrontError>;

#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl StorefrontError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            StorefrontError::InvalidInput(_) => 3,
            StorefrontError::Config(_) => 2,
            StorefrontError::Fetch(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures at the product fetch boundary
///
/// Cloneable so a failure can travel inside a catalog event.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected status: {0}")]
    Status(u16),

    #[error("Malformed payload: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            FetchError::Status(status.as_u16())
        } else if error.is_decode() {
            FetchError::Decode(error.to_string())
        } else {
            FetchError::Network(error.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = StorefrontError::InvalidInput("unknown sort key".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_config_error() {
        let error = StorefrontError::Config(ConfigError::MissingField("api.base_url".to_string()));
        assert_eq!(error.exit_code(), 2);
    }

    #[test]
    fn test_exit_code_fetch_errors() {
        for fetch in [
            FetchError::Network("connection refused".to_string()),
            FetchError::Status(503),
            FetchError::Decode("expected array".to_string()),
        ] {
            assert_eq!(StorefrontError::Fetch(fetch).exit_code(), 1);
        }
    }

    #[test]
    fn test_error_message_formatting_status() {
        let error = StorefrontError::Fetch(FetchError::Status(404));
        assert_eq!(error.to_string(), "Fetch error: Unexpected status: 404");
    }

    #[test]
    fn test_error_message_formatting_config() {
        let error = StorefrontError::Config(ConfigError::MissingField("config directory".to_string()));
        assert_eq!(
            error.to_string(),
            "Configuration error: Missing required field: config directory"
        );
    }

    #[test]
    fn test_config_parse_error_conversion() {
        let parse_error = toml::from_str::<toml::Value>("[api").unwrap_err();
        let error: StorefrontError = ConfigError::ParseError(parse_error).into();
        assert!(matches!(error, StorefrontError::Config(ConfigError::ParseError(_))));
        assert!(error.to_string().contains("Failed to parse config"));
    }

    #[test]
    fn test_fetch_error_clone_preserves_message() {
        let original = FetchError::Network("dns failure".to_string());
        let cloned = original.clone();
        assert_eq!(original, cloned);
        assert_eq!(cloned.to_string(), "Network error: dns failure");
    }
}
