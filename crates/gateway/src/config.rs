//! Gateway configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `BONBON_GATEWAY_TOKEN` - Shared secret the messaging gateway presents on
//!   every webhook call (min 16 chars, not a placeholder)
//!
//! ## Optional
//! - `BONBON_HOST` - Bind address (default: 127.0.0.1)
//! - `BONBON_PORT` - Listen port (default: 8080)

use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_TOKEN_LENGTH: usize = 16;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "token-here",
    "xxx",
    "todo",
    "fixme",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Gateway application configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Shared secret authenticating the messaging gateway
    pub gateway_token: SecretString,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if the token fails validation (placeholder detection, minimum length).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("BONBON_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("BONBON_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("BONBON_PORT", "8080")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("BONBON_PORT".to_string(), e.to_string()))?;
        let gateway_token = get_validated_token("BONBON_GATEWAY_TOKEN")?;

        Ok(Self {
            host,
            port,
            gateway_token,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a token is not a placeholder and long enough to be real.
fn validate_token_strength(token: &str, var_name: &str) -> Result<(), ConfigError> {
    if token.len() < MIN_TOKEN_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {MIN_TOKEN_LENGTH} characters (got {})",
                token.len()
            ),
        ));
    }

    let lower = token.to_lowercase();
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    Ok(())
}

/// Load and validate the gateway token from environment.
fn get_validated_token(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_token_strength(&value, key)?;
    Ok(SecretString::from(value))
}

/// Compare a presented token against the configured secret.
///
/// Runs in time independent of where the strings differ.
#[must_use]
pub fn token_matches(config: &GatewayConfig, presented: &str) -> bool {
    let expected = config.gateway_token.expose_secret().as_bytes();
    let presented = presented.as_bytes();
    if expected.len() != presented.len() {
        return false;
    }
    expected
        .iter()
        .zip(presented)
        .fold(0u8, |acc, (a, b)| acc | (a ^ b))
        == 0
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config_with_token(token: &str) -> GatewayConfig {
        GatewayConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 8080,
            gateway_token: SecretString::from(token),
        }
    }

    #[test]
    fn test_validate_token_too_short() {
        let result = validate_token_strength("short", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_token_placeholder() {
        let result = validate_token_strength("your-token-goes-right-here", "TEST_VAR");
        assert!(matches!(result, Err(ConfigError::InsecureSecret(_, _))));
    }

    #[test]
    fn test_validate_token_changeme() {
        let result = validate_token_strength("changeme-changeme-changeme", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_token_valid() {
        let result = validate_token_strength("aB3xY9mK2nL5pQ7rT0uW4zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_socket_addr() {
        let config = config_with_token("aB3xY9mK2nL5pQ7rT0uW4zC6");
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_token_matches() {
        let config = config_with_token("aB3xY9mK2nL5pQ7rT0uW4zC6");
        assert!(token_matches(&config, "aB3xY9mK2nL5pQ7rT0uW4zC6"));
        assert!(!token_matches(&config, "aB3xY9mK2nL5pQ7rT0uW4zC7"));
        assert!(!token_matches(&config, "short"));
        assert!(!token_matches(&config, ""));
    }

    #[test]
    fn test_config_debug_redacts_token() {
        let config = config_with_token("super-sensitive-value-123");
        let debug_output = format!("{config:?}");
        assert!(!debug_output.contains("super-sensitive-value-123"));
    }
}
