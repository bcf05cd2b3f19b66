/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables (optionally via a `.env` file loaded in `main`).
 *
 * # Configuration Sources
 *
 * | Variable               | Meaning                          | Default |
 * |------------------------|----------------------------------|---------|
 * | `DATABASE_URL`         | PostgreSQL connection string     | required|
 * | `SERVER_PORT`          | Listen port                      | 3000    |
 * | `JWT_SECRET`           | HMAC signing secret              | required|
 * | `JWT_ALGORITHM`        | HS256 / HS384 / HS512            | HS256   |
 * | `ACCESS_TOKEN_MINUTES` | Access token lifetime (minutes)  | 15      |
 * | `REFRESH_TOKEN_DAYS`   | Refresh token lifetime (days)    | 7       |
 *
 * Configuration is read once at startup into immutable structs; the auth
 * portion is handed to the token codec at construction. Rotating the secret
 * requires a restart and invalidates every outstanding token.
 */

use jsonwebtoken::Algorithm;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

/// Token signing configuration
///
/// Consumed by `TokenCodec::new`. The access lifetime is expected to be
/// much shorter than the refresh lifetime; nothing enforces that here.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC signing secret
    pub secret: String,
    /// Signing algorithm (HMAC family)
    pub algorithm: Algorithm,
    /// Access token lifetime in minutes
    pub access_token_minutes: i64,
    /// Refresh token lifetime in days
    pub refresh_token_days: i64,
}

/// Full server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Port to listen on
    pub port: u16,
    /// Token signing configuration
    pub auth: AuthConfig,
}

impl ServerConfig {
    /// Load configuration from the environment
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;

        let port = parse_or_default("SERVER_PORT", 3000)?;

        let secret =
            std::env::var("JWT_SECRET").map_err(|_| ConfigError::MissingVar("JWT_SECRET"))?;

        let algorithm = match std::env::var("JWT_ALGORITHM") {
            Ok(name) => parse_algorithm(&name)?,
            Err(_) => Algorithm::HS256,
        };

        let access_token_minutes = parse_or_default("ACCESS_TOKEN_MINUTES", 15)?;
        let refresh_token_days = parse_or_default("REFRESH_TOKEN_DAYS", 7)?;

        Ok(Self {
            database_url,
            port,
            auth: AuthConfig {
                secret,
                algorithm,
                access_token_minutes,
                refresh_token_days,
            },
        })
    }
}

/// Parse an HMAC algorithm name
///
/// Only the symmetric-key family is accepted; the codec signs and verifies
/// with the same shared secret.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, ConfigError> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(ConfigError::InvalidValue(
            "JWT_ALGORITHM",
            other.to_string(),
        )),
    }
}

fn parse_or_default<T: std::str::FromStr>(
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(var, raw)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_algorithm_hmac_family() {
        assert!(matches!(parse_algorithm("HS256"), Ok(Algorithm::HS256)));
        assert!(matches!(parse_algorithm("HS384"), Ok(Algorithm::HS384)));
        assert!(matches!(parse_algorithm("HS512"), Ok(Algorithm::HS512)));
    }

    #[test]
    fn test_parse_algorithm_rejects_asymmetric() {
        assert!(parse_algorithm("RS256").is_err());
        assert!(parse_algorithm("none").is_err());
    }
}
