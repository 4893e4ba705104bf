//! Application settings loaded from environment variables.

use std::env;

use jsonwebtoken::Algorithm;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_ALGORITHM, DEFAULT_PROJECT_NAME, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT, MIN_JWT_SECRET_LENGTH,
};
use crate::errors::{AppError, AppResult};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub project_name: String,
    pub database_url: String,
    jwt_secret: String,
    pub jwt_algorithm: Algorithm,
    pub server_host: String,
    pub server_port: u16,
    pub debug: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("project_name", &self.project_name)
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_algorithm", &self.jwt_algorithm)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("debug", &self.debug)
            .finish()
    }
}

impl Config {
    /// Build a configuration with defaults for everything but the store URL
    /// and the token verification secret.
    pub fn new(database_url: impl Into<String>, jwt_secret: impl Into<String>) -> AppResult<Self> {
        let jwt_secret = jwt_secret.into();
        validate_secret(&jwt_secret)?;

        Ok(Self {
            project_name: DEFAULT_PROJECT_NAME.to_string(),
            database_url: database_url.into(),
            jwt_secret,
            jwt_algorithm: Algorithm::HS256,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            debug: false,
        })
    }

    /// Load configuration from `.env` and the process environment.
    ///
    /// `JWT_SECRET` falls back to an insecure default in debug builds only.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = match env::var("JWT_SECRET") {
            Ok(secret) => secret,
            Err(_) if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using insecure default for development");
                "dev-secret-key-minimum-32-chars!!".to_string()
            }
            Err(_) => {
                return Err(AppError::internal(
                    "JWT_SECRET environment variable must be set in production",
                ))
            }
        };

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let mut config = Self::new(database_url, jwt_secret)?;

        config.jwt_algorithm = parse_algorithm(
            &env::var("JWT_ALGORITHM").unwrap_or_else(|_| DEFAULT_JWT_ALGORITHM.to_string()),
        )?;
        if let Ok(name) = env::var("PROJECT_NAME") {
            config.project_name = name;
        }
        if let Ok(host) = env::var("SERVER_HOST") {
            config.server_host = host;
        }
        config.server_port = env::var("SERVER_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_SERVER_PORT);
        config.debug = env::var("DEBUG")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(false);

        Ok(config)
    }

    /// Get JWT secret bytes for token verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn validate_secret(secret: &str) -> AppResult<()> {
    if secret.len() < MIN_JWT_SECRET_LENGTH {
        return Err(AppError::internal(format!(
            "JWT_SECRET must be at least {} characters long",
            MIN_JWT_SECRET_LENGTH
        )));
    }
    Ok(())
}

/// Only HMAC algorithms work with a shared secret.
fn parse_algorithm(value: &str) -> AppResult<Algorithm> {
    match value.parse::<Algorithm>() {
        Ok(alg @ (Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512)) => Ok(alg),
        _ => Err(AppError::internal(format!(
            "Unsupported JWT_ALGORITHM: {}",
            value
        ))),
    }
}
