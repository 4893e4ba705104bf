//! Shared fixtures for integration tests.
//!
//! Each test gets its own in-memory SQLite database with the real
//! migrations applied. The pool is capped at one connection so every
//! query sees the same in-memory database.

#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use sea_orm::{ConnectOptions, Database as SeaDatabase, DatabaseConnection};

use hero_api::config::Config;
use hero_api::infra::Database;
use hero_api::services::Claims;

pub const TEST_SECRET: &str = "integration-test-secret-with-32-plus-chars";

/// Open a fresh, migrated in-memory store.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    let connection = SeaDatabase::connect(options)
        .await
        .expect("failed to open in-memory sqlite");

    Database::from_connection(connection.clone())
        .run_migrations()
        .await
        .expect("failed to run migrations");

    connection
}

/// Same as [`setup_db`] wrapped for `AppState`.
pub async fn setup_database() -> Arc<Database> {
    Arc::new(Database::from_connection(setup_db().await))
}

pub fn test_config() -> Config {
    Config::new("sqlite::memory:", TEST_SECRET).expect("valid test config")
}

/// Mint a token the way the external identity provider would.
pub fn mint_token(secret: &str, exp_offset_secs: i64) -> String {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: "integration-tester".to_string(),
        exp: now + exp_offset_secs,
        iat: Some(now),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("failed to mint token")
}

/// Authorization header value carrying a valid token.
pub fn bearer() -> String {
    format!("Bearer {}", mint_token(TEST_SECRET, 3600))
}
