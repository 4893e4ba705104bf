//! Bearer token gate for resource routes.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::AppError;

/// Identity of the caller, available to handlers as an extension.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CurrentUser {
    pub subject: String,
}

/// Rejects the request with 401 unless it carries a token the configured
/// verifier accepts. Runs before any body extraction.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = bearer_token(request.headers()).ok_or(AppError::Unauthorized)?;

    let claims = state
        .token_verifier
        .verify_token(token)
        .inspect_err(|e| tracing::debug!("Rejected bearer token: {}", e))?;

    request
        .extensions_mut()
        .insert(CurrentUser { subject: claims.sub });

    Ok(next.run(request).await)
}

/// Auth schemes are case-insensitive, so `bearer` and `BEARER` are accepted.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let split = BEARER_TOKEN_PREFIX.len();

    value
        .get(..split)
        .filter(|scheme| scheme.eq_ignore_ascii_case(BEARER_TOKEN_PREFIX))
        .and_then(|_| value.get(split..))
        .filter(|token| !token.is_empty())
}
