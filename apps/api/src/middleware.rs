//! Bearer-token authentication for protected routes.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, HeaderMap};
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

use crate::auth::{extract_bearer_token, JwtManager};
use crate::error::ApiError;

/// The authenticated caller, inserted into request extensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub username: String,
}

/// Rejects requests without a valid `Authorization: Bearer <token>` header.
pub async fn require_bearer(
    State(jwt): State<Arc<JwtManager>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer(req.headers())
        .ok_or_else(|| ApiError::unauthorized("Missing bearer token"))?;

    let claims = jwt.validate_access_token(token).map_err(|e| {
        debug!(error = %e.message, "Rejected bearer token");
        e
    })?;

    req.extensions_mut().insert(Principal {
        username: claims.sub,
    });

    Ok(next.run(req).await)
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    extract_bearer_token(value)
}
