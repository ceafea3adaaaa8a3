//! `/register`, `/login` and `/users`.
//!
//! `/login` answers in plain text: the token on success, `fail` with 401
//! otherwise. It accepts the credentials body on both GET and POST.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use storefront_core::Credentials;

use crate::error::ApiResult;
use crate::extract::ApiJson;
use crate::services::{AuthService, LoginOutcome, UserDto};
use crate::state::AppState;

/// Body returned by a failed login.
pub const LOGIN_FAILURE_BODY: &str = "fail";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", get(login).post(login))
        .route("/users", get(list_users))
}

async fn register(
    State(auth): State<AuthService>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> ApiResult<(StatusCode, Json<UserDto>)> {
    let user = auth.register(credentials).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

async fn login(
    State(auth): State<AuthService>,
    ApiJson(credentials): ApiJson<Credentials>,
) -> ApiResult<Response> {
    let response = match auth.login(credentials).await? {
        LoginOutcome::Authenticated(token) => (StatusCode::OK, token).into_response(),
        LoginOutcome::Rejected => (StatusCode::UNAUTHORIZED, LOGIN_FAILURE_BODY).into_response(),
    };
    Ok(response)
}

async fn list_users(State(auth): State<AuthService>) -> ApiResult<Json<Vec<UserDto>>> {
    Ok(Json(auth.list_users().await?))
}
